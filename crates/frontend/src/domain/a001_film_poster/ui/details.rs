use contracts::domain::a001_film_poster::aggregate::FilmPoster;
use contracts::domain::common::EntityId;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_film_poster::api;
use crate::layout::global_context::use_global_context;
use crate::shared::api_client::use_api;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

/// Index reached by moving `delta` images from `index`, wrapping around.
pub fn step_index(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((index as isize + delta).rem_euclid(len)) as usize
}

#[component]
pub fn FilmPosterDetails(id: EntityId) -> impl IntoView {
    let ctx = use_global_context();
    let client = use_api();

    let poster = RwSignal::new(None::<FilmPoster>);
    let error = RwSignal::new(None::<String>);
    let lightbox = RwSignal::new(None::<usize>);

    spawn_local(async move {
        match api::fetch_poster(&client, id).await {
            Ok(p) => {
                let _ = poster.try_set(Some(p));
            }
            Err(e) => {
                log::warn!("poster {}: {}", id, e);
                let _ = error.try_set(Some(e.user_message("Failed to load poster details.")));
            }
        }
    });

    let gallery = Signal::derive(move || poster.with(|p| p.as_ref().map(|p| p.gallery()).unwrap_or_default()));

    view! {
        <PageFrame page_id="a001_film_poster--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.open_view("a001_film_poster")
                    >
                        {icon("chevron-left")}
                        " Back to List"
                    </Button>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.open_view(&format!("a001_film_poster_edit_{}", id))
                    >
                        {icon("edit")}
                        " Edit"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if let Some(message) = error.get() {
                        return view! { <div class="alert alert--error">{message}</div> }.into_any();
                    }
                    let Some(p) = poster.get() else {
                        return view! { <div class="list-status"><Spinner /></div> }.into_any();
                    };
                    view! { <PosterSummary poster=p on_open=Callback::new(move |i| lightbox.set(Some(i))) /> }
                        .into_any()
                }}

                <h3 class="section__title">"Poster Gallery"</h3>
                {move || {
                    let urls = gallery.get();
                    if urls.len() < 2 {
                        return view! { <p class="text-muted">"No additional images available."</p> }.into_any();
                    }
                    urls.into_iter()
                        .enumerate()
                        .map(|(index, url)| view! {
                            <img
                                class="gallery__thumb"
                                src=url
                                alt="Poster image"
                                on:click=move |_| lightbox.set(Some(index))
                            />
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <Show when=move || lightbox.get().is_some()>
                <Lightbox images=gallery index=lightbox />
            </Show>
        </PageFrame>
    }
}

#[component]
fn PosterSummary(poster: FilmPoster, on_open: Callback<usize>) -> impl IntoView {
    let status = if poster.status.is_active() { "Active" } else { "Inactive" };
    let has_trailer = !poster.trailer_link.is_empty();
    let trailer = poster.trailer_link.clone();

    view! {
        <div class="poster-detail">
            <div class="poster-detail__cover" on:click=move |_| on_open.run(0)>
                {if poster.main_image.is_empty() {
                    view! { <div class="thumb thumb--empty">{icon("image")}</div> }.into_any()
                } else {
                    view! { <img src=poster.main_image.clone() alt=poster.film_name.clone() /> }.into_any()
                }}
            </div>
            <div class="poster-detail__info">
                <h1 class="page__title">{poster.film_name.clone()}</h1>
                <div class="detail-grid">
                    <span class="detail-grid__label">"Year"</span>
                    <span>{poster.year.clone()}</span>
                    <span class="detail-grid__label">"Language"</span>
                    <span>{poster.language.clone()}</span>
                    <span class="detail-grid__label">"Genre"</span>
                    <span>{poster.genre.clone()}</span>
                    <span class="detail-grid__label">"IMDb"</span>
                    <span>{if poster.imdb_rating.is_empty() { "N/A".to_string() } else { poster.imdb_rating.clone() }}</span>
                    <span class="detail-grid__label">"Type"</span>
                    <span>{poster.poster_type.clone().unwrap_or_default()}</span>
                    <span class="detail-grid__label">"Status"</span>
                    <span>{status}</span>
                </div>
                {has_trailer.then(|| view! {
                    <a class="button button--secondary" href=trailer target="_blank" rel="noopener">
                        {icon("eye")}
                        " Watch Trailer"
                    </a>
                })}
                <h3 class="section__title">"Synopsis"</h3>
                <p>{if poster.description.is_empty() {
                    "No description available.".to_string()
                } else {
                    poster.description.clone()
                }}</p>
            </div>
        </div>
    }
}

/// Full-screen image viewer; arrows step through, Escape closes.
#[component]
fn Lightbox(images: Signal<Vec<String>>, index: RwSignal<Option<usize>>) -> impl IntoView {
    let step = move |delta: isize| {
        let len = images.with_untracked(|i| i.len());
        index.update(|current| {
            if let Some(i) = current {
                *i = step_index(*i, len, delta);
            }
        });
    };

    let handle = window_event_listener(ev::keydown, move |event| match event.key().as_str() {
        "Escape" => index.set(None),
        "ArrowLeft" => step(-1),
        "ArrowRight" => step(1),
        _ => {}
    });
    on_cleanup(move || handle.remove());

    let current = move || {
        let i = index.get().unwrap_or(0);
        images.with(|urls| urls.get(i).cloned().unwrap_or_default())
    };

    view! {
        <div class="lightbox" on:click=move |_| index.set(None)>
            <button class="lightbox__close button button--icon" on:click=move |_| index.set(None)>
                {icon("x")}
            </button>
            <button
                class="lightbox__nav lightbox__nav--prev"
                on:click=move |e: ev::MouseEvent| {
                    e.stop_propagation();
                    step(-1);
                }
            >
                {icon("chevron-left")}
            </button>
            <img
                class="lightbox__image"
                src=current
                alt="Poster"
                on:click=|e: ev::MouseEvent| e.stop_propagation()
            />
            <button
                class="lightbox__nav lightbox__nav--next"
                on:click=move |e: ev::MouseEvent| {
                    e.stop_propagation();
                    step(1);
                }
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_index_wraps() {
        assert_eq!(step_index(0, 3, -1), 2);
        assert_eq!(step_index(2, 3, 1), 0);
        assert_eq!(step_index(1, 3, 1), 2);
        assert_eq!(step_index(0, 0, 1), 0);
    }
}
