use std::collections::HashSet;

use contracts::domain::a001_film_poster::aggregate::{
    FilmPoster, MainImageChoice, PosterForm, PosterImage, DEFAULT_POSTER_TYPE,
};
use contracts::domain::common::EntityId;
use contracts::shared::active_flag::ActiveFlag;
use contracts::shared::form_fields::FormFields;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::FormData;

use crate::domain::a001_film_poster::api;
use crate::layout::global_context::use_global_context;
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::config::use_config;
use crate::shared::form_data::{append_file, pick_images, selected_files, to_form_data, PickedImage};
use crate::shared::icons::icon;
use crate::shared::modal::confirm;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::toast::use_toast;

pub const POSTER_TYPES: [&str; 2] = [DEFAULT_POSTER_TYPE, "Web Series"];

/// Main image actually sent: the user's choice while it still exists,
/// otherwise the first remaining image.
pub fn effective_main(
    choice: Option<MainImageChoice>,
    existing: &[EntityId],
    new_count: usize,
) -> Option<MainImageChoice> {
    match choice {
        Some(MainImageChoice::Existing(id)) if existing.contains(&id) => choice,
        Some(MainImageChoice::New(index)) if index < new_count => choice,
        _ => existing
            .first()
            .map(|id| MainImageChoice::Existing(*id))
            .or((new_count > 0).then_some(MainImageChoice::New(0))),
    }
}

/// Choice after the new upload at `removed` was dropped from the list.
pub fn after_removal(choice: Option<MainImageChoice>, removed: usize) -> Option<MainImageChoice> {
    match choice {
        Some(MainImageChoice::New(index)) if index == removed => None,
        Some(MainImageChoice::New(index)) if index > removed => Some(MainImageChoice::New(index - 1)),
        other => other,
    }
}

fn multipart(
    fields: &FormFields,
    uploads: &[PickedImage],
    main: Option<MainImageChoice>,
) -> Result<FormData, ApiError> {
    let form = to_form_data(fields)?;
    if let Some(MainImageChoice::New(index)) = main {
        if let Some(picked) = uploads.get(index) {
            append_file(&form, "main_image", &picked.file)?;
        }
    }
    for picked in uploads {
        append_file(&form, "images[]", &picked.file)?;
    }
    Ok(form)
}

/// Create (`id = None`) or edit form of a poster.
#[component]
pub fn FilmPosterForm(#[prop(optional)] id: Option<EntityId>) -> impl IntoView {
    let ctx = use_global_context();
    let client = use_api();
    let toast = use_toast();
    let max_upload = use_config().max_upload_bytes;

    let film_name = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let language = RwSignal::new(String::new());
    let genre = RwSignal::new(String::new());
    let poster_type = RwSignal::new(DEFAULT_POSTER_TYPE.to_string());
    let status = RwSignal::new(ActiveFlag::ACTIVE.as_form_value().to_string());
    let imdb_rating = RwSignal::new(String::new());
    let trailer_link = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let position_number = RwSignal::new(String::new());

    let existing = RwSignal::new(Vec::<PosterImage>::new());
    let marked = RwSignal::new(HashSet::<EntityId>::new());
    let uploads = RwSignal::new_local(Vec::<PickedImage>::new());
    let main_choice = RwSignal::new(None::<MainImageChoice>);

    let loading = RwSignal::new(id.is_some());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let fill = move |poster: FilmPoster| {
        let form = PosterForm::from(&poster);
        film_name.set(form.film_name);
        year.set(form.year);
        language.set(form.language);
        genre.set(form.genre);
        poster_type.set(form.poster_type);
        status.set(form.status.as_form_value().to_string());
        imdb_rating.set(form.imdb_rating);
        trailer_link.set(form.trailer_link);
        description.set(form.description);
        position_number.set(form.position_number);
        main_choice.set(
            poster
                .images
                .iter()
                .find(|img| img.file_path == poster.main_image)
                .map(|img| MainImageChoice::Existing(img.id)),
        );
        existing.set(poster.images);
    };

    if let Some(id) = id {
        let client = client.clone();
        spawn_local(async move {
            match api::fetch_poster(&client, id).await {
                Ok(poster) => {
                    if loading.try_set(false).is_none() {
                        fill(poster);
                    }
                }
                Err(e) => {
                    log::warn!("poster {}: {}", id, e);
                    let message = e.user_message("Failed to load poster details.");
                    toast.error(message.clone());
                    let _ = error.try_set(Some(message));
                    let _ = loading.try_set(false);
                }
            }
        });
    }

    on_cleanup(move || {
        if let Some(picked) = uploads.try_get_untracked() {
            picked.iter().for_each(PickedImage::release);
        }
    });

    let on_files = move |ev: web_sys::Event| {
        let (accepted, refused) = pick_images(selected_files(&ev), max_upload);
        for reason in refused {
            toast.error(reason);
        }
        uploads.update(|list| list.extend(accepted));
    };

    let remove_upload = move |index: usize| {
        uploads.update(|list| {
            if index < list.len() {
                list.remove(index).release();
            }
        });
        main_choice.update(|choice| *choice = after_removal(*choice, index));
    };

    let delete_marked = {
        let client = client.clone();
        move || {
            let ids: Vec<EntityId> = marked.get_untracked().into_iter().collect();
            if ids.is_empty() {
                return;
            }
            if !confirm(&format!("Delete {} selected image(s)?", ids.len())) {
                return;
            }
            let client = client.clone();
            let pending = toast.loading("Deleting images...");
            spawn_local(async move {
                match api::delete_images(&client, ids.clone()).await {
                    Ok(ack) => {
                        toast.resolve(pending, Ok(ack.message_or("Images deleted successfully.")));
                        let _ = existing.try_update(|list| list.retain(|img| !ids.contains(&img.id)));
                        let _ = marked.try_set(HashSet::new());
                    }
                    Err(e) => {
                        log::warn!("bulk image delete failed: {}", e);
                        toast.resolve(pending, Err(e.user_message("Failed to delete images.")));
                    }
                }
            });
        }
    };

    let submit = {
        let client = client.clone();
        move || {
            if saving.get_untracked() {
                return;
            }
            let form = PosterForm {
                film_name: film_name.get_untracked(),
                year: year.get_untracked(),
                language: language.get_untracked(),
                genre: genre.get_untracked(),
                poster_type: poster_type.get_untracked(),
                status: ActiveFlag::parse(&status.get_untracked()).unwrap_or(ActiveFlag::ACTIVE),
                imdb_rating: imdb_rating.get_untracked(),
                trailer_link: trailer_link.get_untracked(),
                description: description.get_untracked(),
                position_number: position_number.get_untracked(),
            };
            if let Err(message) = form.validate() {
                error.set(Some(message));
                return;
            }

            let picked = uploads.get_untracked();
            let existing_ids: Vec<EntityId> = existing.with_untracked(|list| list.iter().map(|img| img.id).collect());
            if id.is_none() && picked.is_empty() {
                error.set(Some("Please upload at least one image.".to_string()));
                return;
            }
            let main = effective_main(main_choice.get_untracked(), &existing_ids, picked.len());
            let fields = form.to_fields(id.map(|_| "PUT"), main);
            let body = match multipart(&fields, &picked, main) {
                Ok(body) => body,
                Err(e) => {
                    log::error!("failed to build poster form: {}", e);
                    error.set(Some(e.user_message("Failed to prepare the upload.")));
                    return;
                }
            };

            error.set(None);
            saving.set(true);
            let pending = toast.loading(if id.is_some() { "Updating poster..." } else { "Creating poster..." });
            let client = client.clone();
            spawn_local(async move {
                let result = match id {
                    Some(id) => api::update_poster(&client, id, body).await,
                    None => api::create_poster(&client, body).await,
                };
                let _ = saving.try_set(false);
                match result {
                    Ok(ack) => {
                        let fallback = if id.is_some() {
                            "Poster updated successfully!"
                        } else {
                            "Poster created successfully!"
                        };
                        log::info!("poster saved");
                        toast.resolve(pending, Ok(ack.message_or(fallback)));
                        ctx.open_view("a001_film_poster");
                    }
                    Err(e) => {
                        log::warn!("poster save failed: {}", e);
                        let message = e.user_message("Failed to save poster.");
                        toast.resolve(pending, Err(message.clone()));
                        let _ = error.try_set(Some(message));
                    }
                }
            });
        }
    };

    let title = if id.is_some() { "Edit Poster" } else { "Add New Poster" };

    view! {
        <PageFrame page_id="a001_film_poster--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.open_view("a001_film_poster")
                    >
                        {icon("chevron-left")}
                    </Button>
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get() || loading.get())
                        on_click=move |_| submit()
                    >
                        {icon("check")}
                        {move || if saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <div class="form-grid">
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Film Name *"</Label>
                            <Input value=film_name placeholder="e.g. Inception" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Year *"</Label>
                            <Input value=year placeholder="2024" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Language *"</Label>
                            <Input value=language placeholder="English" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Genre *"</Label>
                            <Input value=genre placeholder="Sci-Fi" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Type"</Label>
                            <Select value=poster_type>
                                {POSTER_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                            </Select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Status"</Label>
                            <Select value=status>
                                <option value="1">"Active"</option>
                                <option value="0">"Inactive"</option>
                            </Select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"IMDb Rating"</Label>
                            <Input value=imdb_rating placeholder="8.5" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Position Number"</Label>
                            <Input value=position_number placeholder="1" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Trailer Link"</Label>
                            <Input value=trailer_link placeholder="https://youtube.com/..." />
                        </Flex>
                    </div>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Description"</Label>
                        <Textarea value=description placeholder="Short synopsis" />
                    </Flex>

                    {
                    let delete_marked = delete_marked.clone();
                    view! {
                    <Show when=move || existing.with(|list| !list.is_empty())>
                        <div class="form-section">
                            <div class="form-section__header">
                                <h3 class="section__title">"Existing Images"</h3>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    disabled=Signal::derive(move || marked.with(|m| m.is_empty()))
                                    on_click={
                                        let delete_marked = delete_marked.clone();
                                        move |_| delete_marked()
                                    }
                                >
                                    {icon("trash")}
                                    {move || format!(" Delete Selected ({})", marked.with(|m| m.len()))}
                                </Button>
                            </div>
                            <div class="image-grid">
                                <For
                                    each=move || existing.get()
                                    key=|img| img.id
                                    children=move |img: PosterImage| {
                                        let image_id = img.id;
                                        view! {
                                            <div
                                                class="image-grid__item"
                                                class:image-grid__item--main=move || main_choice.get() == Some(MainImageChoice::Existing(image_id))
                                                class:image-grid__item--marked=move || marked.with(|m| m.contains(&image_id))
                                            >
                                                <img src=img.file_path.clone() alt="Existing" />
                                                <label class="image-grid__option">
                                                    <input
                                                        type="radio"
                                                        name="main_image"
                                                        prop:checked=move || main_choice.get() == Some(MainImageChoice::Existing(image_id))
                                                        on:change=move |_| main_choice.set(Some(MainImageChoice::Existing(image_id)))
                                                    />
                                                    "Main"
                                                </label>
                                                <label class="image-grid__option">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || marked.with(|m| m.contains(&image_id))
                                                        on:change=move |_| marked.update(|m| {
                                                            if !m.remove(&image_id) {
                                                                m.insert(image_id);
                                                            }
                                                        })
                                                    />
                                                    "Select"
                                                </label>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </div>
                    </Show>
                    }
                    }

                    <div class="form-section">
                        <h3 class="section__title">
                            {if id.is_some() { "Add More Images" } else { "Poster Images *" }}
                        </h3>
                        <input type="file" accept="image/*" multiple=true on:change=on_files />
                        <div class="image-grid">
                            {move || uploads.get().into_iter().enumerate().map(|(index, picked)| {
                                view! {
                                    <div
                                        class="image-grid__item"
                                        class:image-grid__item--main=move || main_choice.get() == Some(MainImageChoice::New(index))
                                    >
                                        <img src=picked.preview.clone() alt="Upload" />
                                        <label class="image-grid__option">
                                            <input
                                                type="radio"
                                                name="main_image"
                                                prop:checked=move || main_choice.get() == Some(MainImageChoice::New(index))
                                                on:change=move |_| main_choice.set(Some(MainImageChoice::New(index)))
                                            />
                                            "Main"
                                        </label>
                                        <button
                                            type="button"
                                            class="button button--icon button--danger"
                                            on:click=move |_| remove_upload(index)
                                        >
                                            {icon("x")}
                                        </button>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_main_falls_back() {
        let existing = [4, 9];
        assert_eq!(
            effective_main(Some(MainImageChoice::Existing(9)), &existing, 0),
            Some(MainImageChoice::Existing(9))
        );
        // chosen image was deleted meanwhile
        assert_eq!(
            effective_main(Some(MainImageChoice::Existing(5)), &existing, 2),
            Some(MainImageChoice::Existing(4))
        );
        assert_eq!(effective_main(None, &[], 3), Some(MainImageChoice::New(0)));
        assert_eq!(effective_main(Some(MainImageChoice::New(3)), &[], 3), Some(MainImageChoice::New(0)));
        assert_eq!(effective_main(None, &[], 0), None);
    }

    #[test]
    fn test_after_removal_shifts_new_index() {
        assert_eq!(after_removal(Some(MainImageChoice::New(2)), 0), Some(MainImageChoice::New(1)));
        assert_eq!(after_removal(Some(MainImageChoice::New(1)), 1), None);
        assert_eq!(after_removal(Some(MainImageChoice::New(0)), 3), Some(MainImageChoice::New(0)));
        assert_eq!(
            after_removal(Some(MainImageChoice::Existing(7)), 0),
            Some(MainImageChoice::Existing(7))
        );
    }
}
