use contracts::domain::a001_film_poster::aggregate::PosterListItem;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_film_poster::api;
use crate::layout::global_context::use_global_context;
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::optimistic::{ReorderPhase, ReorderState, SettleOutcome};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

/// Store the answer of an order load. `false` when the view is gone and
/// nothing was written.
fn store_order(
    state: RwSignal<ReorderState<PosterListItem>>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
    result: Result<Vec<PosterListItem>, ApiError>,
) -> bool {
    let failure = match result {
        Ok(items) => {
            log::debug!("sequence: {} posters loaded", items.len());
            if state.try_update(|s| s.replace(items)).is_none() {
                return false;
            }
            None
        }
        Err(e) => {
            log::error!("sequence: load failed: {}", e);
            Some(e.user_message("Failed to load posters."))
        }
    };
    if error.try_set(failure).is_some() {
        return false;
    }
    loading.try_set(false).is_none()
}

/// Drag-and-drop ordering of all posters; every drop is saved at once.
#[component]
pub fn FilmPosterSequence() -> impl IntoView {
    let ctx = use_global_context();
    let client = use_api();
    let toast = use_toast();

    let state = RwSignal::new(ReorderState::<PosterListItem>::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let dragging = RwSignal::new(None::<usize>);
    let over = RwSignal::new(None::<usize>);

    let refetch = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn_local(async move {
                let result = api::fetch_order_list(&client).await;
                if !store_order(state, error, loading, result) {
                    log::debug!("sequence: view closed, order dropped");
                }
            });
        }
    };
    refetch();

    let on_drop = {
        let client = client.clone();
        let refetch = refetch.clone();
        move |to: usize| {
            over.set(None);
            let Some(from) = dragging.get_untracked() else {
                return;
            };
            dragging.set(None);
            let Some(request) = state.try_update(|s| s.drag(from, to)).flatten() else {
                return;
            };
            log::debug!("sequence: moved {} -> {}, persisting #{}", from, to, request.seq);

            let client = client.clone();
            let refetch = refetch.clone();
            let pending = toast.loading("Saving order...");
            spawn_local(async move {
                let result = api::save_order(&client, &request.payload).await;
                let settled = result.as_ref().map(|_| ()).map_err(|_| ());
                let Some(outcome) = state.try_update(|s| s.settle(request.seq, &settled)) else {
                    return;
                };
                match (outcome, result) {
                    (SettleOutcome::Committed | SettleOutcome::StillPending, Ok(ack)) => {
                        log::info!("sequence: order #{} saved", request.seq);
                        toast.resolve(pending, Ok(ack.message_or("Order updated successfully")));
                    }
                    (_, Err(e)) => {
                        log::warn!("sequence: order #{} rejected: {}", request.seq, e);
                        if e.is_unauthorized() {
                            toast.dismiss(pending);
                        } else {
                            toast.resolve(pending, Err(e.user_message("Failed to save order")));
                        }
                        refetch();
                    }
                    (SettleOutcome::Refetch, Ok(_)) => {
                        toast.dismiss(pending);
                        refetch();
                    }
                }
            });
        }
    };

    let items = move || {
        state.with(|s| s.items().iter().cloned().enumerate().collect::<Vec<_>>())
    };
    let phase_text = move || match state.with(|s| s.phase()) {
        ReorderPhase::Pending => "Saving...",
        ReorderPhase::Committed => "All changes saved",
        ReorderPhase::RolledBack => "Save failed, reloading...",
        ReorderPhase::Idle => "Drag items to reorder. Changes save on drop.",
    };

    view! {
        <PageFrame page_id="a001_film_poster--sequence" category=PAGE_CAT_LIST>
            <PageHeader title="Poster Sequence">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.open_view("a001_film_poster")
                >
                    {icon("chevron-left")}
                    " Back to List"
                </Button>
            </PageHeader>

            <div class="page__content">
                <p class="text-muted">{phase_text}</p>
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <ul class="sequence-list">
                        <For
                            each=items
                            key=|(index, item)| (item.id, *index)
                            children={
                                let on_drop = on_drop.clone();
                                move |(index, item): (usize, PosterListItem)| {
                                    let on_drop = on_drop.clone();
                                    view! {
                                        <li
                                            class="sequence-list__item"
                                            class:sequence-list__item--dragging=move || dragging.get() == Some(index)
                                            class:sequence-list__item--over=move || over.get() == Some(index)
                                            draggable="true"
                                            on:dragstart=move |e: ev::DragEvent| {
                                                if let Some(dt) = e.data_transfer() {
                                                    let _ = dt.set_data("text/plain", &index.to_string());
                                                }
                                                dragging.set(Some(index));
                                            }
                                            on:dragenter=move |_| over.set(Some(index))
                                            on:dragover=|e: ev::DragEvent| e.prevent_default()
                                            on:drop=move |e: ev::DragEvent| {
                                                e.prevent_default();
                                                on_drop(index);
                                            }
                                            on:dragend=move |_| {
                                                dragging.set(None);
                                                over.set(None);
                                            }
                                        >
                                            <span class="sequence-list__grip">{icon("grip")}</span>
                                            <span class="sequence-list__position">{item.position_number.to_string()}</span>
                                            <span class="sequence-list__name">{item.film_name.clone()}</span>
                                        </li>
                                    }
                                }
                            }
                        />
                    </ul>
                    <Show when=move || state.with(|s| s.items().is_empty())>
                        <div class="list-status list-status--empty">"No posters to arrange."</div>
                    </Show>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poster(id: i64, position: u32) -> PosterListItem {
        PosterListItem {
            id,
            film_name: format!("film {}", id),
            position_number: position,
        }
    }

    #[test]
    fn test_store_order_fills_view() {
        let owner = Owner::new();
        owner.set();
        let state = RwSignal::new(ReorderState::<PosterListItem>::default());
        let error = RwSignal::new(Some("old".to_string()));
        let loading = RwSignal::new(true);

        assert!(store_order(state, error, loading, Ok(vec![poster(2, 2), poster(1, 1)])));
        assert_eq!(state.with_untracked(|s| s.items()[0].id), 1);
        assert_eq!(error.get_untracked(), None);
        assert!(!loading.get_untracked());

        assert!(store_order(state, error, loading, Err(ApiError::Transport("offline".into()))));
        assert!(error.get_untracked().is_some());
        assert_eq!(state.with_untracked(|s| s.items().len()), 2);
    }

    #[test]
    fn test_store_order_after_close_writes_nothing() {
        let owner = Owner::new();
        owner.set();
        let state = RwSignal::new(ReorderState::<PosterListItem>::default());
        let error = RwSignal::new(None::<String>);
        let loading = RwSignal::new(true);

        state.dispose();
        assert!(!store_order(state, error, loading, Ok(vec![poster(1, 1)])));
        assert!(loading.get_untracked());
        assert_eq!(error.get_untracked(), None);
    }
}
