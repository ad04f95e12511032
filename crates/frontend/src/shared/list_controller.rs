//! Reactive wrapper around [`ListLoaderState`] shared by the list views.
//!
//! Owns the signals of one list screen: loader state, search input with its
//! debounce timer, per-row toggles. Answers arriving after the view was
//! unmounted are dropped (`try_update` on a disposed signal does nothing).

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use contracts::domain::common::{EntityId, Toggleable};
use contracts::shared::pagination::{Paginated, PaginationLink};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{use_global_context, AppGlobalContext};
use crate::shared::api_client::{Ack, ApiError};
use crate::shared::components::list_status::ListPlaceholder;
use crate::shared::components::pagination_links::range_summary;
use crate::shared::config::use_config;
use crate::shared::debounce::Debouncer;
use crate::shared::list_loader::{ListLoaderState, ListQuery, LoadOutcome};
use crate::shared::modal::confirm;
use crate::shared::optimistic::{ToggleOutcome, ToggleRequest, ToggleState};
use crate::shared::toast::{use_toast, ToastService};

type PageFuture<T> = Pin<Box<dyn Future<Output = Result<Paginated<T>, ApiError>>>>;
type Fetcher<T> = Arc<dyn Fn(ListQuery) -> PageFuture<T> + Send + Sync>;

pub struct ListController<T: Send + Sync + 'static> {
    pub state: RwSignal<ListLoaderState<T>>,
    pub search: RwSignal<String>,
    pub toggles: RwSignal<ToggleState>,
    debouncer: StoredValue<Debouncer>,
    fetcher: StoredValue<Fetcher<T>>,
    view_key: &'static str,
    failure_text: &'static str,
    debounce_ms: u32,
    ctx: AppGlobalContext,
    toast: ToastService,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// `view_key` identifies the view in the location state;
    /// `failure_text` is shown when a load fails without a server message.
    pub fn new<F, Fut>(view_key: &'static str, failure_text: &'static str, fetcher: F) -> Self
    where
        F: Fn(ListQuery) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Paginated<T>, ApiError>> + 'static,
    {
        let ctx = use_global_context();
        let config = use_config();
        let fetcher: Fetcher<T> = Arc::new(move |query| Box::pin(fetcher(query)) as PageFuture<T>);

        let this = Self {
            state: RwSignal::new(ListLoaderState::new(ctx.page_for(view_key))),
            search: RwSignal::new(String::new()),
            toggles: RwSignal::new(ToggleState::new()),
            debouncer: StoredValue::new(Debouncer::new("")),
            fetcher: StoredValue::new(fetcher),
            view_key,
            failure_text,
            debounce_ms: config.search_debounce_ms,
            ctx,
            toast: use_toast(),
        };
        this.watch_search();
        this
    }

    fn watch_search(self) {
        Effect::new(move |prev: Option<()>| {
            self.search.track();
            if prev.is_some() {
                self.schedule_search();
            }
        });
    }

    fn schedule_search(self) {
        let Some(ticket) = self.debouncer.try_update_value(|d| d.input()) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(self.debounce_ms).await;
            let Some(value) = self.search.try_get_untracked() else {
                return;
            };
            let fired = self
                .debouncer
                .try_update_value(|d| d.fire(ticket, &value))
                .flatten();
            if let Some(term) = fired {
                log::debug!("{}: search '{}'", self.view_key, term);
                if self.state.try_update(|s| s.set_search(&term)).unwrap_or(false) {
                    self.remember_page();
                    self.load();
                }
            }
        });
    }

    fn remember_page(&self) {
        let page = self.state.with_untracked(|s| s.query().page);
        self.ctx.set_page(self.view_key, page);
    }

    pub fn load(&self) {
        self.fetch(false);
    }

    /// Align the location state and the search debouncer with the query
    /// the loader fell back to.
    fn resync_query(&self) {
        let Some(search) = self.state.try_with_untracked(|s| s.query().search.clone()) else {
            return;
        };
        self.remember_page();
        self.debouncer.try_update_value(|d| d.rewind(&search));
    }

    /// Rows of the current page with their serial numbers.
    pub fn rows(&self) -> Vec<(u64, T)> {
        self.state.with(|s| match s.page() {
            Some(page) => page
                .data
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, item)| (page.row_number(index), item))
                .collect(),
            None => Vec::new(),
        })
    }

    pub fn placeholder(&self) -> Signal<ListPlaceholder> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| ListPlaceholder::resolve(s.is_loading(), s.error(), s.items().len()))
        })
    }

    pub fn links(&self) -> Signal<Vec<PaginationLink>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page().map(|p| p.links.clone()).unwrap_or_default()))
    }

    pub fn total(&self) -> Signal<Option<u64>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page().map(|p| p.total)))
    }

    pub fn summary(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| match s.page() {
                Some(p) => range_summary(p.from, p.to, p.total),
                None => String::new(),
            })
        })
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    /// Background refresh; keeps the current rows on screen while loading.
    pub fn refresh_quietly(&self) {
        self.fetch(true);
    }

    fn fetch(&self, quiet: bool) {
        let Some((ticket, query)) = self.state.try_update(|s| s.begin_fetch(quiet)) else {
            return;
        };
        let this = *self;
        let Some(future) = self.fetcher.try_with_value(|f| f(query)) else {
            return;
        };
        spawn_local(async move {
            let result = future.await;
            let unauthorized = matches!(result, Err(ApiError::Unauthorized));
            let result = result.map_err(|e| e.user_message(this.failure_text));
            let message = result.as_ref().err().cloned();

            let Some(outcome) = this.state.try_update(|s| s.finish(ticket, result)) else {
                return;
            };
            match outcome {
                LoadOutcome::Loaded => log::debug!("{}: page loaded", this.view_key),
                LoadOutcome::Discarded => log::debug!("{}: stale answer dropped", this.view_key),
                LoadOutcome::KeptStale => {
                    log::warn!("{}: reload failed, keeping last page", this.view_key);
                    this.resync_query();
                    if !unauthorized && !quiet {
                        this.toast.error(message.unwrap_or_default());
                    }
                }
                LoadOutcome::Failed => {
                    log::error!("{}: first load failed: {:?}", this.view_key, message);
                }
            }
        });
    }

    pub fn go_to_page(&self, page: u32) {
        if self.state.try_update(|s| s.set_page(page)).unwrap_or(false) {
            self.remember_page();
            self.load();
        }
    }

    pub fn set_filter(&self, filter: Option<&str>) {
        if self.state.try_update(|s| s.set_filter(filter)).unwrap_or(false) {
            self.remember_page();
            self.load();
        }
    }

    /// Clear the search box and reload immediately.
    pub fn clear_search(&self) {
        self.debouncer.update_value(|d| d.reset(""));
        self.search.set(String::new());
        if self.state.try_update(|s| s.set_search("")).unwrap_or(false) {
            self.remember_page();
            self.load();
        }
    }

    /// Reload after a row was deleted, stepping back when it was the last
    /// row of its page.
    pub fn reload_after_delete(&self) {
        let page = self
            .state
            .with_untracked(|s| s.page().map(|p| p.page_after_delete()))
            .unwrap_or(1);
        if self.state.try_update(|s| s.set_page(page)).unwrap_or(false) {
            self.remember_page();
        }
        self.load();
    }

    /// Confirm, delete through `send`, then reload.
    pub fn delete<F, Fut>(&self, question: &str, send: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Ack, ApiError>> + 'static,
    {
        if !confirm(question) {
            return;
        }
        let this = *self;
        let pending = self.toast.loading("Deleting...");
        spawn_local(async move {
            match send().await {
                Ok(ack) => {
                    this.toast.resolve(pending, Ok(ack.message_or("Deleted successfully.")));
                    this.reload_after_delete();
                }
                Err(err) => {
                    log::warn!("{}: delete failed: {}", this.view_key, err);
                    this.toast.resolve(pending, Err(err.user_message("Failed to delete.")));
                }
            }
        });
    }
}

impl<T> ListController<T>
where
    T: Toggleable + Clone + Send + Sync + 'static,
{
    pub fn is_toggle_pending(&self, id: EntityId) -> bool {
        self.toggles.with(|t| t.is_pending(id))
    }

    pub fn is_active(&self, id: EntityId) -> bool {
        self.state.with(|s| {
            s.items()
                .iter()
                .find(|item| item.id() == id)
                .map(|item| item.is_active())
                .unwrap_or(false)
        })
    }

    /// Flip the status of `id` at once and persist it with `send`.
    ///
    /// Ignored while a toggle for the same id is outstanding.
    pub fn toggle<F, Fut>(&self, id: EntityId, send: F)
    where
        F: FnOnce(ToggleRequest<T>) -> Fut + 'static,
        Fut: Future<Output = Result<Ack, ApiError>> + 'static,
    {
        let toggles = self.toggles;
        let request = self
            .state
            .try_update(|s| toggles.try_update(|t| t.begin(s.items_mut(), id)))
            .flatten()
            .flatten();
        let Some(request) = request else {
            return;
        };

        let this = *self;
        spawn_local(async move {
            let result = send(request).await;
            let outcome = this
                .state
                .try_update(|s| toggles.try_update(|t| t.settle(s.items_mut(), id, result.is_ok())))
                .flatten()
                .flatten();

            match (outcome, result) {
                (Some(ToggleOutcome::Applied { active }), Ok(ack)) => {
                    let state = if active { "active" } else { "inactive" };
                    log::info!("{}: {} is now {}", this.view_key, id, state);
                    this.toast
                        .success(ack.message_or(&format!("Status changed to {}.", state)));
                }
                (Some(ToggleOutcome::Reverted { .. }), Err(err)) => {
                    log::warn!("{}: toggle of {} rolled back: {}", this.view_key, id, err);
                    if !err.is_unauthorized() {
                        this.toast.error(err.user_message("Failed to update status."));
                    }
                }
                _ => {}
            }
        });
    }
}
