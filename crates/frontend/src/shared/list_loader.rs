//! Paginated, searchable, filterable list state.
//!
//! Pure bookkeeping for one list screen: the query that is shown, the last
//! page that loaded successfully and which fetch is the current one. The
//! screen owns the timers and the HTTP calls.

use contracts::shared::pagination::{ListParams, Paginated};

/// Filter value meaning "no filter".
pub const FILTER_ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Paginated listing with `page`, `search` and filter params
    List,
    /// Dedicated search endpoint, answered with an unpaginated result set
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
    pub filter: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            filter: None,
        }
    }
}

impl ListQuery {
    /// Where to send this query. Only resources with a search endpoint
    /// route non-empty searches there.
    pub fn endpoint(&self, has_search_endpoint: bool) -> Endpoint {
        if has_search_endpoint && !self.search.is_empty() {
            Endpoint::Search
        } else {
            Endpoint::List
        }
    }

    pub fn list_params(&self) -> ListParams {
        ListParams::new(self.page, &self.search)
    }
}

/// `"All"` and blank select values mean no filter.
pub fn normalize_filter(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(FILTER_ALL))
        .map(str::to_string)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// Failed, the previous page stays on screen and the query is rolled
    /// back to the one that produced it
    KeptStale,
    /// Failed on the first load, nothing to show
    Failed,
    /// A newer fetch was issued meanwhile; the answer was dropped
    Discarded,
}

#[derive(Debug, Clone)]
pub struct ListLoaderState<T> {
    query: ListQuery,
    /// Query of the current fetch, and of the page on screen
    requested: ListQuery,
    loaded: Option<ListQuery>,
    page: Option<Paginated<T>>,
    loading: bool,
    error: Option<String>,
    issued: u64,
}

impl<T> Default for ListLoaderState<T> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<T> ListLoaderState<T> {
    /// `page` comes from the location so that returning to the screen
    /// shows the page the user left.
    pub fn new(page: u32) -> Self {
        let query = ListQuery {
            page: page.max(1),
            ..ListQuery::default()
        };
        Self {
            requested: query.clone(),
            query,
            loaded: None,
            page: None,
            loading: false,
            error: None,
            issued: 0,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn page(&self) -> Option<&Paginated<T>> {
        self.page.as_ref()
    }

    pub fn items(&self) -> &[T] {
        self.page.as_ref().map(|p| p.data.as_slice()).unwrap_or(&[])
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        match self.page.as_mut() {
            Some(page) => page.data.as_mut_slice(),
            None => &mut [],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_data(&self) -> bool {
        self.page.is_some()
    }

    /// Returns `true` when the result set changed and must be reloaded.
    pub fn set_search(&mut self, search: &str) -> bool {
        let search = search.trim();
        if search == self.query.search {
            return false;
        }
        self.query.search = search.to_string();
        self.query.page = 1;
        true
    }

    pub fn set_filter(&mut self, filter: Option<&str>) -> bool {
        let filter = normalize_filter(filter);
        if filter == self.query.filter {
            return false;
        }
        self.query.filter = filter;
        self.query.page = 1;
        true
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.query.page {
            return false;
        }
        self.query.page = page;
        true
    }

    /// Start a fetch for the current query. A `quiet` fetch (background
    /// refresh) does not raise the loading flag.
    pub fn begin_fetch(&mut self, quiet: bool) -> (FetchTicket, ListQuery) {
        self.issued += 1;
        if !quiet {
            self.loading = true;
        }
        self.requested = self.query.clone();
        (FetchTicket(self.issued), self.query.clone())
    }

    pub fn finish(&mut self, ticket: FetchTicket, result: Result<Paginated<T>, String>) -> LoadOutcome {
        if ticket.0 != self.issued {
            return LoadOutcome::Discarded;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = Some(page);
                self.loaded = Some(self.requested.clone());
                self.error = None;
                LoadOutcome::Loaded
            }
            Err(_) if self.page.is_some() => {
                if let Some(loaded) = &self.loaded {
                    self.query = loaded.clone();
                }
                LoadOutcome::KeptStale
            }
            Err(message) => {
                self.error = Some(message);
                LoadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(current: u32, ids: Vec<i64>) -> Paginated<i64> {
        let mut page = Paginated::single_page(ids);
        page.current_page = current;
        page
    }

    #[test]
    fn test_search_change_resets_to_first_page() {
        let mut state: ListLoaderState<i64> = ListLoaderState::new(3);

        assert!(!state.set_search(""));
        assert_eq!(state.query().page, 3);

        assert!(state.set_search("Matrix"));
        let (_, query) = state.begin_fetch(false);
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "Matrix");
    }

    #[test]
    fn test_remount_keeps_page() {
        let mut state: ListLoaderState<i64> = ListLoaderState::new(3);
        assert!(!state.set_filter(Some("All")));
        assert!(!state.set_search("   "));
        let (_, query) = state.begin_fetch(false);
        assert_eq!(query.page, 3);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state: ListLoaderState<i64> = ListLoaderState::new(2);
        assert!(state.set_filter(Some("2024")));
        assert_eq!(state.query().page, 1);
        assert_eq!(state.query().filter.as_deref(), Some("2024"));

        state.set_page(4);
        assert!(state.set_filter(Some("All")));
        assert_eq!(state.query().filter, None);
        assert_eq!(state.query().page, 1);
    }

    #[test]
    fn test_endpoint_routing() {
        let mut query = ListQuery::default();
        assert_eq!(query.endpoint(true), Endpoint::List);
        query.search = "Dune".into();
        assert_eq!(query.endpoint(true), Endpoint::Search);
        assert_eq!(query.endpoint(false), Endpoint::List);
        assert_eq!(query.list_params().search.as_deref(), Some("Dune"));
    }

    #[test]
    fn test_error_keeps_last_good_page() {
        let mut state = ListLoaderState::new(1);
        let (ticket, _) = state.begin_fetch(false);
        assert_eq!(state.finish(ticket, Ok(page_of(1, vec![1, 2]))), LoadOutcome::Loaded);

        state.set_page(2);
        let (ticket, _) = state.begin_fetch(false);
        assert!(state.is_loading());
        assert_eq!(state.finish(ticket, Err("offline".into())), LoadOutcome::KeptStale);
        assert_eq!(state.items(), &[1, 2]);
        assert_eq!(state.error(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_page_change_can_be_retried() {
        let mut state = ListLoaderState::new(1);
        let (ticket, _) = state.begin_fetch(false);
        state.finish(ticket, Ok(page_of(1, vec![1, 2])));

        assert!(state.set_page(2));
        let (ticket, _) = state.begin_fetch(false);
        assert_eq!(state.finish(ticket, Err("offline".into())), LoadOutcome::KeptStale);
        assert_eq!(state.query().page, 1);

        assert!(state.set_page(2));
        let (ticket, query) = state.begin_fetch(false);
        assert_eq!(query.page, 2);
        assert_eq!(state.finish(ticket, Ok(page_of(2, vec![3]))), LoadOutcome::Loaded);
        assert_eq!(state.query().page, 2);
    }

    #[test]
    fn test_failed_search_rolls_back_term() {
        let mut state = ListLoaderState::new(1);
        let (ticket, _) = state.begin_fetch(false);
        state.finish(ticket, Ok(page_of(1, vec![1])));

        assert!(state.set_search("Alien"));
        let (ticket, _) = state.begin_fetch(false);
        assert_eq!(state.finish(ticket, Err("offline".into())), LoadOutcome::KeptStale);
        assert_eq!(state.query().search, "");
        assert!(state.set_search("Alien"));
    }

    #[test]
    fn test_first_load_error_is_shown() {
        let mut state: ListLoaderState<i64> = ListLoaderState::new(1);
        let (ticket, _) = state.begin_fetch(false);
        assert_eq!(state.finish(ticket, Err("offline".into())), LoadOutcome::Failed);
        assert_eq!(state.error(), Some("offline"));
        assert!(!state.has_data());
    }

    #[test]
    fn test_stale_answer_is_discarded() {
        let mut state = ListLoaderState::new(1);
        let (old, _) = state.begin_fetch(false);
        state.set_search("x");
        let (new, _) = state.begin_fetch(false);

        assert_eq!(state.finish(old, Ok(page_of(1, vec![9]))), LoadOutcome::Discarded);
        assert!(state.is_loading());
        assert_eq!(state.finish(new, Ok(page_of(1, vec![3]))), LoadOutcome::Loaded);
        assert_eq!(state.items(), &[3]);
    }

    #[test]
    fn test_quiet_fetch_does_not_flag_loading() {
        let mut state: ListLoaderState<i64> = ListLoaderState::new(1);
        let (ticket, _) = state.begin_fetch(true);
        assert!(!state.is_loading());
        state.finish(ticket, Ok(page_of(1, vec![])));
        assert!(state.has_data());
    }
}
