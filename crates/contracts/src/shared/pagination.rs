use serde::{Deserialize, Serialize};

/// One entry of the `links` array of a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

impl PaginationLink {
    /// Label with the backend's HTML arrows replaced by plain text.
    pub fn display_label(&self) -> String {
        self.label
            .replace("&laquo; Previous", "← Prev")
            .replace("Next &raquo;", "Next →")
            .replace("&laquo;", "«")
            .replace("&raquo;", "»")
    }

    /// Page number carried by the link's `page` query parameter.
    pub fn target_page(&self) -> Option<u32> {
        self.url.as_deref().and_then(page_from_url)
    }

    pub fn is_clickable(&self) -> bool {
        self.url.is_some() && !self.active
    }
}

#[derive(Debug, Default, Deserialize)]
struct PageParam {
    #[serde(default)]
    page: Option<String>,
}

/// Extract the `page` query parameter from an absolute or relative URL.
pub fn page_from_url(url: &str) -> Option<u32> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    let params: PageParam = serde_qs::from_str(query).ok()?;
    params
        .page
        .and_then(|value| value.trim().parse().ok())
        .filter(|page| *page > 0)
}

/// Pagination envelope returned by every list endpoint.
///
/// Field names and nullability follow the backend exactly; the optional
/// `*_url`/`path` extras are kept so the value round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub current_page: u32,
    pub data: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
    pub last_page: u32,
    #[serde(default)]
    pub links: Vec<PaginationLink>,
    #[serde(default, deserialize_with = "crate::shared::lenient::u32_or_zero")]
    pub per_page: u32,
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub prev_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl<T> Paginated<T> {
    /// Wrap an unpaginated result set as page 1 of 1.
    pub fn single_page(items: Vec<T>) -> Self {
        let count = items.len() as u64;
        let (from, to) = if count == 0 {
            (None, None)
        } else {
            (Some(1), Some(count))
        };
        Self {
            current_page: 1,
            data: items,
            total: count,
            from,
            to,
            last_page: 1,
            links: Vec::new(),
            per_page: count as u32,
            next_page_url: None,
            prev_page_url: None,
            first_page_url: None,
            last_page_url: None,
            path: None,
        }
    }

    pub fn empty() -> Self {
        Self::single_page(Vec::new())
    }

    /// The backend always sends prev + next, so a useful bar needs more than
    /// three links.
    pub fn has_navigation(&self) -> bool {
        self.links.len() > 3
    }

    /// 1-based serial number of the row at `index` on this page.
    pub fn row_number(&self, index: usize) -> u64 {
        self.from.unwrap_or(1) + index as u64
    }

    /// Page to reload after deleting one row: step back when the deleted row
    /// was the only one on a page other than the first.
    pub fn page_after_delete(&self) -> u32 {
        if self.data.len() == 1 && self.current_page > 1 {
            self.current_page - 1
        } else {
            self.current_page.max(1)
        }
    }
}

/// Query string of the plain paginated listings (`?page=2&search=...`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListParams {
    pub fn new(page: u32, search: &str) -> Self {
        let search = search.trim();
        Self {
            page: page.max(1),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}

/// Shapes a list endpoint may answer with.
///
/// Most endpoints return the envelope directly; some wrap it under a resource
/// key or under `data`, and the search endpoints return a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageResponse<T> {
    Page(Paginated<T>),
    Nested { data: Paginated<T> },
    ContactEnquiries { contact_enquiries: Paginated<T> },
    Bare(Vec<T>),
}

impl<T> PageResponse<T> {
    pub fn into_page(self) -> Paginated<T> {
        match self {
            PageResponse::Page(page) => page,
            PageResponse::Nested { data } => data,
            PageResponse::ContactEnquiries { contact_enquiries } => contact_enquiries,
            PageResponse::Bare(items) => Paginated::single_page(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: &str = r#"{
        "current_page": 2,
        "data": [{"id": 4}, {"id": 5}],
        "first_page_url": "https://api.test/x?page=1",
        "from": 4,
        "last_page": 3,
        "last_page_url": "https://api.test/x?page=3",
        "links": [
            {"url": "https://api.test/x?page=1", "label": "&laquo; Previous", "active": false},
            {"url": "https://api.test/x?page=1", "label": "1", "active": false},
            {"url": "https://api.test/x?page=2", "label": "2", "active": true},
            {"url": "https://api.test/x?page=3", "label": "3", "active": false},
            {"url": null, "label": "Next &raquo;", "active": false}
        ],
        "next_page_url": "https://api.test/x?page=3",
        "path": "https://api.test/x",
        "per_page": 3,
        "prev_page_url": "https://api.test/x?page=1",
        "to": 5,
        "total": 8
    }"#;

    #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_envelope_fields() {
        let page: Paginated<Row> = serde_json::from_str(ENVELOPE).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total, 8);
        assert_eq!(page.from, Some(4));
        assert_eq!(page.per_page, 3);
        assert!(page.has_navigation());
        assert_eq!(page.row_number(1), 5);
        assert_eq!(page.links[0].display_label(), "← Prev");
        assert_eq!(page.links[4].display_label(), "Next →");
        assert_eq!(page.links[3].target_page(), Some(3));
        assert!(!page.links[2].is_clickable());
        assert!(!page.links[4].is_clickable());
    }

    #[test]
    fn test_single_page_synthesis() {
        let page = Paginated::single_page(vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.total, 2);
        assert_eq!((page.from, page.to), (Some(1), Some(2)));
        assert!(!page.has_navigation());

        let empty: Paginated<Row> = Paginated::empty();
        assert_eq!(empty.total, 0);
        assert_eq!(empty.from, None);
    }

    #[test]
    fn test_response_shapes_normalise() {
        let direct: PageResponse<Row> = serde_json::from_str(ENVELOPE).unwrap();
        assert_eq!(direct.into_page().current_page, 2);

        let nested = format!(r#"{{"status": true, "data": {}}}"#, ENVELOPE);
        let nested: PageResponse<Row> = serde_json::from_str(&nested).unwrap();
        assert_eq!(nested.into_page().total, 8);

        let wrapped = format!(r#"{{"contact_enquiries": {}}}"#, ENVELOPE);
        let wrapped: PageResponse<Row> = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(wrapped.into_page().data.len(), 2);

        let bare: PageResponse<Row> = serde_json::from_str(r#"[{"id": 9}]"#).unwrap();
        let bare = bare.into_page();
        assert_eq!(bare.total, 1);
        assert_eq!(bare.data, vec![Row { id: 9 }]);
    }

    #[test]
    fn test_page_from_url() {
        assert_eq!(page_from_url("https://h/p?search=x&page=4"), Some(4));
        assert_eq!(page_from_url("/p?page=2#top"), Some(2));
        assert_eq!(page_from_url("/p?page=0"), None);
        assert_eq!(page_from_url("/p"), None);
        assert_eq!(page_from_url("/p?search=a%26page%3D9&page=3"), Some(3));
        assert_eq!(page_from_url("/p?pages=7"), None);
        assert_eq!(page_from_url("/p?page=%35"), Some(5));
    }

    #[test]
    fn test_list_params_drop_blank_search() {
        assert_eq!(ListParams::new(0, "  "), ListParams { page: 1, search: None });
        assert_eq!(ListParams::new(3, " x ").search.as_deref(), Some("x"));
    }

    #[test]
    fn test_page_after_delete() {
        let mut page: Paginated<Row> = serde_json::from_str(ENVELOPE).unwrap();
        assert_eq!(page.page_after_delete(), 2);
        page.data.truncate(1);
        assert_eq!(page.page_after_delete(), 1);
        page.current_page = 1;
        assert_eq!(page.page_after_delete(), 1);
    }
}
