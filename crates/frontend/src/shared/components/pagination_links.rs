use contracts::shared::pagination::PaginationLink;
use leptos::prelude::*;

/// Link-based pagination bar built from the `links` of a page envelope.
///
/// Hidden when the backend sent only prev/current/next.
#[component]
pub fn PaginationLinks(
    #[prop(into)]
    links: Signal<Vec<PaginationLink>>,

    /// Called with the target page number
    on_page: Callback<u32>,

    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || links.with(|l| l.len() > 3)>
            <nav class="pagination-links">
                {move || links.get().into_iter().map(|link| {
                    let target = link.target_page();
                    let clickable = link.is_clickable();
                    view! {
                        <button
                            class="pagination-btn"
                            class:pagination-btn--active=link.active
                            disabled=move || !clickable || disabled.get()
                            on:click=move |_| {
                                if let Some(page) = target {
                                    on_page.run(page);
                                }
                            }
                        >
                            {link.display_label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </Show>
    }
}

/// "Showing 11 to 20 of 57 entries"
pub fn range_summary(from: Option<u64>, to: Option<u64>, total: u64) -> String {
    match (from, to) {
        (Some(from), Some(to)) if total > 0 => {
            format!("Showing {} to {} of {} entries", from, to, total)
        }
        _ => "No entries".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_summary() {
        assert_eq!(range_summary(Some(11), Some(20), 57), "Showing 11 to 20 of 57 entries");
        assert_eq!(range_summary(None, None, 0), "No entries");
    }
}
