use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// What a list body shows instead of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPlaceholder {
    Loading,
    Failed(String),
    Empty,
    Rows,
}

impl ListPlaceholder {
    /// Rows already on screen win over loading and error states.
    pub fn resolve(loading: bool, error: Option<&str>, row_count: usize) -> Self {
        if row_count > 0 {
            return ListPlaceholder::Rows;
        }
        match (loading, error) {
            (true, _) => ListPlaceholder::Loading,
            (false, Some(message)) => ListPlaceholder::Failed(message.to_string()),
            (false, None) => ListPlaceholder::Empty,
        }
    }
}

/// Spinner, error with retry, or empty message for a list without rows.
#[component]
pub fn ListStatus(
    #[prop(into)]
    placeholder: Signal<ListPlaceholder>,

    /// Shown when the page loaded with no rows
    #[prop(into)]
    empty_text: String,

    on_retry: Callback<()>,
) -> impl IntoView {
    move || match placeholder.get() {
        ListPlaceholder::Loading => view! {
            <div class="list-status">
                <Spinner />
                <span>"Loading..."</span>
            </div>
        }
        .into_any(),
        ListPlaceholder::Failed(message) => view! {
            <div class="list-status list-status--error">
                {icon("alert")}
                <span>{message}</span>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_retry.run(())>
                    {icon("refresh")}
                    " Retry"
                </Button>
            </div>
        }
        .into_any(),
        ListPlaceholder::Empty => view! {
            <div class="list-status list-status--empty">{empty_text.clone()}</div>
        }
        .into_any(),
        ListPlaceholder::Rows => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_win_over_error() {
        assert_eq!(ListPlaceholder::resolve(true, Some("x"), 3), ListPlaceholder::Rows);
        assert_eq!(ListPlaceholder::resolve(true, None, 0), ListPlaceholder::Loading);
        assert_eq!(
            ListPlaceholder::resolve(false, Some("Failed to load"), 0),
            ListPlaceholder::Failed("Failed to load".into())
        );
        assert_eq!(ListPlaceholder::resolve(false, None, 0), ListPlaceholder::Empty);
    }
}
