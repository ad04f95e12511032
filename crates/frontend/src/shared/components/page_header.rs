use leptos::prelude::*;
use thaw::*;

/// Header of a view: title, optional record count, action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Total shown as a badge next to the title
    #[prop(optional, into)]
    count: MaybeProp<u64>,

    /// Action buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || count.get().map(|n| view! { <Badge>{n.to_string()}</Badge> })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
