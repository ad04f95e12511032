use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::layout::global_context::use_global_context;
use crate::layout::views::view_label;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

/// Overview card: view it opens, icon, one-line description.
const CARDS: [(&str, &str, &str); 6] = [
    ("a001_film_poster", "film", "Browse, search and edit film posters."),
    ("a001_film_poster_sequence", "list-ordered", "Drag posters into display order."),
    ("a002_employee", "briefcase", "Team photos shown on the site."),
    ("a003_client", "building", "Client logos and details."),
    ("a004_contact_enquiry", "mail", "Messages sent through the contact form."),
    ("sys_users", "users", "Accounts with access to this dashboard."),
];

const QUICK_LINKS: [(&str, &str, &str); 3] = [
    ("a001_film_poster_new", "plus", "Add Poster"),
    ("a002_employee_new", "plus", "Add Employee"),
    ("sys_roles", "shield", "Manage Roles"),
];

fn today() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("en-GB", &JsValue::UNDEFINED)
        .into()
}

#[component]
pub fn SuperAdminDashboard() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <PageFrame page_id="dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <div>
                        <h1 class="page__title">"Super Admin Dashboard"</h1>
                        <p class="text-muted">"System-wide overview & controls"</p>
                    </div>
                </div>
                <div class="page__header-right">
                    <span class="badge badge--neutral">{today()}</span>
                </div>
            </div>

            <div class="page__content">
                <div class="dashboard-grid">
                    {CARDS.into_iter().map(|(key, icon_name, text)| view! {
                        <div class="dashboard-card" on:click=move |_| ctx.open_view(key)>
                            <div class="dashboard-card__icon">{icon(icon_name)}</div>
                            <h4 class="dashboard-card__title">{view_label(key).to_string()}</h4>
                            <p class="text-muted">{text}</p>
                        </div>
                    }).collect_view()}
                </div>

                <h3 class="section__title">"Quick Actions"</h3>
                <div class="dashboard-links">
                    {QUICK_LINKS.into_iter().map(|(key, icon_name, label)| view! {
                        <button class="button button--secondary" on:click=move |_| ctx.open_view(key)>
                            {icon(icon_name)}
                            <span>{label}</span>
                        </button>
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::views::ViewRoute;

    #[test]
    fn test_dashboard_links_resolve() {
        for (key, _, _) in CARDS.iter().chain(QUICK_LINKS.iter()) {
            assert!(ViewRoute::parse(key).is_some(), "{} has no screen", key);
        }
    }
}
