//! Top bar: sidebar toggle, title of the current view, signed-in user and
//! logout.

use crate::layout::global_context::use_global_context;
use crate::layout::views::view_label;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    let user_name = move || {
        session
            .state()
            .with(|s| s.user_info.as_ref().map(|u| u.name.clone()))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Admin".to_string())
    };

    let logout = move |_| {
        log::info!("logout requested");
        session.invalidate();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Film Poster Admin"</span>
                <span class="top-header__view">
                    {move || ctx.active.with(|key| view_label(key).to_string())}
                </span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>{user_name}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
