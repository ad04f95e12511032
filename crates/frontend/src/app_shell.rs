//! Application shell: auth gate in front of the main layout.

use crate::layout::global_context::use_global_context;
use crate::layout::left::Sidebar;
use crate::layout::views::render_view;
use crate::layout::Shell;
use crate::shared::toast::Toaster;
use crate::system::auth::context::use_session;
use crate::system::auth::session::SessionMonitor;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Signed-in layout. Syncs the active view with the URL once created.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();
    ctx.init_router_integration();

    view! {
        <SessionMonitor />
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || {
                        let key = ctx.active.get();
                        log::debug!("rendering view '{}'", key);
                        render_view(&key)
                    }}
                }
                .into_any()
            }
        />
    }
}

/// Shows `LoginPage` without a token, `MainLayout` with one.
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
        <Toaster />
    }
}
