use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::ApiClient;
use crate::shared::config::AppConfig;
use crate::shared::toast::ToastService;
use crate::system::auth::context::Session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let session = Session::restore();

    provide_context(session);
    provide_context(ApiClient::new(&config.api_base_url, session));
    provide_context(ToastService::new(config.toast_ttl_ms));
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! {
        <AppShell />
    }
}
