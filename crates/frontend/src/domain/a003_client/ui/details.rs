use contracts::domain::a003_client::aggregate::Client;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_client::api;
use crate::shared::api_client::use_api;
use crate::shared::date_utils::format_date_opt;
use crate::shared::modal::Modal;

#[component]
pub fn ClientDetailsModal(id: EntityId, on_close: Callback<()>) -> impl IntoView {
    let client = use_api();
    let record = RwSignal::new(None::<Client>);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::fetch_client(&client, id).await {
            Ok(c) => {
                let _ = record.try_set(Some(c));
            }
            Err(e) => {
                log::warn!("client {}: {}", id, e);
                let _ = error.try_set(Some(e.user_message("Failed to load client details.")));
            }
        }
    });

    view! {
        <Modal title="Client Details" on_close=on_close>
            {move || {
                if let Some(message) = error.get() {
                    return view! { <div class="alert alert--error">{message}</div> }.into_any();
                }
                let Some(c) = record.get() else {
                    return view! { <Spinner /> }.into_any();
                };
                let status = c.status.label();
                view! {
                    <div class="client-card">
                        {match c.logo_path.clone().filter(|p| !p.is_empty()) {
                            Some(url) => view! { <img class="client-card__logo" src=url alt=c.name.clone() /> }.into_any(),
                            None => view! { <div class="client-card__logo client-card__logo--empty">{c.initials()}</div> }.into_any(),
                        }}
                        <div class="detail-grid">
                            <span class="detail-grid__label">"Name"</span>
                            <span>{c.name.clone()}</span>
                            <span class="detail-grid__label">"Status"</span>
                            <span>{status}</span>
                            <span class="detail-grid__label">"Created"</span>
                            <span>{format_date_opt(&c.created_at)}</span>
                            <span class="detail-grid__label">"Updated"</span>
                            <span>{format_date_opt(&c.updated_at)}</span>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </Modal>
    }
}
