use contracts::domain::common::EntityId;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_client::use_api;
use crate::shared::date_utils::format_date_opt;
use crate::shared::modal::Modal;
use crate::system::users::api;

#[component]
pub fn UserDetailsModal(id: EntityId, on_close: Callback<()>) -> impl IntoView {
    let client = use_api();
    let user = RwSignal::new(None::<User>);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::fetch_user(&client, id).await {
            Ok(u) => {
                let _ = user.try_set(Some(u));
            }
            Err(e) => {
                log::warn!("user {}: {}", id, e);
                let _ = error.try_set(Some(e.user_message("Failed to load user details.")));
            }
        }
    });

    view! {
        <Modal title="User Details" on_close=on_close>
            {move || {
                if let Some(message) = error.get() {
                    return view! { <div class="alert alert--error">{message}</div> }.into_any();
                }
                let Some(u) = user.get() else {
                    return view! { <Spinner /> }.into_any();
                };
                view! {
                    <div class="detail-grid">
                        <span class="detail-grid__label">"Name"</span>
                        <span>{u.name.clone()}</span>
                        <span class="detail-grid__label">"Email"</span>
                        <span>{u.email.clone()}</span>
                        <span class="detail-grid__label">"Phone"</span>
                        <span>{u.phone_display()}</span>
                        <span class="detail-grid__label">"Role"</span>
                        <span>{if u.is_admin() { "Admin" } else { "User" }}</span>
                        <span class="detail-grid__label">"Country"</span>
                        <span>{if u.country.is_empty() { "N/A".to_string() } else { u.country.clone() }}</span>
                        <span class="detail-grid__label">"Status"</span>
                        <span>{u.status.label()}</span>
                        <span class="detail-grid__label">"Joined"</span>
                        <span>{format_date_opt(&u.created_at)}</span>
                    </div>
                }
                .into_any()
            }}
        </Modal>
    }
}
