use std::sync::Arc;

use contracts::domain::a003_client::aggregate::{Client, ClientForm};
use contracts::domain::common::EntityId;
use contracts::shared::active_flag::ActiveFlag;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_client::api;
use crate::shared::api_client::use_api;
use crate::shared::components::image_input::ImageInput;
use crate::shared::form_data::{append_file, to_form_data, PickedImage};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

/// Create (`id = None`) or edit modal of a client. A logo is required only
/// on create; on edit an empty picker keeps the current one.
#[component]
pub fn ClientFormModal(
    #[prop(optional)] id: Option<EntityId>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let client = use_api();
    let toast = use_toast();

    let name = RwSignal::new(String::new());
    let status = RwSignal::new(ActiveFlag::ACTIVE.as_form_value().to_string());
    let current_logo = RwSignal::new(None::<String>);
    let logo = RwSignal::new_local(None::<PickedImage>);
    let loading = RwSignal::new(id.is_some());
    let saving = RwSignal::new(false);

    if let Some(id) = id {
        let client = client.clone();
        spawn_local(async move {
            match api::fetch_client(&client, id).await {
                Ok(record) => {
                    let form = ClientForm::from(&record);
                    let Client { logo_path, .. } = record;
                    let _ = name.try_set(form.name);
                    let _ = status.try_set(form.status.as_form_value().to_string());
                    let _ = current_logo.try_set(logo_path);
                    let _ = loading.try_set(false);
                }
                Err(e) => {
                    log::warn!("client {}: {}", id, e);
                    toast.error(e.user_message("Failed to fetch client data"));
                    on_close.run(());
                }
            }
        });
    }

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let form = ClientForm {
            name: name.get_untracked(),
            status: ActiveFlag::parse(&status.get_untracked()).unwrap_or(ActiveFlag::ACTIVE),
        };
        let picked = logo.get_untracked();
        if let Err(message) = form.validate(id.is_none(), picked.is_some()) {
            toast.error(message);
            return;
        }
        let body = to_form_data(&form.to_fields(id.map(|_| "PUT"))).and_then(|body| {
            if let Some(image) = &picked {
                append_file(&body, "logo", &image.file)?;
            }
            Ok(body)
        });
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                log::error!("failed to build client form: {}", e);
                toast.error(e.user_message("Failed to prepare the upload."));
                return;
            }
        };

        saving.set(true);
        let pending = toast.loading(if id.is_some() { "Updating client..." } else { "Creating client..." });
        let client = client.clone();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_client(&client, id, body).await,
                None => api::create_client(&client, body).await,
            };
            let _ = saving.try_set(false);
            match result {
                Ok(ack) => {
                    let fallback = if id.is_some() {
                        "Client updated successfully!"
                    } else {
                        "Client created successfully!"
                    };
                    toast.resolve(pending, Ok(ack.message_or(fallback)));
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("client save failed: {}", e);
                    let fallback = if id.is_some() {
                        "Failed to update client."
                    } else {
                        "Failed to create client."
                    };
                    toast.resolve(pending, Err(e.user_message(fallback)));
                }
            }
        });
    };

    let title = if id.is_some() { "Edit Client" } else { "Add New Client" };
    let logo_label = if id.is_some() {
        "Client Logo (leave empty to keep current)"
    } else {
        "Client Logo *"
    };

    let footer: ChildrenFn = Arc::new(move || {
        let submit = submit.clone();
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || saving.get() || loading.get())
                on_click=move |_| submit()
            >
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal
            title=title
            on_close=on_close
            footer=footer
        >
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <Flex vertical=true gap=FlexGap::Medium>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Client Name *"</Label>
                        <Input value=name placeholder="e.g. Acme Studios" />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Status"</Label>
                        <Select value=status>
                            <option value="1">"Active"</option>
                            <option value="0">"Inactive"</option>
                        </Select>
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>{logo_label}</Label>
                        <ImageInput picked=logo current=Signal::derive(move || current_logo.get()) />
                    </Flex>
                </Flex>
            </Show>
        </Modal>
    }
}
