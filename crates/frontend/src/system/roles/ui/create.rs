use std::sync::Arc;

use contracts::shared::active_flag::ActiveFlag;
use contracts::system::roles::CreateRoleDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_client::use_api;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::system::roles::api;

#[component]
pub fn RoleCreateModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let client = use_api();
    let toast = use_toast();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(ActiveFlag::ACTIVE.as_form_value().to_string());
    let saving = RwSignal::new(false);

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let dto = CreateRoleDto {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            status: ActiveFlag::parse(&status.get_untracked()).unwrap_or(ActiveFlag::ACTIVE),
        };
        if let Err(message) = dto.validate() {
            toast.error(message);
            return;
        }

        saving.set(true);
        let pending = toast.loading("Creating role...");
        let client = client.clone();
        spawn_local(async move {
            let result = api::create_role(&client, &dto).await;
            let _ = saving.try_set(false);
            match result {
                Ok(ack) => {
                    log::info!("role '{}' created", dto.name);
                    toast.resolve(pending, Ok(ack.message_or("Role created successfully!")));
                    on_created.run(());
                }
                Err(e) => {
                    log::warn!("role create failed: {}", e);
                    toast.resolve(pending, Err(e.user_message("Failed to create role.")));
                }
            }
        });
    };

    let footer: ChildrenFn = Arc::new(move || {
        let submit = submit.clone();
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || saving.get())
                on_click=move |_| submit()
            >
                {move || if saving.get() { "Creating..." } else { "Create Role" }}
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title="Add New Role" on_close=on_close footer=footer>
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Role Name *"</Label>
                    <Input value=name placeholder="e.g. Editor" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Description"</Label>
                    <Textarea value=description placeholder="What this role may do" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Status"</Label>
                    <Select value=status>
                        <option value="1">"Active"</option>
                        <option value="0">"Inactive"</option>
                    </Select>
                </Flex>
            </Flex>
        </Modal>
    }
}
