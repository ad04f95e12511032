use std::sync::Arc;

use contracts::system::users::{CreateUserDto, ROLE_ADMIN, ROLE_USER};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_client::use_api;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::system::users::api;

#[component]
pub fn UserCreateModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let client = use_api();
    let toast = use_toast();
    let defaults = CreateUserDto::default();

    let name = RwSignal::new(defaults.name);
    let email = RwSignal::new(defaults.email);
    let password = RwSignal::new(defaults.password);
    let role = RwSignal::new(defaults.role);
    let country_code = RwSignal::new(defaults.country_code);
    let phone_number = RwSignal::new(defaults.phone_number);
    let country = RwSignal::new(defaults.country);
    let saving = RwSignal::new(false);

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let dto = CreateUserDto {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            role: role.get_untracked(),
            country_code: country_code.get_untracked().trim().to_string(),
            phone_number: phone_number.get_untracked().trim().to_string(),
            country: country.get_untracked().trim().to_string(),
        };
        if let Err(message) = dto.validate() {
            toast.error(message);
            return;
        }

        saving.set(true);
        let pending = toast.loading("Creating user...");
        let client = client.clone();
        spawn_local(async move {
            let result = api::create_user(&client, &dto).await;
            let _ = saving.try_set(false);
            match result {
                Ok(ack) => {
                    log::info!("user {} created", dto.email);
                    toast.resolve(pending, Ok(ack.message_or("User created successfully!")));
                    on_created.run(());
                }
                Err(e) => {
                    log::warn!("user create failed: {}", e);
                    toast.resolve(pending, Err(e.user_message("Failed to create user.")));
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
                {move || if saving.get() { "Creating..." } else { "Create User" }}
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title="Add New User" on_close=on_close footer=footer>
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Full Name *"</Label>
                    <Input value=name placeholder="e.g. Ravi Kumar" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Email *"</Label>
                    <Input value=email input_type=InputType::Email placeholder="name@example.com" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Password *"</Label>
                    <Input value=password input_type=InputType::Password />
                </Flex>
                <Flex gap=FlexGap::Small>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Code"</Label>
                        <Input value=country_code />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Phone *"</Label>
                        <Input value=phone_number />
                    </Flex>
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Country"</Label>
                    <Input value=country />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Role"</Label>
                    <Select value=role>
                        <option value=ROLE_USER>"User"</option>
                        <option value=ROLE_ADMIN>"Admin"</option>
                    </Select>
                </Flex>
            </Flex>
        </Modal>
    }
}
