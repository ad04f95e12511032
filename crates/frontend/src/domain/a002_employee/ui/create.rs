use contracts::domain::a002_employee::aggregate::EmployeeForm;
use contracts::shared::active_flag::ActiveFlag;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_employee::api;
use crate::layout::global_context::use_global_context;
use crate::shared::api_client::use_api;
use crate::shared::components::image_input::ImageInput;
use crate::shared::form_data::{append_file, to_form_data, PickedImage};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::toast::use_toast;

#[component]
pub fn EmployeeCreate() -> impl IntoView {
    let ctx = use_global_context();
    let client = use_api();
    let toast = use_toast();

    let name = RwSignal::new(String::new());
    let designation = RwSignal::new(String::new());
    let status = RwSignal::new(ActiveFlag::ACTIVE.as_form_value().to_string());
    let position_number = RwSignal::new(String::new());
    let photo = RwSignal::new_local(None::<PickedImage>);
    let saving = RwSignal::new(false);

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let form = EmployeeForm {
            name: name.get_untracked(),
            designation: designation.get_untracked(),
            status: ActiveFlag::parse(&status.get_untracked()).unwrap_or(ActiveFlag::ACTIVE),
            position_number: position_number.get_untracked(),
        };
        let picked = photo.get_untracked();
        if let Err(message) = form.validate(picked.is_some()) {
            toast.error(message);
            return;
        }

        let body = to_form_data(&form.to_fields()).and_then(|body| {
            if let Some(image) = &picked {
                append_file(&body, "photo", &image.file)?;
            }
            Ok(body)
        });
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                log::error!("failed to build employee form: {}", e);
                toast.error(e.user_message("Failed to prepare the upload."));
                return;
            }
        };

        saving.set(true);
        let pending = toast.loading("Creating employee...");
        let client = client.clone();
        spawn_local(async move {
            let result = api::create_employee(&client, body).await;
            let _ = saving.try_set(false);
            match result {
                Ok(ack) => {
                    log::info!("employee created");
                    toast.resolve(pending, Ok(ack.message_or("Employee created successfully!")));
                    ctx.open_view("a002_employee");
                }
                Err(e) => {
                    log::warn!("employee create failed: {}", e);
                    toast.resolve(pending, Err(e.user_message("Failed to create employee.")));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a002_employee--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctx.open_view("a002_employee")
                    >
                        {icon("chevron-left")}
                    </Button>
                    <h1 class="page__title">"Add Employee"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get())
                        on_click=move |_| submit()
                    >
                        {icon("check")}
                        {move || if saving.get() { " Saving..." } else { " Save Employee" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="form-grid">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Full Name *"</Label>
                        <Input value=name placeholder="e.g. Asha Menon" />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Designation *"</Label>
                        <Input value=designation placeholder="e.g. Editor" />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Status"</Label>
                        <Select value=status>
                            <option value="1">"Active"</option>
                            <option value="0">"Inactive"</option>
                        </Select>
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Position / Sort Order *"</Label>
                        <Input value=position_number placeholder="1" />
                    </Flex>
                </div>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Photo * (max 2 MB)"</Label>
                    <ImageInput picked=photo />
                </Flex>
            </div>
        </PageFrame>
    }
}
