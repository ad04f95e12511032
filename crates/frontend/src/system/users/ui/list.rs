use contracts::domain::common::EntityId;
use contracts::system::users::{UpdateUserDto, User};
use leptos::prelude::*;
use thaw::*;

use super::create::UserCreateModal;
use super::details::UserDetailsModal;
use crate::shared::api_client::use_api;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_links::PaginationLinks;
use crate::shared::components::status_switch::StatusSwitch;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::users::api;

#[component]
pub fn UserList() -> impl IntoView {
    let client = use_api();

    let list = ListController::new("sys_users", "Failed to load users.", {
        let client = client.clone();
        move |query| {
            let client = client.clone();
            async move { api::fetch_page(&client, &query).await }
        }
    });
    list.load();
    let summary = list.summary();

    let show_create = RwSignal::new(false);
    let viewing = RwSignal::new(None::<EntityId>);

    // the update endpoint takes the whole record, sent with the new status
    let on_toggle = move |id: EntityId| {
        let client = client.clone();
        list.toggle(id, move |request| async move {
            let dto = UpdateUserDto::from(&request.record);
            api::update_user(&client, request.id, &dto).await
        });
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Users" count=list.total()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| show_create.set(true)
                >
                    {icon("plus")}
                    " Add User"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 360px;">
                                <Input value=list.search placeholder="Search by name, email or phone..." />
                            </div>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.clear_search()>
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=50.0>"#"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Contact"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Role"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Location"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.rows()
                                key=|(number, user)| (*number, user.id)
                                children=move |(number, user): (u64, User)| {
                                    let id = user.id;
                                    let on_toggle = on_toggle.clone();
                                    let contact_user = user.clone();
                                    let role_user = user.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{number.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="cell-stack">
                                                        <span>{contact_user.email.clone()}</span>
                                                        <span class="text-muted">{contact_user.phone_display()}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if role_user.is_admin() {
                                                        view! { <span class="badge badge--warning">"Admin"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"User"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{user.country.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusSwitch
                                                    active=Signal::derive(move || list.is_active(id))
                                                    pending=Signal::derive(move || list.is_toggle_pending(id))
                                                    on_toggle=Callback::new(move |_| on_toggle(id))
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <button
                                                    class="button button--icon"
                                                    title="View"
                                                    on:click=move |_| viewing.set(Some(id))
                                                >
                                                    {icon("eye")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <ListStatus
                        placeholder=list.placeholder()
                        empty_text="No users found."
                        on_retry=Callback::new(move |_| list.load())
                    />
                </div>

                <div class="list-footer">
                    <span class="text-muted">{move || summary.get()}</span>
                    <PaginationLinks
                        links=list.links()
                        on_page=Callback::new(move |page| list.go_to_page(page))
                        disabled=list.is_loading()
                    />
                </div>
            </div>

            <Show when=move || show_create.get()>
                <UserCreateModal
                    on_close=Callback::new(move |_| show_create.set(false))
                    on_created=Callback::new(move |_| {
                        show_create.set(false);
                        list.load();
                    })
                />
            </Show>
            {move || viewing.get().map(|id| view! {
                <UserDetailsModal id=id on_close=Callback::new(move |_| viewing.set(None)) />
            })}
        </PageFrame>
    }
}
