use contracts::domain::a003_client::aggregate::Client;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

use super::details::ClientDetailsModal;
use super::form::ClientFormModal;
use crate::domain::a003_client::api;
use crate::shared::api_client::use_api;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_links::PaginationLinks;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Modal opened over the client list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClientModal {
    Create,
    Edit(EntityId),
    View(EntityId),
}

#[component]
pub fn ClientList() -> impl IntoView {
    let client = use_api();

    let list = ListController::new("a003_client", "Failed to load clients.", move |query| {
        let client = client.clone();
        async move { api::fetch_page(&client, &query).await }
    });
    list.load();
    let summary = list.summary();

    let modal = RwSignal::new(None::<ClientModal>);
    let close = Callback::new(move |_| modal.set(None));
    let saved = Callback::new(move |_| {
        modal.set(None);
        list.load();
    });

    view! {
        <PageFrame page_id="a003_client--list" category=PAGE_CAT_LIST>
            <PageHeader title="Clients" count=list.total()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| modal.set(Some(ClientModal::Create))
                >
                    {icon("plus")}
                    " Add Client"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 360px;">
                                <Input value=list.search placeholder="Search clients..." />
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
                                <TableHeaderCell min_width=80.0>"Logo"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Client Name"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.rows()
                                key=|(number, c)| (*number, c.id)
                                children=move |(number, c): (u64, Client)| {
                                    let id = c.id;
                                    let logo_client = c.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{number.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {match logo_client.logo_path.clone().filter(|p| !p.is_empty()) {
                                                        Some(url) => view! { <img class="thumb" src=url alt=logo_client.name.clone() /> }.into_any(),
                                                        None => view! { <div class="thumb thumb--empty">{logo_client.initials()}</div> }.into_any(),
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{c.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if c.status.is_active() {
                                                        view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Inactive"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="button button--icon"
                                                        title="View"
                                                        on:click=move |_| modal.set(Some(ClientModal::View(id)))
                                                    >
                                                        {icon("eye")}
                                                    </button>
                                                    <button
                                                        class="button button--icon"
                                                        title="Edit"
                                                        on:click=move |_| modal.set(Some(ClientModal::Edit(id)))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <ListStatus
                        placeholder=list.placeholder()
                        empty_text="No clients found."
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

            {move || match modal.get() {
                Some(ClientModal::Create) => view! { <ClientFormModal on_close=close on_saved=saved /> }.into_any(),
                Some(ClientModal::Edit(id)) => view! { <ClientFormModal id=id on_close=close on_saved=saved /> }.into_any(),
                Some(ClientModal::View(id)) => view! { <ClientDetailsModal id=id on_close=close /> }.into_any(),
                None => ().into_any(),
            }}
        </PageFrame>
    }
}
