use std::time::Duration;

use contracts::domain::a004_contact_enquiry::aggregate::ContactEnquiry;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_contact_enquiry::api;
use crate::shared::api_client::use_api;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_links::PaginationLinks;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_date_opt;
use crate::shared::list_controller::ListController;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Enquiry list, refreshed in the background while it is on screen.
#[component]
pub fn ContactEnquiryList() -> impl IntoView {
    let client = use_api();
    let poll_ms = use_config().enquiry_poll_ms;

    let list = ListController::new("a004_contact_enquiry", "Failed to load enquiries.", move |query| {
        let client = client.clone();
        async move { api::fetch_page(&client, &query).await }
    });
    list.load();
    let summary = list.summary();

    let poller = set_interval_with_handle(move || list.refresh_quietly(), Duration::from_millis(poll_ms as u64));
    match poller {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("failed to start enquiry refresh: {:?}", e),
    }

    view! {
        <PageFrame page_id="a004_contact_enquiry--list" category=PAGE_CAT_LIST>
            <PageHeader title="Contact Enquiries" count=list.total()>
                <span class="text-muted">"Auto-refreshing"</span>
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
                                <TableHeaderCell min_width=160.0>"User Details"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Contact Info"</TableHeaderCell>
                                <TableHeaderCell min_width=260.0>"Message"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Date"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.rows()
                                key=|(number, enquiry)| (*number, enquiry.id)
                                children=move |(number, enquiry): (u64, ContactEnquiry)| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{number.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{enquiry.full_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="cell-stack">
                                                        <span>{enquiry.email_address.clone()}</span>
                                                        <span class="text-muted">{enquiry.phone_number.clone()}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span title=enquiry.message.clone()>{enquiry.message.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date_opt(&enquiry.created_at)}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <ListStatus
                        placeholder=list.placeholder()
                        empty_text="No enquiries found."
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
        </PageFrame>
    }
}
