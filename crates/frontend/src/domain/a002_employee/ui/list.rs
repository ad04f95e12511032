use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_employee::api;
use crate::layout::global_context::use_global_context;
use crate::shared::api_client::use_api;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_links::PaginationLinks;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn EmployeeList() -> impl IntoView {
    let ctx = use_global_context();
    let client = use_api();

    let list = ListController::new("a002_employee", "Failed to load employees.", {
        let client = client.clone();
        move |query| {
            let client = client.clone();
            async move { api::fetch_page(&client, &query).await }
        }
    });
    list.load();
    let summary = list.summary();

    let on_delete = move |id: EntityId| {
        let client = client.clone();
        list.delete("Are you sure you want to delete this employee?", move || async move {
            api::delete_employee(&client, id).await
        });
    };

    view! {
        <PageFrame page_id="a002_employee--list" category=PAGE_CAT_LIST>
            <PageHeader title="Employees" count=list.total()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.open_view("a002_employee_new")
                >
                    {icon("plus")}
                    " Add Employee"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 360px;">
                                <Input value=list.search placeholder="Search by name or designation..." />
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
                                <TableHeaderCell min_width=80.0>"Photo"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Designation"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Position"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Added"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.rows()
                                key=|(number, employee)| (*number, employee.id)
                                children=move |(number, employee): (u64, Employee)| {
                                    let id = employee.id;
                                    let on_delete = on_delete.clone();
                                    let photo_alt = employee.name.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{number.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <img class="thumb thumb--round" src=employee.photo.clone() alt=photo_alt.clone() />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{employee.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{employee.designation.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{employee.position_number.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if employee.status.is_active() {
                                                        view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Inactive"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date_opt(&employee.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Delete"
                                                    on:click=move |_| on_delete(id)
                                                >
                                                    {icon("trash")}
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
                        empty_text="No employees found."
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
