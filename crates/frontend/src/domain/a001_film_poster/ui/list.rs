use contracts::domain::a001_film_poster::aggregate::FilmPoster;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_film_poster::api;
use crate::layout::global_context::use_global_context;
use crate::shared::api_client::use_api;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_links::PaginationLinks;
use crate::shared::components::status_switch::StatusSwitch;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_loader::FILTER_ALL;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

pub const YEAR_OPTIONS: [&str; 4] = [FILTER_ALL, "2025", "2024", "2023"];

#[component]
pub fn FilmPosterList() -> impl IntoView {
    let ctx = use_global_context();
    let client = use_api();

    let list = ListController::new("a001_film_poster", "Failed to load film posters.", {
        let client = client.clone();
        move |query| {
            let client = client.clone();
            async move { api::fetch_page(&client, &query).await }
        }
    });
    list.load();

    let year = RwSignal::new(FILTER_ALL.to_string());
    Effect::new(move |prev: Option<()>| {
        let value = year.get();
        if prev.is_some() {
            list.set_filter(Some(&value));
        }
    });
    let summary = list.summary();

    let on_toggle = {
        let client = client.clone();
        move |id: EntityId| {
            let client = client.clone();
            list.toggle(id, move |request| async move {
                api::update_status(&client, &request.record).await
            });
        }
    };

    let on_delete = {
        let client = client.clone();
        move |id: EntityId| {
            let client = client.clone();
            list.delete(
                "Are you sure you want to delete this poster? This action cannot be undone.",
                move || async move { api::delete_poster(&client, id).await },
            );
        }
    };

    view! {
        <PageFrame page_id="a001_film_poster--list" category=PAGE_CAT_LIST>
            <PageHeader title="Film Posters" count=list.total()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.open_view("a001_film_poster_sequence")
                >
                    {icon("list-ordered")}
                    " Sequence"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.open_view("a001_film_poster_new")
                >
                    {icon("plus")}
                    " Add Poster"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 360px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Search:"</Label>
                                    <Input value=list.search placeholder="Search films..." />
                                </Flex>
                            </div>
                            <div style="width: 160px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Year:"</Label>
                                    <Select value=year>
                                        {YEAR_OPTIONS
                                            .iter()
                                            .map(|y| {
                                                let label = if *y == FILTER_ALL { "All Years" } else { *y };
                                                view! { <option value=*y>{label}</option> }
                                            })
                                            .collect_view()}
                                    </Select>
                                </Flex>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| list.clear_search()
                            >
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
                                <TableHeaderCell min_width=80.0>"Poster"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Film Details"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Genre"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Rating"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.rows()
                                key=|(number, poster)| (*number, poster.id)
                                children=move |(number, poster): (u64, FilmPoster)| {
                                    let id = poster.id;
                                    let on_toggle = on_toggle.clone();
                                    let on_delete = on_delete.clone();
                                    let rating = if poster.imdb_rating.is_empty() {
                                        "N/A".to_string()
                                    } else {
                                        poster.imdb_rating.clone()
                                    };
                                    let main_image = poster.main_image.clone();
                                    let image_alt = poster.film_name.clone();
                                    let film_name = poster.film_name.clone();
                                    let subtitle = format!(" {} · {}", poster.year, poster.language);
                                    let genre = poster.genre.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{number.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if main_image.is_empty() {
                                                        view! { <div class="thumb thumb--empty">{icon("image")}</div> }.into_any()
                                                    } else {
                                                        view! {
                                                            <img class="thumb" src=main_image.clone() alt=image_alt.clone() />
                                                        }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{film_name}</span>
                                                    <span class="text-muted">
                                                        {subtitle}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{genre}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{rating}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusSwitch
                                                    active=Signal::derive(move || list.is_active(id))
                                                    pending=Signal::derive(move || list.is_toggle_pending(id))
                                                    on_toggle=Callback::new(move |_| on_toggle(id))
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="button button--icon"
                                                        title="View"
                                                        on:click=move |_| ctx.open_view(&format!("a001_film_poster_detail_{}", id))
                                                    >
                                                        {icon("eye")}
                                                    </button>
                                                    <button
                                                        class="button button--icon"
                                                        title="Edit"
                                                        on:click=move |_| ctx.open_view(&format!("a001_film_poster_edit_{}", id))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Delete"
                                                        on:click=move |_| on_delete(id)
                                                    >
                                                        {icon("trash")}
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
                        empty_text="No posters found."
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
