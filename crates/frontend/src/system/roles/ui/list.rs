use contracts::domain::common::EntityId;
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::create::RoleCreateModal;
use crate::shared::api_client::use_api;
use crate::shared::components::list_status::{ListPlaceholder, ListStatus};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::modal::confirm;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::shared::toast::use_toast;
use crate::system::roles::api;

/// Roles matching `query`, in the order the backend sent them.
pub fn filter_roles(roles: &[Role], query: &str) -> Vec<Role> {
    roles.iter().filter(|r| r.matches(query)).cloned().collect()
}

/// Role list; the endpoint is not paginated, so filtering happens here.
#[component]
pub fn RoleList() -> impl IntoView {
    let client = use_api();
    let toast = use_toast();

    let roles = RwSignal::new(Vec::<Role>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);

    let load = {
        let client = client.clone();
        move || {
            loading.set(true);
            let client = client.clone();
            spawn_local(async move {
                match api::fetch_roles(&client).await {
                    Ok(list) => {
                        log::debug!("roles: {} loaded", list.len());
                        let _ = roles.try_set(list);
                        let _ = error.try_set(None);
                    }
                    Err(e) => {
                        log::error!("roles: load failed: {}", e);
                        let message = e.user_message("Failed to load roles.");
                        if !e.is_unauthorized() {
                            toast.error(message.clone());
                        }
                        let _ = error.try_set(Some(message));
                    }
                }
                let _ = loading.try_set(false);
            });
        }
    };
    load();

    let on_delete = move |id: EntityId| {
        if !confirm("Are you sure you want to delete this role?") {
            return;
        }
        let client = client.clone();
        let pending = toast.loading("Deleting role...");
        spawn_local(async move {
            match api::delete_role(&client, id).await {
                Ok(ack) => {
                    toast.resolve(pending, Ok(ack.message_or("Role deleted successfully")));
                    let _ = roles.try_update(|list| list.retain(|r| r.id != id));
                }
                Err(e) => {
                    log::warn!("roles: delete of {} failed: {}", id, e);
                    toast.resolve(pending, Err(e.user_message("Failed to delete role.")));
                }
            }
        });
    };

    let visible = Memo::new(move |_| roles.with(|list| search.with(|q| filter_roles(list, q))));
    let placeholder = Signal::derive(move || {
        ListPlaceholder::resolve(loading.get(), error.get().as_deref(), visible.with(|v| v.len()))
    });

    view! {
        <PageFrame page_id="sys_roles--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Roles" count=Signal::derive(move || Some(roles.with(|r| r.len() as u64)))>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| show_create.set(true)
                >
                    {icon("plus")}
                    " Add Role"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 360px;">
                                <Input value=search placeholder="Filter roles..." />
                            </div>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=50.0>"#"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Role Name"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Created"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each={move || visible.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(index, role)| (*index, role.id)
                                children=move |(index, role): (usize, Role)| {
                                    let id = role.id;
                                    let on_delete = on_delete.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{(index + 1).to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{role.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{role.description.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if role.status.is_active() {
                                                        view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Inactive"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date_opt(&role.created_at)}</TableCellLayout>
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
                        placeholder=placeholder
                        empty_text="No roles found."
                        on_retry=Callback::new({
                            let load = load.clone();
                            move |_| load()
                        })
                    />
                </div>
            </div>

            <Show when=move || show_create.get()>
                <RoleCreateModal
                    on_close=Callback::new(move |_| show_create.set(false))
                    on_created=Callback::new({
                        let load = load.clone();
                        move |_| {
                            show_create.set(false);
                            load();
                        }
                    })
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::active_flag::ActiveFlag;

    fn role(id: i64, name: &str, description: &str) -> Role {
        Role {
            id,
            name: name.into(),
            description: description.into(),
            status: ActiveFlag::ACTIVE,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_filter_keeps_backend_order() {
        let roles = vec![role(3, "Editor", "Edits posters"), role(1, "Viewer", "Read only"), role(2, "Poster admin", "")];
        let ids: Vec<i64> = filter_roles(&roles, "POSTER").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(filter_roles(&roles, "  ").len(), 3);
    }
}
