//! Sidebar with collapsible menu groups.

use crate::layout::global_context::use_global_context;
use crate::layout::views::view_label;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (view key, icon)
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboard",
            label: "Dashboard",
            icon: "dashboard",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "catalogue",
            label: "Catalogue",
            icon: "film",
            items: vec![
                ("a001_film_poster", "film"),
                ("a001_film_poster_sequence", "list-ordered"),
                ("a002_employee", "briefcase"),
                ("a003_client", "building"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "a004_contact_enquiry",
            label: "Contact Enquiries",
            icon: "mail",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "shield",
            items: vec![("sys_users", "users"), ("sys_roles", "shield")],
            admin_only: true,
        },
    ]
}

/// Menu entries visible to a user, admin-only groups removed for others.
/// A user whose role is not known yet (restored token) sees every group.
fn visible_groups(is_admin: Option<bool>) -> Vec<MenuGroup> {
    menu_groups()
        .into_iter()
        .filter(|g| !g.admin_only || is_admin.unwrap_or(true))
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    let is_admin = session
        .state()
        .with_untracked(|s| s.user_info.as_ref().map(|u| u.is_admin()));
    let expanded_groups = RwSignal::new(vec!["catalogue".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {visible_groups(is_admin).into_iter().map(|group| {
                let has_children = !group.items.is_empty();
                let group_id = group.id;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || !has_children && ctx.is_active(group_id)
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    expanded_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| x == group_id) {
                                            items.remove(pos);
                                        } else {
                                            items.push(group_id.to_string());
                                        }
                                    });
                                } else {
                                    ctx.open_view(group_id);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|g| g.iter().any(|x| x == group_id))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let items = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.with(|g| g.iter().any(|x| x == group_id))>
                                    <div class="app-sidebar__children">
                                        {items.get_value().into_iter().map(|(key, icon_name)| view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || ctx.is_active(key)
                                                style:padding-left="10px"
                                                on:click=move |_| ctx.open_view(key)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{view_label(key).to_string()}</span>
                                                </div>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_groups_hidden_from_users() {
        let ids = |groups: Vec<MenuGroup>| groups.iter().map(|g| g.id).collect::<Vec<_>>();
        assert!(ids(visible_groups(Some(true))).contains(&"administration"));
        assert!(!ids(visible_groups(Some(false))).contains(&"administration"));
        assert!(ids(visible_groups(None)).contains(&"administration"));
    }
}
