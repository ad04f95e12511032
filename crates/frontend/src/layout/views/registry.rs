//! View registry: the single place mapping a view key to its screen.

use contracts::domain::common::EntityId;
use leptos::prelude::*;

use crate::dashboards::SuperAdminDashboard;
use crate::domain::a001_film_poster::ui::{
    FilmPosterDetails, FilmPosterForm, FilmPosterList, FilmPosterSequence,
};
use crate::domain::a002_employee::ui::{EmployeeCreate, EmployeeList};
use crate::domain::a003_client::ui::ClientList;
use crate::domain::a004_contact_enquiry::ui::ContactEnquiryList;
use crate::system::roles::ui::RoleList;
use crate::system::users::ui::UserList;

const POSTER_DETAIL_PREFIX: &str = "a001_film_poster_detail_";
const POSTER_EDIT_PREFIX: &str = "a001_film_poster_edit_";

/// Parsed view key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRoute {
    Dashboard,
    Posters,
    PosterNew,
    PosterSequence,
    PosterDetail(EntityId),
    PosterEdit(EntityId),
    Employees,
    EmployeeNew,
    Clients,
    ContactEnquiries,
    Users,
    Roles,
}

impl ViewRoute {
    pub fn parse(key: &str) -> Option<Self> {
        let route = match key {
            "dashboard" => Self::Dashboard,
            "a001_film_poster" => Self::Posters,
            "a001_film_poster_new" => Self::PosterNew,
            "a001_film_poster_sequence" => Self::PosterSequence,
            "a002_employee" => Self::Employees,
            "a002_employee_new" => Self::EmployeeNew,
            "a003_client" => Self::Clients,
            "a004_contact_enquiry" => Self::ContactEnquiries,
            "sys_users" => Self::Users,
            "sys_roles" => Self::Roles,
            k if k.starts_with(POSTER_DETAIL_PREFIX) => {
                Self::PosterDetail(parse_id(k, POSTER_DETAIL_PREFIX)?)
            }
            k if k.starts_with(POSTER_EDIT_PREFIX) => {
                Self::PosterEdit(parse_id(k, POSTER_EDIT_PREFIX)?)
            }
            _ => return None,
        };
        Some(route)
    }
}

fn parse_id(key: &str, prefix: &str) -> Option<EntityId> {
    key.strip_prefix(prefix)?.parse().ok()
}

/// Screen for `key`; unknown keys render a placeholder.
pub fn render_view(key: &str) -> AnyView {
    let Some(route) = ViewRoute::parse(key) else {
        log::warn!("unknown view key: {}", key);
        return view! { <div class="placeholder">"Page not found"</div> }.into_any();
    };

    match route {
        ViewRoute::Dashboard => view! { <SuperAdminDashboard /> }.into_any(),
        ViewRoute::Posters => view! { <FilmPosterList /> }.into_any(),
        ViewRoute::PosterNew => view! { <FilmPosterForm /> }.into_any(),
        ViewRoute::PosterSequence => view! { <FilmPosterSequence /> }.into_any(),
        ViewRoute::PosterDetail(id) => view! { <FilmPosterDetails id=id /> }.into_any(),
        ViewRoute::PosterEdit(id) => view! { <FilmPosterForm id=id /> }.into_any(),
        ViewRoute::Employees => view! { <EmployeeList /> }.into_any(),
        ViewRoute::EmployeeNew => view! { <EmployeeCreate /> }.into_any(),
        ViewRoute::Clients => view! { <ClientList /> }.into_any(),
        ViewRoute::ContactEnquiries => view! { <ContactEnquiryList /> }.into_any(),
        ViewRoute::Users => view! { <UserList /> }.into_any(),
        ViewRoute::Roles => view! { <RoleList /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_keys() {
        assert_eq!(ViewRoute::parse("dashboard"), Some(ViewRoute::Dashboard));
        assert_eq!(ViewRoute::parse("a001_film_poster_sequence"), Some(ViewRoute::PosterSequence));
        assert_eq!(ViewRoute::parse("sys_roles"), Some(ViewRoute::Roles));
        assert_eq!(ViewRoute::parse("nope"), None);
    }

    #[test]
    fn test_parse_keys_with_id() {
        assert_eq!(
            ViewRoute::parse("a001_film_poster_detail_42"),
            Some(ViewRoute::PosterDetail(42))
        );
        assert_eq!(
            ViewRoute::parse("a001_film_poster_edit_7"),
            Some(ViewRoute::PosterEdit(7))
        );
        assert_eq!(ViewRoute::parse("a001_film_poster_edit_"), None);
        assert_eq!(ViewRoute::parse("a001_film_poster_detail_abc"), None);
    }
}
