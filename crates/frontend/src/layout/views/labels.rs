/// Readable title of a view key. Fallback: the key itself.
pub fn view_label(key: &str) -> &str {
    match key {
        "dashboard" => "Dashboard",
        "a001_film_poster" => "Film Posters",
        "a001_film_poster_new" => "Add Poster",
        "a001_film_poster_sequence" => "Poster Sequence",
        "a002_employee" => "Employees",
        "a002_employee_new" => "Add Employee",
        "a003_client" => "Clients",
        "a004_contact_enquiry" => "Contact Enquiries",
        "sys_users" => "Users",
        "sys_roles" => "Roles",
        k if k.starts_with("a001_film_poster_detail_") => "Poster Details",
        k if k.starts_with("a001_film_poster_edit_") => "Edit Poster",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_label() {
        assert_eq!(view_label("a001_film_poster"), "Film Posters");
        assert_eq!(view_label("a001_film_poster_edit_12"), "Edit Poster");
        assert_eq!(view_label("unknown_view"), "unknown_view");
    }
}
