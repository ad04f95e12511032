pub mod a001_film_poster;
pub mod a002_employee;
pub mod a003_client;
pub mod a004_contact_enquiry;
