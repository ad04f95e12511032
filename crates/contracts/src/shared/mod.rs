pub mod active_flag;
pub mod form_fields;
pub mod lenient;
pub mod pagination;
