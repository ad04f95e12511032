pub mod image_input;
pub mod list_status;
pub mod page_header;
pub mod pagination_links;
pub mod status_switch;
