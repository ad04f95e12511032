pub mod list;

pub use list::ContactEnquiryList;
