pub mod create;
pub mod list;

pub use create::EmployeeCreate;
pub use list::EmployeeList;
