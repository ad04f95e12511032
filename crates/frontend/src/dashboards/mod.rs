pub mod super_admin;

pub use super_admin::SuperAdminDashboard;
