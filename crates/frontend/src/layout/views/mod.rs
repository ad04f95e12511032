//! Screens reachable from the sidebar.
//!
//! - `registry` - maps a view key to its screen
//! - `labels` - human titles of view keys

pub mod labels;
pub mod registry;

pub use labels::view_label;
pub use registry::{render_view, ViewRoute};
