//! Local-first mutations reconciled with the backend afterwards.

pub mod reorder;
pub mod toggle;

pub use reorder::{PersistRequest, ReorderPhase, ReorderState, SettleOutcome};
pub use toggle::{ToggleOutcome, ToggleRequest, ToggleState};
