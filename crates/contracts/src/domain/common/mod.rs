//! Traits shared by the catalogue records.

/// Backend-assigned record identifier.
pub type EntityId = i64;

/// A record that occupies a 1-based slot in a manually ordered collection.
pub trait Ordered {
    fn id(&self) -> EntityId;
    fn position(&self) -> u32;
    fn set_position(&mut self, position: u32);
}

/// A record with an active/inactive switch.
pub trait Toggleable {
    fn id(&self) -> EntityId;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}
