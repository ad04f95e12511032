//! Optimistic active/inactive switch.
//!
//! `begin` flips the flag in the displayed list and hands back the record to
//! send; `settle` either keeps the new value or restores the previous one.
//! One toggle per id may be outstanding; further activations are dropped.

use std::collections::HashMap;

use contracts::domain::common::{EntityId, Toggleable};

/// Remote update produced by one accepted activation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleRequest<T> {
    pub id: EntityId,
    pub active: bool,
    /// Full record with the new value applied.
    pub record: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Applied { active: bool },
    Reverted { active: bool },
}

#[derive(Debug, Clone, Default)]
pub struct ToggleState {
    /// id -> value before the toggle
    pending: HashMap<EntityId, bool>,
}

impl ToggleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self, id: EntityId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Flip `id` in `items`. `None` when the id is unknown or already in
    /// flight; no request may be sent then.
    pub fn begin<T>(&mut self, items: &mut [T], id: EntityId) -> Option<ToggleRequest<T>>
    where
        T: Toggleable + Clone,
    {
        if self.is_pending(id) {
            log::debug!("toggle for {} ignored, previous one still in flight", id);
            return None;
        }
        let item = items.iter_mut().find(|item| item.id() == id)?;
        let previous = item.is_active();
        let active = !previous;
        item.set_active(active);
        self.pending.insert(id, previous);

        Some(ToggleRequest {
            id,
            active,
            record: item.clone(),
        })
    }

    /// Reconcile `items` with the answer for `id`.
    ///
    /// The settled value is written to the matching item even when `items`
    /// was reloaded meanwhile and holds the value from before the request.
    /// The item may also have disappeared; the pending entry is released
    /// either way.
    pub fn settle<T: Toggleable>(
        &mut self,
        items: &mut [T],
        id: EntityId,
        succeeded: bool,
    ) -> Option<ToggleOutcome> {
        let previous = self.pending.remove(&id)?;
        let active = if succeeded { !previous } else { previous };
        if let Some(item) = items.iter_mut().find(|item| item.id() == id) {
            item.set_active(active);
        }
        if succeeded {
            Some(ToggleOutcome::Applied { active })
        } else {
            Some(ToggleOutcome::Reverted { active })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: EntityId,
        active: bool,
    }

    impl Toggleable for Row {
        fn id(&self) -> EntityId {
            self.id
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    fn rows() -> Vec<Row> {
        vec![Row { id: 1, active: true }, Row { id: 2, active: false }]
    }

    #[test]
    fn test_begin_flips_immediately() {
        let mut items = rows();
        let mut state = ToggleState::new();
        let request = state.begin(&mut items, 1).unwrap();

        assert!(!items[0].active);
        assert!(!request.active);
        assert_eq!(request.record, Row { id: 1, active: false });
        assert!(state.is_pending(1));
    }

    #[test]
    fn test_round_trip_two_requests() {
        let mut items = rows();
        let mut state = ToggleState::new();
        let mut requests = 0;

        for _ in 0..2 {
            if state.begin(&mut items, 2).is_some() {
                requests += 1;
            }
            state.settle(&mut items, 2, true);
        }

        assert_eq!(requests, 2);
        assert!(!items[1].active);
        assert_eq!(state.pending_count(), 0);
    }

    #[test]
    fn test_failure_restores_previous_value() {
        let mut items = rows();
        let mut state = ToggleState::new();
        state.begin(&mut items, 1).unwrap();

        let outcome = state.settle(&mut items, 1, false);
        assert_eq!(outcome, Some(ToggleOutcome::Reverted { active: true }));
        assert!(items[0].active);
        assert!(!state.is_pending(1));
    }

    #[test]
    fn test_in_flight_guard_drops_second_activation() {
        let mut items = rows();
        let mut state = ToggleState::new();

        assert!(state.begin(&mut items, 1).is_some());
        assert!(state.begin(&mut items, 1).is_none());
        assert!(!items[0].active);

        // other ids are independent
        assert!(state.begin(&mut items, 2).is_some());

        assert_eq!(
            state.settle(&mut items, 1, true),
            Some(ToggleOutcome::Applied { active: false })
        );
        assert!(state.begin(&mut items, 1).is_some());
    }

    #[test]
    fn test_settle_after_reload() {
        let mut items = rows();
        let mut state = ToggleState::new();
        state.begin(&mut items, 1).unwrap();

        let mut reloaded = vec![Row { id: 2, active: false }];
        assert_eq!(
            state.settle(&mut reloaded, 1, false),
            Some(ToggleOutcome::Reverted { active: true })
        );
        assert_eq!(state.settle(&mut reloaded, 1, false), None);
    }

    #[test]
    fn test_success_applies_to_reloaded_row() {
        let mut items = rows();
        let mut state = ToggleState::new();
        state.begin(&mut items, 1).unwrap();

        // reload answered before the toggle, still carrying the old value
        let mut reloaded = vec![Row { id: 1, active: true }, Row { id: 2, active: false }];
        assert_eq!(
            state.settle(&mut reloaded, 1, true),
            Some(ToggleOutcome::Applied { active: false })
        );
        assert!(!reloaded[0].active);
        assert!(!reloaded[1].active);
    }

    #[test]
    fn test_unknown_id() {
        let mut items = rows();
        let mut state = ToggleState::new();
        assert!(state.begin(&mut items, 99).is_none());
        assert_eq!(state.pending_count(), 0);
    }
}
