//! Optimistic drag-and-drop reordering.
//!
//! The state machine owns the displayed order. A drag is applied locally at
//! once and yields the full renumbered payload to persist; the caller reports
//! the outcome back through [`ReorderState::settle`].
//!
//! ```text
//! Idle ──drag──▶ Pending ──ok──▶ Committed
//!                   │
//!                   └──err──▶ RolledBack ──refetch──▶ Idle
//! ```
//!
//! After a failure every persist still in flight owes a refetch when it
//! succeeds, even if the list was reloaded in between: the backend applied
//! that drag's ordering last.

use contracts::domain::a001_film_poster::aggregate::ReorderPayload;
use contracts::domain::common::Ordered;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderPhase {
    Idle,
    Pending,
    Committed,
    RolledBack,
}

/// Remote call produced by one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistRequest {
    pub seq: u64,
    pub payload: ReorderPayload,
}

/// What the caller has to do after a persist call resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Every persist has been accepted.
    Committed,
    /// Accepted, but later drags are still waiting for their answer.
    StillPending,
    /// Rejected: the local order can no longer be trusted, reload it.
    Refetch,
}

#[derive(Debug, Clone)]
pub struct ReorderState<T> {
    items: Vec<T>,
    phase: ReorderPhase,
    in_flight: usize,
    next_seq: u64,
    /// Set by a failure, cleared by a reload once nothing is in flight.
    refetch_owed: bool,
}

impl<T: Ordered> Default for ReorderState<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Ordered> ReorderState<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut state = Self {
            items: Vec::new(),
            phase: ReorderPhase::Idle,
            in_flight: 0,
            next_seq: 1,
            refetch_owed: false,
        };
        state.replace(items);
        state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> ReorderPhase {
        self.phase
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_persisting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn owes_refetch(&self) -> bool {
        self.refetch_owed
    }

    /// Install the canonical order fetched from the backend.
    ///
    /// Items are shown by their stored position; ties keep the order the
    /// backend sent them in. While persists are still in flight the phase
    /// is left alone.
    pub fn replace(&mut self, mut items: Vec<T>) {
        items.sort_by_key(|item| item.position());
        self.items = items;
        if self.in_flight == 0 {
            self.phase = ReorderPhase::Idle;
            self.refetch_owed = false;
        }
    }

    /// Move the item at `from` to `to` and renumber the whole list.
    ///
    /// Returns `None` for a drop on the same slot or an index outside the
    /// list; nothing is changed and nothing must be sent in that case.
    pub fn drag(&mut self, from: usize, to: usize) -> Option<PersistRequest> {
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return None;
        }

        move_item(&mut self.items, from, to);
        renumber(&mut self.items);

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;
        self.phase = ReorderPhase::Pending;

        Some(PersistRequest {
            seq,
            payload: ReorderPayload::from_ordered(&self.items),
        })
    }

    /// Record the answer to the persist call `seq`.
    pub fn settle<E>(&mut self, seq: u64, result: &Result<(), E>) -> SettleOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        log::debug!(
            "reorder persist #{} settled (ok={}), {} still in flight",
            seq,
            result.is_ok(),
            self.in_flight
        );

        match result {
            Err(_) => {
                self.phase = ReorderPhase::RolledBack;
                self.refetch_owed = true;
                SettleOutcome::Refetch
            }
            Ok(()) if self.refetch_owed => {
                self.phase = ReorderPhase::RolledBack;
                SettleOutcome::Refetch
            }
            Ok(()) if self.in_flight > 0 => SettleOutcome::StillPending,
            Ok(()) => {
                self.phase = ReorderPhase::Committed;
                SettleOutcome::Committed
            }
        }
    }
}

/// Array move: remove at `from`, insert at `to`.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

/// Assign `position = index + 1` to every item.
pub fn renumber<T: Ordered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_position(index as u32 + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_film_poster::aggregate::{PositionEntry, PosterListItem};

    fn item(id: i64, position: u32) -> PosterListItem {
        PosterListItem {
            id,
            film_name: format!("film {}", id),
            position_number: position,
        }
    }

    fn list(n: usize) -> Vec<PosterListItem> {
        (1..=n).map(|i| item(i as i64 * 10, i as u32)).collect()
    }

    fn positions(state: &ReorderState<PosterListItem>) -> Vec<(i64, u32)> {
        state.items().iter().map(|i| (i.id, i.position_number)).collect()
    }

    #[test]
    fn test_drag_first_to_last() {
        let mut state = ReorderState::new(vec![item(1, 1), item(2, 2), item(3, 3)]);
        let request = state.drag(0, 2).unwrap();

        assert_eq!(positions(&state), vec![(2, 1), (3, 2), (1, 3)]);
        assert_eq!(
            request.payload.positions,
            vec![
                PositionEntry { id: 2, position_number: 1 },
                PositionEntry { id: 3, position_number: 2 },
                PositionEntry { id: 1, position_number: 3 },
            ]
        );
        assert_eq!(state.phase(), ReorderPhase::Pending);
    }

    #[test]
    fn test_every_move_renumbers_densely() {
        for n in 2..=6 {
            for from in 0..n {
                for to in 0..n {
                    if from == to {
                        continue;
                    }
                    let mut state = ReorderState::new(list(n));
                    let moved_id = state.items()[from].id;
                    let request = state.drag(from, to).unwrap();

                    assert_eq!(state.items()[to].id, moved_id);
                    for (index, entry) in state.items().iter().enumerate() {
                        assert_eq!(entry.position_number, index as u32 + 1);
                    }
                    assert_eq!(request.payload.positions.len(), n);
                }
            }
        }
    }

    #[test]
    fn test_noop_and_out_of_range_drags() {
        let mut state = ReorderState::new(list(3));
        let before = positions(&state);

        assert!(state.drag(1, 1).is_none());
        assert!(state.drag(0, 3).is_none());
        assert!(state.drag(5, 0).is_none());

        assert_eq!(positions(&state), before);
        assert_eq!(state.phase(), ReorderPhase::Idle);
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn test_new_sorts_by_stored_position() {
        let state = ReorderState::new(vec![item(3, 3), item(1, 1), item(2, 2)]);
        assert_eq!(positions(&state), vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_success_commits() {
        let mut state = ReorderState::new(list(3));
        let request = state.drag(2, 0).unwrap();
        let outcome = state.settle::<()>(request.seq, &Ok(()));

        assert_eq!(outcome, SettleOutcome::Committed);
        assert_eq!(state.phase(), ReorderPhase::Committed);
        assert_eq!(state.items()[0].id, 30);
    }

    #[test]
    fn test_failure_requests_refetch() {
        let mut state = ReorderState::new(list(3));
        let request = state.drag(0, 1).unwrap();
        let outcome = state.settle(request.seq, &Err("boom"));

        assert_eq!(outcome, SettleOutcome::Refetch);
        assert_eq!(state.phase(), ReorderPhase::RolledBack);

        state.replace(list(3));
        assert_eq!(state.phase(), ReorderPhase::Idle);
        assert_eq!(positions(&state), vec![(10, 1), (20, 2), (30, 3)]);
    }

    #[test]
    fn test_drag_on_top_of_unconfirmed_order() {
        let mut state = ReorderState::new(list(3));
        let first = state.drag(0, 2).unwrap();
        let second = state.drag(0, 1).unwrap();

        assert_eq!(state.in_flight(), 2);
        assert_ne!(first.seq, second.seq);
        // second payload starts from the optimistic order of the first
        let ids: Vec<i64> = second.payload.positions.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![30, 20, 10]);

        assert_eq!(state.settle::<()>(first.seq, &Ok(())), SettleOutcome::StillPending);
        assert_eq!(state.settle::<()>(second.seq, &Ok(())), SettleOutcome::Committed);
    }

    #[test]
    fn test_overlapping_persists_are_not_serialized() {
        // Both payloads are complete orderings; whichever the backend applies
        // last becomes canonical. The engine only tracks that both settled.
        let mut state = ReorderState::new(list(4));
        let first = state.drag(3, 0).unwrap();
        let second = state.drag(1, 3).unwrap();

        assert_ne!(first.payload, second.payload);
        for request in [&first, &second] {
            let mut seen: Vec<u32> = request.payload.positions.iter().map(|p| p.position_number).collect();
            seen.sort_unstable();
            assert_eq!(seen, vec![1, 2, 3, 4]);
        }

        // answers may come back in either order
        state.settle::<()>(second.seq, &Ok(()));
        state.settle::<()>(first.seq, &Ok(()));
        assert!(!state.is_persisting());
        assert_eq!(state.phase(), ReorderPhase::Committed);
    }

    #[test]
    fn test_late_success_after_failure_still_refetches() {
        let mut state = ReorderState::new(list(3));
        let first = state.drag(0, 1).unwrap();
        let second = state.drag(1, 2).unwrap();

        assert_eq!(state.settle(first.seq, &Err(())), SettleOutcome::Refetch);
        assert_eq!(state.settle::<()>(second.seq, &Ok(())), SettleOutcome::Refetch);
    }

    #[test]
    fn test_late_success_after_reload_still_refetches() {
        let mut state = ReorderState::new(list(3));
        let first = state.drag(0, 1).unwrap();
        let second = state.drag(1, 2).unwrap();

        assert_eq!(state.settle(first.seq, &Err(())), SettleOutcome::Refetch);
        // reload lands while the second persist is still out
        state.replace(list(3));
        assert!(state.owes_refetch());
        assert_eq!(state.phase(), ReorderPhase::RolledBack);

        assert_eq!(state.settle::<()>(second.seq, &Ok(())), SettleOutcome::Refetch);
        assert_eq!(state.phase(), ReorderPhase::RolledBack);

        state.replace(list(3));
        assert!(!state.owes_refetch());
        assert_eq!(state.phase(), ReorderPhase::Idle);

        // a fresh drag commits normally again
        let third = state.drag(2, 0).unwrap();
        assert_eq!(state.settle::<()>(third.seq, &Ok(())), SettleOutcome::Committed);
    }
}
