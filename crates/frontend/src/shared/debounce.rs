//! Quiet-period gate for search inputs.
//!
//! Every keystroke takes a ticket and schedules a timer; when the timer
//! elapses only the newest ticket may fire, and only if the value differs
//! from the one fetched last.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: u64,
    last_fired: String,
}

impl Debouncer {
    /// `initial` is the value the view was loaded with; typing it again
    /// does not trigger a fetch.
    pub fn new(initial: &str) -> Self {
        Self {
            generation: 0,
            last_fired: initial.trim().to_string(),
        }
    }

    /// Register a change of the input.
    pub fn input(&mut self) -> DebounceTicket {
        self.generation += 1;
        DebounceTicket(self.generation)
    }

    /// Called when the timer of `ticket` elapsed with the current input
    /// value. Returns the value to search for, if any.
    pub fn fire(&mut self, ticket: DebounceTicket, value: &str) -> Option<String> {
        if ticket.0 != self.generation {
            return None;
        }
        let value = value.trim();
        if value == self.last_fired {
            return None;
        }
        self.last_fired = value.to_string();
        Some(self.last_fired.clone())
    }

    /// Forget pending timers and treat `value` as already fetched.
    pub fn reset(&mut self, value: &str) {
        self.generation += 1;
        self.last_fired = value.trim().to_string();
    }

    /// Treat `value` as the last fetched one without touching pending
    /// timers. Used when the fetch for the fired value failed.
    pub fn rewind(&mut self, value: &str) {
        self.last_fired = value.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_fires_once_with_final_value() {
        let mut debouncer = Debouncer::new("");
        let word = "Inception";
        let mut fetches = Vec::new();
        let mut previous: Option<(DebounceTicket, String)> = None;

        for end in 1..=word.len() {
            let typed = &word[..end];
            let ticket = debouncer.input();
            // the previous keystroke's timer elapses after this keystroke
            if let Some((old, value)) = previous.take() {
                fetches.extend(debouncer.fire(old, &value));
            }
            previous = Some((ticket, typed.to_string()));
        }
        let (last, value) = previous.unwrap();
        fetches.extend(debouncer.fire(last, &value));

        assert_eq!(fetches, vec!["Inception".to_string()]);
    }

    #[test]
    fn test_unchanged_value_does_not_fire() {
        let mut debouncer = Debouncer::new("matrix");
        let ticket = debouncer.input();
        assert_eq!(debouncer.fire(ticket, " matrix "), None);

        let ticket = debouncer.input();
        assert_eq!(debouncer.fire(ticket, "Matrix"), Some("Matrix".to_string()));
        let ticket = debouncer.input();
        assert_eq!(debouncer.fire(ticket, "Matrix"), None);
    }

    #[test]
    fn test_reset_cancels_pending_timer() {
        let mut debouncer = Debouncer::new("");
        let ticket = debouncer.input();
        debouncer.reset("");
        assert_eq!(debouncer.fire(ticket, "abc"), None);
    }

    #[test]
    fn test_rewind_allows_same_value_again() {
        let mut debouncer = Debouncer::new("");
        let ticket = debouncer.input();
        assert_eq!(debouncer.fire(ticket, "dune"), Some("dune".to_string()));

        debouncer.rewind("");
        let ticket = debouncer.input();
        assert_eq!(debouncer.fire(ticket, "dune"), Some("dune".to_string()));
    }
}
