//! Debounced value propagation.
//!
//! [`Debouncer`] is the timer-free core: every submission invalidates all
//! outstanding tickets, so only the timer started by the last keystroke in a
//! run can commit. [`use_debounced`] wires it to real timers.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    held: T,
    generation: u64,
}

impl<T: Clone> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self { held: initial, generation: 0 }
    }

    /// Replace the held value and invalidate every outstanding ticket.
    pub fn submit(&mut self, value: T) -> DebounceTicket {
        self.held = value;
        self.generation += 1;
        DebounceTicket(self.generation)
    }

    /// The held value, if no newer submission arrived since `ticket` was
    /// issued. Stale tickets yield nothing.
    pub fn commit(&self, ticket: DebounceTicket) -> Option<T> {
        (ticket.0 == self.generation).then(|| self.held.clone())
    }
}

/// Output signal that tracks `source` but only commits a new value once the
/// source has been stable for `delay_ms`. Pending tasks of an unmounted
/// component are dropped by the runtime, so nothing fires after disposal.
pub fn use_debounced<T: Clone + PartialEq + 'static>(
    source: ReadSignal<T>,
    delay_ms: u32,
) -> ReadSignal<T> {
    let mut debouncer = use_signal(|| Debouncer::new(source.peek().clone()));
    let mut output = use_signal(|| source.peek().clone());

    use_effect(move || {
        let ticket = debouncer.write().submit(source.read().clone());
        spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            let committed = debouncer.peek().commit(ticket);
            if let Some(value) = committed {
                if *output.peek() != value {
                    output.set(value);
                }
            }
        });
    });

    output.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_submission_of_a_run_commits() {
        let mut debouncer = Debouncer::new(String::new());
        let first = debouncer.submit("ber".to_string());
        let second = debouncer.submit("berl".to_string());

        // the first keystroke's timer fires after the second submission
        assert_eq!(debouncer.commit(first), None);
        assert_eq!(debouncer.commit(second), Some("berl".to_string()));
    }

    #[test]
    fn a_ticket_stays_valid_until_the_next_submission() {
        let mut debouncer = Debouncer::new(0u32);
        let ticket = debouncer.submit(7);
        assert_eq!(debouncer.commit(ticket), Some(7));
        // committing is idempotent until a new value arrives
        assert_eq!(debouncer.commit(ticket), Some(7));

        debouncer.submit(8);
        assert_eq!(debouncer.commit(ticket), None);
    }

    #[test]
    fn separate_runs_each_commit_their_last_value() {
        let mut debouncer = Debouncer::new(String::new());
        let run_one = debouncer.submit("ber".to_string());
        assert_eq!(debouncer.commit(run_one), Some("ber".to_string()));

        let run_two = debouncer.submit("berlin".to_string());
        assert_eq!(debouncer.commit(run_two), Some("berlin".to_string()));
    }
}
