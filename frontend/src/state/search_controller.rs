//! Incremental search over a remote boundary.
//!
//! The controller owns the baseline result set and a request sequence. Each
//! issued request gets a ticket carrying the sequence number at issue time;
//! a response is applied only while its ticket is still the newest, so a
//! slow earlier request can never overwrite a fresher result.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Query empty, baseline is the fallback set.
    Idle,
    /// A request for the current debounced query is in flight.
    Pending,
    /// The latest request resolved and replaced the baseline.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone)]
pub struct SearchController<R> {
    phase: SearchPhase,
    baseline: Vec<R>,
    fallback: Vec<R>,
    sequence: u64,
}

impl<R: Clone> SearchController<R> {
    /// `fallback` is the baseline shown whenever the query is empty, e.g. a
    /// pre-fetched featured set.
    pub fn new(fallback: Vec<R>) -> Self {
        Self {
            phase: SearchPhase::Idle,
            baseline: fallback.clone(),
            fallback,
            sequence: 0,
        }
    }

    /// Start a search for `query`. An empty query resets the baseline to the
    /// fallback set and issues nothing; otherwise the caller must issue
    /// exactly one request for the returned ticket.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        if query.trim().is_empty() {
            self.reset();
            return None;
        }
        self.sequence += 1;
        self.phase = SearchPhase::Pending;
        Some(SearchTicket(self.sequence))
    }

    /// Apply a resolved request. Stale tickets are discarded; the newest
    /// replaces the baseline wholesale. Failures become an empty baseline:
    /// fail-soft, no retry, no separate error state.
    pub fn apply<E>(&mut self, ticket: SearchTicket, outcome: Result<Vec<R>, E>) -> bool {
        if ticket.0 != self.sequence {
            return false;
        }
        self.baseline = outcome.unwrap_or_default();
        self.phase = SearchPhase::Settled;
        true
    }

    /// Back to the fallback baseline, dropping any in-flight request.
    pub fn reset(&mut self) {
        self.sequence += 1;
        self.baseline = self.fallback.clone();
        self.phase = SearchPhase::Idle;
    }

    pub fn baseline(&self) -> &[R] {
        &self.baseline
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SearchController<u32> {
        SearchController::new(vec![1, 2, 3])
    }

    #[test]
    fn starts_idle_on_the_fallback_baseline() {
        let controller = controller();
        assert_eq!(controller.phase(), SearchPhase::Idle);
        assert_eq!(controller.baseline(), &[1, 2, 3]);
    }

    #[test]
    fn successful_search_replaces_the_baseline() {
        let mut controller = controller();
        let ticket = controller.begin("berl").unwrap();
        assert_eq!(controller.phase(), SearchPhase::Pending);

        assert!(controller.apply::<()>(ticket, Ok(vec![9])));
        assert_eq!(controller.phase(), SearchPhase::Settled);
        assert_eq!(controller.baseline(), &[9]);
    }

    #[test]
    fn stale_response_never_overwrites_a_fresher_one() {
        let mut controller = controller();
        let slow = controller.begin("ber").unwrap();
        let fast = controller.begin("berl").unwrap();

        assert!(controller.apply::<()>(fast, Ok(vec![42])));
        // the earlier request resolves late and must be dropped
        assert!(!controller.apply::<()>(slow, Ok(vec![7])));
        assert_eq!(controller.baseline(), &[42]);
    }

    #[test]
    fn empty_query_resets_to_fallback_from_any_state() {
        let mut controller = controller();
        let ticket = controller.begin("berl").unwrap();
        controller.apply::<()>(ticket, Ok(vec![9]));

        assert!(controller.begin("").is_none());
        assert_eq!(controller.phase(), SearchPhase::Idle);
        assert_eq!(controller.baseline(), &[1, 2, 3]);
    }

    #[test]
    fn clearing_invalidates_the_inflight_request() {
        let mut controller = controller();
        let ticket = controller.begin("berl").unwrap();
        controller.reset();

        assert!(!controller.apply::<()>(ticket, Ok(vec![9])));
        assert_eq!(controller.baseline(), &[1, 2, 3]);
        assert_eq!(controller.phase(), SearchPhase::Idle);
    }

    #[test]
    fn failure_yields_an_empty_baseline() {
        let mut controller = controller();
        let ticket = controller.begin("berl").unwrap();
        assert!(controller.apply(ticket, Err("boom")));
        assert_eq!(controller.phase(), SearchPhase::Settled);
        assert!(controller.baseline().is_empty());
    }
}
