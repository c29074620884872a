//! Lifecycle of search submissions.
//!
//! Each attempt moves `Idle -> Building -> Sending` and ends in `Succeeded` or
//! `Failed` before control returns to `Idle`. Attempts are not serialized: several
//! may be in flight at once and the one that finishes last decides the result.

use crate::{
    search_error::RequestFailed,
    search_query::{ProductSearchForm, ProductSearchRequest},
    search_result::{SearchResponse, SearchResultState},
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Building,
    Sending,
    Succeeded,
    Failed,
}

/// Handle for one in-flight attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(pub u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionTracker {
    phase: SubmitPhase,
    next_ticket: u64,
    in_flight: u64,
    last_outcome: Option<SubmitPhase>,
    last_finished: Option<SubmissionTicket>,
}

impl SubmissionTracker {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn in_flight(&self) -> u64 {
        self.in_flight
    }

    /// Terminal phase of the most recently finished attempt.
    pub fn last_outcome(&self) -> Option<SubmitPhase> {
        self.last_outcome
    }

    /// Attempt whose outcome was applied last.
    pub fn last_finished(&self) -> Option<SubmissionTicket> {
        self.last_finished
    }

    /// Builds the request from the current form and marks the attempt as sending.
    pub fn begin(&mut self, form: &ProductSearchForm) -> (SubmissionTicket, ProductSearchRequest) {
        self.phase = SubmitPhase::Building;
        let request = form.to_request();
        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight += 1;
        self.phase = SubmitPhase::Sending;
        (ticket, request)
    }

    /// Applies an attempt's outcome to `results`. Failures leave `results` untouched
    /// and are returned so the caller can log them.
    pub fn finish(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<SearchResponse, RequestFailed>,
        results: &mut SearchResultState,
    ) -> Result<(), RequestFailed> {
        let applied = results.apply(outcome);
        let terminal = if applied.is_ok() { SubmitPhase::Succeeded } else { SubmitPhase::Failed };
        self.last_outcome = Some(terminal);
        self.last_finished = Some(ticket);
        self.in_flight = self.in_flight.saturating_sub(1);
        self.phase = if self.in_flight == 0 { SubmitPhase::Idle } else { SubmitPhase::Sending };
        applied
    }
}
