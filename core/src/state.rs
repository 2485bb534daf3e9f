//! Observable district state for rendering.
//!
//! # Design
//! Every refresh is handed a `RefreshTicket` carrying a generation number.
//! Only the ticket of the most recent refresh may write its outcome; a slower
//! earlier resolution that finishes late is dropped instead of overwriting
//! newer state.

use crate::fallback::FallbackOutcome;

/// Proof that a refresh was started, used to apply its outcome later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the ticket is needed to apply the refresh outcome"]
pub struct RefreshTicket {
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistrictsState {
    pub districts: Vec<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_success_source_label: Option<String>,
    generation: u64,
}

impl DistrictsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh: mark loading and forget the previous outcome.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.is_loading = true;
        self.districts.clear();
        self.error = None;
        self.last_success_source_label = None;
        RefreshTicket {
            generation: self.generation,
        }
    }

    /// Apply `outcome` if `ticket` belongs to the latest refresh.
    ///
    /// Returns `false` and leaves the state untouched for a stale ticket.
    pub fn apply(&mut self, ticket: RefreshTicket, outcome: FallbackOutcome) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match outcome {
            FallbackOutcome::Success {
                districts,
                source_label,
            } => {
                self.districts = districts;
                self.error = None;
                self.last_success_source_label = Some(source_label);
            }
            FallbackOutcome::Failure { errors } => {
                self.districts.clear();
                self.error = Some(errors.join("; "));
                self.last_success_source_label = None;
            }
        }
        self.is_loading = false;
        true
    }

    /// Whether a refresh has started and not yet been applied.
    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        ticket.generation == self.generation
    }
}
