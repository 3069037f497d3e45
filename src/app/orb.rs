//! Activity orb
//!
//! Panels publish request lifecycle events on an [`ActivityBus`] owned by
//! the page; the [`Orb`] folds them into a display state. Processing lasts
//! while any request is in flight; the outcome of the last settled request
//! is held for a fixed interval and then decays to idle.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrbState {
    #[default]
    Idle,
    Processing,
    Success,
    Error,
}

impl OrbState {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Idle => "Ready to analyze",
            Self::Processing => "Processing...",
            Self::Success => "Analysis complete!",
            Self::Error => "Something went wrong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEvent {
    Started,
    Succeeded,
    Failed,
    /// A superseded response arrived and was dropped.
    Discarded,
}

#[derive(Debug, Default)]
pub struct ActivityBus {
    queue: VecDeque<ActivityEvent>,
}

impl ActivityBus {
    pub fn publish(&mut self, event: ActivityEvent) {
        self.queue.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ActivityEvent> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[derive(Debug)]
pub struct Orb {
    state: OrbState,
    in_flight: usize,
    last_outcome: Option<OrbState>,
    hold_until: Option<Instant>,
    hold: Duration,
}

impl Orb {
    pub fn new(hold: Duration) -> Self {
        Self {
            state: OrbState::Idle,
            in_flight: 0,
            last_outcome: None,
            hold_until: None,
            hold,
        }
    }

    pub fn state(&self) -> OrbState {
        self.state
    }

    pub fn apply(&mut self, event: ActivityEvent, now: Instant) {
        match event {
            ActivityEvent::Started => {
                self.in_flight += 1;
                self.last_outcome = None;
                self.hold_until = None;
                self.state = OrbState::Processing;
            }
            ActivityEvent::Succeeded => self.settle(Some(OrbState::Success), now),
            ActivityEvent::Failed => self.settle(Some(OrbState::Error), now),
            ActivityEvent::Discarded => self.settle(None, now),
        }
    }

    fn settle(&mut self, outcome: Option<OrbState>, now: Instant) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if outcome.is_some() {
            self.last_outcome = outcome;
        }
        if self.in_flight > 0 {
            return;
        }

        match self.last_outcome {
            Some(state) => {
                self.state = state;
                self.hold_until = Some(now + self.hold);
            }
            None => {
                self.state = OrbState::Idle;
                self.hold_until = None;
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        let Some(until) = self.hold_until else { return };
        if now < until {
            return;
        }
        self.state = OrbState::Idle;
        self.hold_until = None;
        self.last_outcome = None;
    }
}
