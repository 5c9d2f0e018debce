//! Debounced update scheduling
//!
//! A pure state machine over explicit instants. The owner feeds it triggers
//! and polls it from its event loop; a due poll tells the owner to run a
//! tokenization pass.
//!
//! ```text
//! Idle ──trigger(throttled)──▶ Pending ──poll(due)──▶ Running ──▶ Idle
//!  ▲          │                   │ trigger(throttled): re-arm
//!  └─trigger(immediate)───────────┘
//! any ──dispose──▶ Disposed
//! ```

use std::time::{Duration, Instant};

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    /// A debounce timer is armed
    Pending { deadline: Instant },
    /// A pass is in progress
    Running,
    /// Terminal; every further call is ignored
    Disposed,
}

/// What the owner must do after a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Run a pass now
    RunNow,
    /// A timer is armed until the given instant
    Armed(Instant),
    /// Scheduler is disposed
    Ignored,
}

/// Coalesces bursts of throttled triggers into one pass
#[derive(Debug, Clone)]
pub struct UpdateScheduler {
    delay: Duration,
    state: SchedulerState,
}

impl UpdateScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: SchedulerState::Idle,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.state == SchedulerState::Disposed
    }

    /// Deadline of the armed timer, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            SchedulerState::Pending { deadline } => Some(deadline),
            _ => None,
        }
    }

    /// Request a pass. Any armed timer is cancelled first.
    pub fn trigger(&mut self, throttled: bool, now: Instant) -> Trigger {
        if self.is_disposed() {
            return Trigger::Ignored;
        }
        if throttled {
            let deadline = now + self.delay;
            self.state = SchedulerState::Pending { deadline };
            tracing::debug!("Update armed for {:?}", self.delay);
            Trigger::Armed(deadline)
        } else {
            self.state = SchedulerState::Running;
            Trigger::RunNow
        }
    }

    /// Fire the armed timer if it is due. Returns true when the owner must
    /// run a pass now.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            SchedulerState::Pending { deadline } if now >= deadline => {
                self.state = SchedulerState::Running;
                true
            }
            _ => false,
        }
    }

    /// Mark the pass started by [`trigger`](Self::trigger) or
    /// [`poll`](Self::poll) as finished
    pub fn finish(&mut self) {
        if self.state == SchedulerState::Running {
            self.state = SchedulerState::Idle;
        }
    }

    /// Cancel any armed timer and stop honouring triggers
    pub fn dispose(&mut self) {
        self.state = SchedulerState::Disposed;
    }
}
