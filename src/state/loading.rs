// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! One-shot loading gate.
//!
//! The dashboard starts in its loading state and leaves it exactly once,
//! after a fixed delay. Cancelling the gate before it fires means it never
//! fires.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Pending { deadline: Instant },
    Fired,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct LoadingGate {
    state: GateState,
}

impl LoadingGate {
    /// Arm the gate at `now`.
    pub fn start(now: Instant, delay: Duration) -> Self {
        Self {
            state: GateState::Pending {
                deadline: now + delay,
            },
        }
    }

    /// True until the gate fires. A cancelled gate stays loading.
    pub fn is_loading(&self) -> bool {
        !matches!(self.state, GateState::Fired)
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        matches!(self.state, GateState::Cancelled)
    }

    /// Fire if the deadline has passed. Returns true only on the call that fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            GateState::Pending { deadline } if now >= deadline => {
                self.state = GateState::Fired;
                log::info!("Loading finished");
                true
            }
            _ => false,
        }
    }

    /// Time left before the gate fires, if still pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            GateState::Pending { deadline } => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Disarm a pending gate.
    pub fn cancel(&mut self) {
        if let GateState::Pending { .. } = self.state {
            log::debug!("Loading gate cancelled");
            self.state = GateState::Cancelled;
        }
    }
}
