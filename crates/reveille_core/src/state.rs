//! Alarm State
//!
//! The mutable half of a run. Everything here is plain data; the rules that
//! move it forward live in [`crate::escalation`].
//!
//! Invariants held across a run:
//! - `alarm_volume` stays within `[0, volume_cap]`
//! - `now_ms` never decreases
//! - once `wake_active` is false it stays false

use crate::config::EscalationConfig;
use serde::Serialize;
use std::fmt;

/// Where the alarm sits in its two-state lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Alarm is sounding and the volume ramps every tick.
    Escalating,
    /// A valid ACK was received. Terminal.
    Acknowledged,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Escalating => write!(f, "ESCALATING"),
            Phase::Acknowledged => write!(f, "ACKNOWLEDGED"),
        }
    }
}

/// Mutable state of one escalation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlarmState {
    /// True while escalation continues.
    pub wake_active: bool,

    /// Current alarm volume, always within `[0, volume_cap]`.
    pub alarm_volume: i32,

    /// Simulated time of the most recent movement.
    pub last_move_time_ms: u64,

    /// Simulated clock; only ticks advance it.
    pub now_ms: u64,
}

impl AlarmState {
    /// Fresh state for a new run. The start volume is clamped into range.
    pub fn new(config: &EscalationConfig) -> Self {
        Self {
            wake_active: true,
            alarm_volume: config.clamp_volume(config.start_volume),
            last_move_time_ms: 0,
            now_ms: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.wake_active {
            Phase::Escalating
        } else {
            Phase::Acknowledged
        }
    }

    /// Milliseconds since the last movement.
    pub fn since_last_move_ms(&self) -> u64 {
        self.now_ms.saturating_sub(self.last_move_time_ms)
    }

    /// `wakeActive` as the host automation app prints it (1/0).
    pub fn wake_flag(&self) -> u8 {
        u8::from(self.wake_active)
    }
}
