//! Built-in event scripts.
//!
//! Each scenario fires scripted user events at fixed step indices; the loop
//! applies them before that step's tick. Step indices start at 1.

use crate::error::SimError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A user action injected by a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedEvent {
    /// The user tries to acknowledge the alarm.
    Acknowledge,
    /// The phone registers movement.
    Movement,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// ACK without movement (rejected), then move, then ACK (accepted).
    #[default]
    MoveRequired,
    /// Move early, ACK inside the window.
    AckSuccess,
    /// Never ACK; runs to `max_steps`.
    NoAck,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::MoveRequired, Scenario::AckSuccess, Scenario::NoAck];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::MoveRequired => "move_required",
            Scenario::AckSuccess => "ack_success",
            Scenario::NoAck => "no_ack",
        }
    }

    /// Events due at `step_index`, in the order they are applied.
    pub fn events_at(&self, step_index: i64) -> &'static [ScriptedEvent] {
        use ScriptedEvent::{Acknowledge, Movement};

        match (self, step_index) {
            (Scenario::MoveRequired, 3) => &[Acknowledge],
            (Scenario::MoveRequired, 4) => &[Movement],
            (Scenario::MoveRequired, 5) => &[Acknowledge],
            (Scenario::AckSuccess, 2) => &[Movement],
            (Scenario::AckSuccess, 3) => &[Acknowledge],
            _ => &[],
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| SimError::UnknownScenario(s.to_string()))
    }
}
