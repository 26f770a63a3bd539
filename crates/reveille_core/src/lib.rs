//! # Reveille Core
//!
//! A fixed-step simulation of an alarm escalation rule, as found in phone
//! automation apps: the alarm gets louder every step until the user
//! acknowledges it, and an acknowledgment only counts if the phone moved
//! recently.
//!
//! ## State machine
//!
//! - `ESCALATING` (`wake_active = true`): volume ramps by `volume_step` per tick
//! - `ACKNOWLEDGED` (`wake_active = false`): terminal
//!
//! The only transition is an ACK arriving within `move_window_ms` of the last
//! movement.

pub mod config;
pub mod error;
pub mod escalation;
pub mod scenario;
pub mod simulation;
pub mod state;
pub mod transcript;

pub use config::EscalationConfig;
pub use error::SimError;
pub use escalation::{AckOutcome, TickOutcome};
pub use scenario::{Scenario, ScriptedEvent};
pub use simulation::{run_named, run_scenario, Outcome, SimulationReport};
pub use state::{AlarmState, Phase};
pub use transcript::Transcript;
