//! The fixed-step escalation loop.
//!
//! For each step index `1..=max_steps`:
//! 1. apply the scenario's scripted events for that step
//! 2. stop if the alarm has been acknowledged
//! 3. run one tick, and stop if the tick found the alarm acknowledged

use crate::config::EscalationConfig;
use crate::error::SimError;
use crate::escalation::TickOutcome;
use crate::scenario::{Scenario, ScriptedEvent};
use crate::state::{AlarmState, Phase};
use crate::transcript::Transcript;
use serde::Serialize;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Acknowledged,
    MaxStepsReached,
}

/// Everything a run produced: final state, per-tick volumes and the transcript.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub scenario: Scenario,
    pub config: EscalationConfig,
    pub final_state: AlarmState,
    pub outcome: Outcome,
    /// Ticks actually executed.
    pub ticks: u64,
    /// Volume at the start of each executed tick.
    pub volume_history: Vec<i32>,
    pub transcript: Transcript,
}

impl SimulationReport {
    pub fn phase(&self) -> Phase {
        self.final_state.phase()
    }
}

/// Parse `name` and run it. Fails before anything is logged if the name is unknown.
pub fn run_named(name: &str, config: &EscalationConfig) -> Result<SimulationReport, SimError> {
    let scenario: Scenario = name.parse()?;
    Ok(run_scenario(scenario, config))
}

/// Run one scenario from a fresh state.
pub fn run_scenario(scenario: Scenario, config: &EscalationConfig) -> SimulationReport {
    let mut state = AlarmState::new(config);
    let mut log = Transcript::new();
    let mut ticks = 0u64;
    let mut volume_history = Vec::new();

    tracing::info!(%scenario, config = %config.describe(), "starting escalation run");

    log.push(format!("SCENARIO={scenario}"));
    log.push(format!("CONFIG: {}", config.describe()));
    log.rule();

    // Empty when max_steps <= 0: the transcript is framed but holds no steps
    for step_index in 1..=config.max_steps {
        for event in scenario.events_at(step_index) {
            match event {
                ScriptedEvent::Acknowledge => {
                    state.acknowledge(config, &mut log);
                }
                ScriptedEvent::Movement => state.record_movement(&mut log),
            }
        }

        if !state.wake_active {
            log.push("STATE: wakeActive=0 before tick -> escalation ends");
            break;
        }

        volume_history.push(state.alarm_volume);
        let outcome = state.tick(config, &mut log, step_index);
        ticks += 1;

        if outcome == TickOutcome::Stopped || !state.wake_active {
            break;
        }
    }

    log.rule();
    let outcome = match state.phase() {
        Phase::Escalating => {
            log.push("RESULT: Max steps reached (still wakeActive=1)");
            Outcome::MaxStepsReached
        }
        Phase::Acknowledged => {
            log.push("RESULT: Acknowledged (wakeActive=0)");
            Outcome::Acknowledged
        }
    };

    tracing::info!(
        %scenario,
        ?outcome,
        ticks,
        final_volume = state.alarm_volume,
        now_ms = state.now_ms,
        "escalation run finished"
    );

    SimulationReport {
        scenario,
        config: config.clone(),
        final_state: state,
        outcome,
        ticks,
        volume_history,
        transcript: log,
    }
}
