use thiserror::Error;

/// Errors surfaced by the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Scenario name is not one of the built-in scripts
    #[error("Unknown scenario: {0} (expected one of: move_required, ack_success, no_ack)")]
    UnknownScenario(String),
}
