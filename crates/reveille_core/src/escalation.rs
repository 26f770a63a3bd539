//! Escalation rules: the transitions applied to [`AlarmState`].
//!
//! - ACK is gated on recent movement: accepted iff
//!   `now_ms - last_move_time_ms <= move_window_ms`
//! - movement stamps the current simulated time
//! - each tick advances the clock by `step_ms` and, while still escalating,
//!   raises the volume by `volume_step` (clamped to the cap)

use crate::config::EscalationConfig;
use crate::state::AlarmState;
use crate::transcript::Transcript;

/// Result of an acknowledgment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckOutcome {
    Accepted { delta_ms: u64 },
    Rejected { delta_ms: u64 },
}

impl AckOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AckOutcome::Accepted { .. })
    }
}

/// What a single tick did to the volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Volume was raised (or held at the cap).
    Escalated { from: i32, to: i32 },
    /// Escalation was already acknowledged; the clock moved but nothing else.
    Stopped,
}

impl AlarmState {
    /// Attempt to acknowledge the alarm. Requires movement inside the window.
    ///
    /// The window is signed: a negative window rejects every ACK.
    pub fn acknowledge(&mut self, config: &EscalationConfig, log: &mut Transcript) -> AckOutcome {
        let delta_ms = self.since_last_move_ms();
        let within_window =
            i64::try_from(delta_ms).is_ok_and(|delta| delta <= config.move_window_ms);
        if !within_window {
            tracing::debug!(delta_ms, window_ms = config.move_window_ms, "ack rejected");
            log.push(format!("ACK: REJECTED (no recent movement; delta_ms={delta_ms})"));
            return AckOutcome::Rejected { delta_ms };
        }

        self.wake_active = false;
        tracing::info!(delta_ms, now_ms = self.now_ms, "ack accepted, escalation acknowledged");
        log.push(format!("ACK: ACCEPTED (delta_ms={delta_ms}) -> wakeActive=0"));
        AckOutcome::Accepted { delta_ms }
    }

    /// Record a movement at the current simulated time.
    pub fn record_movement(&mut self, log: &mut Transcript) {
        self.last_move_time_ms = self.now_ms;
        tracing::debug!(now_ms = self.now_ms, "movement recorded");
        log.push(format!("MOVE: lastMoveTimeMs updated to {}", self.last_move_time_ms));
    }

    /// One escalation tick at `step_index` (1-based).
    pub fn tick(
        &mut self,
        config: &EscalationConfig,
        log: &mut Transcript,
        step_index: i64,
    ) -> TickOutcome {
        log.push(format!(
            "TICK {:02}: wakeActive={} alarmVol={}",
            step_index,
            self.wake_flag(),
            self.alarm_volume
        ));
        log.push("  actions: set volumes; vibrate; (optional torch/audio)");

        self.now_ms = self.now_ms.saturating_add(config.step_ms);

        if !self.wake_active {
            log.push("  loop: wakeActive=0 -> stopping escalation");
            return TickOutcome::Stopped;
        }

        let from = self.alarm_volume;
        let to = config.clamp_volume(from.saturating_add(config.volume_step));
        if to != from {
            log.push(format!("  volume: {from} -> {to}"));
        }
        self.alarm_volume = to;

        tracing::debug!(step_index, now_ms = self.now_ms, from, to, "tick");
        TickOutcome::Escalated { from, to }
    }
}
