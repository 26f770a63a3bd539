use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Escalation config
// ============================================================================

/// Fixed parameters of one escalation run. Read-only once the run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationConfig {
    /// Longest gap since the last movement for an ACK to be accepted.
    /// Negative values are accepted and reject every ACK.
    pub move_window_ms: i64,
    /// Simulated time that passes per escalation tick. Unsigned so the clock
    /// never runs backwards.
    pub step_ms: u64,
    /// Upper bound on loop iterations. Zero or negative runs no steps.
    pub max_steps: i64,
    pub start_volume: i32,
    pub volume_step: i32,
    pub volume_cap: i32,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            move_window_ms: 60_000,
            step_ms: 60_000,
            max_steps: 12,
            start_volume: 40,
            volume_step: 10,
            volume_cap: 100,
        }
    }
}

impl EscalationConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: EscalationConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({:#}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply `REVEILLE_*` environment overrides on top of file-based config.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides(&mut self) {
        override_from_env("REVEILLE_MOVE_WINDOW_MS", &mut self.move_window_ms);
        override_from_env("REVEILLE_STEP_MS", &mut self.step_ms);
        override_from_env("REVEILLE_MAX_STEPS", &mut self.max_steps);
        override_from_env("REVEILLE_START_VOLUME", &mut self.start_volume);
        override_from_env("REVEILLE_VOLUME_STEP", &mut self.volume_step);
        override_from_env("REVEILLE_VOLUME_CAP", &mut self.volume_cap);
    }

    /// Clamp a volume into `[0, volume_cap]`. A negative cap pins everything to 0.
    pub fn clamp_volume(&self, volume: i32) -> i32 {
        volume.min(self.volume_cap).max(0)
    }

    /// One-line summary used as the transcript header.
    pub fn describe(&self) -> String {
        format!(
            "move_window_ms={} step_ms={} max_steps={} start_volume={} volume_step={} cap={}",
            self.move_window_ms,
            self.step_ms,
            self.max_steps,
            self.start_volume,
            self.volume_step,
            self.volume_cap
        )
    }
}

fn override_from_env<T: std::str::FromStr>(key: &str, slot: &mut T) {
    if let Ok(v) = std::env::var(key) {
        match v.trim().parse() {
            Ok(n) => *slot = n,
            Err(_) => tracing::warn!("Ignoring unparsable {}={:?}", key, v),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
