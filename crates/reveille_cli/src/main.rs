use clap::Parser;
use reveille_core::{run_named, EscalationConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Replay a canned alarm escalation scenario and print its transcript.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which event pattern to simulate (move_required | ack_success | no_ack)
    #[arg(long, default_value = "move_required")]
    scenario: String,

    /// TOML file with escalation parameters; flags below take precedence
    #[arg(short, long, env = "REVEILLE_CONFIG")]
    config: Option<PathBuf>,

    /// Volume at the first tick, clamped into [0, volume-cap]
    #[arg(long, allow_negative_numbers = true)]
    start_volume: Option<i32>,

    /// Loop iterations to run; zero or negative runs none
    #[arg(long, allow_negative_numbers = true)]
    max_steps: Option<i64>,

    /// Simulated milliseconds per escalation tick (must be non-negative)
    #[arg(long, allow_negative_numbers = true)]
    step_ms: Option<u64>,

    /// Longest gap after movement for an ACK to be accepted; negative rejects every ACK
    #[arg(long, allow_negative_numbers = true)]
    move_window_ms: Option<i64>,

    /// Volume added per tick while escalating
    #[arg(long, allow_negative_numbers = true)]
    volume_step: Option<i32>,

    /// Highest volume the ramp can reach
    #[arg(long, allow_negative_numbers = true)]
    volume_cap: Option<i32>,

    /// Print the full report as JSON instead of the plain transcript
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Defaults < config file < REVEILLE_* env vars < explicit flags.
    fn resolve_config(&self) -> EscalationConfig {
        let mut cfg = match &self.config {
            Some(path) => EscalationConfig::load_or_default(path),
            None => {
                let mut cfg = EscalationConfig::default();
                cfg.apply_env_overrides();
                cfg
            }
        };

        if let Some(v) = self.start_volume {
            cfg.start_volume = v;
        }
        if let Some(v) = self.max_steps {
            cfg.max_steps = v;
        }
        if let Some(v) = self.step_ms {
            cfg.step_ms = v;
        }
        if let Some(v) = self.move_window_ms {
            cfg.move_window_ms = v;
        }
        if let Some(v) = self.volume_step {
            cfg.volume_step = v;
        }
        if let Some(v) = self.volume_cap {
            cfg.volume_cap = v;
        }
        cfg
    }
}

fn main() -> anyhow::Result<()> {
    // stdout carries the transcript; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.resolve_config();
    info!("Resolved config: {}", config.describe());

    let report = run_named(&args.scenario, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.transcript.render());
    }

    Ok(())
}
