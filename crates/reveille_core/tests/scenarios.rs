//! End-to-end transcripts for the built-in scenarios at default settings.

use reveille_core::transcript::RULE;
use reveille_core::{run_scenario, EscalationConfig, Outcome, Phase, Scenario};

const HEADER_CONFIG: &str =
    "CONFIG: move_window_ms=60000 step_ms=60000 max_steps=12 start_volume=40 volume_step=10 cap=100";
const ACTIONS: &str = "  actions: set volumes; vibrate; (optional torch/audio)";

#[test]
fn test_move_required_full_transcript() {
    let report = run_scenario(Scenario::MoveRequired, &EscalationConfig::default());

    let expected = vec![
        "SCENARIO=move_required",
        HEADER_CONFIG,
        RULE,
        "TICK 01: wakeActive=1 alarmVol=40",
        ACTIONS,
        "  volume: 40 -> 50",
        "TICK 02: wakeActive=1 alarmVol=50",
        ACTIONS,
        "  volume: 50 -> 60",
        "ACK: REJECTED (no recent movement; delta_ms=120000)",
        "TICK 03: wakeActive=1 alarmVol=60",
        ACTIONS,
        "  volume: 60 -> 70",
        "MOVE: lastMoveTimeMs updated to 180000",
        "TICK 04: wakeActive=1 alarmVol=70",
        ACTIONS,
        "  volume: 70 -> 80",
        "ACK: ACCEPTED (delta_ms=60000) -> wakeActive=0",
        "STATE: wakeActive=0 before tick -> escalation ends",
        RULE,
        "RESULT: Acknowledged (wakeActive=0)",
    ];
    assert_eq!(report.transcript.lines(), expected.as_slice());

    assert_eq!(report.outcome, Outcome::Acknowledged);
    assert_eq!(report.ticks, 4);
    assert_eq!(report.final_state.alarm_volume, 80);
    assert_eq!(report.final_state.now_ms, 240_000);
}

#[test]
fn test_ack_success_full_transcript() {
    let report = run_scenario(Scenario::AckSuccess, &EscalationConfig::default());

    let expected = vec![
        "SCENARIO=ack_success",
        HEADER_CONFIG,
        RULE,
        "TICK 01: wakeActive=1 alarmVol=40",
        ACTIONS,
        "  volume: 40 -> 50",
        "MOVE: lastMoveTimeMs updated to 60000",
        "TICK 02: wakeActive=1 alarmVol=50",
        ACTIONS,
        "  volume: 50 -> 60",
        "ACK: ACCEPTED (delta_ms=60000) -> wakeActive=0",
        "STATE: wakeActive=0 before tick -> escalation ends",
        RULE,
        "RESULT: Acknowledged (wakeActive=0)",
    ];
    assert_eq!(report.transcript.lines(), expected.as_slice());
    assert_eq!(report.phase(), Phase::Acknowledged);
}

#[test]
fn test_no_ack_runs_to_max_steps_and_caps_volume() {
    let report = run_scenario(Scenario::NoAck, &EscalationConfig::default());

    assert_eq!(report.outcome, Outcome::MaxStepsReached);
    assert_eq!(report.phase(), Phase::Escalating);
    assert_eq!(report.ticks, 12);
    assert_eq!(
        report.volume_history,
        vec![40, 50, 60, 70, 80, 90, 100, 100, 100, 100, 100, 100]
    );
    assert_eq!(report.final_state.alarm_volume, 100);
    assert_eq!(report.final_state.now_ms, 12 * 60_000);

    // Volume changes are only logged while below the cap
    let volume_lines = report
        .transcript
        .lines()
        .iter()
        .filter(|l| l.starts_with("  volume:"))
        .count();
    assert_eq!(volume_lines, 6);
    assert_eq!(
        report.transcript.lines().last().map(String::as_str),
        Some("RESULT: Max steps reached (still wakeActive=1)")
    );
}

#[test]
fn test_move_required_rejects_when_window_is_tight() {
    // Window shorter than one step: the ACK after movement arrives too late
    let cfg = EscalationConfig {
        move_window_ms: 59_999,
        ..EscalationConfig::default()
    };
    let report = run_scenario(Scenario::MoveRequired, &cfg);

    assert_eq!(report.outcome, Outcome::MaxStepsReached);
    let rejections = report
        .transcript
        .lines()
        .iter()
        .filter(|l| l.starts_with("ACK: REJECTED"))
        .count();
    assert_eq!(rejections, 2);
}

#[test]
fn test_negative_window_rejects_every_ack() {
    let cfg = EscalationConfig {
        move_window_ms: -1,
        ..EscalationConfig::default()
    };
    let report = run_scenario(Scenario::AckSuccess, &cfg);

    assert_eq!(report.outcome, Outcome::MaxStepsReached);
    assert_eq!(report.ticks, 12);
    assert!(report
        .transcript
        .lines()
        .contains(&"ACK: REJECTED (no recent movement; delta_ms=60000)".to_string()));
}

#[test]
fn test_ack_success_cut_short_by_max_steps() {
    // Loop ends before the scripted ACK is reached
    let cfg = EscalationConfig {
        max_steps: 2,
        ..EscalationConfig::default()
    };
    let report = run_scenario(Scenario::AckSuccess, &cfg);
    assert_eq!(report.outcome, Outcome::MaxStepsReached);
    assert_eq!(report.ticks, 2);
    assert!(report.transcript.lines().iter().all(|l| !l.starts_with("ACK:")));
}

#[test]
fn test_fast_step_settings() {
    let cfg = EscalationConfig {
        step_ms: 1_000,
        move_window_ms: 1_000,
        start_volume: 0,
        volume_step: 25,
        ..EscalationConfig::default()
    };
    let report = run_scenario(Scenario::AckSuccess, &cfg);
    assert_eq!(report.outcome, Outcome::Acknowledged);
    assert_eq!(report.volume_history, vec![0, 25]);
    assert!(report
        .transcript
        .lines()
        .contains(&"ACK: ACCEPTED (delta_ms=1000) -> wakeActive=0".to_string()));
}
