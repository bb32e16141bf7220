use super::*;

#[test]
fn timer_delay_converts_millis() {
    assert_eq!(timer_delay_ms(Duration::ZERO), 0);
    assert_eq!(timer_delay_ms(Duration::from_millis(700)), 700);
    assert_eq!(timer_delay_ms(Duration::from_secs(30 * 60)), 1_800_000);
}

#[test]
fn timer_delay_clamps_to_set_timeout_limit() {
    assert_eq!(timer_delay_ms(Duration::from_secs(40 * 24 * 3600)), MAX_TIMER_DELAY_MS);
    assert_eq!(timer_delay_ms(Duration::MAX), MAX_TIMER_DELAY_MS);
}

#[test]
fn handlers_default_to_none() {
    let handlers = IdleHandlers::default();
    assert!(handlers.on_idle.is_none());
    assert!(handlers.on_active.is_none());
    assert!(handlers.on_warning.is_none());
}

// =============================================================
// Arming after callbacks
// =============================================================

fn started(timeout_ms: u64) -> (IdleMachine, TimerRequest) {
    let mut machine = IdleMachine::new(Duration::from_millis(timeout_ms), None);
    let timer = machine.start().timer.unwrap();
    (machine, timer)
}

#[test]
fn fresh_timer_is_armed() {
    let (machine, timer) = started(100);
    assert!(timer_is_current(&machine, &timer));
}

#[test]
fn reset_from_callback_supersedes_step_timer() {
    let (mut machine, timer) = started(100);
    let reset = machine.activity().timer.unwrap();

    assert!(!timer_is_current(&machine, &timer));
    assert!(timer_is_current(&machine, &reset));
}

#[test]
fn teardown_from_callback_cancels_step_timer() {
    let (mut machine, timer) = started(100);
    machine.stop();
    assert!(!timer_is_current(&machine, &timer));
}

#[test]
fn reconfigure_cancels_timer_armed_under_old_config() {
    let (mut machine, timer) = started(100);
    machine.reconfigure(&IdleConfig::default().with_timeout(Duration::from_millis(50)), false);
    let fresh = machine.start().timer.unwrap();

    assert!(!timer_is_current(&machine, &timer));
    assert!(timer_is_current(&machine, &fresh));
}
