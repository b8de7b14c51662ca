//! Scenario tests for the debouncer and pattern encoder driven the way a
//! polling loop drives them.

use iobutton_core::debounce::Debouncer;
use iobutton_core::pattern::{pulse_at, CYCLE_MS};
use iobutton_core::traits::{Millis, MockTime, TimeSource};

/// Poll `debouncer` every `step` ms with `signal(t)` until `until`.
fn poll<F: Fn(Millis) -> bool>(
    debouncer: &mut Debouncer,
    time: &MockTime,
    step: Millis,
    until: Millis,
    signal: F,
) {
    while time.now_ms() < until {
        time.advance(step);
        debouncer.update(signal(time.now_ms()), time);
    }
}

#[test]
fn sustained_input_stabilizes_for_various_thresholds() {
    for threshold in [1, 10, 50, 100, 250] {
        for step in [1, threshold / 2 + 1, threshold] {
            let time = MockTime::new();
            let mut debouncer = Debouncer::new(threshold, &time);
            poll(&mut debouncer, &time, step, 3 * threshold + 3 * step, |_| true);
            assert_eq!(
                debouncer.stable(),
                Some(true),
                "threshold {} step {}",
                threshold,
                step
            );
        }
    }
}

#[test]
fn bouncing_then_settling_reports_settled_value() {
    let time = MockTime::new();
    let mut debouncer = Debouncer::new(30, &time);

    // Contact bounce for 40 ms, then held closed
    poll(&mut debouncer, &time, 2, 200, |t| if t < 40 { (t / 4) % 2 == 0 } else { true });

    assert_eq!(debouncer.stable(), Some(true));
    // Onset is the last bounce edge at or after 40 ms, not the detection poll
    let held = debouncer.millis_in_stable_value(&time);
    assert!((150..=160).contains(&held), "held {}", held);
}

#[test]
fn flapping_faster_than_threshold_never_stabilizes() {
    let time = MockTime::new();
    let mut debouncer = Debouncer::new(40, &time);

    poll(&mut debouncer, &time, 5, 5_000, |t| (t / 35) % 2 == 0);
    assert!(!debouncer.has_stable_value());
}

#[test]
fn restart_clears_stability_from_any_state() {
    let time = MockTime::new();
    let mut debouncer = Debouncer::new(20, &time);

    poll(&mut debouncer, &time, 5, 100, |_| true);
    assert!(debouncer.has_stable_value());
    debouncer.restart(&time);
    assert!(!debouncer.has_stable_value());

    poll(&mut debouncer, &time, 5, 110, |_| true);
    debouncer.restart(&time);
    assert!(!debouncer.has_stable_value());
}

#[test]
fn press_and_release_cycle() {
    let time = MockTime::new();
    let mut debouncer = Debouncer::new(50, &time);

    // Pressed from 100 to 400 ms
    let pressed = |t: Millis| (100..400).contains(&t);

    poll(&mut debouncer, &time, 10, 90, pressed);
    assert_eq!(debouncer.stable(), Some(false));

    poll(&mut debouncer, &time, 10, 300, pressed);
    assert_eq!(debouncer.stable(), Some(true));
    assert_eq!(debouncer.millis_in_stable_value(&time), 200);

    poll(&mut debouncer, &time, 10, 420, pressed);
    // Release not yet confirmed
    assert_eq!(debouncer.stable(), Some(true));

    poll(&mut debouncer, &time, 10, 500, pressed);
    assert_eq!(debouncer.stable(), Some(false));
    assert_eq!(debouncer.millis_in_stable_value(&time), 100);
}

#[test]
fn pattern_is_periodic_over_many_cycles() {
    let pattern = 0b1011_0000_1111_0000_1010_0101_1100_0011;
    for t in (0..10 * CYCLE_MS).step_by(3) {
        assert_eq!(pulse_at(t, pattern), pulse_at(t % CYCLE_MS, pattern));
    }
}
