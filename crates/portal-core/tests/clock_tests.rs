use portal_core::{FrameClock, LoopState, RenderLoop};

#[test]
fn loop_starts_stopped_and_transitions_once() {
    let mut rl = RenderLoop::new();
    assert_eq!(rl.state(), LoopState::Stopped);
    assert!(!rl.is_running());

    assert!(rl.start());
    assert_eq!(rl.state(), LoopState::Running);
    // Double-start reports false so callers don't schedule a second callback.
    assert!(!rl.start());

    assert!(rl.stop());
    assert_eq!(rl.state(), LoopState::Stopped);
    assert!(!rl.stop());
}

#[test]
fn frames_only_advance_while_running() {
    let mut rl = RenderLoop::new();
    assert_eq!(rl.advance(), 0);

    rl.start();
    assert_eq!(rl.advance(), 1);
    assert_eq!(rl.advance(), 2);

    rl.stop();
    assert_eq!(rl.advance(), 2);
    assert_eq!(rl.frames(), 2);

    // Restart resumes counting rather than resetting.
    rl.start();
    assert_eq!(rl.advance(), 3);
}

#[test]
fn elapsed_time_is_monotonic_and_non_negative() {
    let clock = FrameClock::start();
    let mut last = 0.0f32;
    for _ in 0..5 {
        let t = clock.elapsed_seconds();
        assert!(t >= 0.0);
        assert!(t >= last);
        last = t;
    }
}
