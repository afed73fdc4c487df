use tui_snake::core::GameState;
use tui_snake::term::{interval_nanos, TickPacer};

#[test]
fn pacer_interval_matches_engine() {
    let game = GameState::new(1);
    assert_eq!(
        u128::from(interval_nanos(game.speed())),
        game.tick_interval().as_nanos()
    );
}

#[test]
fn pacer_drives_about_speed_ticks_per_second() {
    let mut game = GameState::new(1);
    let mut pacer = TickPacer::new();

    // Simulated one second in 1ms steps.
    let mut ticks = 0;
    for ms in 0..1_000u64 {
        if pacer.should_tick(ms * 1_000_000, game.speed()) {
            game.tick();
            ticks += 1;
        }
    }
    assert_eq!(ticks, 3);
}

#[test]
fn pacer_restart_ticks_on_next_call() {
    let mut pacer = TickPacer::new();
    assert!(pacer.should_tick(0, 3));
    assert!(!pacer.should_tick(10, 3));
    pacer.restart();
    assert!(pacer.should_tick(11, 3));
}
