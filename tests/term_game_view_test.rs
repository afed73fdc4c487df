use tui_snake::core::{Board, GameState};
use tui_snake::term::{GameView, Viewport};
use tui_snake::types::{GameAction, GameStatus, Point};

// Default board: 30x20 cells at 2x1 columns, plus border => 62x22,
// plus one header row above it.
const VP: Viewport = Viewport {
    width: 62,
    height: 23,
};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, VP);

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(61, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(61, 22).unwrap().ch, '┘');
}

#[test]
fn term_view_shows_score_in_header() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 17;
    let fb = GameView::default().render(&snap, VP);

    let text = fb.to_text();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("SCORE 17"));
}

#[test]
fn term_view_draws_head_two_columns_wide() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, VP);

    // Head at (15, 10); inside the border origin is (1, 2).
    let (x, y) = (1 + 15 * 2, 2 + 10);
    assert_eq!(fb.get(x, y).unwrap().ch, '█');
    assert_eq!(fb.get(x + 1, y).unwrap().ch, '█');
}

#[test]
fn term_view_draws_food() {
    let mut snap = GameState::new(1).snapshot();
    snap.food = Some(Point::new(0, 0));
    let fb = GameView::default().render(&snap, VP);
    assert_eq!(fb.get(1, 2).unwrap().ch, '●');
    assert_eq!(fb.get(2, 2).unwrap().ch, '●');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let snap = GameState::new(1).snapshot();

    let wide = GameView::default().render(&snap, Viewport::new(100, 23)).to_text();
    assert!(wide.contains("SPEED"));
    assert!(wide.contains("LENGTH"));

    let narrow = GameView::default().render(&snap, VP).to_text();
    assert!(!narrow.contains("SPEED"));
}

#[test]
fn term_view_overlays_game_over_and_survives_out_of_bounds_head() {
    let mut game = GameState::new(1);
    while game.status() == GameStatus::Running {
        game.tick();
    }
    let snap = game.snapshot();
    assert!(snap.head().unwrap().x < 0);

    let text = GameView::default().render(&snap, VP).to_text();
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("PRESS R TO RESTART"));
}

#[test]
fn term_view_overlays_pause_and_win() {
    let mut game = GameState::new(1);
    game.apply_action(GameAction::Pause);
    let mut snap = game.snapshot();
    let view = GameView::default();

    assert!(view.render(&snap, VP).to_text().contains("PAUSED"));

    snap.paused = false;
    snap.status = GameStatus::Won;
    let text = view.render(&snap, VP).to_text();
    assert!(text.contains("YOU WIN!"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn term_view_tolerates_tiny_viewport() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(10, 5));
    assert_eq!((fb.width(), fb.height()), (10, 5));
}

#[test]
fn term_view_clips_boards_wider_than_the_viewport() {
    let game = GameState::with_board(Board::new(40_000, 4), 1);
    let view = GameView::default();
    let fb = view.render(&game.snapshot(), Viewport::new(80, 24));
    assert_eq!((fb.width(), fb.height()), (80, 24));

    // Past what a terminal column can address at all.
    let mut snap = game.snapshot();
    snap.board_width = 100_000;
    snap.snake = vec![Point::new(70_000, 1), Point::new(1, 1)];
    snap.food = Some(Point::new(99_999, 3));
    let fb = view.render(&snap, Viewport::new(80, 24));
    assert!(fb.to_text().contains('▓'));
}
