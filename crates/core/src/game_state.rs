//! Game state module - the snake engine
//!
//! This module ties together the board, the snake and food placement. It owns
//! score, speed, direction and status, and is the only place those change.
//! Time never enters here: the host decides when to call [`GameState::tick`].

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::{place_food, Board, GameSnapshot, Snake};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    snake: Snake,
    food: Option<Point>,
    /// Direction the next tick applies.
    direction: Direction,
    /// Direction the last tick applied.
    heading: Direction,
    status: GameStatus,
    score: u32,
    speed: u32,
    paused: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Ticks that moved the snake in this episode.
    ticks: u32,
    seed: u64,
    rng: StdRng,
}

impl GameState {
    /// Create a ready-to-play game on the default board
    pub fn new(seed: u64) -> Self {
        Self::with_board(Board::default(), seed)
    }

    /// Create a ready-to-play game on `board`
    pub fn with_board(board: Board, seed: u64) -> Self {
        let start = board.center();
        let mut state = Self {
            board,
            snake: Snake::new(start, INITIAL_SNAKE_LEN),
            food: None,
            direction: INITIAL_DIRECTION,
            heading: INITIAL_DIRECTION,
            status: GameStatus::Running,
            score: 0,
            speed: INITIAL_SPEED,
            paused: false,
            episode_id: 0,
            ticks: 0,
            seed,
            rng: StdRng::seed_from_u64(seed),
        };
        state.restore_initial();
        state
    }

    /// Start a new episode on the same board.
    ///
    /// The RNG keeps running, so consecutive episodes get different food.
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.restore_initial();
    }

    fn restore_initial(&mut self) {
        self.speed = INITIAL_SPEED;
        self.score = 0;
        self.direction = INITIAL_DIRECTION;
        self.heading = INITIAL_DIRECTION;
        self.snake = Snake::new(self.board.center(), INITIAL_SNAKE_LEN);
        self.food = place_food(&self.board, &self.snake, &mut self.rng);
        self.paused = false;
        self.ticks = 0;
        self.status = if self.food.is_some() {
            GameStatus::Running
        } else {
            GameStatus::Won
        };

        info!(
            episode = self.episode_id,
            width = self.board.width(),
            height = self.board.height(),
            "game reset"
        );
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Time between ticks at the current speed.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(NANOS_PER_SECOND / u64::from(self.speed.max(1)))
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, p: Point) {
        self.food = Some(p);
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board_width = self.board.width();
        out.board_height = self.board.height();
        out.snake.clear();
        out.snake.extend(self.snake.segments());
        out.food = self.food;
        out.direction = self.direction;
        out.score = self.score;
        out.speed = self.speed;
        out.status = self.status;
        out.paused = self.paused;
        out.episode_id = self.episode_id;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Steer the snake for the next tick.
    ///
    /// Ignored once the game has ended or while paused. Also ignored for the
    /// reverse of the queued direction and, stricter than checking that alone,
    /// for the reverse of `heading` (the direction the last tick moved in). So
    /// Up then Right within one interval is refused while heading Left.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() || self.paused {
            return false;
        }
        if direction.is_opposite(self.direction) || direction.is_opposite(self.heading) {
            return false;
        }
        let changed = direction != self.direction;
        self.direction = direction;
        changed
    }

    /// Pause or resume a running game
    pub fn toggle_pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Advance the game by one step.
    ///
    /// Returns whether the snake moved. A tick that crashes the snake still
    /// moves it, so the head is left outside the board or on its body.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() || self.paused {
            return false;
        }

        let head = self.snake.advance(self.direction);
        self.heading = self.direction;
        self.ticks = self.ticks.wrapping_add(1);

        if !self.board.contains(head) {
            info!(score = self.score, x = head.x, y = head.y, "hit the wall");
            self.status = GameStatus::GameOver;
            return true;
        }

        if self.snake.collides_self() {
            info!(score = self.score, x = head.x, y = head.y, "hit own body");
            self.status = GameStatus::GameOver;
            return true;
        }

        if self.food == Some(head) {
            self.eat();
        }

        true
    }

    fn eat(&mut self) {
        self.snake.grow();
        self.score += 1;
        debug!(score = self.score, len = self.snake.len(), "food eaten");

        if self.score % SPEED_UP_EVERY == 0 {
            self.speed += 1;
            debug!(speed = self.speed, "speed up");
        }

        self.food = place_food(&self.board, &self.snake, &mut self.rng);
        if self.food.is_none() {
            info!(score = self.score, "board full");
            self.status = GameStatus::Won;
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => self.set_direction(direction),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                if !self.status.is_terminal() {
                    return false;
                }
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().copied().map(Point::from).collect()
    }

    /// Put food somewhere the current test path never reaches.
    fn park_food(state: &mut GameState) {
        state.set_food(Point::new(0, 0));
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.status, GameStatus::Running);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, INITIAL_SPEED);
        assert_eq!(state.direction, Direction::Left);
        assert_eq!(state.episode_id, 0);
        assert_eq!(state.ticks, 0);
        assert!(state.food.is_some());
    }

    #[test]
    fn test_reset_layout_on_default_board() {
        let state = GameState::new(12345);

        assert_eq!(state.board.width(), 30);
        assert_eq!(state.board.height(), 20);
        assert_eq!(state.snake.len(), 3);
        assert!(state.snake.segments().all(|p| p == Point::new(15, 10)));
        assert!(!state.snake.occupies(state.food.unwrap()));
    }

    #[test]
    fn test_first_tick_moves_head_left() {
        let mut state = GameState::new(12345);
        park_food(&mut state);

        assert!(state.tick());

        assert_eq!(
            state.snake.segments().collect::<Vec<_>>(),
            pts(&[(14, 10), (15, 10), (15, 10)])
        );
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.heading, Direction::Left);
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_eating_grows_scores_and_relocates_food() {
        let mut state = GameState::new(12345);
        state.set_food(Point::new(14, 10));

        state.tick();

        assert_eq!(state.snake.head(), Point::new(14, 10));
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 1);
        assert_eq!(state.speed, INITIAL_SPEED);
        let food = state.food.unwrap();
        assert!(state.board.contains(food));
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn test_wall_hit_ends_game() {
        let mut state = GameState::new(12345);
        park_food(&mut state);
        state.set_snake(Snake::new(Point::new(0, 5), 3));

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.snake.head(), Point::new(-1, 5));
    }

    #[test]
    fn test_ticking_after_game_over_changes_nothing() {
        let mut state = GameState::new(12345);
        park_food(&mut state);
        state.set_snake(Snake::new(Point::new(0, 5), 3));
        state.tick();

        let before = state.snapshot();
        assert!(!state.tick());
        assert!(!state.set_direction(Direction::Up));
        assert!(!state.toggle_pause());
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut state = GameState::new(12345);
        park_food(&mut state);
        // Heading up, body curls to the left of the head.
        state.set_snake(
            Snake::from_segments(&pts(&[(5, 5), (5, 6), (4, 6), (4, 5), (4, 4)])).unwrap(),
        );
        state.heading = Direction::Up;
        state.direction = Direction::Up;

        assert!(state.set_direction(Direction::Left));
        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn test_reverse_direction_is_ignored() {
        let mut state = GameState::new(12345);

        assert!(!state.set_direction(Direction::Right));
        assert_eq!(state.direction, Direction::Left);

        assert!(state.set_direction(Direction::Up));
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn test_two_quick_turns_cannot_reverse_heading() {
        let mut state = GameState::new(12345);
        park_food(&mut state);
        state.tick();

        // Still heading left: Up is fine, but Right after it would fold back.
        assert!(state.set_direction(Direction::Up));
        assert!(!state.set_direction(Direction::Right));
        assert_eq!(state.direction, Direction::Up);

        state.tick();
        assert_eq!(state.heading, Direction::Up);
        assert!(state.set_direction(Direction::Right));
    }

    #[test]
    fn test_speed_increments_every_ten_points() {
        let mut state = GameState::new(12345);
        state.set_snake(Snake::new(Point::new(25, 10), 1));

        // Walk left along row 10, feeding the snake every step.
        for expected in 1..=20u32 {
            let next = state.snake.head().step(Direction::Left);
            state.set_food(next);
            state.tick();
            assert_eq!(state.status, GameStatus::Running);
            assert_eq!(state.score, expected);
        }

        assert_eq!(state.speed, INITIAL_SPEED + 2);
        assert_eq!(state.snake.len(), 21);
    }

    #[test]
    fn test_speed_after_ten_points() {
        let mut state = GameState::new(99);
        state.set_snake(Snake::new(Point::new(20, 3), 1));

        for _ in 0..9 {
            let next = state.snake.head().step(Direction::Left);
            state.set_food(next);
            state.tick();
        }
        assert_eq!(state.speed, INITIAL_SPEED);

        let next = state.snake.head().step(Direction::Left);
        state.set_food(next);
        state.tick();
        assert_eq!(state.speed, INITIAL_SPEED + 1);
    }

    #[test]
    fn test_filling_the_board_wins() {
        // 3x1 board, snake just grew so its tail is doubled up and stays put.
        // Eating the last free cell leaves nowhere for the next food.
        let mut state = GameState::with_board(Board::new(3, 1), 5);
        state.set_snake(Snake::from_segments(&pts(&[(1, 0), (2, 0), (2, 0)])).unwrap());
        state.set_food(Point::new(0, 0));

        state.tick();

        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.food, None);
        assert_eq!(state.score, 1);
        assert!(!state.tick());
    }

    #[test]
    fn test_pause_freezes_ticks_and_turns() {
        let mut state = GameState::new(12345);

        assert!(state.apply_action(GameAction::Pause));
        assert!(state.paused);

        let before = state.snapshot();
        assert!(!state.tick());
        assert!(!state.set_direction(Direction::Up));
        assert_eq!(state.snapshot(), before);

        assert!(state.apply_action(GameAction::Pause));
        assert!(!state.paused);
        assert!(state.tick());
    }

    #[test]
    fn test_restart_only_after_game_ends() {
        let mut state = GameState::new(12345);
        park_food(&mut state);
        state.tick();

        assert!(!state.apply_action(GameAction::Restart));
        assert_eq!(state.ticks, 1);
        assert_eq!(state.episode_id, 0);

        state.status = GameStatus::GameOver;
        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.episode_id, 1);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), INITIAL_SNAKE_LEN);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::new(12345);
        state.set_food(Point::new(14, 10));
        state.tick();
        state.set_direction(Direction::Up);
        state.toggle_pause();

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.speed, INITIAL_SPEED);
        assert_eq!(state.direction, Direction::Left);
        assert_eq!(state.heading, Direction::Left);
        assert!(!state.paused);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn test_tick_interval_tracks_speed() {
        let mut state = GameState::new(1);
        assert_eq!(state.tick_interval(), Duration::from_nanos(333_333_333));

        state.speed = 4;
        assert_eq!(state.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(8);
        park_food(&mut state);
        state.tick();

        let snap = state.snapshot();
        assert_eq!(snap.board_width, 30);
        assert_eq!(snap.board_height, 20);
        assert_eq!(snap.snake, state.snake.segments().collect::<Vec<_>>());
        assert_eq!(snap.food, Some(Point::new(0, 0)));
        assert_eq!(snap.ticks, 1);
        assert!(snap.playable());
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let state = GameState::new(8);
        let mut snap = GameSnapshot::default();
        snap.snake.reserve(64);
        let cap = snap.snake.capacity();

        state.snapshot_into(&mut snap);

        assert_eq!(snap.snake.len(), 3);
        assert_eq!(snap.snake.capacity(), cap);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameState::new(77);
        let mut b = GameState::new(77);

        for i in 0..200 {
            let d = Direction::ALL[i % 4];
            a.set_direction(d);
            b.set_direction(d);
            a.tick();
            b.tick();
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }
}
