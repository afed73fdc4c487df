use crate::types::{
    Direction, GameStatus, Point, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_DIRECTION, INITIAL_SPEED,
};

/// Everything a host needs to draw one frame.
///
/// Hosts keep one snapshot around and refresh it with
/// `GameState::snapshot_into`, which reuses the segment buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board_width: i32,
    pub board_height: i32,
    /// Head first.
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub direction: Direction,
    pub score: u32,
    pub speed: u32,
    pub status: GameStatus,
    pub paused: bool,
    pub episode_id: u32,
    pub ticks: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board_width = BOARD_WIDTH;
        self.board_height = BOARD_HEIGHT;
        self.snake.clear();
        self.food = None;
        self.direction = INITIAL_DIRECTION;
        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.status = GameStatus::Running;
        self.paused = false;
        self.episode_id = 0;
        self.ticks = 0;
    }

    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }

    pub fn playable(&self) -> bool {
        !self.status.is_terminal() && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board_width: 0,
            board_height: 0,
            snake: Vec::new(),
            food: None,
            direction: INITIAL_DIRECTION,
            score: 0,
            speed: 0,
            status: GameStatus::Running,
            paused: false,
            episode_id: 0,
            ticks: 0,
        };
        s.clear();
        s
    }
}
