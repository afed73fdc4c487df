//! Runtime configuration for the terminal binary.
//!
//! Values come from the environment first, then command-line arguments
//! override them.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_EDGE, MIN_BOARD_EDGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    /// Where tracing output goes; `None` disables logging.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read `SNAKE_*` variables. Anything missing or malformed keeps its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        let edge = |key: &str| {
            lookup(key)
                .and_then(|s| s.trim().parse::<i32>().ok())
                .filter(|n| (MIN_BOARD_EDGE..=MAX_BOARD_EDGE).contains(n))
        };
        if let Some(w) = edge("SNAKE_BOARD_WIDTH") {
            cfg.width = w;
        }
        if let Some(h) = edge("SNAKE_BOARD_HEIGHT") {
            cfg.height = h;
        }
        if let Some(seed) = lookup("SNAKE_SEED").and_then(|s| s.trim().parse().ok()) {
            cfg.seed = seed;
        }
        cfg.log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        cfg
    }

    /// Apply `--width`, `--height`, `--seed` and `--log` on top of `self`.
    ///
    /// `args` excludes the program name.
    pub fn parse_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            i += 1;
            let value = || {
                args.get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))
            };
            match flag {
                "--width" => self.width = parse_edge(flag, value()?)?,
                "--height" => self.height = parse_edge(flag, value()?)?,
                "--seed" => {
                    let v = value()?;
                    self.seed = v
                        .parse()
                        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))?;
                }
                "--log" => self.log_path = Some(value()?.clone()),
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }

    pub fn board(&self) -> Board {
        Board::new(self.width, self.height)
    }
}

fn parse_edge(flag: &str, v: &str) -> Result<i32> {
    let n: i32 = v
        .parse()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))?;
    if !(MIN_BOARD_EDGE..=MAX_BOARD_EDGE).contains(&n) {
        return Err(anyhow!(
            "{} must be between {} and {}, got {}",
            flag,
            MIN_BOARD_EDGE,
            MAX_BOARD_EDGE,
            n
        ));
    }
    Ok(n)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
