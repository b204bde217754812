//! Game state module - owns the ball, paddles, score and tick interval
//!
//! Advances the match one discrete tick at a time and interprets input
//! commands. Everything here is deterministic: the same command sequence
//! always produces the same match.

use std::time::Duration;

use log::{debug, info};

use crate::scene::Scene;
use crate::types::*;

/// The ball: integer position plus a diagonal unit velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    pub x: i16,
    pub y: i16,
    pub dx: i16,
    pub dy: i16,
}

impl Ball {
    /// Ball at the board center moving down-right.
    pub fn centered() -> Self {
        Self {
            x: BOARD_WIDTH / 2,
            y: BOARD_HEIGHT / 2,
            dx: 1,
            dy: 1,
        }
    }
}

/// A paddle: fixed column, movable top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paddle {
    pub x: i16,
    pub y: i16,
}

impl Paddle {
    /// Lowest legal top row.
    pub const MAX_Y: i16 = BOARD_HEIGHT - PADDLE_HEIGHT;

    /// Paddle at column `x`, vertically centered.
    pub fn new(x: i16) -> Self {
        Self {
            x,
            y: (BOARD_HEIGHT - PADDLE_HEIGHT) / 2,
        }
    }

    /// Inclusive row span test.
    pub fn covers(&self, y: i16) -> bool {
        self.y <= y && y <= self.y + PADDLE_HEIGHT - 1
    }

    fn shift(&mut self, dy: i16) {
        self.y = (self.y + dy).clamp(0, Self::MAX_Y);
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    ball: Ball,
    left_paddle: Paddle,
    right_paddle: Paddle,
    left_score: u32,
    right_score: u32,
    paused: bool,
    game_over: bool,
    winner: Option<Side>,
    /// Tick interval in seconds.
    current_delay: f64,
}

impl GameState {
    /// Create a fresh match
    pub fn new() -> Self {
        Self {
            ball: Ball::centered(),
            left_paddle: Paddle::new(LEFT_PADDLE_X),
            right_paddle: Paddle::new(RIGHT_PADDLE_X),
            left_score: 0,
            right_score: 0,
            paused: false,
            game_over: false,
            winner: None,
            current_delay: BASE_DELAY_SECS,
        }
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn left_paddle(&self) -> Paddle {
        self.left_paddle
    }

    pub fn right_paddle(&self) -> Paddle {
        self.right_paddle
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }

    pub fn left_score(&self) -> u32 {
        self.left_score
    }

    pub fn right_score(&self) -> u32 {
        self.right_score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Current tick interval in seconds.
    pub fn current_delay(&self) -> f64 {
        self.current_delay
    }

    /// Wait the driver should perform before the next iteration.
    pub fn tick_delay(&self) -> Duration {
        Duration::from_secs_f64(self.current_delay)
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Active
        }
    }

    fn accepts_play_input(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Apply one input command.
    ///
    /// Movement is ignored while paused or after the match ended. `Restart`
    /// is only honored after the match ended and replaces the whole state
    /// with a fresh one.
    pub fn handle_input(&mut self, command: Command) -> Flow {
        if let Some((side, dy)) = command.paddle_move() {
            if self.accepts_play_input() {
                match side {
                    Side::Left => self.left_paddle.shift(dy),
                    Side::Right => self.right_paddle.shift(dy),
                }
            }
            return Flow::Continue;
        }

        match command {
            Command::TogglePause => {
                if !self.game_over {
                    self.paused = !self.paused;
                    debug!("pause toggled: paused={}", self.paused);
                }
            }
            Command::Restart => {
                if self.game_over {
                    info!("restarting match");
                    *self = Self::new();
                }
            }
            Command::Quit => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) {
        if !self.accepts_play_input() {
            return;
        }

        self.ball.x += self.ball.dx;
        self.ball.y += self.ball.dy;

        // Top/bottom walls
        if self.ball.y <= 0 || self.ball.y >= BOARD_HEIGHT - 1 {
            self.ball.dy = -self.ball.dy;
            self.ball.y = self.ball.y.clamp(0, BOARD_HEIGHT - 1);
        }

        if self.ball.x == self.left_paddle.x + 1 && self.left_paddle.covers(self.ball.y) {
            self.ball.dx = -self.ball.dx;
            self.ball.x = self.left_paddle.x + 1;
            self.increase_speed();
            debug!("left paddle hit, delay={:.4}", self.current_delay);
        }

        if self.ball.x == self.right_paddle.x - 1 && self.right_paddle.covers(self.ball.y) {
            self.ball.dx = -self.ball.dx;
            self.ball.x = self.right_paddle.x - 1;
            self.increase_speed();
            debug!("right paddle hit, delay={:.4}", self.current_delay);
        }

        if self.ball.x <= 0 {
            self.score_point(Side::Right);
        } else if self.ball.x >= BOARD_WIDTH - 1 {
            self.score_point(Side::Left);
        }

        self.check_winner();
    }

    fn score_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left_score += 1,
            Side::Right => self.right_score += 1,
        }
        self.reset_ball();
        self.current_delay = BASE_DELAY_SECS;
        debug!(
            "{} scores: {} | {}",
            side.as_str(),
            self.left_score,
            self.right_score
        );
    }

    fn check_winner(&mut self) {
        let winner = if self.left_score >= WIN_SCORE {
            Side::Left
        } else if self.right_score >= WIN_SCORE {
            Side::Right
        } else {
            return;
        };

        info!(
            "game over: {} wins {} | {}",
            winner.as_str(),
            self.left_score,
            self.right_score
        );
        self.game_over = true;
        self.winner = Some(winner);
    }

    /// Put the ball back at the center.
    ///
    /// Launch direction follows the parity of the total points scored: even
    /// launches down-right, odd launches up-left.
    pub fn reset_ball(&mut self) {
        let dir = if (self.left_score + self.right_score) % 2 == 0 {
            1
        } else {
            -1
        };
        self.ball = Ball {
            x: BOARD_WIDTH / 2,
            y: BOARD_HEIGHT / 2,
            dx: dir,
            dy: dir,
        };
    }

    /// Shorten the tick interval after a paddle hit.
    pub fn increase_speed(&mut self) {
        self.current_delay = (self.current_delay * SPEEDUP_FACTOR).max(MIN_DELAY_SECS);
    }

    /// Describe the current frame.
    pub fn render_description(&self) -> Scene {
        Scene::describe(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
