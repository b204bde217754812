//! Scene: a pure description of one frame.
//!
//! The engine never touches the terminal. It produces a short list of draw
//! operations in board coordinates which a terminal surface turns into
//! glyphs. Operations are applied in order; later ones overwrite earlier ones.

use std::fmt::Write as _;

use arrayvec::{ArrayString, ArrayVec};

use crate::game_state::GameState;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PADDLE_HEIGHT, SCENE_HEIGHT, SCENE_WIDTH};

/// Upper bound on draw operations in one frame.
pub const MAX_OPS: usize = 16;

/// Capacity (bytes) of formatted text in a draw operation.
pub const TEXT_CAP: usize = 48;

pub const BORDER_GLYPH: char = '=';
pub const CENTER_LINE_GLYPH: char = '|';
pub const PADDLE_GLYPH: char = '█';
pub const BALL_GLYPH: char = '●';

pub const CONTROLS_TEXT: &str = "Controls: W/S (Left) | ↑/↓ (Right) | P (Pause) | Q (Quit)";
pub const PAUSED_TEXT: &str = " - PAUSED - ";
pub const RESTART_HINT_TEXT: &str = "Press R to restart or Q to quit";

/// What a draw operation depicts. Surfaces use it to pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Border,
    CenterLine,
    Score,
    Paddle,
    Ball,
    Legend,
    Banner,
    Hint,
}

/// Glyph content of a draw operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyphs {
    /// A single character.
    Char(char),
    /// A character repeated to the right.
    Row(char, u16),
    /// A character repeated downwards.
    Column(char, u16),
    Static(&'static str),
    Text(ArrayString<TEXT_CAP>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOp {
    pub x: u16,
    pub y: u16,
    pub glyphs: Glyphs,
    pub role: Role,
}

impl DrawOp {
    /// Expand into individual cells `(x, y, ch)`.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, char)> + '_ {
        let (x0, y0) = (self.x, self.y);
        let (text, repeat): (Option<&str>, Option<(char, u16, bool)>) = match &self.glyphs {
            Glyphs::Char(ch) => (None, Some((*ch, 1, false))),
            Glyphs::Row(ch, n) => (None, Some((*ch, *n, false))),
            Glyphs::Column(ch, n) => (None, Some((*ch, *n, true))),
            Glyphs::Static(s) => (Some(*s), None),
            Glyphs::Text(s) => (Some(s.as_str()), None),
        };

        let from_text = text.into_iter().flat_map(move |s| {
            s.chars()
                .enumerate()
                .map(move |(i, ch)| (x0.saturating_add(i as u16), y0, ch))
        });
        let from_repeat = repeat.into_iter().flat_map(move |(ch, n, vertical)| {
            (0..n).map(move |i| {
                if vertical {
                    (x0, y0.saturating_add(i), ch)
                } else {
                    (x0.saturating_add(i), y0, ch)
                }
            })
        });
        from_text.chain(from_repeat)
    }
}

/// One frame worth of draw operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    ops: ArrayVec<DrawOp, MAX_OPS>,
}

impl Scene {
    pub fn width(&self) -> u16 {
        SCENE_WIDTH
    }

    pub fn height(&self) -> u16 {
        SCENE_HEIGHT
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Push an operation. Silently dropped once `MAX_OPS` is reached.
    pub fn push(&mut self, op: DrawOp) {
        let _ = self.ops.try_push(op);
    }

    /// Character at a scene position after all operations are applied.
    pub fn char_at(&self, x: u16, y: u16) -> Option<char> {
        self.ops
            .iter()
            .flat_map(|op| op.cells())
            .filter(|&(cx, cy, _)| cx == x && cy == y)
            .last()
            .map(|(_, _, ch)| ch)
    }

    /// Rasterize one scene row to a string (spaces where nothing is drawn).
    pub fn row_text(&self, y: u16) -> String {
        let mut row = vec![' '; SCENE_WIDTH as usize];
        for op in &self.ops {
            for (x, cy, ch) in op.cells() {
                if cy == y && (x as usize) < row.len() {
                    row[x as usize] = ch;
                }
            }
        }
        row.into_iter().collect()
    }

    /// Build the frame for `state`.
    pub fn describe(state: &GameState) -> Self {
        let mut scene = Scene::default();
        let w = BOARD_WIDTH as u16;
        let h = BOARD_HEIGHT as u16;

        scene.push(DrawOp {
            x: 0,
            y: 0,
            glyphs: Glyphs::Row(BORDER_GLYPH, w),
            role: Role::Border,
        });
        scene.push(DrawOp {
            x: 0,
            y: h - 1,
            glyphs: Glyphs::Row(BORDER_GLYPH, w),
            role: Role::Border,
        });
        scene.push(DrawOp {
            x: w / 2,
            y: 1,
            glyphs: Glyphs::Column(CENTER_LINE_GLYPH, h - 2),
            role: Role::CenterLine,
        });

        let mut score = ArrayString::<TEXT_CAP>::new();
        let _ = write!(score, " {} | {} ", state.left_score(), state.right_score());
        scene.push(centered(1, Glyphs::Text(score), Role::Score));

        for paddle in [state.left_paddle(), state.right_paddle()] {
            scene.push(DrawOp {
                x: paddle.x as u16,
                y: paddle.y as u16,
                glyphs: Glyphs::Column(PADDLE_GLYPH, PADDLE_HEIGHT as u16),
                role: Role::Paddle,
            });
        }

        let ball = state.ball();
        scene.push(DrawOp {
            x: ball.x as u16,
            y: ball.y as u16,
            glyphs: Glyphs::Char(BALL_GLYPH),
            role: Role::Ball,
        });

        scene.push(DrawOp {
            x: 0,
            y: h,
            glyphs: Glyphs::Static(CONTROLS_TEXT),
            role: Role::Legend,
        });

        if state.paused() {
            scene.push(centered(h / 2, Glyphs::Static(PAUSED_TEXT), Role::Banner));
        }

        if let Some(winner) = state.winner().filter(|_| state.game_over()) {
            let mut banner = ArrayString::<TEXT_CAP>::new();
            let _ = write!(banner, " GAME OVER! {} wins! ", winner.as_str());
            scene.push(centered(h / 2 - 1, Glyphs::Text(banner), Role::Banner));
            scene.push(centered(h / 2 + 1, Glyphs::Static(RESTART_HINT_TEXT), Role::Hint));
        }

        scene
    }
}

fn centered(y: u16, glyphs: Glyphs, role: Role) -> DrawOp {
    let len = match &glyphs {
        Glyphs::Static(s) => s.chars().count(),
        Glyphs::Text(s) => s.chars().count(),
        Glyphs::Row(_, n) => *n as usize,
        Glyphs::Char(_) | Glyphs::Column(_, _) => 1,
    } as u16;
    DrawOp {
        x: (BOARD_WIDTH as u16).saturating_sub(len) / 2,
        y,
        glyphs,
        role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Command;

    #[test]
    fn fresh_scene_has_borders_score_and_legend() {
        let scene = GameState::new().render_description();

        assert_eq!(scene.row_text(0), "=".repeat(80));
        assert_eq!(scene.row_text(23), "=".repeat(80));
        assert_eq!(scene.row_text(1).trim(), "0 | 0");
        assert!(scene.row_text(24).starts_with("Controls: W/S (Left)"));
        assert_eq!(scene.char_at(40, 12), Some(BALL_GLYPH));
    }

    #[test]
    fn score_is_centered_on_row_one() {
        let scene = GameState::new().render_description();
        // " 0 | 0 " is 7 wide: (80 - 7) / 2 = 36.
        assert_eq!(scene.char_at(36, 1), Some(' '));
        assert_eq!(scene.char_at(37, 1), Some('0'));
        assert_eq!(scene.char_at(41, 1), Some('0'));
    }

    #[test]
    fn center_line_spans_inner_rows() {
        let scene = GameState::new().render_description();
        assert_eq!(scene.char_at(40, 2), Some(CENTER_LINE_GLYPH));
        assert_eq!(scene.char_at(40, 22), Some(CENTER_LINE_GLYPH));
        assert_eq!(scene.char_at(40, 0), Some(BORDER_GLYPH));
    }

    #[test]
    fn paddles_are_drawn_four_rows_tall() {
        let scene = GameState::new().render_description();
        for y in 10..14 {
            assert_eq!(scene.char_at(2, y), Some(PADDLE_GLYPH));
            assert_eq!(scene.char_at(77, y), Some(PADDLE_GLYPH));
        }
        assert_eq!(scene.char_at(2, 9), None);
        assert_eq!(scene.char_at(2, 14), None);
    }

    #[test]
    fn paused_banner_on_mid_row() {
        let mut state = GameState::new();
        state.handle_input(Command::TogglePause);
        let scene = state.render_description();
        assert!(scene.row_text(12).contains("- PAUSED -"));
        assert!(!scene.row_text(11).contains("GAME OVER"));
    }

    #[test]
    fn no_banner_while_playing() {
        let scene = GameState::new().render_description();
        assert_eq!(scene.ops().len(), 8);
    }

    #[test]
    fn cells_expand_column_downwards() {
        let op = DrawOp {
            x: 3,
            y: 4,
            glyphs: Glyphs::Column('#', 3),
            role: Role::Paddle,
        };
        let cells: Vec<_> = op.cells().collect();
        assert_eq!(cells, vec![(3, 4, '#'), (3, 5, '#'), (3, 6, '#')]);
    }
}
