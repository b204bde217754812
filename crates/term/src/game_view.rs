//! GameView: maps a `core::Scene` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Role, Scene};
use crate::fb::{CellStyle, FrameBuffer, Rgb, Weight};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn fits(&self, width: u16, height: u16) -> bool {
        self.width >= width && self.height >= height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Places the scene inside the viewport and styles it per [`Role`].
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left corner of the scene inside `viewport`.
    pub fn origin(&self, scene: &Scene, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(scene.width()) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(scene.height()) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render the scene into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and cleared first.
    pub fn render_into(&self, scene: &Scene, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        if !viewport.fits(scene.width(), scene.height()) {
            self.draw_too_small(fb, scene, viewport);
            return;
        }

        let (ox, oy) = self.origin(scene, viewport);
        for op in scene.ops() {
            let style = style_for(op.role);
            for (x, y, ch) in op.cells() {
                fb.put(ox.saturating_add(x), oy.saturating_add(y), ch, style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, scene: &Scene, viewport: Viewport) {
        let style = CellStyle::on_black(Rgb(255, 200, 80), Weight::Bold);
        let need = format!("need {}x{}", scene.width(), scene.height());
        let lines = ["Terminal too small", need.as_str()];

        let top = viewport.height.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = viewport.width.saturating_sub(w) / 2;
            fb.put_str(x, top.saturating_add(i as u16), line, style);
        }
    }
}

fn style_for(role: Role) -> CellStyle {
    match role {
        Role::Border => CellStyle::on_black(Rgb(200, 200, 200), Weight::Normal),
        Role::CenterLine => CellStyle::on_black(Rgb(90, 90, 100), Weight::Dim),
        Role::Score => CellStyle::on_black(Rgb(255, 255, 255), Weight::Bold),
        Role::Paddle => CellStyle::on_black(Rgb(80, 220, 220), Weight::Normal),
        Role::Ball => CellStyle::on_black(Rgb(240, 220, 80), Weight::Bold),
        Role::Legend => CellStyle::on_black(Rgb(140, 140, 140), Weight::Normal),
        Role::Banner => CellStyle::on_black(Rgb(255, 255, 255), Weight::Bold),
        Role::Hint => CellStyle::on_black(Rgb(200, 200, 200), Weight::Normal),
    }
}
