//! CPU-side frame builder
//!
//! Produces one triangle list and a handful of text items per frame, in the
//! order a painter would draw them. Shake offsets everything except the
//! game-over overlay.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, as_bytes, colors, with_alpha};
use super::{FrameView, RenderError, Renderer};
use crate::consts::*;
use crate::sim::overlay_message;

const BALL_SEGMENTS: u32 = 24;
const PARTICLE_SEGMENTS: u32 = 8;
const DIVIDER_DASH: f32 = 10.0;
const DIVIDER_WIDTH: f32 = 1.0;
const SCORE_FONT: f32 = 36.0;
const TITLE_FONT: f32 = 60.0;
const PROMPT_FONT: f32 = 24.0;

/// Horizontal anchoring of a text item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A string to draw at a baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub align: TextAlign,
    pub color: [f32; 4],
}

/// Frame builder renderer
#[derive(Debug, Default)]
pub struct DrawList {
    /// Triangles for the last rendered frame
    pub vertices: Vec<Vertex>,
    /// Text for the last rendered frame
    pub texts: Vec<TextItem>,
    frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames built so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Raw vertex bytes of the last frame
    pub fn vertex_bytes(&self) -> &[u8] {
        as_bytes(&self.vertices)
    }

    fn text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, align: TextAlign) {
        self.texts.push(TextItem {
            text: text.into(),
            pos,
            size,
            align,
            color: colors::TEXT,
        });
    }

    fn build(&mut self, view: &FrameView<'_>) {
        let state = view.state;
        let surface = state.surface;
        let offset = view.camera_offset;
        let size = Vec2::new(surface.width, surface.height);
        let mid_x = surface.width / 2.0;

        // Background (with trail effect)
        self.vertices
            .extend(shapes::rect(offset, size, colors::BACKGROUND));

        // Middle line
        self.vertices.extend(shapes::dashed_vline(
            mid_x + offset.x,
            offset.y,
            surface.height + offset.y,
            DIVIDER_DASH,
            DIVIDER_DASH,
            DIVIDER_WIDTH,
            colors::DIVIDER,
        ));

        let paddle = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        self.vertices.extend(shapes::rect(
            Vec2::new(surface.player_x(), state.player_y) + offset,
            paddle,
            colors::PLAYER,
        ));
        self.vertices.extend(shapes::rect(
            Vec2::new(surface.opponent_x(), state.opponent_y) + offset,
            paddle,
            colors::OPPONENT,
        ));

        self.vertices.extend(shapes::circle(
            state.ball.pos + offset,
            BALL_RADIUS,
            colors::BALL,
            BALL_SEGMENTS,
        ));

        self.text(
            state.player_score.to_string(),
            Vec2::new(mid_x - 50.0, 50.0) + offset,
            SCORE_FONT,
            TextAlign::Left,
        );
        self.text(
            state.opponent_score.to_string(),
            Vec2::new(mid_x + 20.0, 50.0) + offset,
            SCORE_FONT,
            TextAlign::Left,
        );

        if view.draw_particles {
            for p in view.particles() {
                let alpha = p.life.clamp(0.0, 1.0);
                self.vertices.extend(shapes::circle(
                    p.pos + offset,
                    p.size,
                    with_alpha(p.color, alpha),
                    PARTICLE_SEGMENTS,
                ));
            }
        }

        if state.is_game_over() {
            self.vertices
                .extend(shapes::rect(Vec2::ZERO, size, colors::OVERLAY));
            let center = surface.center();
            self.text(
                overlay_message(state),
                center - Vec2::new(0.0, 40.0),
                TITLE_FONT,
                TextAlign::Center,
            );
            self.text(
                "Click to Restart",
                center + Vec2::new(0.0, 20.0),
                PROMPT_FONT,
                TextAlign::Center,
            );
        }
    }
}

impl Renderer for DrawList {
    fn render(&mut self, view: &FrameView<'_>) -> Result<(), RenderError> {
        if !view.camera_offset.is_finite() {
            return Err(RenderError::InvalidCamera(view.camera_offset));
        }

        self.vertices.clear();
        self.texts.clear();
        self.build(view);
        self.frames += 1;
        Ok(())
    }
}
