use std::num::NonZeroU32;

use egui::{Painter, Stroke, Vec2};

use crate::mark::sticker::draw_glyph;
use crate::mark::{INK, Point};
use crate::tool::{ToolMode, ToolState};

/// Outline width of the marker preview circle
const OUTLINE_WIDTH: f32 = 1.0;

/// Hint of where the next mark would land. Never part of the history.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Circle as wide as the marker line
    Marker { center: Point, thickness: NonZeroU32 },
    /// The glyph a click would place
    Sticker { position: Point, glyph: String },
}

impl Preview {
    pub fn for_tool(tool: &ToolState, at: Point) -> Self {
        match tool {
            ToolState::Marker { thickness } => Self::Marker {
                center: at,
                thickness: *thickness,
            },
            ToolState::Sticker { glyph } => Self::Sticker {
                position: at,
                glyph: glyph.clone(),
            },
        }
    }

    /// Move `slot` to `at`, rebuilding it when it no longer reflects `tool`.
    pub fn track(slot: &mut Option<Preview>, tool: &ToolState, at: Point) {
        match slot {
            Some(preview) if preview.reflects(tool) => preview.move_to(at),
            _ => *slot = Some(Self::for_tool(tool, at)),
        }
    }

    /// True if this preview shows exactly the given tool
    pub fn reflects(&self, tool: &ToolState) -> bool {
        match (self, tool) {
            (Self::Marker { thickness, .. }, ToolState::Marker { thickness: t }) => thickness == t,
            (Self::Sticker { glyph, .. }, ToolState::Sticker { glyph: g }) => glyph == g,
            _ => false,
        }
    }

    pub fn mode(&self) -> ToolMode {
        match self {
            Self::Marker { .. } => ToolMode::Marker,
            Self::Sticker { .. } => ToolMode::Sticker,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Self::Marker { center, .. } => *center,
            Self::Sticker { position, .. } => *position,
        }
    }

    fn move_to(&mut self, at: Point) {
        match self {
            Self::Marker { center, .. } => *center = at,
            Self::Sticker { position, .. } => *position = at,
        }
    }

    pub fn draw(&self, painter: &Painter, origin: Vec2, sticker_font_size: f32) {
        match self {
            Self::Marker { center, thickness } => {
                let radius = thickness.get() as f32 / 2.0;
                painter.circle_stroke(*center + origin, radius, Stroke::new(OUTLINE_WIDTH, INK));
            }
            Self::Sticker { position, glyph } => {
                draw_glyph(painter, *position + origin, glyph, sticker_font_size);
            }
        }
    }
}
