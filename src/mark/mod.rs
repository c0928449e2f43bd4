use egui::{Painter, Pos2, Vec2};

pub(crate) mod sticker;
pub(crate) mod stroke;

pub use sticker::StickerMark;
pub use stroke::StrokeMark;

use crate::export::ExportSurface;

/// A canvas-space coordinate. Immutable once recorded.
pub type Point = Pos2;

/// Ink color shared by strokes, stickers and the preview
pub const INK: egui::Color32 = egui::Color32::BLACK;

/// A committed drawable unit of the sketch.
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    Stroke(StrokeMark),
    Sticker(StickerMark),
}

impl Mark {
    /// Short name used in log messages
    pub fn kind(&self) -> &'static str {
        match self {
            Mark::Stroke(_) => "stroke",
            Mark::Sticker(_) => "sticker",
        }
    }

    /// Draw onto the visible canvas. `origin` is the canvas' top-left corner in screen space.
    pub fn draw(&self, painter: &Painter, origin: Vec2, sticker_font_size: f32) {
        match self {
            Mark::Stroke(stroke) => stroke.draw(painter, origin),
            Mark::Sticker(sticker) => sticker.draw(painter, origin, sticker_font_size),
        }
    }

    /// Replay onto an offscreen export surface, in unscaled canvas coordinates.
    pub fn rasterize(&self, surface: &mut ExportSurface) {
        match self {
            Mark::Stroke(stroke) => stroke.rasterize(surface),
            Mark::Sticker(sticker) => sticker.rasterize(surface),
        }
    }

    pub fn as_stroke(&self) -> Option<&StrokeMark> {
        match self {
            Mark::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerMark> {
        match self {
            Mark::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<StrokeMark> for Mark {
    fn from(stroke: StrokeMark) -> Self {
        Mark::Stroke(stroke)
    }
}

impl From<StickerMark> for Mark {
    fn from(sticker: StickerMark) -> Self {
        Mark::Sticker(sticker)
    }
}
