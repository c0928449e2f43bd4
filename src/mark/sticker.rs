use egui::{FontId, Galley, Painter, Vec2, vec2};

use super::{INK, Point};
use crate::export::ExportSurface;

/// An emoji or short text placed with a single click.
#[derive(Clone, Debug, PartialEq)]
pub struct StickerMark {
    position: Point,
    glyph: String,
}

impl StickerMark {
    pub fn new(position: Point, glyph: impl Into<String>) -> Self {
        Self {
            position,
            glyph: glyph.into(),
        }
    }

    /// Left end of the text baseline
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub(crate) fn draw(&self, painter: &Painter, origin: Vec2, font_size: f32) {
        draw_glyph(painter, self.position + origin, &self.glyph, font_size);
    }

    pub(crate) fn rasterize(&self, surface: &mut ExportSurface) {
        surface.fill_text(&self.glyph, self.position);
    }
}

/// Text anchored on its baseline, the way stickers and their preview are drawn.
pub(crate) fn draw_glyph(painter: &Painter, at: Point, glyph: &str, font_size: f32) {
    let galley = painter.layout_no_wrap(glyph.to_owned(), FontId::proportional(font_size), INK);
    let top_left = at - vec2(0.0, baseline_offset(&galley));
    painter.galley(top_left, galley, INK);
}

/// Distance from the top of the laid-out text to its first baseline
fn baseline_offset(galley: &Galley) -> f32 {
    galley
        .rows
        .first()
        .and_then(|row| row.glyphs.first())
        .map_or(galley.size().y, |glyph| glyph.pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Context, LayerId, RawInput, Shape, pos2};

    #[test]
    fn test_screen_baseline_sits_on_position() {
        let ctx = Context::default();
        let output = ctx.run(RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(LayerId::background());
            StickerMark::new(pos2(100.0, 100.0), "A").draw(&painter, vec2(8.0, 8.0), 24.0);
        });

        let text = output
            .shapes
            .iter()
            .find_map(|clipped| match &clipped.shape {
                Shape::Text(text) => Some(text),
                _ => None,
            })
            .expect("sticker paints a text shape");
        let baseline = text.pos.y + baseline_offset(&text.galley);
        assert!((baseline - 108.0).abs() < 0.5, "baseline at {baseline}");
        assert!((text.pos.x - 108.0).abs() < 0.5);
        // The glyph sits above the baseline, not below it
        assert!(text.pos.y < 108.0 - 10.0);
    }
}
