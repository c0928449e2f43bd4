//! Offscreen replay of the committed marks into an upscaled raster image.
//!
//! Strokes are rasterized with tiny-skia, sticker glyphs with ab_glyph using
//! the fonts egui ships with. Coordinates stay in canvas space; the surface
//! transform does the magnification.

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use image::{ImageFormat, RgbaImage};
use tiny_skia::{
    LineCap, LineJoin, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Stroke, Transform,
};

use crate::config::SketchConfig;
use crate::error::{SketchError, SketchResult};
use crate::mark::{INK, Mark, Point};

/// Fonts tried in order for every character of a sticker
const STICKER_FONTS: [&str; 4] = [
    "NotoEmoji-Regular",
    "emoji-icon-font",
    "Ubuntu-Light",
    "Hack",
];

/// Renders sticker text with egui's bundled fonts, falling back font by font.
#[derive(Clone)]
struct GlyphFonts {
    fonts: Vec<FontArc>,
}

impl GlyphFonts {
    fn bundled() -> Self {
        let definitions = egui::FontDefinitions::default();
        let fonts = STICKER_FONTS
            .iter()
            .filter_map(|name| {
                let data = definitions.font_data.get(*name)?;
                match FontArc::try_from_vec(data.font.to_vec()) {
                    Ok(font) => Some(font),
                    Err(err) => {
                        log::warn!("Skipping font {}: {}", name, err);
                        None
                    }
                }
            })
            .collect::<Vec<_>>();

        if fonts.is_empty() {
            log::warn!("No fonts available; stickers will be missing from exports");
        }
        Self { fonts }
    }

    /// First font that has a glyph for `c`
    fn lookup(&self, c: char) -> Option<(&FontArc, GlyphId)> {
        self.fonts.iter().find_map(|font| {
            let id = font.glyph_id(c);
            (id.0 != 0).then_some((font, id))
        })
    }
}

/// The offscreen drawing target handed to each mark during export
pub struct ExportSurface {
    pixmap: Pixmap,
    transform: Transform,
    scale: f32,
    sticker_font_size: f32,
    fonts: GlyphFonts,
}

impl ExportSurface {
    fn new(side: u32, scale: u32, sticker_font_size: f32, fonts: GlyphFonts) -> SketchResult<Self> {
        let pixmap = Pixmap::new(side, side).ok_or(SketchError::Surface {
            width: side,
            height: side,
        })?;
        let scale = scale as f32;
        Ok(Self {
            pixmap,
            transform: Transform::from_scale(scale, scale),
            scale,
            sticker_font_size,
            fonts,
        })
    }

    /// Stroke a polyline in canvas coordinates, like an HTML canvas would (butt caps, miter joins)
    pub fn stroke_polyline(&mut self, points: &[Point], width: f32) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for p in rest {
            builder.line_to(p.x, p.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(INK.r(), INK.g(), INK.b(), INK.a());
        paint.anti_alias = true;

        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, self.transform, None);
    }

    /// Fill `text` with its baseline starting at `at`, in canvas coordinates
    pub fn fill_text(&mut self, text: &str, at: Point) {
        let size = PxScale::from(self.sticker_font_size * self.scale);
        let mut caret = point(at.x * self.scale, at.y * self.scale);

        for c in text.chars() {
            // Variation selectors and the like have no outline in any font
            let Some((font, id)) = self.fonts.lookup(c) else {
                continue;
            };
            let advance = font.as_scaled(size).h_advance(id);
            let glyph = id.with_scale_and_position(size, caret);

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (width, height) = (self.pixmap.width() as i64, self.pixmap.height() as i64);
                let pixels = self.pixmap.pixels_mut();
                outlined.draw(|gx, gy, coverage| {
                    let x = bounds.min.x as i64 + gx as i64;
                    let y = bounds.min.y as i64 + gy as i64;
                    if (0..width).contains(&x) && (0..height).contains(&y) {
                        let pixel = &mut pixels[(y * width + x) as usize];
                        *pixel = blend_ink(*pixel, coverage);
                    }
                });
            }
            caret.x += advance;
        }
    }

    fn into_image(self) -> RgbaImage {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let data = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let c = pixel.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        // Pixmap and RgbaImage agree on the buffer size, so this never fails
        RgbaImage::from_raw(width, height, data).unwrap_or_else(|| RgbaImage::new(width, height))
    }
}

/// Source-over of the ink color at `coverage` onto a premultiplied pixel
fn blend_ink(dst: PremultipliedColorU8, coverage: f32) -> PremultipliedColorU8 {
    let alpha = (coverage.clamp(0.0, 1.0) * INK.a() as f32).round() as u32;
    let keep = 255 - alpha;
    let over = |src: u8, dst: u8| {
        let src = src as u32 * alpha / 255;
        (src + dst as u32 * keep / 255).min(255) as u8
    };
    let a = (alpha + dst.alpha() as u32 * keep / 255).min(255) as u8;
    PremultipliedColorU8::from_rgba(
        over(INK.r(), dst.red()).min(a),
        over(INK.g(), dst.green()).min(a),
        over(INK.b(), dst.blue()).min(a),
        a,
    )
    .unwrap_or(dst)
}

/// A flattened, upscaled copy of the drawing
#[derive(Debug, Clone)]
pub struct ExportedImage {
    image: RgbaImage,
}

impl ExportedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Encode as PNG
    pub fn to_png(&self) -> SketchResult<Vec<u8>> {
        let mut bytes = std::io::Cursor::new(Vec::new());
        self.image.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }
}

/// Replays marks onto an offscreen surface `scale` times the canvas size.
#[derive(Clone)]
pub struct Exporter {
    canvas_size: u32,
    sticker_font_size: f32,
    fonts: GlyphFonts,
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("canvas_size", &self.canvas_size)
            .field("sticker_font_size", &self.sticker_font_size)
            .field("fonts", &self.fonts.fonts.len())
            .finish()
    }
}

impl Exporter {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            canvas_size: config.canvas_size,
            sticker_font_size: config.sticker_font_size,
            fonts: GlyphFonts::bundled(),
        }
    }

    /// Render `marks` in order. An empty drawing gives a blank (transparent) image.
    ///
    /// A scale of 0 is treated as 1.
    pub fn export_image(&self, marks: &[Mark], scale: u32) -> SketchResult<ExportedImage> {
        let scale = scale.max(1);
        let side = self
            .canvas_size
            .checked_mul(scale)
            .ok_or(SketchError::Surface {
                width: u32::MAX,
                height: u32::MAX,
            })?;

        let mut surface =
            ExportSurface::new(side, scale, self.sticker_font_size, self.fonts.clone())?;
        for mark in marks {
            mark.rasterize(&mut surface);
        }

        log::info!("Exported {} marks at {}x{}", marks.len(), side, side);
        Ok(ExportedImage {
            image: surface.into_image(),
        })
    }
}
