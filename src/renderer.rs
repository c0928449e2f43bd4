use egui::{Color32, Painter, Rect, Stroke};

use crate::config::SketchConfig;
use crate::event::{EventHandler, SketchEvent};
use crate::mark::{Mark, StrokeMark};
use crate::preview::Preview;
use crate::session::SketchSession;

const CANVAS_BACKGROUND: Color32 = Color32::WHITE;
const CANVAS_OUTLINE: Stroke = Stroke {
    width: 1.0,
    color: Color32::GRAY,
};

/// Draws the sketch onto the visible canvas.
///
/// Keeps a replay copy of the committed marks (plus the stroke being drawn),
/// rebuilt on every [`SketchEvent::ContentChanged`], and a preview overlay
/// rebuilt on [`SketchEvent::PointerMoved`]. Both are painted each frame.
#[derive(Debug)]
pub struct Renderer {
    ctx: egui::Context,
    sticker_font_size: f32,
    scene: Vec<Mark>,
    active_stroke: Option<StrokeMark>,
    overlay: Option<Preview>,
    content_redraws: u64,
    overlay_redraws: u64,
}

impl Renderer {
    pub fn new(ctx: egui::Context, config: &SketchConfig) -> Self {
        Self {
            ctx,
            sticker_font_size: config.sticker_font_size,
            scene: Vec::new(),
            active_stroke: None,
            overlay: None,
            content_redraws: 0,
            overlay_redraws: 0,
        }
    }

    /// Replay everything from the session
    fn redraw_all(&mut self, session: &SketchSession) {
        self.scene = session.history().snapshot().to_vec();
        self.active_stroke = session.active_stroke().cloned();
        self.overlay = session.preview().cloned();
        self.content_redraws += 1;
        self.ctx.request_repaint();
    }

    fn redraw_overlay(&mut self, session: &SketchSession) {
        self.overlay = session.preview().cloned();
        self.overlay_redraws += 1;
        self.ctx.request_repaint();
    }

    /// Paint the canvas into `canvas_rect`: background, marks oldest first,
    /// the stroke being drawn, and finally the preview.
    pub fn paint(&self, painter: &Painter, canvas_rect: Rect) {
        let painter = painter.with_clip_rect(canvas_rect);
        painter.rect_filled(canvas_rect, 0.0, CANVAS_BACKGROUND);

        let origin = canvas_rect.min.to_vec2();
        for mark in &self.scene {
            mark.draw(&painter, origin, self.sticker_font_size);
        }

        match &self.active_stroke {
            Some(stroke) => stroke.draw(&painter, origin),
            None => {
                if let Some(preview) = &self.overlay {
                    preview.draw(&painter, origin, self.sticker_font_size);
                }
            }
        }

        painter.rect_stroke(canvas_rect, 0.0, CANVAS_OUTLINE);
    }

    pub fn scene(&self) -> &[Mark] {
        &self.scene
    }

    pub fn overlay(&self) -> Option<&Preview> {
        self.overlay.as_ref()
    }

    /// How many full replays have happened
    pub fn content_redraws(&self) -> u64 {
        self.content_redraws
    }

    /// How many overlay-only updates have happened
    pub fn overlay_redraws(&self) -> u64 {
        self.overlay_redraws
    }
}

impl EventHandler for Renderer {
    fn handle_event(&mut self, event: SketchEvent, session: &SketchSession) {
        match event {
            SketchEvent::ContentChanged => self.redraw_all(session),
            SketchEvent::PointerMoved => self.redraw_overlay(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{LayerId, RawInput, Shape, pos2, vec2};

    fn test_renderer() -> Renderer {
        Renderer::new(egui::Context::default(), &SketchConfig::default())
    }

    #[test]
    fn test_renderer_creation() {
        let renderer = test_renderer();
        assert!(renderer.scene().is_empty());
        assert!(renderer.overlay().is_none());
        assert_eq!(renderer.content_redraws(), 0);
    }

    #[test]
    fn test_content_change_replays_history() {
        let mut session = SketchSession::default();
        let mut renderer = test_renderer();

        session.pointer_down(pos2(1.0, 1.0));
        session.pointer_move(pos2(2.0, 2.0));
        session.pointer_up();
        session.dispatch(&mut renderer);

        assert_eq!(renderer.scene().len(), 1);
        assert_eq!(renderer.content_redraws(), 3);
        assert_eq!(renderer.overlay_redraws(), 0);
    }

    #[test]
    fn test_pointer_motion_only_touches_overlay() {
        let mut session = SketchSession::default();
        let mut renderer = test_renderer();

        session.pointer_move(pos2(10.0, 10.0));
        session.dispatch(&mut renderer);

        assert_eq!(renderer.content_redraws(), 0);
        assert_eq!(renderer.overlay_redraws(), 1);
        assert_eq!(renderer.overlay().map(Preview::position), Some(pos2(10.0, 10.0)));
    }

    #[test]
    fn test_preview_hidden_while_drawing() {
        let mut session = SketchSession::default();
        let mut renderer = test_renderer();

        session.pointer_move(pos2(10.0, 10.0));
        session.pointer_down(pos2(10.0, 10.0));
        session.dispatch(&mut renderer);
        assert!(renderer.overlay().is_none());
    }

    /// Paint `renderer` on a fresh layer and name each shape in paint order
    fn painted_kinds(renderer: &Renderer) -> Vec<&'static str> {
        let ctx = egui::Context::default();
        let output = ctx.run(RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(LayerId::background());
            let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(256.0, 256.0));
            renderer.paint(&painter, rect);
        });
        output
            .shapes
            .iter()
            .map(|clipped| match &clipped.shape {
                Shape::Rect(_) => "rect",
                Shape::Path(_) => "line",
                Shape::Circle(_) => "circle",
                Shape::Text(_) => "text",
                _ => "other",
            })
            .collect()
    }

    #[test]
    fn test_preview_is_painted_last() {
        let mut session = SketchSession::default();
        session.pointer_down(pos2(5.0, 5.0));
        session.pointer_move(pos2(50.0, 50.0));
        session.pointer_up();
        session.select_sticker("🏹").unwrap();
        session.pointer_down(pos2(80.0, 80.0));
        session.select_thickness(7).unwrap();
        session.pointer_move(pos2(120.0, 120.0));

        let mut renderer = test_renderer();
        session.dispatch(&mut renderer);

        // Background, marks oldest first, preview, outline
        assert_eq!(
            painted_kinds(&renderer),
            vec!["rect", "line", "text", "circle", "rect"]
        );
    }

    #[test]
    fn test_active_stroke_replaces_preview() {
        let mut session = SketchSession::default();
        session.select_sticker("🏹").unwrap();
        session.pointer_down(pos2(80.0, 80.0));
        session.select_thickness(2).unwrap();
        session.pointer_move(pos2(10.0, 10.0));
        session.pointer_down(pos2(10.0, 10.0));
        session.pointer_move(pos2(90.0, 90.0));

        let mut renderer = test_renderer();
        session.dispatch(&mut renderer);

        let kinds = painted_kinds(&renderer);
        assert_eq!(kinds, vec!["rect", "text", "line", "rect"]);
        assert!(!kinds.contains(&"circle"));
    }
}
