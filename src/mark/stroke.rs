use std::num::NonZeroU32;

use egui::{Painter, Shape, Stroke as EguiStroke, Vec2};

use super::{INK, Point};
use crate::export::ExportSurface;

/// Freehand marker line: the pointer positions of one drag, in order.
///
/// Only the drawing session that created it appends points; once committed
/// to the history it is never modified again.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeMark {
    points: Vec<Point>,
    thickness: NonZeroU32,
}

impl StrokeMark {
    /// Start a stroke at the pointer-down position
    pub fn new(start: Point, thickness: NonZeroU32) -> Self {
        Self {
            points: vec![start],
            thickness,
        }
    }

    /// A finished stroke through `points`. `None` if there are no points.
    pub fn from_points(points: Vec<Point>, thickness: NonZeroU32) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points, thickness })
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Never empty
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn thickness(&self) -> NonZeroU32 {
        self.thickness
    }

    fn width(&self) -> f32 {
        self.thickness.get() as f32
    }

    pub(crate) fn draw(&self, painter: &Painter, origin: Vec2) {
        // A lone point has no segment to stroke
        if self.points.len() < 2 {
            return;
        }

        let points = self.points.iter().map(|p| *p + origin).collect();
        painter.add(Shape::line(points, EguiStroke::new(self.width(), INK)));
    }

    pub(crate) fn rasterize(&self, surface: &mut ExportSurface) {
        surface.stroke_polyline(&self.points, self.width());
    }
}
