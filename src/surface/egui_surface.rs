use egui::{Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::Surface;
use crate::geometry::{self, Span};

/// Paints onto an egui [`Painter`] inside `rect`, translating surface-local
/// coordinates to screen space.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
    clip: Option<Vec<Pos2>>,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
            clip: None,
        }
    }

    fn offset(&self) -> Vec2 {
        self.rect.min.to_vec2()
    }

    fn to_screen(&self, points: &[Pos2]) -> Vec<Pos2> {
        points.iter().map(|p| *p + self.offset()).collect()
    }

    /// Surface-local bounds used to limit rasterised fills.
    fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.rect.size())
    }

    fn paint_spans(&self, spans: Vec<Span>, color: Color32) {
        if spans.is_empty() {
            return;
        }
        let mut mesh = Mesh::default();
        for span in spans {
            mesh.add_colored_rect(span.rect().translate(self.offset()), color);
        }
        self.painter.add(Shape::mesh(mesh));
    }
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn fill_polygon(&mut self, points: &[Pos2], color: Color32) {
        // egui only fills convex polygons correctly, so every polygon goes through spans.
        let spans = geometry::polygon_spans(points, self.bounds(), self.clip.as_deref());
        self.paint_spans(spans, color);
    }

    fn stroke_path(&mut self, points: &[Pos2], closed: bool, stroke: Stroke) {
        let points = self.to_screen(points);
        match points.len() {
            0 | 1 => {}
            2 => {
                self.painter.add(Shape::line(points, stroke));
            }
            _ if closed => {
                self.painter.add(Shape::closed_line(points, stroke));
            }
            _ => {
                self.painter.add(Shape::line(points, stroke));
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        match &self.clip {
            Some(clip) => {
                let spans = geometry::circle_spans(center, radius, self.bounds(), Some(clip));
                self.paint_spans(spans, color);
            }
            None => {
                self.painter.circle_filled(center + self.offset(), radius, color);
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        match &self.clip {
            Some(clip) => {
                let corners = [rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()];
                let spans = geometry::polygon_spans(&corners, self.bounds(), Some(clip));
                self.paint_spans(spans, color);
            }
            None => {
                self.painter.rect_filled(rect.translate(self.offset()), 0.0, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.painter.rect_stroke(rect.translate(self.offset()), 0.0, stroke);
    }

    fn text_centered(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32) {
        self.painter.text(
            pos + self.offset(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(font_size),
            color,
        );
    }

    fn set_clip_polygon(&mut self, points: &[Pos2]) {
        if points.len() >= 3 {
            self.clip = Some(points.to_vec());
        }
    }

    fn reset_clip(&mut self) {
        self.clip = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn with_surface(mut f: impl FnMut(&mut EguiSurface<'_>)) -> Vec<egui::epaint::ClippedShape> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let rect = Rect::from_min_size(pos2(50.0, 20.0), vec2(800.0, 600.0));
            let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
            let mut surface = EguiSurface::new(&painter, rect, Color32::WHITE);
            f(&mut surface);
        });
        output.shapes
    }

    #[test]
    fn test_surface_size() {
        with_surface(|surface| assert_eq!(surface.size(), vec2(800.0, 600.0)));
    }

    #[test]
    fn test_unclipped_circle_is_translated() {
        let shapes = with_surface(|surface| {
            surface.fill_circle(pos2(10.0, 10.0), 5.0, Color32::RED);
        });
        let circle = shapes.iter().find_map(|s| match &s.shape {
            Shape::Circle(circle) => Some(circle.center),
            _ => None,
        });
        assert_eq!(circle, Some(pos2(60.0, 30.0)));
    }

    #[test]
    fn test_clipped_circle_becomes_mesh() {
        let shapes = with_surface(|surface| {
            surface.set_clip_polygon(&[pos2(100.0, 100.0), pos2(200.0, 100.0), pos2(200.0, 200.0)]);
            surface.fill_circle(pos2(170.0, 130.0), 50.0, Color32::BLUE);
            surface.reset_clip();
            surface.fill_circle(pos2(400.0, 400.0), 10.0, Color32::BLUE);
        });
        assert!(shapes.iter().any(|s| matches!(s.shape, Shape::Mesh(_))));
        assert!(shapes.iter().any(|s| matches!(s.shape, Shape::Circle(_))));
    }

    #[test]
    fn test_short_clip_is_ignored() {
        with_surface(|surface| {
            surface.set_clip_polygon(&[pos2(0.0, 0.0), pos2(10.0, 10.0)]);
            assert!(surface.clip.is_none());
        });
    }

    #[test]
    fn test_invalid_radius_draws_nothing() {
        let shapes = with_surface(|surface| {
            surface.fill_circle(pos2(10.0, 10.0), f32::NAN, Color32::BLUE);
            surface.fill_circle(pos2(10.0, 10.0), -4.0, Color32::BLUE);
        });
        assert!(!shapes.iter().any(|s| matches!(s.shape, Shape::Circle(_) | Shape::Mesh(_))));
    }
}
