use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use super::Surface;

/// One primitive call made against a [`RecordingSurface`].
///
/// Fills carry `clipped: true` when a clip polygon was active at the time.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillPolygon {
        points: Vec<Pos2>,
        color: Color32,
        clipped: bool,
    },
    StrokePath {
        points: Vec<Pos2>,
        closed: bool,
        stroke: Stroke,
    },
    FillCircle {
        center: Pos2,
        radius: f32,
        color: Color32,
        clipped: bool,
    },
    FillRect {
        rect: Rect,
        color: Color32,
        clipped: bool,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
    },
    Text {
        pos: Pos2,
        text: String,
        font_size: f32,
        color: Color32,
    },
    SetClip(Vec<Pos2>),
    ResetClip,
}

/// A headless surface that remembers what was drawn since the last clear.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    ops: Vec<DrawOp>,
    clip: Option<Vec<Pos2>>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ops: Vec::new(),
            clip: None,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// The clip polygon currently in effect, if any.
    pub fn clip(&self) -> Option<&[Pos2]> {
        self.clip.as_deref()
    }

    /// Every filled circle, in drawing order.
    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::FillCircle { .. }))
    }

    fn clipped(&self) -> bool {
        self.clip.is_some()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn fill_polygon(&mut self, points: &[Pos2], color: Color32) {
        let clipped = self.clipped();
        self.ops.push(DrawOp::FillPolygon {
            points: points.to_vec(),
            color,
            clipped,
        });
    }

    fn stroke_path(&mut self, points: &[Pos2], closed: bool, stroke: Stroke) {
        self.ops.push(DrawOp::StrokePath {
            points: points.to_vec(),
            closed,
            stroke,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let clipped = self.clipped();
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
            clipped,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        let clipped = self.clipped();
        self.ops.push(DrawOp::FillRect { rect, color, clipped });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.ops.push(DrawOp::StrokeRect { rect, stroke });
    }

    fn text_centered(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32) {
        self.ops.push(DrawOp::Text {
            pos,
            text: text.to_owned(),
            font_size,
            color,
        });
    }

    fn set_clip_polygon(&mut self, points: &[Pos2]) {
        if points.len() < 3 {
            return;
        }
        self.clip = Some(points.to_vec());
        self.ops.push(DrawOp::SetClip(points.to_vec()));
    }

    fn reset_clip(&mut self) {
        self.clip = None;
        self.ops.push(DrawOp::ResetClip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_clear_discards_earlier_ops() {
        let mut surface = RecordingSurface::new(vec2(800.0, 600.0));
        surface.fill_circle(pos2(1.0, 1.0), 2.0, Color32::RED);
        surface.clear();
        assert_eq!(surface.ops(), &[DrawOp::Clear]);
    }

    #[test]
    fn test_fills_remember_clip_state() {
        let mut surface = RecordingSurface::new(vec2(800.0, 600.0));
        surface.set_clip_polygon(&[pos2(0.0, 0.0), pos2(1.0, 0.0)]);
        assert!(surface.clip().is_none());

        surface.set_clip_polygon(&[pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(0.0, 10.0)]);
        surface.fill_circle(pos2(1.0, 1.0), 2.0, Color32::RED);
        surface.reset_clip();
        surface.fill_circle(pos2(1.0, 1.0), 2.0, Color32::RED);

        let clipped: Vec<bool> = surface
            .circles()
            .map(|op| match op {
                DrawOp::FillCircle { clipped, .. } => *clipped,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(clipped, [true, false]);
    }
}
