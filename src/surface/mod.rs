use egui::{Color32, Pos2, Rect, Stroke, Vec2};

mod egui_surface;
mod recording;

pub use egui_surface::EguiSurface;
pub use recording::{DrawOp, RecordingSurface};

/// The raster target the renderer paints on.
///
/// Coordinates are surface-local with the origin at the top-left corner.
/// A clip polygon affects fills only; strokes and text are never clipped.
pub trait Surface {
    fn size(&self) -> Vec2;

    /// Wipe the whole surface. The current clip is left untouched.
    fn clear(&mut self);

    /// Fill a polygon using the nonzero winding rule.
    fn fill_polygon(&mut self, points: &[Pos2], color: Color32);

    fn stroke_path(&mut self, points: &[Pos2], closed: bool, stroke: Stroke);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    fn fill_rect(&mut self, rect: Rect, color: Color32);

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);

    /// Draw a single line of text centred on `pos`.
    fn text_centered(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32);

    /// Restrict subsequent fills to the inside of `points`.
    /// Fewer than three points cannot enclose anything and leave the clip unchanged.
    fn set_clip_polygon(&mut self, points: &[Pos2]);

    fn reset_clip(&mut self);
}
