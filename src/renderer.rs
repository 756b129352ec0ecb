// src/renderer.rs
use egui::{Rect, pos2};

use crate::scene::{GardenObject, ObjectKind, Scene, Vertex};
use crate::style::GardenStyle;
use crate::surface::Surface;

/// Redraws the whole scene on every call. There is no incremental path.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: GardenStyle,
}

impl Renderer {
    /// Creates a renderer drawing with the given style
    ///
    /// Args:
    ///     style (GardenStyle): Colours and dimensions for every layer
    ///
    /// Returns:
    ///     Self: Renderer ready to paint scenes
    pub fn new(style: GardenStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &GardenStyle {
        &self.style
    }

    /// Renders the current frame
    ///
    /// Layers are painted in a fixed order: boundary, objects, then sprinkler
    /// coverage clipped to the boundary. An empty scene gets the instruction prompt.
    ///
    /// Args:
    ///     scene (Scene): The garden to draw
    ///     surface (Surface): The target, fully repainted
    pub fn render(&self, scene: &Scene, surface: &mut dyn Surface) {
        surface.clear();

        self.draw_boundary(scene.vertices(), surface);
        for object in scene.objects() {
            self.draw_object(object, surface);
        }
        self.draw_coverage(scene, surface);

        if scene.is_empty() {
            self.draw_prompt(surface);
        }
    }

    fn draw_boundary(&self, vertices: &[Vertex], surface: &mut dyn Surface) {
        if vertices.is_empty() {
            return;
        }

        let closed = vertices.len() >= 3;
        if closed {
            surface.fill_polygon(vertices, self.style.boundary_fill);
        }
        surface.stroke_path(vertices, closed, self.style.boundary_stroke);

        for vertex in vertices {
            surface.fill_circle(
                *vertex,
                self.style.vertex_marker_radius,
                self.style.vertex_marker_color,
            );
        }
    }

    fn draw_object(&self, object: &GardenObject, surface: &mut dyn Surface) {
        let style = &self.style;
        let pos = object.pos;
        match object.kind {
            ObjectKind::Tree => {
                // Trunk first so the canopy covers its top half.
                let trunk = Rect::from_min_size(
                    pos2(pos.x - style.trunk_size.x / 2.0, pos.y),
                    style.trunk_size,
                );
                surface.fill_rect(trunk, style.trunk_color);
                surface.fill_circle(pos, style.canopy_radius, style.canopy_color);
            }
            ObjectKind::Patio => {
                let patio = Rect::from_center_size(pos, style.patio_size);
                surface.fill_rect(patio, style.patio_fill);
                surface.stroke_rect(patio, style.patio_stroke);
            }
            ObjectKind::Sprinkler { .. } => {
                surface.fill_circle(pos, style.sprinkler_radius, style.sprinkler_color);
            }
        }
    }

    fn draw_coverage(&self, scene: &Scene, surface: &mut dyn Surface) {
        if scene.is_closed() {
            surface.set_clip_polygon(scene.vertices());
        }

        for (pos, range) in scene.sprinklers() {
            match range.radius() {
                Some(radius) => surface.fill_circle(pos, radius, self.style.coverage_color),
                None => log::debug!("No coverage drawn for sprinkler at {pos:?} with range {range:?}"),
            }
        }

        surface.reset_clip();
    }

    fn draw_prompt(&self, surface: &mut dyn Surface) {
        let size = surface.size();
        let center = pos2(size.x / 2.0, size.y / 2.0);
        surface.text_centered(
            center,
            &self.style.prompt_text,
            self.style.prompt_font_size,
            self.style.prompt_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SprinklerRange;
    use egui::vec2;
    use crate::surface::{DrawOp, RecordingSurface};

    fn render(scene: &Scene) -> RecordingSurface {
        let renderer = Renderer::default();
        let mut surface = RecordingSurface::new(renderer.style().surface_size);
        renderer.render(scene, &mut surface);
        surface
    }

    #[test]
    fn test_render_starts_with_clear() {
        let surface = render(&Scene::new());
        assert_eq!(surface.ops().first(), Some(&DrawOp::Clear));
    }

    #[test]
    fn test_open_polyline_below_three_vertices() {
        let mut scene = Scene::new();
        scene.add_vertex(pos2(10.0, 10.0));
        scene.add_vertex(pos2(50.0, 10.0));
        let surface = render(&scene);

        assert!(!surface.ops().iter().any(|op| matches!(op, DrawOp::FillPolygon { .. })));
        assert!(surface.ops().contains(&DrawOp::StrokePath {
            points: vec![pos2(10.0, 10.0), pos2(50.0, 10.0)],
            closed: false,
            stroke: GardenStyle::default().boundary_stroke,
        }));
        assert_eq!(surface.circles().count(), 2);
    }

    #[test]
    fn test_fill_comes_before_stroke() {
        let mut scene = Scene::new();
        for p in [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)] {
            scene.add_vertex(p);
        }
        let surface = render(&scene);
        let fill = surface.ops().iter().position(|op| matches!(op, DrawOp::FillPolygon { .. }));
        let stroke = surface.ops().iter().position(|op| matches!(op, DrawOp::StrokePath { closed: true, .. }));
        assert!(fill.unwrap() < stroke.unwrap());
    }

    #[test]
    fn test_tree_trunk_then_canopy() {
        let mut scene = Scene::new();
        scene.add_object(GardenObject::tree(pos2(400.0, 300.0)));
        let surface = render(&scene);
        let style = GardenStyle::default();

        assert_eq!(
            &surface.ops()[1..3],
            &[
                DrawOp::FillRect {
                    rect: Rect::from_min_size(pos2(395.0, 300.0), vec2(10.0, 20.0)),
                    color: style.trunk_color,
                    clipped: false,
                },
                DrawOp::FillCircle {
                    center: pos2(400.0, 300.0),
                    radius: 20.0,
                    color: style.canopy_color,
                    clipped: false,
                },
            ]
        );
    }

    #[test]
    fn test_patio_filled_and_outlined() {
        let mut scene = Scene::new();
        scene.add_object(GardenObject::patio(pos2(100.0, 100.0)));
        let surface = render(&scene);
        let rect = Rect::from_min_max(pos2(60.0, 75.0), pos2(140.0, 125.0));
        assert!(surface.ops().iter().any(|op| matches!(op, DrawOp::FillRect { rect: r, .. } if *r == rect)));
        assert!(surface.ops().iter().any(|op| matches!(op, DrawOp::StrokeRect { rect: r, .. } if *r == rect)));
    }

    #[test]
    fn test_invalid_and_zero_range_draw_body_only() {
        let mut scene = Scene::new();
        scene.add_object(GardenObject::sprinkler(pos2(10.0, 10.0), SprinklerRange::Invalid));
        scene.add_object(GardenObject::sprinkler(pos2(20.0, 20.0), SprinklerRange::Pixels(0)));
        let surface = render(&scene);

        let radii: Vec<f32> = surface
            .circles()
            .map(|op| match op {
                DrawOp::FillCircle { radius, .. } => *radius,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(radii, [6.0, 6.0]);
    }

    #[test]
    fn test_prompt_only_when_empty() {
        let surface = render(&Scene::new());
        assert!(matches!(
            surface.ops().last(),
            Some(DrawOp::Text { pos, .. }) if *pos == pos2(400.0, 300.0)
        ));

        let mut scene = Scene::new();
        scene.add_vertex(pos2(1.0, 1.0));
        let surface = render(&scene);
        assert!(!surface.ops().iter().any(|op| matches!(op, DrawOp::Text { .. })));
    }
}
