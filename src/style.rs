use egui::{Color32, Stroke, Vec2, vec2};

/// Look and dimensions of the sketch.
///
/// Every drawing constant lives here so the renderer itself stays free of magic
/// numbers. The defaults reproduce the classic garden planner palette.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct GardenStyle {
    /// Logical size of the drawing surface
    pub surface_size: Vec2,
    pub background: Color32,

    pub boundary_stroke: Stroke,
    pub boundary_fill: Color32,
    pub vertex_marker_radius: f32,
    pub vertex_marker_color: Color32,

    /// Trunk width and height; the trunk hangs below the tree position
    pub trunk_size: Vec2,
    pub trunk_color: Color32,
    pub canopy_radius: f32,
    pub canopy_color: Color32,

    /// Patio footprint, centred on its position
    pub patio_size: Vec2,
    pub patio_fill: Color32,
    pub patio_stroke: Stroke,

    pub sprinkler_radius: f32,
    pub sprinkler_color: Color32,
    pub coverage_color: Color32,

    pub prompt_text: String,
    pub prompt_font_size: f32,
    pub prompt_color: Color32,

    /// Initial contents of the sprinkler range input
    pub default_range: String,
}

impl Default for GardenStyle {
    fn default() -> Self {
        Self {
            surface_size: vec2(800.0, 600.0),
            background: Color32::WHITE,

            boundary_stroke: Stroke::new(3.0, Color32::from_rgb(0x00, 0x64, 0x00)),
            boundary_fill: Color32::from_rgba_unmultiplied(144, 238, 144, 77),
            vertex_marker_radius: 5.0,
            vertex_marker_color: Color32::from_rgb(0xFF, 0x00, 0x00),

            trunk_size: vec2(10.0, 20.0),
            trunk_color: Color32::from_rgb(0x8B, 0x45, 0x13),
            canopy_radius: 20.0,
            canopy_color: Color32::from_rgb(0x22, 0x8B, 0x22),

            patio_size: vec2(80.0, 50.0),
            patio_fill: Color32::from_rgb(0xC2, 0xB2, 0x80),
            patio_stroke: Stroke::new(2.0, Color32::from_rgb(0x8C, 0x78, 0x53)),

            sprinkler_radius: 6.0,
            sprinkler_color: Color32::from_rgb(0x00, 0x00, 0xFF),
            coverage_color: Color32::from_rgba_unmultiplied(0, 100, 255, 77),

            prompt_text: "Select 'Draw Border' and click to outline your garden.".to_owned(),
            prompt_font_size: 18.0,
            prompt_color: Color32::from_gray(0x88),

            default_range: "100".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_style_fills_defaults() {
        let style: GardenStyle =
            serde_json::from_str(r#"{"canopy_radius": 30.0, "default_range": "40"}"#).unwrap();
        assert_eq!(style.canopy_radius, 30.0);
        assert_eq!(style.default_range, "40");
        assert_eq!(style.surface_size, vec2(800.0, 600.0));
        assert_eq!(style.patio_size, GardenStyle::default().patio_size);
    }
}
