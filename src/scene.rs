use egui::Pos2;
use serde::Serialize;

use crate::error::{GardenError, GardenResult};

/// A boundary vertex in surface-local pixel coordinates.
pub type Vertex = Pos2;

/// Radius of a sprinkler's coverage, as read from the range input at placement time.
///
/// The value is stored exactly as parsed and never re-validated; zero and negative
/// ranges are kept, and an unparsable input is kept as `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprinklerRange {
    Pixels(i32),
    Invalid,
}

impl SprinklerRange {
    /// Parse the leading integer of `input`.
    ///
    /// Leading whitespace and a single sign are accepted, parsing stops at the
    /// first non-digit, and anything after it is ignored. `"50px"` reads as 50.
    pub fn parse(input: &str) -> GardenResult<i32> {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits = rest.bytes().take_while(u8::is_ascii_digit);
        let mut seen = false;
        let magnitude = digits.fold(0i64, |acc, d| {
            seen = true;
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
        if !seen {
            return Err(GardenError::InvalidRange(input.to_owned()));
        }

        let value = if negative { -magnitude } else { magnitude };
        Ok(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// Read the range input the way the dispatcher does: failures become `Invalid`.
    pub fn from_input(input: &str) -> Self {
        match Self::parse(input) {
            Ok(pixels) => Self::Pixels(pixels),
            Err(err) => {
                log::warn!("{err}; sprinkler placed without a usable range");
                Self::Invalid
            }
        }
    }

    /// Coverage radius, if a circle can be drawn at all.
    pub fn radius(self) -> Option<f32> {
        match self {
            Self::Pixels(pixels) if pixels > 0 => Some(pixels as f32),
            _ => None,
        }
    }

    pub fn pixels(self) -> Option<i32> {
        match self {
            Self::Pixels(pixels) => Some(pixels),
            Self::Invalid => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectKind {
    Tree,
    Patio,
    Sprinkler { range: SprinklerRange },
}

impl ObjectKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Patio => "patio",
            Self::Sprinkler { .. } => "sprinkler",
        }
    }
}

/// Something placed in the garden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "ObjectRecord")]
pub struct GardenObject {
    pub kind: ObjectKind,
    pub pos: Pos2,
}

impl GardenObject {
    pub fn tree(pos: Pos2) -> Self {
        Self { kind: ObjectKind::Tree, pos }
    }

    pub fn patio(pos: Pos2) -> Self {
        Self { kind: ObjectKind::Patio, pos }
    }

    pub fn sprinkler(pos: Pos2, range: SprinklerRange) -> Self {
        Self {
            kind: ObjectKind::Sprinkler { range },
            pos,
        }
    }

    /// The range of a sprinkler, `None` for every other kind.
    pub fn sprinkler_range(&self) -> Option<SprinklerRange> {
        match self.kind {
            ObjectKind::Sprinkler { range } => Some(range),
            _ => None,
        }
    }
}

// Flat `{type, x, y, range?}` shape used when the object list is shown as JSON.
#[derive(Serialize)]
struct ObjectRecord {
    #[serde(rename = "type")]
    kind: &'static str,
    x: f32,
    y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<Option<i32>>,
}

impl From<GardenObject> for ObjectRecord {
    fn from(object: GardenObject) -> Self {
        Self {
            kind: object.kind.type_name(),
            x: object.pos.x,
            y: object.pos.y,
            range: object.sprinkler_range().map(SprinklerRange::pixels),
        }
    }
}

/// The whole sketch: boundary vertices plus placed objects, both append-only.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    vertices: Vec<Vertex>,
    objects: Vec<GardenObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn add_object(&mut self, object: GardenObject) {
        self.objects.push(object);
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn objects(&self) -> &[GardenObject] {
        &self.objects
    }

    /// Sprinklers in placement order.
    pub fn sprinklers(&self) -> impl Iterator<Item = (Pos2, SprinklerRange)> + '_ {
        self.objects
            .iter()
            .filter_map(|object| object.sprinkler_range().map(|range| (object.pos, range)))
    }

    /// A boundary with three or more vertices is a closed, filled region.
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.objects.is_empty()
    }
}
