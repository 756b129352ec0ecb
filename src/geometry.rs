//! Scanline coverage for fills that egui cannot express directly.
//!
//! egui tessellates convex polygons only and clips to rectangles only. Concave
//! boundary fills and coverage circles clipped to the boundary are therefore
//! reduced to horizontal spans, one row of pixels at a time, sampled at the row
//! centre. Polygons use the nonzero winding rule.

use egui::{Pos2, Rect};

/// A covered run `x0..x1` on the pixel row starting at `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub y: f32,
    pub x0: f32,
    pub x1: f32,
}

impl Span {
    pub fn rect(&self) -> Rect {
        Rect::from_min_max(Pos2::new(self.x0, self.y), Pos2::new(self.x1, self.y + 1.0))
    }
}

type Interval = (f32, f32);

/// Covered x-intervals of a polygon on the horizontal line `y`, sorted and disjoint.
pub fn polygon_intervals(points: &[Pos2], y: f32) -> Vec<Interval> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut crossings: Vec<(f32, i32)> = Vec::new();
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        if a.y == b.y {
            continue;
        }
        // Half-open in y so a vertex shared by two edges is counted once.
        let (lo, hi, dir) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
        if y < lo.y || y >= hi.y {
            continue;
        }
        let t = (y - lo.y) / (hi.y - lo.y);
        crossings.push((lo.x + t * (hi.x - lo.x), dir));
    }
    crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut intervals = Vec::new();
    let mut winding = 0;
    let mut start = 0.0;
    for (x, dir) in crossings {
        let was_inside = winding != 0;
        winding += dir;
        match (was_inside, winding != 0) {
            (false, true) => start = x,
            (true, false) if x > start => intervals.push((start, x)),
            _ => {}
        }
    }
    intervals
}

/// Covered x-interval of a circle on the horizontal line `y`.
pub fn circle_interval(center: Pos2, radius: f32, y: f32) -> Option<Interval> {
    let dy = y - center.y;
    let sq = radius * radius - dy * dy;
    if sq.is_nan() || sq <= 0.0 {
        return None;
    }
    let half = sq.sqrt();
    Some((center.x - half, center.x + half))
}

fn intersect(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let lo = a[i].0.max(b[j].0);
        let hi = a[i].1.min(b[j].1);
        if hi > lo {
            out.push((lo, hi));
        }
        if a[i].1 < b[j].1 {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

/// Walks the pixel rows of `extent` (limited to `bounds`) and collects the
/// intervals produced by `row`, clipped to `clip` when one is given.
fn rasterize(
    extent: Rect,
    bounds: Rect,
    clip: Option<&[Pos2]>,
    row: impl Fn(f32) -> Vec<Interval>,
) -> Vec<Span> {
    let area = extent.intersect(bounds);
    if !area.is_positive() {
        return Vec::new();
    }

    let bounds_interval = [(bounds.min.x, bounds.max.x)];
    let first = area.min.y.floor() as i32;
    let last = area.max.y.ceil() as i32;

    let mut spans = Vec::new();
    for row_index in first..last {
        let y = row_index as f32;
        let sample = y + 0.5;
        let mut intervals = intersect(&row(sample), &bounds_interval);
        if let Some(clip) = clip {
            intervals = intersect(&intervals, &polygon_intervals(clip, sample));
        }
        spans.extend(intervals.into_iter().map(|(x0, x1)| Span { y, x0, x1 }));
    }
    spans
}

/// Spans of a polygon fill, optionally clipped to another polygon.
pub fn polygon_spans(points: &[Pos2], bounds: Rect, clip: Option<&[Pos2]>) -> Vec<Span> {
    if points.len() < 3 {
        return Vec::new();
    }
    rasterize(Rect::from_points(points), bounds, clip, |y| polygon_intervals(points, y))
}

/// Spans of a circle fill, optionally clipped to a polygon.
pub fn circle_spans(center: Pos2, radius: f32, bounds: Rect, clip: Option<&[Pos2]>) -> Vec<Span> {
    if radius.is_nan() || radius <= 0.0 {
        return Vec::new();
    }
    let extent = Rect::from_center_size(center, egui::Vec2::splat(radius * 2.0));
    rasterize(extent, bounds, clip, |y| {
        circle_interval(center, radius, y).into_iter().collect()
    })
}
