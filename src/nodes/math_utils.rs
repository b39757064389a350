//! Geometry helpers for edge curves and hit testing

use egui::{Pos2, Vec2};

/// Calculates a point on a cubic Bézier curve at parameter t (0.0 to 1.0).
pub fn cubic_bezier_point(t: f32, p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2) -> Pos2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    Pos2::new(
        mt3 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t3 * p3.x,
        mt3 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t3 * p3.y,
    )
}

/// Calculates the minimum distance from a point to a line segment.
pub fn distance_to_line_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let ap = point - a;
    let ab_len_sq = ab.x * ab.x + ab.y * ab.y;

    if ab_len_sq == 0.0 {
        return (point - a).length();
    }

    let t = ((ap.x * ab.x + ap.y * ab.y) / ab_len_sq).clamp(0.0, 1.0);
    let projection = a + ab * t;
    (point - projection).length()
}

/// Control points of the vertical-flow curve from a source handle down to a target handle
pub fn edge_curve(from: Pos2, to: Pos2) -> [Pos2; 4] {
    let vertical_distance = (to.y - from.y).abs();
    let control_offset = if vertical_distance > 10.0 {
        (vertical_distance * 0.4).max(40.0)
    } else {
        60.0
    };

    [
        from,
        from + Vec2::new(0.0, control_offset),
        to - Vec2::new(0.0, control_offset),
        to,
    ]
}

/// Distance from a point to the sampled edge curve between two handles
pub fn distance_to_edge(point: Pos2, from: Pos2, to: Pos2) -> f32 {
    const SEGMENTS: usize = 20;
    let [p0, p1, p2, p3] = edge_curve(from, to);

    let mut best = f32::INFINITY;
    let mut prev = p0;
    for i in 1..=SEGMENTS {
        let t = i as f32 / SEGMENTS as f32;
        let next = cubic_bezier_point(t, p0, p1, p2, p3);
        best = best.min(distance_to_line_segment(point, prev, next));
        prev = next;
    }
    best
}
