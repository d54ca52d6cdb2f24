//! Douglas-Peucker polyline simplification.

use crate::ring::{Point, Ring};

/// Distance from `p` to the line through `a` and `b`.
///
/// A zero-length chord (closed ring: first == last) falls back to the
/// distance from `a`, so the farthest vertex still splits the ring.
pub fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len = ab.norm();
    if len == 0.0 {
        return (p - a).norm();
    }
    let ap = p - a;
    (ab.x * ap.y - ab.y * ap.x).abs() / len
}

/// Simplify a polyline, keeping both endpoints.
///
/// Inputs with two or fewer points are returned unchanged.
pub fn douglas_peucker(points: &[Point], epsilon: f64) -> Ring {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_dist = 0.0;
    let mut max_idx = 0;
    for (i, p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let d = perpendicular_distance(*p, first, last);
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }

    if max_dist < epsilon || max_idx == 0 {
        return vec![first, last];
    }
    let mut left = douglas_peucker(&points[..=max_idx], epsilon);
    let right = douglas_peucker(&points[max_idx..], epsilon);
    // Drop the shared split point once.
    left.pop();
    left.extend(right);
    left
}
