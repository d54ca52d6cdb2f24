//! Circles and thick-stroke outlines.
//!
//! A brush stroke is a pointer path plus an on-screen radius. We convert the
//! radius to world units using the current viewport zoom (`2^zoom` screen
//! pixels per world unit) and offset the path to both sides, closing it with
//! round caps.
//!
//! Offsets use miter-style averaged normals at interior samples and are not
//! clipped: sharp turns can produce self-overlapping outlines. Callers that
//! need a clean ring feed the samples through `hull::build_brush_hull`
//! instead.

use std::f64::consts::{PI, TAU};

use crate::ring::{Point, Ring};

/// Brush tessellation and zoom-clamp settings.
#[derive(Clone, Copy, Debug)]
pub struct BrushCfg {
    /// Segments of a full circle (single-sample strokes, hull stamps).
    pub circle_segments: usize,
    /// Segments of each semicircular end cap.
    pub cap_segments: usize,
    /// Lower clamp for `2^zoom`; keeps the world radius bounded at extreme zoom-out.
    pub min_zoom_scale: f64,
}

impl Default for BrushCfg {
    fn default() -> Self {
        Self {
            circle_segments: 32,
            cap_segments: 16,
            min_zoom_scale: 0.01,
        }
    }
}

/// Convert an on-screen pixel radius to world units at `viewport_zoom`.
#[inline]
pub fn world_radius(radius_px: f64, viewport_zoom: f64, min_zoom_scale: f64) -> f64 {
    radius_px / viewport_zoom.exp2().max(min_zoom_scale)
}

/// Closed circle polygon with `segments + 1` points; the last repeats the first.
///
/// Point `i` sits at angle `2π·i/segments`. A zero `segments` count yields a
/// single point `center + (r, 0)`.
pub fn make_circle(center: Point, radius: f64, segments: usize) -> Ring {
    let mut ring = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let th = if segments == 0 {
            0.0
        } else if i == segments {
            // Exact repeat of the first point so the ring reads as closed.
            0.0
        } else {
            TAU * (i as f64) / (segments as f64)
        };
        ring.push(center + Point::new(th.cos(), th.sin()) * radius);
    }
    ring
}

/// Unit left normal of segment `a → b`; zero for a zero-length segment.
#[inline]
fn segment_normal(a: Point, b: Point) -> Point {
    let d = b - a;
    let len = d.norm();
    let len = if len > 0.0 { len } else { 1.0 };
    Point::new(-d.y, d.x) / len
}

/// Interior points of a semicircle around `center`, sweeping clockwise by π
/// from angle `from`. Endpoints are excluded (they are offset samples).
fn cap_arc(center: Point, from: f64, radius: f64, segments: usize, out: &mut Ring) {
    for k in 1..segments {
        let th = from - PI * (k as f64) / (segments as f64);
        out.push(center + Point::new(th.cos(), th.sin()) * radius);
    }
}

/// Convert a brush stroke to a world-space polygon using the default `BrushCfg`.
///
/// - no points: empty ring,
/// - one point: a circle of the world radius,
/// - two or more: offset outline with round caps, explicitly closed.
pub fn brush_stroke_to_polygon(points: &[Point], radius_px: f64, viewport_zoom: f64) -> Ring {
    brush_stroke_to_polygon_with_cfg(points, radius_px, viewport_zoom, BrushCfg::default())
}

/// `brush_stroke_to_polygon` with explicit tessellation settings.
pub fn brush_stroke_to_polygon_with_cfg(
    points: &[Point],
    radius_px: f64,
    viewport_zoom: f64,
    cfg: BrushCfg,
) -> Ring {
    let r = world_radius(radius_px, viewport_zoom, cfg.min_zoom_scale);
    match points {
        [] => Vec::new(),
        [only] => make_circle(*only, r, cfg.circle_segments),
        _ => offset_outline(points, r, cfg.cap_segments),
    }
}

fn offset_outline(points: &[Point], r: f64, cap_segments: usize) -> Ring {
    let n = points.len();
    let (Some(&first), Some(&second)) = (points.first(), points.get(1)) else {
        return Vec::new();
    };
    let (Some(&last), Some(&before_last)) = (points.last(), points.get(n.wrapping_sub(2))) else {
        return Vec::new();
    };

    let mut left: Ring = Vec::with_capacity(n);
    let mut right: Ring = Vec::with_capacity(n);
    for i in 0..n {
        let normal = if i == 0 {
            segment_normal(first, second)
        } else if i == n - 1 {
            segment_normal(before_last, last)
        } else {
            let avg = segment_normal(points[i - 1], points[i])
                + segment_normal(points[i], points[i + 1]);
            let len = avg.norm();
            avg / if len > 0.0 { len } else { 1.0 }
        };
        left.push(points[i] + normal * r);
        right.push(points[i] - normal * r);
    }

    let start_from = {
        let d = right[0] - first;
        d.y.atan2(d.x)
    };
    let end_from = {
        let d = left[n - 1] - last;
        d.y.atan2(d.x)
    };

    let caps = 2 * cap_segments.saturating_sub(1);
    let mut ring: Ring = Vec::with_capacity(2 * n + caps + 1);
    ring.push(right[0]);
    cap_arc(first, start_from, r, cap_segments, &mut ring);
    ring.extend_from_slice(&left);
    cap_arc(last, end_from, r, cap_segments, &mut ring);
    ring.extend(right[1..].iter().rev().copied());
    ring.push(right[0]);
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{is_closed, ring_area};
    use nalgebra::vector;
    use proptest::prelude::*;

    #[test]
    fn world_radius_follows_zoom() {
        assert!((world_radius(10.0, 0.0, 0.01) - 10.0).abs() < 1e-12);
        assert!((world_radius(10.0, 1.0, 0.01) - 5.0).abs() < 1e-12);
        assert!((world_radius(10.0, -2.0, 0.01) - 40.0).abs() < 1e-12);
        // 2^-20 is below the clamp; the radius stops growing at 1/0.01.
        assert!((world_radius(10.0, -20.0, 0.01) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn empty_stroke_has_no_polygon() {
        assert!(brush_stroke_to_polygon(&[], 5.0, 0.0).is_empty());
    }

    #[test]
    fn single_point_is_a_circle() {
        let c = vector![3.0, 4.0];
        let ring = brush_stroke_to_polygon(&[c], 8.0, 1.0);
        assert_eq!(ring, make_circle(c, 4.0, 32));
    }

    #[test]
    fn straight_stroke_is_a_stadium() {
        let pts: Vec<Point> = (0..=10).map(|i| vector![i as f64, 0.0]).collect();
        let ring = brush_stroke_to_polygon(&pts, 2.0, 0.0);
        assert!(is_closed(&ring));
        // right + 15 cap + left + 15 cap + right[1..] + closing point
        assert_eq!(ring.len(), 1 + 15 + 11 + 15 + 10 + 1);
        for p in &ring {
            let along = p.x.clamp(0.0, 10.0);
            let d = (p - vector![along, 0.0]).norm();
            assert!((d - 2.0).abs() < 1e-9, "point {p:?} off the stadium boundary");
        }
        // Perpendicular width between the offset sides is 2r.
        let ys: Vec<f64> = ring
            .iter()
            .filter(|p| (p.x - 5.0).abs() < 1e-9)
            .map(|p| p.y)
            .collect();
        assert_eq!(ys.len(), 2);
        assert!(((ys[0] - ys[1]).abs() - 4.0).abs() < 1e-9);
        let expected = 4.0 * 10.0 + PI * 4.0;
        assert!((ring_area(&ring) - expected).abs() / expected < 0.01);
    }

    #[test]
    fn caps_bulge_past_the_endpoints() {
        let pts = vec![vector![0.0, 0.0], vector![10.0, 0.0]];
        let ring = brush_stroke_to_polygon(&pts, 1.0, 0.0);
        let min_x = ring.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = ring.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        assert!((min_x + 1.0).abs() < 1e-9);
        assert!((max_x - 11.0).abs() < 1e-9);
    }

    #[test]
    fn interior_normals_are_unit_length() {
        // Right-angle turn: the corner offset sits on the bisector at distance r.
        let pts = vec![vector![0.0, 0.0], vector![5.0, 0.0], vector![5.0, 5.0]];
        let ring = brush_stroke_to_polygon(&pts, 1.0, 0.0);
        let corner = vector![5.0, 0.0];
        let near: Vec<f64> = ring.iter().map(|p| (p - corner).norm()).collect();
        assert!(near.iter().filter(|d| (*d - 1.0).abs() < 1e-9).count() >= 2);
    }

    #[test]
    fn repeated_samples_do_not_produce_nan() {
        let p = vector![1.0, 1.0];
        let ring = brush_stroke_to_polygon(&[p, p, p], 3.0, 0.0);
        assert!(ring.iter().all(|q| q.x.is_finite() && q.y.is_finite()));
    }

    proptest! {
        #[test]
        fn circle_points_lie_on_radius(
            cx in -1e3f64..1e3,
            cy in -1e3f64..1e3,
            r in 0.0f64..1e3,
            s in 3usize..128,
        ) {
            let c = vector![cx, cy];
            let ring = make_circle(c, r, s);
            prop_assert_eq!(ring.len(), s + 1);
            prop_assert!(is_closed(&ring));
            for p in &ring {
                prop_assert!(((p - c).norm() - r).abs() <= 1e-9 * (1.0 + r));
            }
        }
    }
}
