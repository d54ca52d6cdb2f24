//! Brush eraser: subtract a brush stroke's hull from an annotation ring.

use crate::boolean::polygon_difference;
use crate::hull::build_brush_hull;
use crate::ring::{close_ring, Point, Ring};

/// Erase everything the brush stroke touched from `annotation`.
///
/// - empty stroke or non-positive radius: the annotation, closed, unchanged;
/// - annotation with fewer than three points, or fully erased: `None`;
/// - erasing that splits the annotation keeps the largest remaining piece.
pub fn erase_with_brush(
    annotation: &[Point],
    stroke: &[Point],
    radius_px: f64,
    viewport_zoom: f64,
) -> Option<Ring> {
    if annotation.len() < 3 {
        return None;
    }
    match build_brush_hull(stroke, radius_px, viewport_zoom) {
        Some(brush) => polygon_difference(annotation, &brush),
        None => Some(close_ring(annotation)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{is_closed, ring_area};
    use crate::sample::line_stroke;
    use nalgebra::vector;

    fn rect(w: f64, h: f64) -> Ring {
        vec![
            vector![0.0, 0.0],
            vector![w, 0.0],
            vector![w, h],
            vector![0.0, h],
        ]
    }

    #[test]
    fn no_stroke_leaves_annotation() {
        let a = rect(4.0, 4.0);
        let out = erase_with_brush(&a, &[], 2.0, 0.0).unwrap();
        assert!(is_closed(&out));
        assert_eq!(out, close_ring(&a));
        assert!(erase_with_brush(&a, &[vector![1.0, 1.0]], 0.0, 0.0).is_some());
    }

    #[test]
    fn degenerate_annotation_is_rejected() {
        let seg = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
        assert!(erase_with_brush(&seg, &[vector![0.0, 0.0]], 1.0, 0.0).is_none());
    }

    #[test]
    fn erasing_everything_leaves_nothing() {
        let a = rect(2.0, 2.0);
        let out = erase_with_brush(&a, &[vector![1.0, 1.0]], 10.0, 0.0);
        assert!(out.map_or(true, |r| ring_area(&r) < 1e-6));
    }

    #[test]
    fn cut_through_keeps_larger_side() {
        // Vertical swipe at x = 3 splits a 10x4 rectangle; the right side is larger.
        let a = rect(10.0, 4.0);
        let stroke = line_stroke(vector![3.0, -2.0], vector![3.0, 6.0], 17);
        let out = erase_with_brush(&a, &stroke, 1.0, 0.0).unwrap();
        assert!(out.iter().all(|p| p.x > 3.5));
        let area = ring_area(&out);
        assert!(area > 5.5 * 4.0 && area < 6.1 * 4.0, "area {area}");
    }

    #[test]
    fn nibble_reduces_area() {
        let a = rect(10.0, 10.0);
        let before = ring_area(&a);
        let out = erase_with_brush(&a, &[vector![10.0, 10.0]], 2.0, 0.0).unwrap();
        let after = ring_area(&out);
        assert!(after < before);
        assert!(before - after < std::f64::consts::PI);
    }
}
