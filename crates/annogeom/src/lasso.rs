//! Lasso drags: pointer samples closed into a polygon ring.

use crate::contour::douglas_peucker;
use crate::ring::{close_ring, ring_area, vertex_count, Point, Ring};

/// Close a lasso path into a ring.
///
/// Consecutive duplicate samples are dropped. `epsilon > 0` simplifies the
/// closed ring with Douglas-Peucker (world units); if that leaves fewer than
/// three distinct vertices the unsimplified ring is returned. `None` for fewer
/// than three distinct samples or a zero-area path.
pub fn lasso_to_polygon(points: &[Point], epsilon: f64) -> Option<Ring> {
    let mut path: Ring = Vec::with_capacity(points.len() + 1);
    for p in points {
        if path.last() != Some(p) {
            path.push(*p);
        }
    }
    let closed = close_ring(&path);
    if vertex_count(&closed) < 3 || ring_area(&closed) == 0.0 {
        return None;
    }
    if !(epsilon > 0.0) {
        return Some(closed);
    }
    let simplified = douglas_peucker(&closed, epsilon);
    if vertex_count(&simplified) < 3 || ring_area(&simplified) == 0.0 {
        return Some(closed);
    }
    Some(simplified)
}
