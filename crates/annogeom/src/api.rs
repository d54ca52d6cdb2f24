//! Curated API surface for callers embedding the engine.
//!
//! - Prefer these re-exports over reaching into module paths; module layout
//!   may change, this list is what the CLI and the Python bindings use.
//! - Every entry point is pure and synchronous; call it from any thread.

// Brush strokes and hulls
pub use crate::hull::{build_brush_hull, build_brush_hull_with_cfg, BrushHull};
pub use crate::stroke::{
    brush_stroke_to_polygon, brush_stroke_to_polygon_with_cfg, make_circle, world_radius, BrushCfg,
};
// Boolean composition
pub use crate::boolean::{largest_ring, polygon_boolean, polygon_difference, polygon_union, BoolOp};
pub use crate::erase::erase_with_brush;
pub use crate::lasso::lasso_to_polygon;
// Hulls and contours
pub use crate::contour::{
    douglas_peucker, mask_to_polygon, mask_to_polygon_with_cfg, moore_trace, CropRect, Mask,
    MaskCfg, MaskError, TraceEnd, GRID_SIZE,
};
pub use crate::convex::{convex_hull, convex_hull_closed, Closure};
// Ring helpers
pub use crate::ring::{
    close_ring, is_closed, open_ring, ring_area, ring_centroid, signed_ring_area, Point, Ring,
};

/// `(x, y)` tuples to points.
pub fn points_from_tuples(pts: &[(f64, f64)]) -> Ring {
    pts.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Points to `(x, y)` tuples.
pub fn points_to_tuples(ring: &[Point]) -> Vec<(f64, f64)> {
    ring.iter().map(|p| (p.x, p.y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_round_trip_preserves_order() {
        let pts = vec![(0.0, 1.0), (2.5, -3.0), (4.0, 4.0)];
        assert_eq!(points_to_tuples(&points_from_tuples(&pts)), pts);
    }
}
