//! Annotation geometry engine.
//!
//! Turns free-form input into single-ring polygon annotations:
//! - brush strokes and lasso drags (`stroke`, `hull`, `lasso`),
//! - polygon union/difference for incremental painting and erasing
//!   (`boolean`, `erase`),
//! - segmentation masks into vector contours (`contour`), with a convex-hull
//!   fallback (`convex`).
//!
//! Every operation is a pure function over caller-owned point arrays. "No
//! usable geometry" is reported as `None` or an empty ring, never as a panic
//! or an error.

pub mod api;
pub mod boolean;
pub mod contour;
pub mod convex;
pub mod erase;
pub mod hull;
pub mod lasso;
pub mod ring;
pub mod sample;
pub mod stroke;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use ring::{Point, Ring};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boolean::{polygon_difference, polygon_union};
    pub use crate::contour::{douglas_peucker, mask_to_polygon, CropRect, Mask, MaskCfg};
    pub use crate::convex::{convex_hull, convex_hull_closed, Closure};
    pub use crate::erase::erase_with_brush;
    pub use crate::hull::{build_brush_hull, BrushHull};
    pub use crate::lasso::lasso_to_polygon;
    pub use crate::ring::{close_ring, is_closed, ring_area, ring_centroid, Point, Ring};
    pub use crate::stroke::{brush_stroke_to_polygon, make_circle, BrushCfg};
    pub use nalgebra::Vector2 as Vec2;
}
