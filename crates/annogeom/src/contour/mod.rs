//! Mask contour extraction: probability grid → one image-space ring.
//!
//! Pipeline
//! 1. Moore-neighbor trace of the first foreground region's boundary.
//! 2. If the trace has fewer than three cells, convex hull of every
//!    foreground cell (open form).
//! 3. Close the ring and simplify it with Douglas-Peucker in grid units.
//! 4. Map grid `(x, y)` to `(crop.x + x·crop.width/W, crop.y + y·crop.height/H)`.
//!
//! Nothing here fails: an all-background or degenerate mask yields `None`.

mod mask;
mod simplify;
mod trace;

pub use mask::{CropRect, Mask, MaskError, GRID_SIZE};
pub use simplify::{douglas_peucker, perpendicular_distance};
pub use trace::{find_edge_start, moore_trace, Trace, TraceEnd};

use crate::convex::{convex_hull, Closure};
use crate::ring::{close_ring, vertex_count, Point, Ring};

/// Contour extraction settings.
#[derive(Clone, Copy, Debug)]
pub struct MaskCfg {
    /// Cells strictly above this value are foreground.
    pub threshold: f64,
    /// Douglas-Peucker tolerance in grid cells.
    pub simplify_epsilon: f64,
}

impl Default for MaskCfg {
    fn default() -> Self {
        Self {
            threshold: 0.25,
            simplify_epsilon: 1.0,
        }
    }
}

/// Extract the region outline of `mask` in image coordinates.
pub fn mask_to_polygon(mask: &Mask, crop: CropRect, threshold: f64) -> Option<Ring> {
    let cfg = MaskCfg {
        threshold,
        ..MaskCfg::default()
    };
    mask_to_polygon_with_cfg(mask, crop, cfg)
}

/// `mask_to_polygon` with explicit settings.
pub fn mask_to_polygon_with_cfg(mask: &Mask, crop: CropRect, cfg: MaskCfg) -> Option<Ring> {
    let contour = grid_contour(mask, cfg)?;
    let closed = close_ring(&contour);
    let simplified = douglas_peucker(&closed, cfg.simplify_epsilon);
    let grid_ring = if vertex_count(&simplified) < 3 {
        tracing::debug!(
            before = closed.len(),
            after = simplified.len(),
            "simplification collapsed the contour; keeping it unsimplified"
        );
        closed
    } else {
        simplified
    };

    let sx = crop.width / mask.width() as f64;
    let sy = crop.height / mask.height() as f64;
    Some(
        grid_ring
            .into_iter()
            .map(|p| Point::new(crop.x + p.x * sx, crop.y + p.y * sy))
            .collect(),
    )
}

/// Open contour in grid coordinates: the traced boundary, or the convex hull
/// of the foreground when tracing finds fewer than three cells.
fn grid_contour(mask: &Mask, cfg: MaskCfg) -> Option<Ring> {
    let trace = moore_trace(mask, cfg.threshold);
    if trace.cells.len() >= 3 {
        return Some(cells_to_points(&trace.cells));
    }
    let cells = mask.foreground_cells(cfg.threshold);
    let hull = convex_hull(&cells_to_points(&cells), Closure::Open);
    tracing::debug!(
        traced = trace.cells.len(),
        end = ?trace.end,
        foreground = cells.len(),
        hull = hull.len(),
        "trace too short; using convex hull of the foreground"
    );
    (hull.len() >= 3).then_some(hull)
}

fn cells_to_points(cells: &[(i64, i64)]) -> Ring {
    cells
        .iter()
        .map(|&(x, y)| Point::new(x as f64, y as f64))
        .collect()
}
