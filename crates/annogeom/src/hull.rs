//! Brush hull: everything a brush stroke has touched, as one ring.
//!
//! Each stroke sample stamps a circle of the brush radius; stamps are folded
//! into a running polygon with `polygon_union`. The fold is union-only, so the
//! hull never shrinks, and a degenerate union result is ignored rather than
//! replacing the hull. Live preview (`BrushHull::push`) and the final commit
//! (`build_brush_hull`) run the same fold and therefore agree.
//!
//! Cost is one boolean union per sample; stroke length is bounded by how long
//! the user keeps drawing.

use crate::boolean::polygon_union;
use crate::ring::{Point, Ring};
use crate::stroke::{make_circle, world_radius, BrushCfg};

/// Incremental brush hull.
#[derive(Clone, Debug)]
pub struct BrushHull {
    radius: f64,
    segments: usize,
    hull: Option<Ring>,
    samples: usize,
}

impl BrushHull {
    /// Start an empty hull for a brush of `radius_px` at `viewport_zoom`.
    pub fn new(radius_px: f64, viewport_zoom: f64) -> Self {
        Self::with_cfg(radius_px, viewport_zoom, BrushCfg::default())
    }

    /// Start an empty hull with explicit tessellation and zoom-clamp settings.
    pub fn with_cfg(radius_px: f64, viewport_zoom: f64, cfg: BrushCfg) -> Self {
        Self {
            radius: world_radius(radius_px, viewport_zoom, cfg.min_zoom_scale),
            segments: cfg.circle_segments,
            hull: None,
            samples: 0,
        }
    }

    /// World-space brush radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of samples pushed so far.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Stamp one more sample into the hull.
    ///
    /// A brush with non-positive (or NaN) radius ignores samples.
    pub fn push(&mut self, point: Point) {
        if !(self.radius > 0.0) {
            return;
        }
        self.samples += 1;
        let stamp = make_circle(point, self.radius, self.segments);
        match &self.hull {
            None => self.hull = Some(stamp),
            Some(current) => match polygon_union(current, &stamp) {
                Some(merged) if merged.len() >= 3 => self.hull = Some(merged),
                _ => {
                    tracing::trace!(x = point.x, y = point.y, "degenerate union; hull kept");
                }
            },
        }
    }

    /// Current hull, if it is a usable ring.
    pub fn ring(&self) -> Option<&Ring> {
        self.hull.as_ref().filter(|h| h.len() >= 3)
    }

    /// Consume the accumulator and return the hull.
    pub fn finish(self) -> Option<Ring> {
        self.hull.filter(|h| h.len() >= 3)
    }
}

impl Extend<Point> for BrushHull {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            self.push(p);
        }
    }
}

/// Fold every stroke sample into one hull ring.
///
/// `None` for an empty stroke or a non-positive radius.
pub fn build_brush_hull(points: &[Point], radius_px: f64, viewport_zoom: f64) -> Option<Ring> {
    build_brush_hull_with_cfg(points, radius_px, viewport_zoom, BrushCfg::default())
}

/// `build_brush_hull` with explicit tessellation settings.
pub fn build_brush_hull_with_cfg(
    points: &[Point],
    radius_px: f64,
    viewport_zoom: f64,
    cfg: BrushCfg,
) -> Option<Ring> {
    if points.is_empty() || !(radius_px > 0.0) {
        return None;
    }
    let mut hull = BrushHull::with_cfg(radius_px, viewport_zoom, cfg);
    hull.extend(points.iter().copied());
    hull.finish()
}
