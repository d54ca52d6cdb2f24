//! Convex hull of a point set (Graham scan).
//!
//! One implementation serves both call sites:
//! - `convex_hull_closed` is the standalone utility and repeats the first hull
//!   point at the end;
//! - the mask contour fallback asks for `Closure::Open` and closes the ring
//!   itself later in its pipeline.

use std::cmp::Ordering;

use crate::ring::{cross, Point, Ring};

/// Output form of a hull ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Closure {
    /// First point is not repeated.
    Open,
    /// First point is repeated at the end.
    Closed,
}

/// Convex hull in CCW order (y-up) starting at the lowest point.
///
/// Collinear boundary points are dropped. Fewer than three input points, or a
/// hull that degenerates to fewer than three vertices, give an empty ring.
pub fn convex_hull(points: &[Point], closure: Closure) -> Ring {
    if points.len() < 3 {
        return Vec::new();
    }
    // Pivot: minimum y, ties broken by minimum x.
    let mut pivot_idx = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let best = points[pivot_idx];
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            pivot_idx = i;
        }
    }
    let pivot = points[pivot_idx];

    let mut rest: Vec<Point> = points
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pivot_idx)
        .map(|(_, p)| *p)
        .collect();
    rest.sort_by(|a, b| {
        let da = a - pivot;
        let db = b - pivot;
        da.y.atan2(da.x)
            .partial_cmp(&db.y.atan2(db.x))
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                da.norm_squared()
                    .partial_cmp(&db.norm_squared())
                    .unwrap_or(Ordering::Equal)
            })
    });

    let mut hull: Ring = Vec::with_capacity(points.len() + 1);
    hull.push(pivot);
    for p in rest {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    if hull.len() < 3 {
        return Vec::new();
    }
    if closure == Closure::Closed {
        hull.push(pivot);
    }
    hull
}

/// Standalone hull utility: closed ring, empty for fewer than three points.
#[inline]
pub fn convex_hull_closed(points: &[Point]) -> Ring {
    convex_hull(points, Closure::Closed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{is_closed, ring_area, signed_ring_area};
    use crate::stroke::make_circle;
    use nalgebra::vector;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn too_few_points() {
        assert!(convex_hull_closed(&[]).is_empty());
        assert!(convex_hull_closed(&[vector![0.0, 0.0], vector![1.0, 1.0]]).is_empty());
    }

    #[test]
    fn collinear_points_have_no_hull() {
        let pts: Vec<Point> = (0..5).map(|i| vector![i as f64, 2.0 * i as f64]).collect();
        assert!(convex_hull_closed(&pts).is_empty());
    }

    #[test]
    fn square_with_interior_points() {
        let pts = vec![
            vector![0.5, 0.5],
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![0.2, 0.7],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![0.5, 0.0], // on an edge, dropped
        ];
        let hull = convex_hull_closed(&pts);
        assert!(is_closed(&hull));
        assert_eq!(hull.len(), 5);
        assert_eq!(hull[0], vector![0.0, 0.0]);
        assert!(signed_ring_area(&hull) > 0.0);
        assert!((ring_area(&hull) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn open_and_closed_forms_agree() {
        let mut rng = StdRng::seed_from_u64(11);
        let pts: Vec<Point> = (0..50)
            .map(|_| vector![rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
            .collect();
        let open = convex_hull(&pts, Closure::Open);
        let closed = convex_hull(&pts, Closure::Closed);
        assert!(!is_closed(&open));
        assert_eq!(&closed[..closed.len() - 1], &open[..]);
        // Every input point lies inside (left of every CCW edge).
        for p in &pts {
            for k in 0..open.len() {
                let a = open[k];
                let b = open[(k + 1) % open.len()];
                assert!(cross(a, b, *p) >= -1e-12);
            }
        }
    }

    #[test]
    fn duplicate_pivot_is_harmless() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 2.0],
        ];
        let hull = convex_hull(&pts, Closure::Open);
        assert_eq!(hull.len(), 3);
    }

    proptest! {
        #[test]
        fn convex_input_keeps_every_vertex(
            cx in -100.0f64..100.0,
            cy in -100.0f64..100.0,
            r in 0.5f64..50.0,
            n in 3usize..40,
            shift in 0usize..40,
        ) {
            // Open regular n-gon, rotated to an arbitrary starting index.
            let mut ring = make_circle(vector![cx, cy], r, n);
            ring.pop();
            ring.rotate_left(shift % n);
            let hull = convex_hull_closed(&ring);
            prop_assert_eq!(hull.len(), n + 1);
            for p in &ring {
                prop_assert!(hull.iter().any(|q| q == p));
            }
        }
    }
}
