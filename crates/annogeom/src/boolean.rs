//! Union and difference of two simple polygons, reduced to one ring.
//!
//! The clipping itself is delegated to `geo::BooleanOps`, which returns a
//! full multi-polygon (several components, each with holes). Annotation
//! callers only ever need one representative region, so we keep the exterior
//! ring of the component with the largest shoelace area and drop holes and
//! fragments.
//!
//! Inputs may be open or closed; both are closed explicitly before clipping.
//! Rings with fewer than three points are rejected with `None`.

use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};

use crate::ring::{close_ring, ring_area, Point, Ring};

/// Which boolean operation to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoolOp {
    Union,
    Difference,
}

/// Union of `a` and `b`, reduced to the largest resulting ring.
pub fn polygon_union(a: &[Point], b: &[Point]) -> Option<Ring> {
    polygon_boolean(a, b, BoolOp::Union)
}

/// `a` minus `b`, reduced to the largest resulting ring.
///
/// `None` when nothing remains (e.g. `b` covers `a`).
pub fn polygon_difference(a: &[Point], b: &[Point]) -> Option<Ring> {
    polygon_boolean(a, b, BoolOp::Difference)
}

/// Run `op` on two rings and keep the largest exterior ring of the result.
pub fn polygon_boolean(a: &[Point], b: &[Point], op: BoolOp) -> Option<Ring> {
    if a.len() < 3 || b.len() < 3 {
        return None;
    }
    let pa = to_geo(&close_ring(a));
    let pb = to_geo(&close_ring(b));
    let result = match op {
        BoolOp::Union => pa.union(&pb),
        BoolOp::Difference => pa.difference(&pb),
    };
    largest_ring(exterior_rings(result))
}

/// Pick the candidate with the largest absolute shoelace area.
///
/// Zero candidates give `None`; a single candidate is returned as-is.
pub fn largest_ring(candidates: Vec<Ring>) -> Option<Ring> {
    if candidates.len() <= 1 {
        return candidates.into_iter().next();
    }
    let mut best: Option<(f64, Ring)> = None;
    for ring in candidates {
        let area = ring_area(&ring);
        match &best {
            Some((best_area, _)) if *best_area >= area => {}
            _ => best = Some((area, ring)),
        }
    }
    best.map(|(_, ring)| ring)
}

fn to_geo(ring: &[Point]) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    Polygon::new(LineString::new(coords), Vec::new())
}

fn exterior_rings(mp: MultiPolygon<f64>) -> Vec<Ring> {
    mp.into_iter()
        .map(|poly| {
            poly.exterior()
                .coords()
                .map(|c| Point::new(c.x, c.y))
                .collect::<Ring>()
        })
        .collect()
}
