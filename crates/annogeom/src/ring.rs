//! Points, rings, and the small predicates every other module shares.
//!
//! Conventions
//! - A `Point` is an ordered pair `(x, y)` in one continuous coordinate space
//!   (world or image space, depending on the caller).
//! - A `Ring` is an ordered list of points describing one simple closed curve.
//!   It may be stored open (first != last, closure implied) or closed
//!   (first == last). Functions here accept both forms.

use nalgebra::Vector2;

/// A point in world/image space.
pub type Point = Vector2<f64>;

/// One polygon boundary, open or closed.
pub type Ring = Vec<Point>;

/// Exact equality is intended: closure means the caller repeated the first
/// point verbatim.
#[inline]
fn same_point(a: &Point, b: &Point) -> bool {
    a.x == b.x && a.y == b.y
}

/// Whether `ring` repeats its first point at the end.
///
/// Rings with fewer than two points are never closed.
#[inline]
pub fn is_closed(ring: &[Point]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(a), Some(b)) if ring.len() >= 2 => same_point(a, b),
        _ => false,
    }
}

/// Return a closed copy of `ring` (appends the first point if needed).
pub fn close_ring(ring: &[Point]) -> Ring {
    let mut out = ring.to_vec();
    if let Some(&first) = ring.first() {
        if !is_closed(ring) {
            out.push(first);
        }
    }
    out
}

/// Return an open copy of `ring` (drops the duplicated closing point).
pub fn open_ring(ring: &[Point]) -> Ring {
    if is_closed(ring) {
        ring[..ring.len() - 1].to_vec()
    } else {
        ring.to_vec()
    }
}

/// Number of vertices, not counting a duplicated closing point.
#[inline]
pub fn vertex_count(ring: &[Point]) -> usize {
    if is_closed(ring) {
        ring.len() - 1
    } else {
        ring.len()
    }
}

/// Cross product of `b - a` and `c - a`; positive for a left (CCW) turn.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Signed shoelace area: positive for CCW rings in a y-up frame.
pub fn signed_ring_area(ring: &[Point]) -> f64 {
    let n = vertex_count(ring);
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// Absolute shoelace area `|Σ(x_i·y_{i+1} − x_{i+1}·y_i)| / 2`.
#[inline]
pub fn ring_area(ring: &[Point]) -> f64 {
    signed_ring_area(ring).abs()
}

/// Area centroid of a simple ring; `None` for degenerate (zero-area) rings.
pub fn ring_centroid(ring: &[Point]) -> Option<Point> {
    let n = vertex_count(ring);
    if n < 3 {
        return None;
    }
    let mut a = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        let c = p.x * q.y - q.x * p.y;
        a += c;
        cx += (p.x + q.x) * c;
        cy += (p.y + q.y) * c;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Point::new(cx / (6.0 * a), cy / (6.0 * a)))
}
