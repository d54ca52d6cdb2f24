//! Brush, boolean and lasso bindings.

use crate::common::{opt_ring_out, ring_in, ring_out, PyPoints};
use annogeom::api;
use pyo3::prelude::*;

#[pyfunction]
pub fn make_circle(center: (f64, f64), radius: f64, segments: usize) -> PyPoints {
    ring_out(api::make_circle(
        api::Point::new(center.0, center.1),
        radius,
        segments,
    ))
}

#[pyfunction]
#[pyo3(signature = (points, radius_px, viewport_zoom=0.0))]
pub fn brush_stroke_to_polygon(points: PyPoints, radius_px: f64, viewport_zoom: f64) -> PyPoints {
    ring_out(api::brush_stroke_to_polygon(
        &ring_in(&points),
        radius_px,
        viewport_zoom,
    ))
}

#[pyfunction]
#[pyo3(signature = (points, radius_px, viewport_zoom=0.0))]
pub fn build_brush_hull(points: PyPoints, radius_px: f64, viewport_zoom: f64) -> Option<PyPoints> {
    opt_ring_out(api::build_brush_hull(
        &ring_in(&points),
        radius_px,
        viewport_zoom,
    ))
}

#[pyfunction]
pub fn polygon_union(a: PyPoints, b: PyPoints) -> Option<PyPoints> {
    opt_ring_out(api::polygon_union(&ring_in(&a), &ring_in(&b)))
}

#[pyfunction]
pub fn polygon_difference(a: PyPoints, b: PyPoints) -> Option<PyPoints> {
    opt_ring_out(api::polygon_difference(&ring_in(&a), &ring_in(&b)))
}

#[pyfunction]
#[pyo3(signature = (annotation, stroke, radius_px, viewport_zoom=0.0))]
pub fn erase_with_brush(
    annotation: PyPoints,
    stroke: PyPoints,
    radius_px: f64,
    viewport_zoom: f64,
) -> Option<PyPoints> {
    opt_ring_out(api::erase_with_brush(
        &ring_in(&annotation),
        &ring_in(&stroke),
        radius_px,
        viewport_zoom,
    ))
}

#[pyfunction]
#[pyo3(signature = (points, epsilon=0.0))]
pub fn lasso_to_polygon(points: PyPoints, epsilon: f64) -> Option<PyPoints> {
    opt_ring_out(api::lasso_to_polygon(&ring_in(&points), epsilon))
}

#[pyfunction]
pub fn ring_area(points: PyPoints) -> f64 {
    api::ring_area(&ring_in(&points))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(make_circle, m)?)?;
    m.add_function(wrap_pyfunction!(brush_stroke_to_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(build_brush_hull, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_union, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_difference, m)?)?;
    m.add_function(wrap_pyfunction!(erase_with_brush, m)?)?;
    m.add_function(wrap_pyfunction!(lasso_to_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(ring_area, m)?)?;
    Ok(())
}
