use annogeom::api::{points_from_tuples, points_to_tuples, MaskError, Ring};
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

pub type PyPoints = Vec<(f64, f64)>;

pub fn ring_in(pts: &[(f64, f64)]) -> Ring {
    points_from_tuples(pts)
}

pub fn ring_out(ring: Ring) -> PyPoints {
    points_to_tuples(&ring)
}

pub fn opt_ring_out(ring: Option<Ring>) -> Option<PyPoints> {
    ring.map(ring_out)
}

pub fn map_mask_err(err: MaskError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
