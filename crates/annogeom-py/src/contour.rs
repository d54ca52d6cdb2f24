//! Convex hull and mask contour bindings.

use crate::common::{map_mask_err, opt_ring_out, ring_in, ring_out, PyPoints};
use annogeom::api::{self, Closure, CropRect, Mask, GRID_SIZE};
use pyo3::prelude::*;

#[pyfunction]
#[pyo3(signature = (points, closed=true))]
pub fn convex_hull(points: PyPoints, closed: bool) -> PyPoints {
    let closure = if closed { Closure::Closed } else { Closure::Open };
    ring_out(api::convex_hull(&ring_in(&points), closure))
}

/// `mask` is row-major; `width`/`height` default to the 256 grid.
#[pyfunction]
#[pyo3(signature = (mask, crop, threshold=0.25, width=GRID_SIZE, height=GRID_SIZE))]
pub fn mask_to_polygon(
    mask: Vec<f32>,
    crop: (f64, f64, f64, f64),
    threshold: f64,
    width: usize,
    height: usize,
) -> PyResult<Option<PyPoints>> {
    let grid = Mask::new(mask, width, height).map_err(map_mask_err)?;
    let crop = CropRect::new(crop.0, crop.1, crop.2, crop.3);
    Ok(opt_ring_out(api::mask_to_polygon(&grid, crop, threshold)))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(mask_to_polygon, m)?)?;
    Ok(())
}
