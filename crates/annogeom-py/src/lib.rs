//! PyO3 bindings for the `annogeom` engine.
//!
//! Notes
//! - Points cross the boundary as lists of `(x, y)` tuples; rings come back
//!   the same way, or `None` when there is no usable geometry.
//! - Bindings stay thin: every function forwards to `annogeom::api`.

use pyo3::prelude::*;

mod common;
mod contour;
mod stroke;

#[pymodule]
fn annogeom_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", annogeom::VERSION)?;
    stroke::register(m)?;
    contour::register(m)?;
    Ok(())
}
