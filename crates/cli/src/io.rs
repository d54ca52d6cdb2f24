//! File formats for the CLI: point tables in, rings out.
//!
//! - Point tables: CSV or Parquet with numeric `x` and `y` columns, read via
//!   polars. Rows keep their order (stroke samples are order-sensitive).
//! - Masks: raw little-endian `f32` row-major buffers (`.f32`/`.bin`) or JSON
//!   `{"width": W, "height": H, "values": [...]}`.
//! - Rings: JSON `{"points": [[x, y], ...], "area": A}`.

use annogeom::api::{points_from_tuples, ring_area, Mask, Point, Ring};
use anyhow::{bail, ensure, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Read an ordered `(x, y)` point table.
pub fn read_points(path: &Path) -> Result<Ring> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?,
        _ => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("reading {}", path.display()))?,
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("selecting x,y from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut pts = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => pts.push((x, y)),
            _ => bail!("{}: row {row} has an empty x or y", path.display()),
        }
    }
    tracing::debug!(rows = pts.len(), path = %path.display(), "points_read");
    Ok(points_from_tuples(&pts))
}

#[derive(Deserialize)]
struct MaskFile {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

/// Read a mask buffer; raw buffers must be `GRID_SIZE × GRID_SIZE`.
pub fn read_mask(path: &Path) -> Result<Mask> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        let file: MaskFile = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing {}", path.display()))?;
        return Ok(Mask::new(file.values, file.width, file.height)?);
    }
    ensure!(
        bytes.len() % 4 == 0,
        "{}: {} bytes is not a whole number of f32 values",
        path.display(),
        bytes.len()
    );
    let values: Vec<f32> = bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    Ok(Mask::from_grid(values)?)
}

/// JSON shape written for every ring.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RingOut {
    pub points: Vec<[f64; 2]>,
    pub area: f64,
}

impl RingOut {
    pub fn from_ring(ring: &[Point]) -> Self {
        Self {
            points: ring.iter().map(|p| [p.x, p.y]).collect(),
            area: ring_area(ring),
        }
    }
}

/// Write `ring` as JSON, creating parent directories.
pub fn write_ring(out: &Path, ring: &[Point]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let doc = RingOut::from_ring(ring);
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

/// Parse `x,y,w,h` into a crop rectangle.
pub fn parse_crop(s: &str) -> Result<annogeom::api::CropRect, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        &[x, y, w, h] if w > 0.0 && h > 0.0 => Ok(annogeom::api::CropRect::new(x, y, w, h)),
        &[_, _, _, _] => Err("crop width and height must be positive".to_string()),
        _ => Err(format!("expected x,y,w,h but got {} values", parts.len())),
    }
}
