use annogeom::api::*;
use annogeom::sample::{disk_mask, random_walk_stroke, ReplayToken, WalkCfg};
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "annogeom")]
#[command(about = "Annotation geometry: brush strokes, boolean edits and mask contours")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone)]
struct Brush {
    /// Stroke samples: CSV or Parquet with `x`,`y` columns
    #[arg(long)]
    input: PathBuf,
    /// Brush radius in screen pixels
    #[arg(long)]
    radius_px: f64,
    /// Viewport zoom exponent (world radius = radius_px / 2^zoom)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    zoom: f64,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Clone)]
struct Pair {
    #[arg(long)]
    a: PathBuf,
    #[arg(long)]
    b: PathBuf,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Subcommand)]
enum Action {
    /// Offset a stroke into a single outline ring (live preview)
    Brush(Brush),
    /// Union a circle per stroke sample into one hull ring
    Hull(Brush),
    /// Union of two rings; largest exterior kept
    Union(Pair),
    /// `a` minus `b`; largest exterior kept
    Difference(Pair),
    /// Graham-scan hull of a point table
    ConvexHull {
        #[arg(long)]
        input: PathBuf,
        /// Emit the hull without repeating the first vertex
        #[arg(long)]
        open: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Trace a probability mask into an image-space ring
    Mask {
        /// Raw little-endian f32 grid (256×256) or JSON {width,height,values}
        #[arg(long)]
        input: PathBuf,
        /// Crop rectangle in image space: x,y,w,h
        #[arg(long, value_parser = io::parse_crop)]
        crop: CropRect,
        #[arg(long, default_value_t = 0.25)]
        threshold: f64,
        /// Douglas-Peucker tolerance in grid cells
        #[arg(long, default_value_t = 1.0)]
        epsilon: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Close a lasso path into a ring
    Lasso {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 0.0)]
        epsilon: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Subtract a brush stroke's hull from an annotation ring
    Erase {
        #[arg(long)]
        annotation: PathBuf,
        #[command(flatten)]
        brush: Brush,
    },
    /// Generate a random stroke and a disk mask, and run hull and contour on them
    Demo {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out_dir: PathBuf,
    },
    /// Print engine version and code revision as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Brush(b) => brush(b),
        Action::Hull(b) => hull(b),
        Action::Union(p) => boolean(p, BoolOp::Union),
        Action::Difference(p) => boolean(p, BoolOp::Difference),
        Action::ConvexHull { input, open, out } => convex(input, open, out),
        Action::Mask {
            input,
            crop,
            threshold,
            epsilon,
            out,
        } => mask(input, crop, threshold, epsilon, out),
        Action::Lasso { input, epsilon, out } => lasso(input, epsilon, out),
        Action::Erase { annotation, brush } => erase(annotation, brush),
        Action::Demo {
            seed,
            index,
            out_dir,
        } => demo(seed, index, out_dir),
        Action::Report => report(),
    }
}

/// Write the ring and its sidecar.
fn emit(out: &Path, ring: &[Point], payload: Payload) -> Result<()> {
    io::write_ring(out, ring)?;
    provenance::write_sidecar(out, payload)?;
    tracing::info!(
        points = ring.len(),
        area = ring_area(ring),
        out = %out.display(),
        "ring_written"
    );
    Ok(())
}

fn no_region(what: &str) -> anyhow::Error {
    anyhow!("{what}: no region")
}

fn brush_params(b: &Brush) -> serde_json::Value {
    json!({"radius_px": b.radius_px, "zoom": b.zoom})
}

fn brush(b: Brush) -> Result<()> {
    tracing::info!(input = %b.input.display(), radius_px = b.radius_px, zoom = b.zoom, "brush");
    let pts = io::read_points(&b.input)?;
    let ring = brush_stroke_to_polygon(&pts, b.radius_px, b.zoom);
    if ring.is_empty() {
        return Err(no_region("empty stroke"));
    }
    emit(
        &b.out,
        &ring,
        Payload::new("brush", brush_params(&b)).with_input(&b.input),
    )
}

fn hull(b: Brush) -> Result<()> {
    tracing::info!(input = %b.input.display(), radius_px = b.radius_px, zoom = b.zoom, "hull");
    let pts = io::read_points(&b.input)?;
    let ring = build_brush_hull(&pts, b.radius_px, b.zoom).ok_or_else(|| no_region("hull"))?;
    emit(
        &b.out,
        &ring,
        Payload::new("hull", brush_params(&b)).with_input(&b.input),
    )
}

fn boolean(p: Pair, op: BoolOp) -> Result<()> {
    let name = match op {
        BoolOp::Union => "union",
        BoolOp::Difference => "difference",
    };
    tracing::info!(a = %p.a.display(), b = %p.b.display(), op = name, "boolean");
    let a = io::read_points(&p.a)?;
    let b = io::read_points(&p.b)?;
    let ring = polygon_boolean(&a, &b, op).ok_or_else(|| no_region(name))?;
    emit(
        &p.out,
        &ring,
        Payload::new(name, json!({}))
            .with_input(&p.a)
            .with_input(&p.b),
    )
}

fn convex(input: PathBuf, open: bool, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), open, "convex_hull");
    let pts = io::read_points(&input)?;
    let closure = if open { Closure::Open } else { Closure::Closed };
    let ring = convex_hull(&pts, closure);
    if ring.is_empty() {
        return Err(no_region("convex hull"));
    }
    emit(
        &out,
        &ring,
        Payload::new("convex-hull", json!({"open": open})).with_input(&input),
    )
}

fn mask(input: PathBuf, crop: CropRect, threshold: f64, epsilon: f64, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), threshold, epsilon, "mask");
    let grid = io::read_mask(&input)?;
    let cfg = MaskCfg {
        threshold,
        simplify_epsilon: epsilon,
    };
    let ring = mask_to_polygon_with_cfg(&grid, crop, cfg).ok_or_else(|| no_region("mask"))?;
    let params = json!({
        "crop": [crop.x, crop.y, crop.width, crop.height],
        "threshold": threshold,
        "epsilon": epsilon,
        "grid": [grid.width(), grid.height()],
    });
    emit(&out, &ring, Payload::new("mask", params).with_input(&input))
}

fn lasso(input: PathBuf, epsilon: f64, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), epsilon, "lasso");
    let pts = io::read_points(&input)?;
    let ring = lasso_to_polygon(&pts, epsilon).ok_or_else(|| no_region("lasso"))?;
    emit(
        &out,
        &ring,
        Payload::new("lasso", json!({"epsilon": epsilon})).with_input(&input),
    )
}

fn erase(annotation: PathBuf, b: Brush) -> Result<()> {
    tracing::info!(annotation = %annotation.display(), stroke = %b.input.display(), "erase");
    let ann = io::read_points(&annotation)?;
    let stroke = io::read_points(&b.input)?;
    let ring = erase_with_brush(&ann, &stroke, b.radius_px, b.zoom)
        .ok_or_else(|| no_region("erase"))?;
    emit(
        &b.out,
        &ring,
        Payload::new("erase", brush_params(&b))
            .with_input(&annotation)
            .with_input(&b.input),
    )
}

fn demo(seed: u64, index: u64, out_dir: PathBuf) -> Result<()> {
    tracing::info!(seed, index, out_dir = %out_dir.display(), "demo");
    let stroke = random_walk_stroke(
        WalkCfg {
            start: Point::new(128.0, 128.0),
            ..WalkCfg::default()
        },
        ReplayToken { seed, index },
    );
    let radius_px = 6.0;
    let hull_ring =
        build_brush_hull(&stroke, radius_px, 0.0).ok_or_else(|| no_region("demo hull"))?;
    emit(
        &out_dir.join("hull.json"),
        &hull_ring,
        Payload::new("demo", json!({"seed": seed, "index": index, "radius_px": radius_px})),
    )?;

    let grid = disk_mask(128.0, 128.0, 60.0);
    let crop = CropRect::new(0.0, 0.0, 512.0, 512.0);
    let contour = mask_to_polygon(&grid, crop, MaskCfg::default().threshold)
        .ok_or_else(|| no_region("demo mask"))?;
    emit(
        &out_dir.join("contour.json"),
        &contour,
        Payload::new(
            "demo",
            json!({"disk": [128.0, 128.0, 60.0], "crop": [0.0, 0.0, 512.0, 512.0]}),
        ),
    )
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::header())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_csv(path: &Path, pts: &[(f64, f64)]) {
        let mut s = String::from("x,y\n");
        for (x, y) in pts {
            s.push_str(&format!("{x},{y}\n"));
        }
        fs::write(path, s).unwrap();
    }

    fn read_out(path: &Path) -> io::RingOut {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn cli_parses_negative_zoom_and_crop() {
        let cmd = Cmd::try_parse_from([
            "annogeom", "hull", "--input", "s.csv", "--radius-px", "4", "--zoom", "-1", "--out",
            "o.json",
        ])
        .unwrap();
        match cmd.action {
            Action::Hull(b) => assert_eq!(b.zoom, -1.0),
            _ => panic!("expected hull"),
        }
        let cmd = Cmd::try_parse_from([
            "annogeom", "mask", "--input", "m.f32", "--crop", "0,0,512,256", "--out", "o.json",
        ])
        .unwrap();
        match cmd.action {
            Action::Mask { crop, threshold, .. } => {
                assert_eq!(crop.height, 256.0);
                assert_eq!(threshold, 0.25);
            }
            _ => panic!("expected mask"),
        }
    }

    #[test]
    fn hull_command_writes_ring_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("stroke.csv");
        write_csv(&input, &[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        let out = dir.path().join("hull.json");
        hull(Brush {
            input,
            radius_px: 2.0,
            zoom: 0.0,
            out: out.clone(),
        })
        .unwrap();
        let ring = read_out(&out);
        assert!(ring.points.len() >= 4);
        assert_eq!(ring.points.first(), ring.points.last());
        assert!(ring.area > 40.0 && ring.area < 60.0);
        assert!(dir.path().join("hull.provenance.json").exists());
    }

    #[test]
    fn difference_that_removes_everything_is_an_error() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        write_csv(&a, &[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]);
        write_csv(&b, &[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]);
        let out = dir.path().join("d.json");
        let err = boolean(
            Pair {
                a,
                b,
                out: out.clone(),
            },
            BoolOp::Difference,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no region"));
        assert!(!out.exists());
    }

    #[test]
    fn demo_writes_both_rings() {
        let dir = tempdir().unwrap();
        demo(3, 1, dir.path().to_path_buf()).unwrap();
        let hull = read_out(&dir.path().join("hull.json"));
        let contour = read_out(&dir.path().join("contour.json"));
        assert!(hull.area > 0.0);
        // Disk of radius 60 cells at 2× scale.
        let expected = std::f64::consts::PI * 120.0 * 120.0;
        assert!((contour.area - expected).abs() / expected < 0.1);
    }
}
