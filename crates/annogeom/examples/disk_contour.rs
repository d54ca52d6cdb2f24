//! Trace a synthetic disk mask and print how the contour pipeline behaves.
//!
//! Usage:
//!   cargo run -p annogeom --example disk_contour -- [radius] [threshold]

use annogeom::contour::{mask_to_polygon, moore_trace, CropRect};
use annogeom::ring::{ring_area, ring_centroid};
use annogeom::sample::disk_mask;

fn main() {
    let mut args = std::env::args().skip(1);
    let radius: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(50.0);
    let threshold: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0.25);

    let mask = disk_mask(128.0, 128.0, radius);
    let trace = moore_trace(&mask, threshold);
    println!("trace: {} cells, end={:?}", trace.cells.len(), trace.end);

    let crop = CropRect::new(0.0, 0.0, 256.0, 256.0);
    match mask_to_polygon(&mask, crop, threshold) {
        Some(ring) => {
            let area = ring_area(&ring);
            let expected = std::f64::consts::PI * radius * radius;
            println!(
                "polygon: {} points, area={:.1} (disk {:.1}, ratio {:.3}), centroid={:?}",
                ring.len(),
                area,
                expected,
                area / expected,
                ring_centroid(&ring).map(|c| (c.x, c.y))
            );
        }
        None => println!("no region detected"),
    }
}
