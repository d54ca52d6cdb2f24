//! Synthetic inputs: masks and strokes for benches, demos and tests.
//!
//! Random strokes are reproducible: a `ReplayToken { seed, index }` is mixed
//! into a single `StdRng`, so the same token always replays the same stroke
//! and consecutive indices give independent strokes.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::contour::{Mask, GRID_SIZE};
use crate::ring::{Point, Ring};

/// Filled disk of value 1.0 on a `GRID_SIZE` grid (cells with centre distance ≤ `r`).
pub fn disk_mask(cx: f64, cy: f64, r: f64) -> Mask {
    Mask::from_fn(GRID_SIZE, GRID_SIZE, |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        if dx * dx + dy * dy <= r * r {
            1.0
        } else {
            0.0
        }
    })
}

/// Axis-aligned block of value 1.0, bounds inclusive, on a `GRID_SIZE` grid.
pub fn rect_mask(x0: usize, y0: usize, x1: usize, y1: usize) -> Mask {
    Mask::from_fn(GRID_SIZE, GRID_SIZE, |x, y| {
        if (x0..=x1).contains(&x) && (y0..=y1).contains(&y) {
            1.0
        } else {
            0.0
        }
    })
}

/// `n` equally spaced samples from `from` to `to` (both included).
pub fn line_stroke(from: Point, to: Point, n: usize) -> Ring {
    match n {
        0 => Vec::new(),
        1 => vec![from],
        _ => (0..n)
            .map(|i| from + (to - from) * (i as f64 / (n - 1) as f64))
            .collect(),
    }
}

/// Random-walk stroke settings.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    pub samples: usize,
    /// Distance between consecutive samples (world units).
    pub step: f64,
    /// Max heading change per sample, radians. Clamped to [0, π].
    pub turn_jitter: f64,
    pub start: Point,
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            samples: 64,
            step: 2.0,
            turn_jitter: 0.4,
            start: Vector2::new(0.0, 0.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Smooth random pointer path: constant step, bounded heading jitter.
pub fn random_walk_stroke(cfg: WalkCfg, tok: ReplayToken) -> Ring {
    let mut rng = tok.to_std_rng();
    let jitter = cfg.turn_jitter.clamp(0.0, std::f64::consts::PI);
    let mut heading = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut p = cfg.start;
    let mut out = Vec::with_capacity(cfg.samples);
    for _ in 0..cfg.samples {
        out.push(p);
        heading += (rng.gen::<f64>() * 2.0 - 1.0) * jitter;
        p += Vector2::new(heading.cos(), heading.sin()) * cfg.step;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn replay_is_reproducible() {
        let cfg = WalkCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = random_walk_stroke(cfg, tok);
        let b = random_walk_stroke(cfg, tok);
        assert_eq!(a, b);
        let c = random_walk_stroke(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }

    #[test]
    fn walk_keeps_step_length() {
        let cfg = WalkCfg {
            samples: 30,
            step: 1.5,
            ..WalkCfg::default()
        };
        let s = random_walk_stroke(cfg, ReplayToken { seed: 1, index: 0 });
        assert_eq!(s.len(), 30);
        assert_eq!(s[0], cfg.start);
        for w in s.windows(2) {
            assert!(((w[1] - w[0]).norm() - 1.5).abs() < 1e-9);
        }
    }

    #[test]
    fn line_stroke_endpoints() {
        assert!(line_stroke(vector![0.0, 0.0], vector![1.0, 1.0], 0).is_empty());
        let one = line_stroke(vector![2.0, 3.0], vector![9.0, 9.0], 1);
        assert_eq!(one, vec![vector![2.0, 3.0]]);
        let s = line_stroke(vector![0.0, 0.0], vector![10.0, 0.0], 6);
        assert_eq!(s.len(), 6);
        assert_eq!(s[5], vector![10.0, 0.0]);
        assert!((s[1].x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn masks_have_expected_cell_counts() {
        let r = rect_mask(2, 3, 4, 5);
        assert_eq!(r.foreground_cells(0.5).len(), 9);
        let d = disk_mask(128.0, 128.0, 1.0);
        assert_eq!(d.foreground_cells(0.5).len(), 5);
    }
}
