//! Moore-neighbor boundary tracing on a thresholded mask.

use std::collections::HashSet;

use super::mask::Mask;

/// 8-connected offsets; index order is clockwise on screen (y down).
const DIRECTIONS: [(i64, i64); 8] = [
    (1, 0),   // 0: right
    (1, 1),   // 1: down-right
    (0, 1),   // 2: down
    (-1, 1),  // 3: down-left
    (-1, 0),  // 4: left
    (-1, -1), // 5: up-left
    (0, -1),  // 6: up
    (1, -1),  // 7: up-right
];

/// Why a trace stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEnd {
    /// Walk came back next to the start cell.
    Closed,
    /// Start cell has no foreground neighbor.
    Isolated,
    /// Hit the `width * height` step cap without closing.
    StepCap,
    /// No edge cell in the mask.
    NoForeground,
}

/// Boundary cells in visit order (grid coordinates, no duplicates).
#[derive(Clone, Debug)]
pub struct Trace {
    pub cells: Vec<(i64, i64)>,
    pub end: TraceEnd,
}

/// First foreground cell (row-major) with at least one background Moore neighbor.
pub fn find_edge_start(mask: &Mask, threshold: f64) -> Option<(i64, i64)> {
    for y in 0..mask.height() as i64 {
        for x in 0..mask.width() as i64 {
            if !mask.is_foreground(x, y, threshold) {
                continue;
            }
            let on_edge = DIRECTIONS
                .iter()
                .any(|&(dx, dy)| !mask.is_foreground(x + dx, y + dy, threshold));
            if on_edge {
                return Some((x, y));
            }
        }
    }
    None
}

/// Trace the outer boundary of the first foreground region.
///
/// At each step the eight neighbors are scanned starting at the current search
/// direction; the first foreground neighbor is taken and the next search
/// starts at `(found + 5) mod 8`, i.e. just behind the move on the outside.
/// The walk ends once it is back within one cell (Chebyshev) of the start with
/// at least three recorded cells, or after `width * height` steps. A capped
/// walk returns whatever it recorded.
pub fn moore_trace(mask: &Mask, threshold: f64) -> Trace {
    let Some(start) = find_edge_start(mask, threshold) else {
        return Trace {
            cells: Vec::new(),
            end: TraceEnd::NoForeground,
        };
    };

    let mut cells = vec![start];
    let mut visited: HashSet<(i64, i64)> = HashSet::new();
    visited.insert(start);

    let (mut x, mut y) = start;
    let mut dir = 0usize;
    let max_steps = mask.width() * mask.height();

    for _ in 0..max_steps {
        let next = (0..8).map(|i| (dir + i) % 8).find_map(|d| {
            let (dx, dy) = DIRECTIONS[d];
            mask.is_foreground(x + dx, y + dy, threshold)
                .then_some((x + dx, y + dy, d))
        });
        let Some((nx, ny, found)) = next else {
            return Trace {
                cells,
                end: TraceEnd::Isolated,
            };
        };
        x = nx;
        y = ny;
        dir = (found + 5) % 8;
        if visited.insert((x, y)) {
            cells.push((x, y));
        }
        let near_start = (x - start.0).abs() <= 1 && (y - start.1).abs() <= 1;
        if cells.len() >= 3 && near_start {
            return Trace {
                cells,
                end: TraceEnd::Closed,
            };
        }
    }

    tracing::debug!(
        recorded = cells.len(),
        max_steps,
        "moore trace hit the step cap"
    );
    Trace {
        cells,
        end: TraceEnd::StepCap,
    }
}
