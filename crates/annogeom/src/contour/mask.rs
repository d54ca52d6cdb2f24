//! Probability masks and the crop rectangle that places them in image space.

use std::fmt;

/// Side length of the segmentation grid produced by the mask decoder.
pub const GRID_SIZE: usize = 256;

/// Errors when wrapping caller buffers into a `Mask`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Buffer length does not equal `width * height`.
    ShapeMismatch { expected: usize, actual: usize },
    /// Zero width or height.
    EmptyGrid,
    /// `width * height` overflows `usize`.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::ShapeMismatch { expected, actual } => write!(
                f,
                "mask buffer has {actual} values, expected {expected} (width * height)"
            ),
            MaskError::EmptyGrid => write!(f, "mask grid has zero width or height"),
            MaskError::TooLarge { width, height } => {
                write!(f, "mask grid {width}x{height} has too many cells")
            }
        }
    }
}

impl std::error::Error for MaskError {}

/// Dense row-major grid of confidences in [0, 1].
///
/// Non-finite values are kept as-is; they never compare above a threshold and
/// therefore read as background.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    values: Vec<f32>,
    width: usize,
    height: usize,
}

impl Mask {
    /// Wrap a row-major buffer; `EmptyGrid`, `TooLarge` or `ShapeMismatch` on a bad shape.
    pub fn new(values: Vec<f32>, width: usize, height: usize) -> Result<Self, MaskError> {
        if width == 0 || height == 0 {
            return Err(MaskError::EmptyGrid);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(MaskError::TooLarge { width, height })?;
        if values.len() != expected {
            return Err(MaskError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Wrap a `GRID_SIZE × GRID_SIZE` decoder output.
    pub fn from_grid(values: Vec<f32>) -> Result<Self, MaskError> {
        Self::new(values, GRID_SIZE, GRID_SIZE)
    }

    /// Build a mask by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> f32) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            values,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Cell value; `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<f32> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.values[y as usize * self.width + x as usize])
    }

    /// Foreground test; cells outside the grid are background.
    #[inline]
    pub fn is_foreground(&self, x: i64, y: i64, threshold: f64) -> bool {
        self.get(x, y).is_some_and(|v| f64::from(v) > threshold)
    }

    /// Grid coordinates of every foreground cell, row-major.
    pub fn foreground_cells(&self, threshold: f64) -> Vec<(i64, i64)> {
        let mut out = Vec::new();
        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                if self.is_foreground(x, y, threshold) {
                    out.push((x, y));
                }
            }
        }
        out
    }
}

/// Image-space rectangle the mask grid was cropped from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
