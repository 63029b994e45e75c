//! Color pickers decide the replacement color of every filled pixel.
//!
//! A picker is asked exactly once per pixel, when the pixel is discovered by
//! the fill, so its answer may depend only on the coordinate and on state
//! fixed at construction.

use crate::error::{FillError, Result};
use crate::image::{HslaPixel, Point};

/// Strategy producing the fill color for a coordinate.
pub trait ColorPicker {
    fn pick(&self, x: usize, y: usize) -> HslaPixel;
}

impl<F> ColorPicker for F
where
    F: Fn(usize, usize) -> HslaPixel,
{
    fn pick(&self, x: usize, y: usize) -> HslaPixel {
        self(x, y)
    }
}

/// Fills every pixel with one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidPicker {
    color: HslaPixel,
}

impl SolidPicker {
    pub fn new(color: HslaPixel) -> Self {
        Self { color }
    }
}

impl ColorPicker for SolidPicker {
    fn pick(&self, _x: usize, _y: usize) -> HslaPixel {
        self.color
    }
}

/// Grid lines every `spacing` pixels on a white background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPicker {
    color: HslaPixel,
    spacing: usize,
}

impl GridPicker {
    /// Fails with [`FillError::InvalidGridSpacing`] when `spacing` is zero.
    pub fn new(color: HslaPixel, spacing: usize) -> Result<Self> {
        if spacing == 0 {
            return Err(FillError::InvalidGridSpacing);
        }
        Ok(Self { color, spacing })
    }
}

impl ColorPicker for GridPicker {
    fn pick(&self, x: usize, y: usize) -> HslaPixel {
        if x % self.spacing == 0 || y % self.spacing == 0 {
            self.color
        } else {
            HslaPixel::WHITE
        }
    }
}

/// Radial gradient from `from` at the center to `to` at `radius` and beyond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPicker {
    from: HslaPixel,
    to: HslaPixel,
    radius: f64,
    center: Point,
}

impl GradientPicker {
    /// Fails with [`FillError::InvalidRadius`] when `radius` is zero.
    pub fn new(from: HslaPixel, to: HslaPixel, radius: usize, center: Point) -> Result<Self> {
        if radius == 0 {
            return Err(FillError::InvalidRadius);
        }
        Ok(Self {
            from,
            to,
            radius: radius as f64,
            center,
        })
    }
}

impl ColorPicker for GradientPicker {
    fn pick(&self, x: usize, y: usize) -> HslaPixel {
        let dx = x as f64 - self.center.x as f64;
        let dy = y as f64 - self.center.y as f64;
        let t = ((dx * dx + dy * dy).sqrt() / self.radius).min(1.0);
        self.from.lerp(&self.to, t)
    }
}

/// Hue cycles with the distance from the image origin.
///
/// `frequency` is the number of full hue cycles per pixel of distance, so
/// 0.01 gives one rainbow every 100 pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainbowPicker {
    frequency: f64,
}

impl RainbowPicker {
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }
}

impl ColorPicker for RainbowPicker {
    fn pick(&self, x: usize, y: usize) -> HslaPixel {
        let (fx, fy) = (x as f64, y as f64);
        let phase = ((fx * fx + fy * fy).sqrt() * self.frequency).rem_euclid(1.0);
        // rem_euclid rounds tiny negative phases up to exactly 1.0
        HslaPixel::hsl((phase * 360.0) % 360.0, 1.0, 0.5)
    }
}
