//! Animated flood fill.
//!
//! Every entry point recolors the connected region around a seed pixel and
//! returns an [`Animation`] of the fill's progress. Two things vary:
//!
//! - **Ordering**: `*_dfs` fills explore with a [`Stack`], `*_bfs` fills with
//!   a [`Queue`].
//! - **Picker**: solid color, grid lines, radial gradient around the seed, or
//!   a rainbow keyed on the distance from the image origin.
//!
//! | Picker   | Depth-first          | Breadth-first        |
//! |----------|----------------------|----------------------|
//! | Solid    | [`fill_solid_dfs`]    | [`fill_solid_bfs`]    |
//! | Grid     | [`fill_grid_dfs`]     | [`fill_grid_bfs`]     |
//! | Gradient | [`fill_gradient_dfs`] | [`fill_gradient_bfs`] |
//! | Rainbow  | [`fill_rainbow_dfs`]  | [`fill_rainbow_bfs`]  |
//!
//! `tolerance` is compared with [`HslaPixel::dist`](crate::image::HslaPixel::dist)
//! using strict less-than; `frame_interval` is the number of filled pixels
//! between captured frames and must be positive.

pub mod animation;
pub mod config;
pub mod engine;
pub mod ordering;
pub mod picker;

pub use animation::Animation;
pub use config::{FillConfig, FillOrder, PickerConfig};
pub use engine::fill;
pub use ordering::{OrderingStructure, Queue, Stack};
pub use picker::{ColorPicker, GradientPicker, GridPicker, RainbowPicker, SolidPicker};

use crate::error::Result;
use crate::image::{HslaPixel, Image, Point};

// ============================================================================
// Depth-first fills
// ============================================================================

/// Depth-first fill with a single color.
pub fn fill_solid_dfs(
    image: &mut Image,
    x: usize,
    y: usize,
    color: HslaPixel,
    tolerance: f64,
    frame_interval: usize,
) -> Result<Animation> {
    let picker = SolidPicker::new(color);
    fill::<Stack<Point>, _>(image, x, y, &picker, tolerance, frame_interval)
}

/// Depth-first fill drawing grid lines every `spacing` pixels on white.
pub fn fill_grid_dfs(
    image: &mut Image,
    x: usize,
    y: usize,
    color: HslaPixel,
    spacing: usize,
    tolerance: f64,
    frame_interval: usize,
) -> Result<Animation> {
    let picker = GridPicker::new(color, spacing)?;
    fill::<Stack<Point>, _>(image, x, y, &picker, tolerance, frame_interval)
}

/// Depth-first fill with a radial gradient centered on the seed.
#[allow(clippy::too_many_arguments)]
pub fn fill_gradient_dfs(
    image: &mut Image,
    x: usize,
    y: usize,
    from: HslaPixel,
    to: HslaPixel,
    radius: usize,
    tolerance: f64,
    frame_interval: usize,
) -> Result<Animation> {
    let picker = GradientPicker::new(from, to, radius, Point::new(x, y))?;
    fill::<Stack<Point>, _>(image, x, y, &picker, tolerance, frame_interval)
}

/// Depth-first fill with a rainbow of the given frequency.
pub fn fill_rainbow_dfs(
    image: &mut Image,
    x: usize,
    y: usize,
    frequency: f64,
    tolerance: f64,
    frame_interval: usize,
) -> Result<Animation> {
    let picker = RainbowPicker::new(frequency);
    fill::<Stack<Point>, _>(image, x, y, &picker, tolerance, frame_interval)
}

// ============================================================================
// Breadth-first fills
// ============================================================================

/// Breadth-first fill with a single color.
pub fn fill_solid_bfs(
    image: &mut Image,
    x: usize,
    y: usize,
    color: HslaPixel,
    tolerance: f64,
    frame_interval: usize,
) -> Result<Animation> {
    let picker = SolidPicker::new(color);
    fill::<Queue<Point>, _>(image, x, y, &picker, tolerance, frame_interval)
}

/// Breadth-first fill drawing grid lines every `spacing` pixels on white.
pub fn fill_grid_bfs(
    image: &mut Image,
    x: usize,
    y: usize,
    color: HslaPixel,
    spacing: usize,
    tolerance: f64,
    frame_interval: usize,
) -> Result<Animation> {
    let picker = GridPicker::new(color, spacing)?;
    fill::<Queue<Point>, _>(image, x, y, &picker, tolerance, frame_interval)
}

/// Breadth-first fill with a radial gradient centered on the seed.
#[allow(clippy::too_many_arguments)]
pub fn fill_gradient_bfs(
    image: &mut Image,
    x: usize,
    y: usize,
    from: HslaPixel,
    to: HslaPixel,
    radius: usize,
    tolerance: f64,
    frame_interval: usize,
) -> Result<Animation> {
    let picker = GradientPicker::new(from, to, radius, Point::new(x, y))?;
    fill::<Queue<Point>, _>(image, x, y, &picker, tolerance, frame_interval)
}

/// Breadth-first fill with a rainbow of the given frequency.
pub fn fill_rainbow_bfs(
    image: &mut Image,
    x: usize,
    y: usize,
    frequency: f64,
    tolerance: f64,
    frame_interval: usize,
) -> Result<Animation> {
    let picker = RainbowPicker::new(frequency);
    fill::<Queue<Point>, _>(image, x, y, &picker, tolerance, frame_interval)
}
