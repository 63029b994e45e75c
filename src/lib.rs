//! StagFill: animated flood fill
//!
//! Recolors the connected region around a seed pixel and records the fill as
//! a sequence of frames, with Python bindings via PyO3 and WASM bindings for
//! JavaScript.
//!
//! ## Image Format
//! Fills run on an [`Image`] of HSLA pixels (`f64` channels, hue in degrees).
//! At the binding boundary images travel as u8 arrays:
//! - **RGB**: (height, width, 3) - treated as opaque
//! - **RGBA**: (height, width, 4)
//!
//! Frames always come back as RGBA (height, width, 4).
//!
//! ## Fill Architecture
//! A fill is the product of an ordering (stack for depth-first, queue for
//! breadth-first) and a color picker (solid, grid, gradient, rainbow). See
//! [`fill`] for the eight typed entry points and [`FillConfig`] for the data
//! driven one.

pub mod error;
pub mod fill;
pub mod image;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::FillError;
pub use fill::{Animation, FillConfig, FillOrder, PickerConfig};
pub use image::{HslaPixel, Image, Point};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FillError;
    use crate::fill::{self, Animation, FillOrder};
    use crate::image::{HslaPixel, Image};

    /// (h, s, l, a) with h in degrees, the rest 0.0-1.0
    type Hsla = (f64, f64, f64, f64);

    type Frames<'py> = Vec<Bound<'py, PyArray3<u8>>>;

    fn to_py_err(err: FillError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn pixel((h, s, l, a): Hsla) -> HslaPixel {
        HslaPixel::new(h, s, l, a)
    }

    /// Convert the input, run `fill_with` and hand the frames back as arrays.
    fn run_fill<'py, F>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        order: &str,
        fill_with: F,
    ) -> PyResult<Frames<'py>>
    where
        F: FnOnce(&mut Image, FillOrder) -> Result<Animation, FillError>,
    {
        let order: FillOrder = order.parse().map_err(to_py_err)?;
        let mut target = Image::from_rgba_u8(image.as_array()).map_err(to_py_err)?;
        let animation = fill_with(&mut target, order).map_err(to_py_err)?;

        Ok(animation
            .to_rgba_frames()
            .into_iter()
            .map(|frame| frame.into_pyarray(py))
            .collect())
    }

    // ========================================================================
    // Flood Fills
    // ========================================================================

    /// Flood fill with a single color.
    ///
    /// # Arguments
    /// * `image` - RGB or RGBA u8 image (height, width, channels)
    /// * `x`, `y` - Seed pixel
    /// * `color` - Fill color as (h, s, l, a)
    /// * `tolerance` - Fill pixels whose distance to the seed color is below this (0.0-1.0)
    /// * `frame_interval` - Filled pixels between captured frames
    /// * `order` - "dfs" or "bfs"
    ///
    /// # Returns
    /// List of RGBA u8 frames
    #[pyfunction]
    #[pyo3(signature = (image, x, y, color, tolerance, frame_interval=100, order="dfs"))]
    #[allow(clippy::too_many_arguments)]
    pub fn fill_solid<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: usize,
        y: usize,
        color: Hsla,
        tolerance: f64,
        frame_interval: usize,
        order: &str,
    ) -> PyResult<Frames<'py>> {
        run_fill(py, image, order, |target, order| match order {
            FillOrder::Dfs => fill::fill_solid_dfs(target, x, y, pixel(color), tolerance, frame_interval),
            FillOrder::Bfs => fill::fill_solid_bfs(target, x, y, pixel(color), tolerance, frame_interval),
        })
    }

    /// Flood fill drawing grid lines every `spacing` pixels on white.
    #[pyfunction]
    #[pyo3(signature = (image, x, y, color, spacing, tolerance, frame_interval=100, order="dfs"))]
    #[allow(clippy::too_many_arguments)]
    pub fn fill_grid<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: usize,
        y: usize,
        color: Hsla,
        spacing: usize,
        tolerance: f64,
        frame_interval: usize,
        order: &str,
    ) -> PyResult<Frames<'py>> {
        run_fill(py, image, order, |target, order| match order {
            FillOrder::Dfs => fill::fill_grid_dfs(target, x, y, pixel(color), spacing, tolerance, frame_interval),
            FillOrder::Bfs => fill::fill_grid_bfs(target, x, y, pixel(color), spacing, tolerance, frame_interval),
        })
    }

    /// Flood fill with a radial gradient around the seed.
    ///
    /// `from` is used at the seed, `to` at `radius` pixels and beyond.
    #[pyfunction]
    #[pyo3(signature = (image, x, y, from_color, to_color, radius, tolerance, frame_interval=100, order="dfs"))]
    #[allow(clippy::too_many_arguments)]
    pub fn fill_gradient<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: usize,
        y: usize,
        from_color: Hsla,
        to_color: Hsla,
        radius: usize,
        tolerance: f64,
        frame_interval: usize,
        order: &str,
    ) -> PyResult<Frames<'py>> {
        let (from, to) = (pixel(from_color), pixel(to_color));
        run_fill(py, image, order, |target, order| match order {
            FillOrder::Dfs => fill::fill_gradient_dfs(target, x, y, from, to, radius, tolerance, frame_interval),
            FillOrder::Bfs => fill::fill_gradient_bfs(target, x, y, from, to, radius, tolerance, frame_interval),
        })
    }

    /// Flood fill with a rainbow; `frequency` is hue cycles per pixel of
    /// distance from the image origin.
    #[pyfunction]
    #[pyo3(signature = (image, x, y, frequency, tolerance, frame_interval=100, order="dfs"))]
    #[allow(clippy::too_many_arguments)]
    pub fn fill_rainbow<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        x: usize,
        y: usize,
        frequency: f64,
        tolerance: f64,
        frame_interval: usize,
        order: &str,
    ) -> PyResult<Frames<'py>> {
        run_fill(py, image, order, |target, order| match order {
            FillOrder::Dfs => fill::fill_rainbow_dfs(target, x, y, frequency, tolerance, frame_interval),
            FillOrder::Bfs => fill::fill_rainbow_bfs(target, x, y, frequency, tolerance, frame_interval),
        })
    }

    /// StagFill Rust extension module
    #[pymodule]
    pub fn stagfill(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(fill_solid, m)?)?;
        m.add_function(wrap_pyfunction!(fill_grid, m)?)?;
        m.add_function(wrap_pyfunction!(fill_gradient, m)?)?;
        m.add_function(wrap_pyfunction!(fill_rainbow, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::stagfill;
