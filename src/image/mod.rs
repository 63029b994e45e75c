//! Raster image collaborator for the fill engine.
//!
//! Pixels are stored in an `Array2<HslaPixel>` with shape (height, width) and
//! addressed as `[[y, x]]`, row 0 at the top. Interchange with the rest of the
//! toolkit goes through RGBA u8 arrays of shape (height, width, 4).

pub mod pixel;

use std::ops::{Index, IndexMut};

use ndarray::{Array2, Array3, ArrayView2, ArrayView3};

use crate::error::{FillError, Result};

pub use pixel::HslaPixel;

/// Pixel position. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The four grid neighbors in exploration order: right, down, left, up.
    ///
    /// Left and up are `None` on the top/left edges; right and down are not
    /// bounds-checked against any image.
    pub fn neighbors(self) -> [Option<Point>; 4] {
        [
            self.x.checked_add(1).map(|x| Point::new(x, self.y)),
            self.y.checked_add(1).map(|y| Point::new(self.x, y)),
            self.x.checked_sub(1).map(|x| Point::new(x, self.y)),
            self.y.checked_sub(1).map(|y| Point::new(self.x, y)),
        ]
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Point::new(x, y)
    }
}

/// Mutable 2-D grid of HSLA pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pixels: Array2<HslaPixel>,
}

impl Image {
    /// Create an image filled with a single color.
    pub fn new(width: usize, height: usize, color: HslaPixel) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), color),
        }
    }

    /// Create an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> HslaPixel,
    {
        Self {
            pixels: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width() && point.y < self.height()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&HslaPixel> {
        self.pixels.get((y, x))
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut HslaPixel> {
        self.pixels.get_mut((y, x))
    }

    /// Read-only view of the pixel grid, shape (height, width).
    pub fn pixels(&self) -> ArrayView2<'_, HslaPixel> {
        self.pixels.view()
    }

    /// Convert an RGB or RGBA u8 image (height, width, channels).
    ///
    /// RGB input is treated as fully opaque.
    pub fn from_rgba_u8(input: ArrayView3<u8>) -> Result<Self> {
        let (height, width, channels) = input.dim();
        if channels != 3 && channels != 4 {
            return Err(FillError::UnsupportedChannels(channels));
        }

        let pixels = Array2::from_shape_fn((height, width), |(y, x)| {
            let r = input[[y, x, 0]] as f64 / 255.0;
            let g = input[[y, x, 1]] as f64 / 255.0;
            let b = input[[y, x, 2]] as f64 / 255.0;
            let a = if channels == 4 {
                input[[y, x, 3]] as f64 / 255.0
            } else {
                1.0
            };
            HslaPixel::from_rgba(r, g, b, a)
        });

        Ok(Self { pixels })
    }

    /// Convert to an RGBA u8 array of shape (height, width, 4).
    pub fn to_rgba_u8(&self) -> Array3<u8> {
        let (height, width) = self.pixels.dim();
        let mut output = Array3::<u8>::zeros((height, width, 4));

        for ((y, x), pixel) in self.pixels.indexed_iter() {
            let (r, g, b, a) = pixel.to_rgba();
            output[[y, x, 0]] = to_u8(r);
            output[[y, x, 1]] = to_u8(g);
            output[[y, x, 2]] = to_u8(b);
            output[[y, x, 3]] = to_u8(a);
        }

        output
    }
}

/// Direct pixel access; panics when `point` lies outside the image.
impl Index<Point> for Image {
    type Output = HslaPixel;

    #[inline]
    fn index(&self, point: Point) -> &HslaPixel {
        &self.pixels[[point.y, point.x]]
    }
}

impl IndexMut<Point> for Image {
    #[inline]
    fn index_mut(&mut self, point: Point) -> &mut HslaPixel {
        &mut self.pixels[[point.y, point.x]]
    }
}

#[inline]
fn to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
