//! Frame sink filled in by the engine and handed back to the caller.

use ndarray::Array3;
use rayon::prelude::*;

use crate::image::Image;

/// Ordered, append-only sequence of image snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animation {
    frames: Vec<Image>,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `image`.
    ///
    /// The frame is a full copy; later edits to `image` do not reach it.
    pub fn add_frame(&mut self, image: &Image) {
        self.frames.push(image.clone());
    }

    pub fn frames(&self) -> &[Image] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Image> {
        self.frames.get(index)
    }

    pub fn last_frame(&self) -> Option<&Image> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Image> {
        self.frames.iter()
    }

    pub fn into_frames(self) -> Vec<Image> {
        self.frames
    }

    /// Convert every frame to an RGBA u8 array of shape (height, width, 4).
    pub fn to_rgba_frames(&self) -> Vec<Array3<u8>> {
        self.frames.par_iter().map(Image::to_rgba_u8).collect()
    }
}

impl<'a> IntoIterator for &'a Animation {
    type Item = &'a Image;
    type IntoIter = std::slice::Iter<'a, Image>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl IntoIterator for Animation {
    type Item = Image;
    type IntoIter = std::vec::IntoIter<Image>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}
