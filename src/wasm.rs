//! WebAssembly exports for StagFill.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images travel
//! as flat RGBA u8 buffers (length = width * height * 4); fill settings as
//! the JSON form of [`FillConfig`].

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::error::FillError;
use crate::fill::FillConfig;
use crate::image::Image;

fn to_js(err: FillError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Flood fill an RGBA image and return every frame.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `x`, `y` - Seed pixel
/// * `config_json` - Fill settings, e.g.
///   `{"ordering": "bfs", "picker": {"kind": "solid", "color": {"h": 0, "s": 1, "l": 0.5}}, "tolerance": 0.2}`
///
/// # Returns
/// All frames concatenated as flat RGBA bytes; the frame count is
/// `result.length / (width * height * 4)`.
#[wasm_bindgen]
pub fn flood_fill_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    config_json: &str,
) -> Result<Vec<u8>, JsValue> {
    let input = Array3::from_shape_vec((height, width, 4), data.to_vec())
        .map_err(|e| JsValue::from_str(&format!("Invalid dimensions: {}", e)))?;
    let config = FillConfig::from_json(config_json).map_err(to_js)?;

    let mut image = Image::from_rgba_u8(input.view()).map_err(to_js)?;
    let animation = config.run(&mut image, x, y).map_err(to_js)?;

    let frames = animation.to_rgba_frames();
    let mut output = Vec::with_capacity(frames.len() * width * height * 4);
    for frame in frames {
        output.extend(frame.into_raw_vec_and_offset().0);
    }
    Ok(output)
}
