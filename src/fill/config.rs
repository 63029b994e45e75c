//! Serializable description of a fill.
//!
//! Bindings and callers that carry fill settings around as data (JSON from
//! the web frontend, presets on disk) build a [`FillConfig`] and call
//! [`FillConfig::run`] instead of picking one of the typed entry points.
//!
//! ```json
//! {
//!   "ordering": "bfs",
//!   "picker": { "kind": "grid", "color": { "h": 120, "s": 1, "l": 0.5 }, "spacing": 4 },
//!   "tolerance": 0.2,
//!   "frame_interval": 50
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::animation::Animation;
use super::engine::fill;
use super::ordering::{Queue, Stack};
use super::picker::{ColorPicker, GradientPicker, GridPicker, RainbowPicker, SolidPicker};
use crate::error::{FillError, Result};
use crate::image::{HslaPixel, Image, Point};

fn default_frame_interval() -> usize {
    100
}

/// Traversal order of a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillOrder {
    /// Depth-first, stack backed
    #[default]
    Dfs,
    /// Breadth-first, queue backed
    Bfs,
}

impl FromStr for FillOrder {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(FillOrder::Dfs),
            "bfs" => Ok(FillOrder::Bfs),
            _ => Err(FillError::InvalidOrdering(s.to_string())),
        }
    }
}

impl fmt::Display for FillOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillOrder::Dfs => write!(f, "dfs"),
            FillOrder::Bfs => write!(f, "bfs"),
        }
    }
}

/// Picker selection and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PickerConfig {
    Solid {
        color: HslaPixel,
    },
    Grid {
        color: HslaPixel,
        spacing: usize,
    },
    /// Centered on the seed pixel
    Gradient {
        from: HslaPixel,
        to: HslaPixel,
        radius: usize,
    },
    Rainbow {
        frequency: f64,
    },
}

impl PickerConfig {
    /// Build the picker for a fill seeded at `seed`.
    pub fn build(&self, seed: Point) -> Result<Box<dyn ColorPicker>> {
        let picker: Box<dyn ColorPicker> = match *self {
            PickerConfig::Solid { color } => Box::new(SolidPicker::new(color)),
            PickerConfig::Grid { color, spacing } => Box::new(GridPicker::new(color, spacing)?),
            PickerConfig::Gradient { from, to, radius } => {
                Box::new(GradientPicker::new(from, to, radius, seed)?)
            }
            PickerConfig::Rainbow { frequency } => Box::new(RainbowPicker::new(frequency)),
        };
        Ok(picker)
    }
}

/// Complete fill settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillConfig {
    #[serde(default)]
    pub ordering: FillOrder,
    pub picker: PickerConfig,
    pub tolerance: f64,
    #[serde(default = "default_frame_interval")]
    pub frame_interval: usize,
}

impl FillConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Fill `image` from `(x, y)` with these settings.
    pub fn run(&self, image: &mut Image, x: usize, y: usize) -> Result<Animation> {
        let picker = self.picker.build(Point::new(x, y))?;
        match self.ordering {
            FillOrder::Dfs => fill::<Stack<Point>, _>(image, x, y, &*picker, self.tolerance, self.frame_interval),
            FillOrder::Bfs => fill::<Queue<Point>, _>(image, x, y, &*picker, self.tolerance, self.frame_interval),
        }
    }
}
