//! HSLA pixel color and its distance metric.
//!
//! Hue is stored in degrees (0.0-360.0); saturation, lightness and alpha are
//! 0.0-1.0. Conversions to and from RGB follow the same formulas the color
//! science filters use, in double precision.

use serde::{Deserialize, Serialize};

fn opaque() -> f64 {
    1.0
}

/// A single pixel in HSLA color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslaPixel {
    /// Hue in degrees
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness
    pub l: f64,
    /// Alpha, 1.0 = opaque
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Default for HslaPixel {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Divisor that maps cylinder distances below 1.0; the cylinder's
/// largest chord is √5 ≈ 2.236.
pub const DIST_SCALE: f64 = 2.5;

impl HslaPixel {
    /// Opaque white (h=0, s=0, l=1).
    pub const WHITE: HslaPixel = HslaPixel::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Opaque color from hue, saturation and lightness.
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Distance between two colors, always below 1.0.
    ///
    /// Both colors are placed on the HSL cylinder (saturation as radius, hue
    /// as angle, lightness as height) and the Euclidean distance between them
    /// is divided by [`DIST_SCALE`]. The farthest pair of colors, opposite
    /// hues at full saturation and opposite lightness, lands at about 0.894,
    /// so a tolerance of 1.0 matches every color. Alpha is ignored.
    pub fn dist(&self, other: &HslaPixel) -> f64 {
        let (x1, y1, z1) = self.cylinder_point();
        let (x2, y2, z2) = other.cylinder_point();

        let dx = x1 - x2;
        let dy = y1 - y2;
        let dz = z1 - z2;

        (dx * dx + dy * dy + dz * dz).sqrt() / DIST_SCALE
    }

    #[inline]
    fn cylinder_point(&self) -> (f64, f64, f64) {
        let angle = self.h.to_radians();
        (self.s * angle.cos(), self.s * angle.sin(), self.l)
    }

    /// Linear interpolation of every channel, `t` in 0.0-1.0.
    pub fn lerp(&self, other: &HslaPixel, t: f64) -> HslaPixel {
        HslaPixel {
            h: self.h + (other.h - self.h) * t,
            s: self.s + (other.s - self.s) * t,
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Build from RGBA components in 0.0-1.0.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        let (h, s, l) = rgb_to_hsl(r, g, b);
        Self { h, s, l, a }
    }

    /// RGBA components in 0.0-1.0.
    pub fn to_rgba(&self) -> (f64, f64, f64, f64) {
        let (r, g, b) = hsl_to_rgb(self.h.rem_euclid(360.0), self.s, self.l);
        (r, g, b, self.a)
    }
}

/// Convert RGB to HSL.
/// Input: r, g, b in 0.0-1.0
/// Output: (h, s, l) where h is 0.0-360.0, s and l are 0.0-1.0
#[inline]
fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < 1e-9 {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < 1e-9 {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if (max - g).abs() < 1e-9 {
        ((b - r) / d + 2.0) * 60.0
    } else {
        ((r - g) / d + 4.0) * 60.0
    };

    (h, s, l)
}

/// Convert HSL to RGB.
/// Input: h in 0.0-360.0, s and l in 0.0-1.0
/// Output: (r, g, b) in 0.0-1.0
#[inline]
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s.abs() < 1e-9 {
        return (l, l, l);
    }

    let high = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let low = 2.0 * l - high;
    let turn = h / 360.0;

    let channel = |offset: f64| channel_from_hue(low, high, (turn + offset).rem_euclid(1.0));

    (channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

/// One RGB channel from its hue position in 0.0-1.0: a rising ramp up to
/// 1/6, a plateau at `high` up to 1/2, a falling ramp up to 2/3, then `low`.
#[inline]
fn channel_from_hue(low: f64, high: f64, t: f64) -> f64 {
    let span = high - low;
    match t {
        t if t < 1.0 / 6.0 => low + span * 6.0 * t,
        t if t < 0.5 => high,
        t if t < 2.0 / 3.0 => low + span * (2.0 / 3.0 - t) * 6.0,
        _ => low,
    }
}
