use serde::{Deserialize, Serialize};

use crate::core::Keyed;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ChartError::InvalidData(format!(
                "hex color `{hex}` must have 6 or 8 digits"
            )));
        }
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidData(format!(
                "hex color `{hex}` is not valid hex"
            )));
        }
        let channel = |range: std::ops::Range<usize>| -> ChartResult<f64> {
            u8::from_str_radix(&digits[range], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ChartError::InvalidData(format!("hex color `{hex}` is not valid hex")))
        };
        let alpha = if digits.len() == 8 { channel(6..8)? } else { 1.0 };
        Ok(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| ((value.clamp(0.0, 1.0) * 255.0).round()) as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    /// Pure, deterministic darkening: scales the channels toward black by a
    /// fixed lightness step per unit of `amount` (an approximation of
    /// Lab-lightness darkening; full color-space math is out of scope here).
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        let factor = (1.0 - 0.18 * amount).clamp(0.0, 1.0);
        Self {
            red: self.red * factor,
            green: self.green * factor,
            blue: self.blue * factor,
            alpha: self.alpha,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Default neon palette.
pub const CYBERTRON: [Color; 7] = [
    Color::from_rgb8(0x00, 0xe5, 0xc0),
    Color::from_rgb8(0x4c, 0x86, 0xff),
    Color::from_rgb8(0xc8, 0x52, 0xff),
    Color::from_rgb8(0xff, 0x4c, 0x9d),
    Color::from_rgb8(0xff, 0xd7, 0x4c),
    Color::from_rgb8(0x2e, 0xe5, 0x6b),
    Color::from_rgb8(0xff, 0x6a, 0x3d),
];

/// Warm gradient palette.
pub const HORIZON: [Color; 6] = [
    Color::from_rgb8(0x2b, 0x32, 0x8c),
    Color::from_rgb8(0x5a, 0x3d, 0xa6),
    Color::from_rgb8(0x9e, 0x3f, 0x8f),
    Color::from_rgb8(0xd9, 0x53, 0x5e),
    Color::from_rgb8(0xf2, 0x8a, 0x33),
    Color::from_rgb8(0xf7, 0xc5, 0x40),
];

/// Muted palette for dense diagrams.
pub const PASTEL: [Color; 6] = [
    Color::from_rgb8(0xa8, 0xd8, 0xea),
    Color::from_rgb8(0xaa, 0x96, 0xda),
    Color::from_rgb8(0xfc, 0xba, 0xd3),
    Color::from_rgb8(0xff, 0xfd, 0xd0),
    Color::from_rgb8(0xb5, 0xea, 0xd7),
    Color::from_rgb8(0xc7, 0xce, 0xea),
];

/// Named palette token resolved by the series coordinators.
///
/// Unknown identifiers and empty custom palettes fall back to the default
/// palette; scheme resolution never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorScheme {
    Cybertron,
    Horizon,
    Pastel,
    Custom(Vec<Color>),
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::Cybertron
    }
}

impl ColorScheme {
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "horizon" => Self::Horizon,
            "pastel" => Self::Pastel,
            _ => Self::Cybertron,
        }
    }

    #[must_use]
    pub fn palette(&self) -> &[Color] {
        match self {
            Self::Cybertron => &CYBERTRON,
            Self::Horizon => &HORIZON,
            Self::Pastel => &PASTEL,
            Self::Custom(palette) if palette.is_empty() => &CYBERTRON,
            Self::Custom(palette) => palette,
        }
    }
}

/// Assigns a fill color to one node of a series.
///
/// Deterministic and total: the same `(dataset, scheme, point, index)`
/// always yields the same color, independent of call order. A keyed point
/// is colored by the position of the first dataset node sharing its key, so
/// assignment stays stable when the same array is walked again; keyless or
/// absent points fall back to the supplied render index.
#[must_use]
pub fn assign_color<K: Keyed>(
    dataset: &[K],
    scheme: &ColorScheme,
    point: Option<&K>,
    index: usize,
) -> Color {
    let palette = scheme.palette();
    let slot = point
        .and_then(|point| point.key())
        .and_then(|key| dataset.iter().position(|node| node.key() == Some(key)))
        .unwrap_or(index);
    palette[slot % palette.len()]
}
