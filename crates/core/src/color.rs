//! Color types, text encodings, and the format converter.
//!
//! Provides two numeric color models (`Rgba`, `Hsla`), the three textual
//! encodings a generated color can take (`ColorFormat`), and `ColorValue`,
//! the rendered string handed back to callers. Parsing accepts every
//! encoding the renderers produce plus CSS color names, so any generated
//! value can be fed back in.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Textual encoding of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`
    Rgb,
    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`
    Hsl,
}

impl ColorFormat {
    /// All formats, in display order.
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl];

    /// Returns the lowercase name of this format.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" | "rgba" => Ok(ColorFormat::Rgb),
            "hsl" | "hsla" => Ok(ColorFormat::Hsl),
            other => Err(ColorError::UnknownFormat(other.to_string())),
        }
    }
}

/// A rendered color string in one of the [`ColorFormat`] encodings.
///
/// Serializes as the bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    /// Wraps an already-rendered color string without validating it.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the rendered string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the rendered string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Detects which encoding this string uses from its prefix.
    ///
    /// Returns `None` for names and anything unrecognized.
    pub fn format(&self) -> Option<ColorFormat> {
        detect_format(&self.0)
    }

    /// Parses the rendered string back into numeric RGBA.
    pub fn to_rgba(&self) -> Result<Rgba, ColorError> {
        Rgba::parse(&self.0)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColorValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ColorValue> for String {
    fn from(v: ColorValue) -> Self {
        v.0
    }
}

/// RGB color with channels in [0, 255] and alpha in [0, 1].
///
/// Channels are kept as `f64` so repeated HSL adjustments do not accumulate
/// 8-bit quantization error; rendering rounds to integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque color from 8-bit channels.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        }
    }

    /// Parses any supported CSS color string: hex (3, 4, 6, or 8 digits,
    /// `#` optional), `rgb()`/`rgba()`, `hsl()`/`hsla()`, a CSS color name,
    /// or `transparent`. Case insensitive.
    pub fn parse(input: &str) -> Result<Rgba, ColorError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorError::InvalidColor("empty color string".to_string()));
        }
        // csscolorparser only handles ASCII input.
        if !s.is_ascii() {
            return Err(ColorError::InvalidColor(format!("{input:?} is not a color")));
        }
        let parsed = if is_bare_hex(s) {
            csscolorparser::parse(&format!("#{s}"))
        } else {
            csscolorparser::parse(s)
        };
        let c = parsed.map_err(|e| ColorError::InvalidColor(format!("{input:?}: {e}")))?;
        let channel = |v: f64| (v * 255.0).clamp(0.0, 255.0);
        Ok(Rgba {
            r: channel(f64::from(c.r)),
            g: channel(f64::from(c.g)),
            b: channel(f64::from(c.b)),
            a: f64::from(c.a).clamp(0.0, 1.0),
        })
    }

    /// Channels rounded and clamped to 8 bits.
    pub fn to_u8(self) -> [u8; 3] {
        [channel_u8(self.r), channel_u8(self.g), channel_u8(self.b)]
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    ///
    /// Alpha is dropped; channels are rounded to 8 bits.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Same color with alpha replaced (clamped to [0, 1]).
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) },
            ..self
        }
    }

    /// Renders the color in `format`.
    ///
    /// `rgb` and `hsl` switch to their alpha-bearing forms when alpha is
    /// below 1 or `force_alpha` is set. Hex never carries alpha.
    pub fn render(self, format: ColorFormat, force_alpha: bool) -> ColorValue {
        let with_alpha = force_alpha || self.a < 1.0;
        let a = format_alpha(self.a);
        let text = match format {
            ColorFormat::Hex => self.to_hex(),
            ColorFormat::Rgb => {
                let [r, g, b] = self.to_u8();
                if with_alpha {
                    format!("rgba({r}, {g}, {b}, {a})")
                } else {
                    format!("rgb({r}, {g}, {b})")
                }
            }
            ColorFormat::Hsl => {
                let hsl = rgb_to_hsl(self);
                let h = hsl.h.round() as i64 % 360;
                let s = (hsl.s * 100.0).round() as i64;
                let l = (hsl.l * 100.0).round() as i64;
                if with_alpha {
                    format!("hsla({h}, {s}%, {l}%, {a})")
                } else {
                    format!("hsl({h}, {s}%, {l}%)")
                }
            }
        };
        ColorValue(text)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = if self.a < 1.0 {
            self.render(ColorFormat::Rgb, true)
        } else {
            self.render(ColorFormat::Hex, false)
        };
        serializer.serialize_str(text.as_str())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::parse(s)
    }
}

/// Converts RGB (channels in [0, 255]) to HSL.
///
/// Achromatic colors get hue 0 and saturation 0.
pub fn rgb_to_hsl(c: Rgba) -> Hsla {
    let r = c.r.clamp(0.0, 255.0) / 255.0;
    let g = c.g.clamp(0.0, 255.0) / 255.0;
    let b = c.b.clamp(0.0, 255.0) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        return Hsla {
            h: 0.0,
            s: 0.0,
            l,
            a: c.a,
        };
    }
    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    Hsla {
        h: h * 60.0,
        s,
        l,
        a: c.a,
    }
}

/// Converts HSL to RGB (channels in [0, 255]).
///
/// Hue is wrapped into [0, 360); saturation and lightness are clamped.
pub fn hsl_to_rgb(c: Hsla) -> Rgba {
    let h = c.h.rem_euclid(360.0) / 360.0;
    let s = c.s.clamp(0.0, 1.0);
    let l = c.l.clamp(0.0, 1.0);
    if s == 0.0 {
        let v = l * 255.0;
        return Rgba {
            r: v,
            g: v,
            b: v,
            a: c.a,
        };
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgba {
        r: hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        g: hue_to_channel(p, q, h) * 255.0,
        b: hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
        a: c.a,
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Parses `color` in any supported encoding and renders it in `format`.
///
/// When `alpha` is given it replaces the parsed alpha and forces the
/// alpha-bearing `rgba`/`hsla` form.
pub fn convert(color: &str, format: ColorFormat, alpha: Option<f64>) -> Result<ColorValue, ColorError> {
    let rgba = Rgba::parse(color)?;
    Ok(match alpha {
        Some(a) => rgba.with_alpha(a).render(format, true),
        None => rgba.render(format, false),
    })
}

/// Detects the encoding of a color string from its prefix.
pub(crate) fn detect_format(s: &str) -> Option<ColorFormat> {
    let s = s.trim_start();
    let lower = s.get(..4).map(str::to_ascii_lowercase);
    match lower.as_deref() {
        _ if s.starts_with('#') => Some(ColorFormat::Hex),
        Some("rgb(") | Some("rgba") => Some(ColorFormat::Rgb),
        Some("hsl(") | Some("hsla") => Some(ColorFormat::Hsl),
        _ => None,
    }
}

/// Formats alpha rounded to two decimals with no trailing zeros: `0.5`, `1`.
fn format_alpha(a: f64) -> String {
    let rounded = (a.clamp(0.0, 1.0) * 100.0).round() / 100.0;
    format!("{rounded}")
}

fn channel_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Hex digits without the leading `#`.
fn is_bare_hex(s: &str) -> bool {
    matches!(s.len(), 3 | 4 | 6 | 8) && s.chars().all(|c| c.is_ascii_hexdigit())
}
