//! WCAG contrast ratio measurement and enforcement.
//!
//! Luminance follows the WCAG 2.x definition on 8-bit channels. Enforcement
//! keeps the darker color as a fixed background and lightens the other one
//! in 10% relative steps until the requested ratio is met.
//!
//! Lightening is multiplicative in HSL lightness, so it can stall (black
//! stays black, white stays white) or top out below the target when the
//! background is a mid tone. The loop is capped at [`MAX_LIGHTEN_STEPS`]
//! and reports [`ColorError::ContrastUnachievable`] instead of spinning.

use crate::adjust::Adjustment;
use crate::color::{hsl_to_rgb, rgb_to_hsl, ColorValue, Rgba};
use crate::error::ColorError;
use crate::options::ContrastOptions;
use tracing::{debug, warn};

/// Highest contrast ratio WCAG can report (white on black).
pub const MAX_CONTRAST_RATIO: f64 = 21.0;

/// Relative lightening applied per iteration.
pub const LIGHTEN_STEP: f64 = 0.1;

/// Iteration cap for [`ensure_contrast`]. From 1% lightness, 1.1^49 already
/// exceeds white, so the cap is never what stops a solvable pair.
pub const MAX_LIGHTEN_STEPS: usize = 64;

/// Relative luminance of a color per WCAG 2.x, in [0, 1].
///
/// Channels are quantized to 8 bits first, matching what a hex string
/// carries.
pub fn relative_luminance(color: Rgba) -> f64 {
    let [r, g, b] = color.to_u8().map(|c| linearize(f64::from(c) / 255.0));
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio between two colors, in [1, 21], symmetric in its
/// arguments.
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Parses two color strings and returns their WCAG contrast ratio.
pub fn contrast_ratio_str(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(Rgba::parse(a)?, Rgba::parse(b)?))
}

/// YIQ brightness classification: true when the color reads as dark.
pub fn is_dark(color: Rgba) -> bool {
    let [r, g, b] = color.to_u8().map(f64::from);
    let yiq = (r * 2126.0 + g * 7152.0 + b * 722.0) / 10_000.0;
    yiq < 128.0
}

/// Verifies or repairs the contrast between `color1` and `color2`.
///
/// Ratios are always measured on the colors as rendered in `format`, so a
/// returned pair re-parses to at least the requested ratio even when the
/// encoding rounds (HSL percentages do).
///
/// If the pair already meets `contrast_ratio` both colors come back
/// unchanged, in input order, rendered in `format`. Any threshold of 1 or
/// less is always met. Otherwise the result is `[background, foreground]`:
/// `color1` is the background when it is dark, `color2` otherwise, and the
/// foreground is lightened until the ratio is met.
///
/// # Errors
///
/// - [`ColorError::InvalidColor`] if either input fails to parse.
/// - [`ColorError::UnreachableContrast`] if the ratio is NaN or above 21.
/// - [`ColorError::ContrastUnachievable`] if lightening stalls or the
///   iteration cap is reached first.
pub fn ensure_contrast(options: &ContrastOptions) -> Result<[ColorValue; 2], ColorError> {
    let target = options.contrast_ratio;
    if target.is_nan() || target > MAX_CONTRAST_RATIO {
        return Err(ColorError::UnreachableContrast { requested: target });
    }
    let c1 = Rgba::parse(&options.color1)?;
    let c2 = Rgba::parse(&options.color2)?;
    // Rendered value plus what it parses back to.
    let render = |c: Rgba| -> Result<(ColorValue, Rgba), ColorError> {
        let value = c.render(options.format, false);
        let seen = value.to_rgba()?;
        Ok((value, seen))
    };

    let (out1, seen1) = render(c1)?;
    let (out2, seen2) = render(c2)?;
    let initial = contrast_ratio(seen1, seen2);
    if initial >= target {
        debug!(ratio = initial, target, "contrast already sufficient");
        return Ok([out1, out2]);
    }

    let ((bg_out, bg_seen), foreground) = if is_dark(c1) {
        ((out1, seen1), c2)
    } else {
        ((out2, seen2), c1)
    };
    let mut hsl = rgb_to_hsl(foreground);
    let mut fg = foreground;
    let mut ratio = initial;
    let mut steps = 0;

    loop {
        let next = Adjustment::Lighten.apply(hsl, LIGHTEN_STEP);
        if steps == MAX_LIGHTEN_STEPS || next.l == hsl.l {
            warn!(
                target,
                achieved = ratio,
                steps,
                background = %bg_out,
                foreground = %fg.to_hex(),
                "contrast target not achievable by lightening"
            );
            return Err(ColorError::ContrastUnachievable {
                requested: target,
                achieved: ratio,
                steps,
            });
        }
        hsl = next;
        fg = hsl_to_rgb(hsl);
        let (fg_out, fg_seen) = render(fg)?;
        ratio = contrast_ratio(bg_seen, fg_seen);
        steps += 1;
        debug!(step = steps, ratio, foreground = %fg_out, "lightened foreground");
        if ratio >= target {
            return Ok([bg_out, fg_out]);
        }
    }
}
