//! CSS named colors and nearest-name lookup.

use crate::color::Rgba;
use crate::error::ColorError;
use csscolorparser::NAMED_COLORS;

/// Looks up an exact CSS color name (case insensitive).
pub fn lookup(name: &str) -> Option<[u8; 3]> {
    NAMED_COLORS
        .get(name.trim().to_ascii_lowercase().as_str())
        .copied()
}

fn distance([r, g, b]: [u8; 3], [nr, ng, nb]: [u8; 3]) -> i32 {
    let dr = i32::from(r) - i32::from(nr);
    let dg = i32::from(g) - i32::from(ng);
    let db = i32::from(b) - i32::from(nb);
    dr * dr + dg * dg + db * db
}

/// Returns the CSS name whose color is nearest to `color` by squared RGB
/// distance. Ties resolve to the alphabetically earlier name.
pub fn closest(color: Rgba) -> &'static str {
    let target = color.to_u8();
    NAMED_COLORS
        .entries()
        .min_by_key(|&(name, rgb)| (distance(target, *rgb), *name))
        .map_or("black", |(name, _)| *name)
}

/// Parses `color` in any supported encoding and returns its nearest CSS name.
pub fn get_color_name(color: &str) -> Result<&'static str, ColorError> {
    Ok(closest(Rgba::parse(color)?))
}
