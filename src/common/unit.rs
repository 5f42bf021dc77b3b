//! Unit conversion utilities.
//!
//! DrawingML positions everything in English Metric Units (EMU). Sheet
//! geometry is tracked in pixels at 96 DPI and line widths in points.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_PX: i64 = 9_525;

/// Line width used when a point value is outside the accepted range (2pt).
pub const DEFAULT_LINE_EMUS: i64 = 25_400;

#[inline]
pub fn px_to_emu(px: i64) -> i64 {
    px.saturating_mul(EMUS_PER_PX)
}

/// Convert points to EMU for line widths.
///
/// The accepted range is 0.25pt to 999pt inclusive; anything else maps to
/// [`DEFAULT_LINE_EMUS`].
#[inline]
pub fn pt_to_emus(pt: f64) -> i64 {
    if !(0.25..=999.0).contains(&pt) {
        return DEFAULT_LINE_EMUS;
    }
    (EMUS_PER_PT as f64 * pt) as i64
}
