//! Cell anchors and object positioning.
//!
//! Objects on a worksheet are placed by the cell their top-left corner falls
//! in plus an offset inside that cell. Sheets here carry no custom column
//! widths or row heights, so every column is 64 px wide and every row is
//! 20 px high.

use crate::common::unit::px_to_emu;
use crate::ooxml::xlsx::cell::{MAX_COLUMNS, TOTAL_ROWS};

pub const DEFAULT_COL_WIDTH_PX: i64 = 64;
pub const DEFAULT_ROW_HEIGHT_PX: i64 = 20;

/// Largest object extent in pixels.
pub const MAX_OBJECT_PX: i64 = i32::MAX as i64;

/// A cell position with offsets, as in `xdr:from` / `xdr:to`.
///
/// Columns and rows are zero-based; offsets are in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Marker {
    pub col: u32,
    pub col_off: i64,
    pub row: u32,
    pub row_off: i64,
}

impl Marker {
    pub(crate) fn write_xml(&self, xml: &mut String, tag: &str) {
        xml.push_str(&format!(
            "<xdr:{0}><xdr:col>{1}</xdr:col><xdr:colOff>{2}</xdr:colOff><xdr:row>{3}</xdr:row><xdr:rowOff>{4}</xdr:rowOff></xdr:{0}>",
            tag, self.col, self.col_off, self.row, self.row_off
        ));
    }
}

/// Start and end cells of a positioned object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectPosition {
    pub from: Marker,
    pub to: Marker,
}

/// Locate an object of `width` x `height` pixels whose top-left corner is
/// `x_off`/`y_off` pixels into the cell at `col`/`row` (zero-based).
///
/// Offsets larger than a cell carry the start into the following cells.
/// Negative offsets are treated as zero. A marker past the last column or
/// row is pinned to the far edge of that cell.
pub fn position_object_pixels(
    col: u32,
    row: u32,
    x_off: i64,
    y_off: i64,
    width: i64,
    height: i64,
) -> ObjectPosition {
    let last_col = MAX_COLUMNS - 1;
    let last_row = TOTAL_ROWS - 1;
    let (col_start, x1) = advance(col, x_off.max(0), DEFAULT_COL_WIDTH_PX, last_col);
    let (row_start, y1) = advance(row, y_off.max(0), DEFAULT_ROW_HEIGHT_PX, last_row);
    let (col_end, x2) = advance(
        col_start,
        x1.saturating_add(width.max(0)),
        DEFAULT_COL_WIDTH_PX,
        last_col,
    );
    let (row_end, y2) = advance(
        row_start,
        y1.saturating_add(height.max(0)),
        DEFAULT_ROW_HEIGHT_PX,
        last_row,
    );

    ObjectPosition {
        from: Marker {
            col: col_start,
            col_off: px_to_emu(x1),
            row: row_start,
            row_off: px_to_emu(y1),
        },
        to: Marker {
            col: col_end,
            col_off: px_to_emu(x2),
            row: row_end,
            row_off: px_to_emu(y2),
        },
    }
}

/// Scale a pixel length, clamped to `0..=MAX_OBJECT_PX`.
///
/// A NaN scale yields zero.
pub fn scale_px(px: u32, scale: f64) -> i64 {
    let scaled = f64::from(px) * scale;
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, MAX_OBJECT_PX as f64) as i64
}

fn advance(index: u32, offset: i64, size: i64, last: u32) -> (u32, i64) {
    let cells = u32::try_from(offset / size).unwrap_or(u32::MAX);
    let index = index.saturating_add(cells);
    if index > last {
        return (last, size);
    }
    (index, offset % size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chart_at_origin() {
        let pos = position_object_pixels(0, 0, 0, 0, 480, 260);
        assert_eq!(pos.from, Marker::default());
        // 480 / 64 = 7.5 columns, 260 / 20 = 13 rows
        assert_eq!(pos.to.col, 7);
        assert_eq!(pos.to.col_off, 32 * 9525);
        assert_eq!(pos.to.row, 13);
        assert_eq!(pos.to.row_off, 0);
    }

    #[test]
    fn test_offset_spills_into_next_cell() {
        let pos = position_object_pixels(1, 2, 70, 25, 10, 10);
        assert_eq!(pos.from.col, 2);
        assert_eq!(pos.from.col_off, 6 * 9525);
        assert_eq!(pos.from.row, 3);
        assert_eq!(pos.from.row_off, 5 * 9525);
        assert_eq!(pos.to.col, 2);
        assert_eq!(pos.to.row, 3);
        assert_eq!(pos.to.row_off, 15 * 9525);
    }

    #[test]
    fn test_huge_extent_is_pinned_to_sheet() {
        let pos = position_object_pixels(0, 0, i64::MAX, 5, i64::MAX, i64::MAX);
        assert_eq!(pos.from.col, MAX_COLUMNS - 1);
        assert_eq!(pos.from.col_off, px_to_emu(DEFAULT_COL_WIDTH_PX));
        assert_eq!((pos.from.row, pos.from.row_off), (0, px_to_emu(5)));
        assert_eq!(pos.to.col, MAX_COLUMNS - 1);
        assert_eq!(pos.to.row, TOTAL_ROWS - 1);
        assert_eq!(pos.to.row_off, px_to_emu(DEFAULT_ROW_HEIGHT_PX));
    }

    #[test]
    fn test_scale_px() {
        assert_eq!(scale_px(480, 1.0), 480);
        assert_eq!(scale_px(480, 0.5), 240);
        assert_eq!(scale_px(480, 1e30), MAX_OBJECT_PX);
        assert_eq!(scale_px(480, f64::INFINITY), MAX_OBJECT_PX);
        assert_eq!(scale_px(480, -2.0), 0);
        assert_eq!(scale_px(480, f64::NAN), 0);
    }

    #[test]
    fn test_negative_offset() {
        let pos = position_object_pixels(3, 3, -10, -10, 0, 0);
        assert_eq!(pos.from.col, 3);
        assert_eq!(pos.from.col_off, 0);
        assert_eq!(pos.to, pos.from);
    }
}
