//! Cell references and values.

use std::fmt;

use crate::ooxml::error::{OoxmlError, Result};

/// Largest column number (`XFD`).
pub const MAX_COLUMNS: u32 = 16_384;
/// Largest row number.
pub const TOTAL_ROWS: u32 = 1_048_576;

/// A value written into a worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    /// Written as an inline string
    String(String),
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// Convert a one-based column number to letters (1 → `A`, 27 → `AA`).
pub fn column_to_letters(col: u32) -> String {
    let mut letters = Vec::with_capacity(3);
    let mut col = col;
    while col > 0 {
        col -= 1;
        letters.push((col % 26) as u8 + b'A');
        col /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Split a cell reference such as `B12` or `$B$12` into one-based column and
/// row numbers.
pub fn cell_name_to_coordinates(cell: &str) -> Result<(u32, u32)> {
    let invalid = || OoxmlError::InvalidCellReference(cell.to_string());

    let name = cell.replace('$', "");
    let split = name
        .find(|c: char| !c.is_ascii_alphabetic())
        .ok_or_else(invalid)?;
    let (letters, digits) = name.split_at(split);
    if letters.is_empty() || letters.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let col = letters
        .bytes()
        .fold(0u32, |acc, b| acc * 26 + u32::from(b.to_ascii_uppercase() - b'A' + 1));
    let row = atoi_simd::parse::<u32, false, false>(digits.as_bytes()).map_err(|_| invalid())?;

    if col > MAX_COLUMNS || row == 0 || row > TOTAL_ROWS {
        return Err(invalid());
    }
    Ok((col, row))
}

/// Build a cell reference from one-based column and row numbers.
pub fn coordinates_to_cell_name(col: u32, row: u32) -> Result<String> {
    if col == 0 || col > MAX_COLUMNS || row == 0 || row > TOTAL_ROWS {
        return Err(OoxmlError::InvalidCellReference(format!("({}, {})", col, row)));
    }
    let mut name = column_to_letters(col);
    name.push_str(itoa::Buffer::new().format(row));
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(column_to_letters(1), "A");
        assert_eq!(column_to_letters(26), "Z");
        assert_eq!(column_to_letters(27), "AA");
        assert_eq!(column_to_letters(16_384), "XFD");
    }

    #[test]
    fn test_cell_name_to_coordinates() {
        assert_eq!(cell_name_to_coordinates("A1").unwrap(), (1, 1));
        assert_eq!(cell_name_to_coordinates("e10").unwrap(), (5, 10));
        assert_eq!(cell_name_to_coordinates("$AB$3").unwrap(), (28, 3));
        assert_eq!(cell_name_to_coordinates("XFD1048576").unwrap(), (16_384, 1_048_576));
    }

    #[test]
    fn test_invalid_cell_names() {
        for cell in ["", "A", "1", "A0", "XFE1", "A1048577", "A1B", "ABCD1", "A-1"] {
            assert!(
                matches!(
                    cell_name_to_coordinates(cell),
                    Err(OoxmlError::InvalidCellReference(_))
                ),
                "{cell} should be rejected"
            );
        }
    }

    #[test]
    fn test_coordinates_to_cell_name() {
        assert_eq!(coordinates_to_cell_name(3, 7).unwrap(), "C7");
        assert!(coordinates_to_cell_name(0, 1).is_err());
    }
}
