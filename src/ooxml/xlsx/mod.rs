//! Excel (.xlsx) spreadsheet construction.
//!
//! This module builds SpreadsheetML packages: a [`Workbook`] of worksheets and
//! chart sheets, with charts, pictures and data validation rules attached to
//! its worksheets.
//!
//! - `workbook`: sheet registry, content types and package assembly
//! - `worksheet` / `chartsheet`: sheet models and their XML
//! - `chart`: embedding and deleting charts
//! - `picture`: embedding images
//! - `data_validation`: validation rule builder
//!
//! # Example
//!
//! ```rust
//! use sheetwright::ooxml::xlsx::{DataValidation, ErrorStyle, Workbook};
//!
//! let mut wb = Workbook::new();
//! let mut dv = DataValidation::new(true);
//! dv.set_sqref("A1:A10");
//! dv.set_drop_list(&["Yes", "No"]);
//! dv.set_error(ErrorStyle::Warning, "Invalid", "Pick Yes or No");
//! wb.add_data_validation("Sheet1", dv)?;
//! let bytes = wb.write_to_buffer()?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), sheetwright::ooxml::OoxmlError>(())
//! ```
pub mod cell;
pub mod chart;
pub mod chartsheet;
pub mod data_validation;
pub mod picture;
pub mod template;
pub mod workbook;
pub mod worksheet;

pub use cell::{CellValue, cell_name_to_coordinates, coordinates_to_cell_name};
pub use chartsheet::Chartsheet;
pub use data_validation::{
    DataValidation, DataValidationOperator, DataValidationType, DataValidations, ErrorStyle,
};
pub use picture::Picture;
pub use workbook::{ContentTypePart, SheetEntry, SheetKind, Workbook};
pub use worksheet::Worksheet;
