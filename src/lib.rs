//! Sheetwright - A Rust library for writing Excel spreadsheets
//!
//! This library builds Office Open XML (.xlsx) workbooks in memory and writes
//! them out as ZIP packages.
//!
//! # Features
//!
//! - **Charts**: 55 chart types, combo charts, chart sheets, chart deletion
//! - **Data validation**: drop lists, numeric and formula ranges, prompts
//!   and error alerts
//! - **Pictures**: PNG, JPEG, GIF, BMP and TIFF images anchored to cells
//! - **YAML chart definitions** (`yaml` feature, on by default)
//!
//! # Example - Adding a chart
//!
//! ```
//! use sheetwright::ooxml::charts::{Chart, ChartSeries, ChartType, RichTextRun};
//! use sheetwright::ooxml::xlsx::Workbook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wb = Workbook::new();
//! for (col, value) in ["B", "C", "D"].iter().zip([2.0, 3.0, 5.0]) {
//!     wb.set_cell_value("Sheet1", &format!("{col}2"), value)?;
//! }
//!
//! let mut chart = Chart::new(ChartType::Col3DClustered);
//! chart.title.push(RichTextRun::new("Quarterly results"));
//! chart.series.push(ChartSeries {
//!     name: "Sheet1!$A$2".into(),
//!     categories: "Sheet1!$B$1:$D$1".into(),
//!     values: "Sheet1!$B$2:$D$2".into(),
//!     ..Default::default()
//! });
//! wb.add_chart("Sheet1", "E1", &chart, &[])?;
//! wb.add_chart_sheet("Summary", &chart, &[])?;
//! assert_eq!(wb.count_charts(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Data validation
//!
//! ```no_run
//! use sheetwright::ooxml::xlsx::{
//!     DataValidation, DataValidationOperator, DataValidationType, Workbook,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wb = Workbook::new();
//! let mut dv = DataValidation::new(true);
//! dv.set_sqref("B2:B100");
//! dv.set_range(1, 10, DataValidationType::Whole, DataValidationOperator::Between)?;
//! dv.set_input("Score", "Enter a whole number from 1 to 10");
//! wb.add_data_validation("Sheet1", dv)?;
//! wb.save_as("scores.xlsx")?;
//! # Ok(())
//! # }
//! ```

/// Format-independent helpers: XML escaping and drawing units
pub mod common;

/// OOXML (Office Open XML) spreadsheet writer
///
/// This module provides the package layer, chart and drawing markup, and the
/// workbook model.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use ooxml::xlsx::{DataValidation, Workbook};
pub use ooxml::{OoxmlError, Result};
