//! Office Open XML (OOXML) spreadsheet writing.
//!
//! The module is organized in layers:
//!
//! 1. **OPC Layer** (`opc`): parts, pack URIs, relationships, content types
//!    and the ZIP package writer
//! 2. **DrawingML** (`charts`, `drawings`): chart configuration and markup,
//!    drawing anchors
//! 3. **SpreadsheetML** (`xlsx`): the workbook model
//!
//! # Example
//!
//! ```rust,no_run
//! use sheetwright::ooxml::charts::{Chart, ChartSeries, ChartType};
//! use sheetwright::ooxml::xlsx::Workbook;
//!
//! let mut wb = Workbook::new();
//! for (row, (label, value)) in [("North", 12.0), ("South", 7.5)].into_iter().enumerate() {
//!     wb.set_cell_value("Sheet1", &format!("A{}", row + 1), label)?;
//!     wb.set_cell_value("Sheet1", &format!("B{}", row + 1), value)?;
//! }
//! let mut chart = Chart::new(ChartType::Bar);
//! chart.series.push(ChartSeries {
//!     categories: "Sheet1!$A$1:$A$2".into(),
//!     values: "Sheet1!$B$1:$B$2".into(),
//!     ..Default::default()
//! });
//! wb.add_chart("Sheet1", "D2", &chart, &[])?;
//! wb.save_as("regions.xlsx")?;
//! # Ok::<(), sheetwright::ooxml::OoxmlError>(())
//! ```
pub mod charts;
pub mod drawings;
pub mod error;
pub mod opc;
pub mod xlsx;

pub use opc::{OpcPackage, PackURI};

pub use error::{OoxmlError, Result};
