//! Chart configuration and serialization.
//!
//! - [`ChartType`] enumerates the 55 supported chart types
//! - [`tables`] holds the per-type attribute lookup tables
//! - [`Chart`] is the chart configuration, defaulted by [`parse_chart_options`]
//! - [`writer`] produces the `c:chartSpace` part
//!
//! # Example
//!
//! ```
//! use sheetwright::ooxml::charts::{Chart, ChartSeries, ChartType, chart_to_xml, get_chart_options};
//!
//! let mut chart = Chart::new(ChartType::Col);
//! chart.series.push(ChartSeries {
//!     name: "Sheet1!$A$2".into(),
//!     categories: "Sheet1!$B$1:$D$1".into(),
//!     values: "Sheet1!$B$2:$D$2".into(),
//!     ..Default::default()
//! });
//! let (opts, combo) = get_chart_options(Some(&chart), &[]).unwrap();
//! let xml = chart_to_xml(&opts, &combo).unwrap();
//! assert!(xml.starts_with(b"<?xml"));
//! ```

pub mod options;
pub mod tables;
pub mod types;
pub mod writer;

pub use options::{
    Chart, ChartAxis, ChartDimension, ChartLegend, ChartLine, ChartMarker, ChartNumFmt,
    ChartPlotArea, ChartSeries, Font, GraphicOptions, Positioning, RichTextRun,
    get_chart_options, parse_chart_options,
};
pub use types::{ChartType, LegendPosition, MarkerSymbol, PlotGroup, ShowBlanksAs};
pub use writer::{chart_to_xml, write_chart};
