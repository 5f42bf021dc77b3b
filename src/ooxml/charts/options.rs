//! Chart configuration and option defaulting.
//!
//! A [`Chart`] is the caller-facing description of a chart: its type, data
//! series, legend, title, axes and how the chart frame is placed on a sheet.
//! Every numeric field uses zero and every optional flag uses `None` to mean
//! "unset"; [`parse_chart_options`] fills unset fields with defaults.

use serde::{Deserialize, Serialize};

use crate::ooxml::charts::tables;
use crate::ooxml::charts::types::{ChartType, LegendPosition, MarkerSymbol, ShowBlanksAs};
use crate::ooxml::error::{OoxmlError, Result};

pub const DEFAULT_CHART_DIMENSION_WIDTH: u32 = 480;
pub const DEFAULT_CHART_DIMENSION_HEIGHT: u32 = 260;
pub const DEFAULT_PICTURE_SCALE: f64 = 1.0;
pub const DEFAULT_TITLE_FONT_COLOR: &str = "595959";
pub const DEFAULT_TITLE_FONT_SIZE: f64 = 14.0;

/// Font settings of a title run or an axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub family: String,
    /// Size in points, zero for the application default
    pub size: f64,
    /// RGB hex color without the leading `#`
    pub color: String,
}

/// A run of title text sharing one font.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextRun {
    pub font: Option<Font>,
    pub text: String,
}

impl RichTextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            font: None,
            text: text.into(),
        }
    }
}

/// Chart frame size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDimension {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLegend {
    pub position: Option<LegendPosition>,
    pub show_legend_key: bool,
}

/// Data label flags and of-pie settings of the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPlotArea {
    /// Number of values in the second plot of pie-of-pie and bar-of-pie charts
    pub second_plot_values: u32,
    pub show_bubble_size: bool,
    pub show_cat_name: bool,
    pub show_leader_lines: bool,
    pub show_percent: bool,
    pub show_ser_name: bool,
    pub show_val: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartNumFmt {
    pub custom_num_fmt: String,
    pub source_linked: bool,
}

/// Axis options. `x_axis` is the category axis (or the X value axis of
/// scatter and bubble charts) and `y_axis` is the value axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartAxis {
    /// Delete the axis
    pub none: bool,
    pub major_grid_lines: bool,
    pub minor_grid_lines: bool,
    /// Distance between major ticks, zero for automatic
    pub major_unit: f64,
    /// Tick labels skipped between drawn labels, zero for automatic
    pub tick_label_skip: u32,
    pub reverse_order: bool,
    /// Plot this combo chart against secondary axes
    pub secondary: bool,
    pub maximum: Option<f64>,
    pub minimum: Option<f64>,
    pub font: Font,
    /// Logarithmic scale base, zero for a linear axis
    pub log_base: f64,
    pub num_fmt: ChartNumFmt,
    pub title: Vec<RichTextRun>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLine {
    pub smooth: bool,
    /// Width in points; outside 0.25 to 999 the default 2pt is used
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartMarker {
    pub symbol: MarkerSymbol,
    /// 2 to 72, zero for the default of 5
    pub size: u32,
}

/// One data series. All references are formulas such as `Sheet1!$B$2:$D$2`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSeries {
    pub name: String,
    pub categories: String,
    pub values: String,
    /// Bubble sizes, bubble charts only
    pub sizes: String,
    /// Solid fill color (RGB hex)
    pub fill: String,
    pub line: ChartLine,
    pub marker: ChartMarker,
}

/// How a drawing object is moved and sized with the cells under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Positioning {
    OneCell,
    TwoCell,
    Absolute,
}

impl Positioning {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::OneCell => "oneCell",
            Self::TwoCell => "twoCell",
            Self::Absolute => "absolute",
        }
    }
}

/// Placement and protection of a chart or picture frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicOptions {
    pub alt_text: String,
    pub print_object: Option<bool>,
    pub locked: Option<bool>,
    pub lock_aspect_ratio: bool,
    /// Horizontal offset from the anchor cell in pixels
    pub offset_x: i32,
    /// Vertical offset from the anchor cell in pixels
    pub offset_y: i32,
    pub scale_x: f64,
    pub scale_y: f64,
    pub positioning: Option<Positioning>,
}

impl GraphicOptions {
    /// Fill unset placement fields with their defaults.
    pub fn with_defaults(mut self) -> Self {
        if self.print_object.is_none() {
            self.print_object = Some(true);
        }
        if self.locked.is_none() {
            self.locked = Some(false);
        }
        if self.scale_x == 0.0 {
            self.scale_x = DEFAULT_PICTURE_SCALE;
        }
        if self.scale_y == 0.0 {
            self.scale_y = DEFAULT_PICTURE_SCALE;
        }
        self
    }
}

/// Chart configuration.
///
/// ```
/// use sheetwright::ooxml::charts::{Chart, ChartSeries, ChartType, parse_chart_options};
///
/// let chart = Chart {
///     chart_type: ChartType::Col3DClustered,
///     series: vec![ChartSeries {
///         name: "Sheet1!$A$2".into(),
///         categories: "Sheet1!$B$1:$D$1".into(),
///         values: "Sheet1!$B$2:$D$2".into(),
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
/// let opts = parse_chart_options(Some(&chart)).unwrap();
/// assert_eq!(opts.dimension.width, 480);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Chart {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub series: Vec<ChartSeries>,
    pub format: GraphicOptions,
    pub dimension: ChartDimension,
    pub legend: ChartLegend,
    pub title: Vec<RichTextRun>,
    pub vary_colors: Option<bool>,
    pub x_axis: ChartAxis,
    pub y_axis: ChartAxis,
    pub plot_area: ChartPlotArea,
    pub show_blanks_as: Option<ShowBlanksAs>,
    /// Doughnut hole size in percent, zero for the default of 75
    pub hole_size: u32,
}

impl Chart {
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Default::default()
        }
    }

    /// Fill every unset field with its default.
    ///
    /// Applying this twice yields the same configuration as applying it once.
    pub fn with_defaults(mut self) -> Self {
        if self.dimension.width == 0 {
            self.dimension.width = DEFAULT_CHART_DIMENSION_WIDTH;
        }
        if self.dimension.height == 0 {
            self.dimension.height = DEFAULT_CHART_DIMENSION_HEIGHT;
        }
        self.format = self.format.with_defaults();
        if self.legend.position.is_none() {
            self.legend.position = Some(LegendPosition::Bottom);
        }
        for run in &mut self.title {
            let font = run.font.get_or_insert_with(Font::default);
            if font.color.is_empty() {
                font.color = DEFAULT_TITLE_FONT_COLOR.to_string();
            }
            if font.size == 0.0 {
                font.size = DEFAULT_TITLE_FONT_SIZE;
            }
        }
        if self.vary_colors.is_none() {
            self.vary_colors = Some(true);
        }
        if self.show_blanks_as.is_none() {
            self.show_blanks_as = Some(ShowBlanksAs::Gap);
        }
        self
    }

    /// Load a chart configuration from a YAML document.
    ///
    /// Field names are the snake_case struct fields; the chart type is given
    /// by name under `type`.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| OoxmlError::Config(e.to_string()))
    }

    /// Serialize the configuration to YAML.
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| OoxmlError::Config(e.to_string()))
    }
}

/// Return a defaulted copy of the chart configuration.
///
/// Fails with [`OoxmlError::ParameterInvalid`] when no configuration is given.
pub fn parse_chart_options(opts: Option<&Chart>) -> Result<Chart> {
    let opts = opts.ok_or(OoxmlError::ParameterInvalid)?;
    Ok(opts.clone().with_defaults())
}

/// Default and validate a chart together with its combo charts.
///
/// Combo charts are defaulted and checked against the supported chart type
/// table in order, then the primary chart type is checked. The first
/// unsupported type fails the whole call.
pub fn get_chart_options(opts: Option<&Chart>, combo: &[Chart]) -> Result<(Chart, Vec<Chart>)> {
    let options = parse_chart_options(opts)?;
    let mut combo_charts = Vec::with_capacity(combo.len());
    for combo_format in combo {
        let combo_chart = parse_chart_options(Some(combo_format))?;
        if !tables::is_supported(combo_chart.chart_type) {
            return Err(OoxmlError::UnsupportedChartType(
                combo_chart.chart_type.to_string(),
            ));
        }
        combo_charts.push(combo_chart);
    }
    if !tables::is_supported(options.chart_type) {
        return Err(OoxmlError::UnsupportedChartType(
            options.chart_type.to_string(),
        ));
    }
    Ok((options, combo_charts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_absent_configuration() {
        assert!(matches!(
            parse_chart_options(None),
            Err(OoxmlError::ParameterInvalid)
        ));
        assert!(matches!(
            get_chart_options(None, &[]),
            Err(OoxmlError::ParameterInvalid)
        ));
    }

    #[test]
    fn test_defaults() {
        let mut chart = Chart::new(ChartType::Line);
        chart.title.push(RichTextRun::new("Sales"));
        let opts = parse_chart_options(Some(&chart)).unwrap();

        assert_eq!(opts.dimension.width, 480);
        assert_eq!(opts.dimension.height, 260);
        assert_eq!(opts.format.print_object, Some(true));
        assert_eq!(opts.format.locked, Some(false));
        assert_eq!(opts.format.scale_x, 1.0);
        assert_eq!(opts.format.scale_y, 1.0);
        assert_eq!(opts.legend.position, Some(LegendPosition::Bottom));
        assert_eq!(opts.vary_colors, Some(true));
        assert_eq!(opts.show_blanks_as, Some(ShowBlanksAs::Gap));

        let font = opts.title[0].font.as_ref().unwrap();
        assert_eq!(font.color, "595959");
        assert_eq!(font.size, 14.0);

        // the caller's configuration is untouched
        assert_eq!(chart.dimension.width, 0);
    }

    #[test]
    fn test_set_values_survive() {
        let chart = Chart {
            chart_type: ChartType::Pie,
            dimension: ChartDimension {
                width: 640,
                height: 0,
            },
            vary_colors: Some(false),
            legend: ChartLegend {
                position: Some(LegendPosition::Hidden),
                show_legend_key: true,
            },
            format: GraphicOptions {
                locked: Some(true),
                scale_x: 0.5,
                ..Default::default()
            },
            ..Default::default()
        };
        let opts = parse_chart_options(Some(&chart)).unwrap();
        assert_eq!(opts.dimension.width, 640);
        assert_eq!(opts.dimension.height, 260);
        assert_eq!(opts.vary_colors, Some(false));
        assert_eq!(opts.legend.position, Some(LegendPosition::Hidden));
        assert_eq!(opts.format.locked, Some(true));
        assert_eq!(opts.format.scale_x, 0.5);
        assert_eq!(opts.format.scale_y, 1.0);
    }

    #[test]
    fn test_every_chart_type_accepted() {
        for chart_type in ChartType::ALL {
            let chart = Chart::new(chart_type);
            let combo = [Chart::new(ChartType::Line)];
            let (opts, combos) = get_chart_options(Some(&chart), &combo).unwrap();
            assert_eq!(opts.chart_type, chart_type);
            assert_eq!(combos.len(), 1);
            assert_eq!(combos[0].dimension.width, 480);
        }
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_yaml() {
        let yaml = r#"
type: Col3DClustered
series:
  - name: Sheet1!$A$2
    categories: Sheet1!$B$1:$D$1
    values: Sheet1!$B$2:$D$2
legend:
  position: top_right
title:
  - text: Fruit
show_blanks_as: span
"#;
        let chart = Chart::from_yaml(yaml).unwrap();
        assert_eq!(chart.chart_type, ChartType::Col3DClustered);
        assert_eq!(chart.series[0].values, "Sheet1!$B$2:$D$2");
        assert_eq!(chart.legend.position, Some(LegendPosition::TopRight));
        assert_eq!(chart.show_blanks_as, Some(ShowBlanksAs::Span));
        assert_eq!(chart.dimension.width, 0);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_yaml_unknown_type() {
        let err = Chart::from_yaml("type: Column3D\n").unwrap_err();
        match err {
            OoxmlError::Config(msg) => assert!(msg.contains("unsupported chart type Column3D")),
            other => panic!("unexpected {:?}", other),
        }
    }

    fn arb_chart() -> impl Strategy<Value = Chart> {
        (
            0u8..55,
            0u32..2000,
            0u32..2000,
            proptest::option::of(any::<bool>()),
            0.0f64..4.0,
            proptest::collection::vec(("[a-z]{0,8}", 0.0f64..30.0), 0..3),
        )
            .prop_map(|(id, width, height, vary, scale, runs)| {
                let mut chart = Chart::new(ChartType::ALL[usize::from(id)]);
                chart.dimension = ChartDimension { width, height };
                chart.vary_colors = vary;
                chart.format.scale_x = scale;
                chart.title = runs
                    .into_iter()
                    .map(|(text, size)| RichTextRun {
                        font: Some(Font {
                            size,
                            ..Default::default()
                        }),
                        text,
                    })
                    .collect();
                chart
            })
    }

    proptest! {
        #[test]
        fn prop_defaulting_is_idempotent(chart in arb_chart()) {
            let once = parse_chart_options(Some(&chart)).unwrap();
            let twice = parse_chart_options(Some(&once)).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
