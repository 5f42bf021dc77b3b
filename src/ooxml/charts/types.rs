//! Chart type and chart keyword enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ooxml::error::OoxmlError;

/// Chart type enumeration.
///
/// The discriminant is the stable numeric chart type ID (0 to 54).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum ChartType {
    #[default]
    /// 2D area chart
    Area,
    /// 2D stacked area chart
    AreaStacked,
    /// 2D 100% stacked area chart
    AreaPercentStacked,
    /// 3D area chart
    Area3D,
    /// 3D stacked area chart
    Area3DStacked,
    /// 3D 100% stacked area chart
    Area3DPercentStacked,
    /// 2D clustered bar chart
    Bar,
    /// 2D stacked bar chart
    BarStacked,
    /// 2D 100% stacked bar chart
    BarPercentStacked,
    /// 3D clustered bar chart
    Bar3DClustered,
    /// 3D stacked bar chart
    Bar3DStacked,
    /// 3D 100% stacked bar chart
    Bar3DPercentStacked,
    /// 3D cone clustered bar chart
    Bar3DConeClustered,
    /// 3D cone stacked bar chart
    Bar3DConeStacked,
    /// 3D cone 100% stacked bar chart
    Bar3DConePercentStacked,
    /// 3D pyramid clustered bar chart
    Bar3DPyramidClustered,
    /// 3D pyramid stacked bar chart
    Bar3DPyramidStacked,
    /// 3D pyramid 100% stacked bar chart
    Bar3DPyramidPercentStacked,
    /// 3D cylinder clustered bar chart
    Bar3DCylinderClustered,
    /// 3D cylinder stacked bar chart
    Bar3DCylinderStacked,
    /// 3D cylinder 100% stacked bar chart
    Bar3DCylinderPercentStacked,
    /// 2D clustered column chart
    Col,
    /// 2D stacked column chart
    ColStacked,
    /// 2D 100% stacked column chart
    ColPercentStacked,
    /// 3D column chart
    Col3D,
    /// 3D clustered column chart
    Col3DClustered,
    /// 3D stacked column chart
    Col3DStacked,
    /// 3D 100% stacked column chart
    Col3DPercentStacked,
    /// 3D cone column chart
    Col3DCone,
    /// 3D cone clustered column chart
    Col3DConeClustered,
    /// 3D cone stacked column chart
    Col3DConeStacked,
    /// 3D cone 100% stacked column chart
    Col3DConePercentStacked,
    /// 3D pyramid column chart
    Col3DPyramid,
    /// 3D pyramid clustered column chart
    Col3DPyramidClustered,
    /// 3D pyramid stacked column chart
    Col3DPyramidStacked,
    /// 3D pyramid 100% stacked column chart
    Col3DPyramidPercentStacked,
    /// 3D cylinder column chart
    Col3DCylinder,
    /// 3D cylinder clustered column chart
    Col3DCylinderClustered,
    /// 3D cylinder stacked column chart
    Col3DCylinderStacked,
    /// 3D cylinder 100% stacked column chart
    Col3DCylinderPercentStacked,
    /// Doughnut chart
    Doughnut,
    /// Line chart
    Line,
    /// 3D line chart
    Line3D,
    /// Pie chart
    Pie,
    /// 3D pie chart
    Pie3D,
    /// Pie of pie chart
    PieOfPie,
    /// Bar of pie chart
    BarOfPie,
    /// Radar chart
    Radar,
    /// Scatter chart
    Scatter,
    /// 3D surface chart
    Surface3D,
    /// 3D wireframe surface chart
    WireframeSurface3D,
    /// Contour chart
    Contour,
    /// Wireframe contour chart
    WireframeContour,
    /// Bubble chart
    Bubble,
    /// 3D bubble chart
    Bubble3D,
}

/// The `c:*Chart` plot group element a chart type is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotGroup {
    Area,
    Area3D,
    Bar,
    Bar3D,
    Bubble,
    Doughnut,
    Line,
    Line3D,
    OfPie,
    Pie,
    Pie3D,
    Radar,
    Scatter,
    Surface,
    Surface3D,
}

impl PlotGroup {
    /// Returns the XML element name for this plot group.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Area => "c:areaChart",
            Self::Area3D => "c:area3DChart",
            Self::Bar => "c:barChart",
            Self::Bar3D => "c:bar3DChart",
            Self::Bubble => "c:bubbleChart",
            Self::Doughnut => "c:doughnutChart",
            Self::Line => "c:lineChart",
            Self::Line3D => "c:line3DChart",
            Self::OfPie => "c:ofPieChart",
            Self::Pie => "c:pieChart",
            Self::Pie3D => "c:pie3DChart",
            Self::Radar => "c:radarChart",
            Self::Scatter => "c:scatterChart",
            Self::Surface => "c:surfaceChart",
            Self::Surface3D => "c:surface3DChart",
        }
    }
}

impl ChartType {
    /// Every chart type, ordered by ID.
    pub const ALL: [ChartType; 55] = [
        Self::Area,
        Self::AreaStacked,
        Self::AreaPercentStacked,
        Self::Area3D,
        Self::Area3DStacked,
        Self::Area3DPercentStacked,
        Self::Bar,
        Self::BarStacked,
        Self::BarPercentStacked,
        Self::Bar3DClustered,
        Self::Bar3DStacked,
        Self::Bar3DPercentStacked,
        Self::Bar3DConeClustered,
        Self::Bar3DConeStacked,
        Self::Bar3DConePercentStacked,
        Self::Bar3DPyramidClustered,
        Self::Bar3DPyramidStacked,
        Self::Bar3DPyramidPercentStacked,
        Self::Bar3DCylinderClustered,
        Self::Bar3DCylinderStacked,
        Self::Bar3DCylinderPercentStacked,
        Self::Col,
        Self::ColStacked,
        Self::ColPercentStacked,
        Self::Col3D,
        Self::Col3DClustered,
        Self::Col3DStacked,
        Self::Col3DPercentStacked,
        Self::Col3DCone,
        Self::Col3DConeClustered,
        Self::Col3DConeStacked,
        Self::Col3DConePercentStacked,
        Self::Col3DPyramid,
        Self::Col3DPyramidClustered,
        Self::Col3DPyramidStacked,
        Self::Col3DPyramidPercentStacked,
        Self::Col3DCylinder,
        Self::Col3DCylinderClustered,
        Self::Col3DCylinderStacked,
        Self::Col3DCylinderPercentStacked,
        Self::Doughnut,
        Self::Line,
        Self::Line3D,
        Self::Pie,
        Self::Pie3D,
        Self::PieOfPie,
        Self::BarOfPie,
        Self::Radar,
        Self::Scatter,
        Self::Surface3D,
        Self::WireframeSurface3D,
        Self::Contour,
        Self::WireframeContour,
        Self::Bubble,
        Self::Bubble3D,
    ];

    /// The chart type name, also the key of the attribute tables.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::AreaStacked => "AreaStacked",
            Self::AreaPercentStacked => "AreaPercentStacked",
            Self::Area3D => "Area3D",
            Self::Area3DStacked => "Area3DStacked",
            Self::Area3DPercentStacked => "Area3DPercentStacked",
            Self::Bar => "Bar",
            Self::BarStacked => "BarStacked",
            Self::BarPercentStacked => "BarPercentStacked",
            Self::Bar3DClustered => "Bar3DClustered",
            Self::Bar3DStacked => "Bar3DStacked",
            Self::Bar3DPercentStacked => "Bar3DPercentStacked",
            Self::Bar3DConeClustered => "Bar3DConeClustered",
            Self::Bar3DConeStacked => "Bar3DConeStacked",
            Self::Bar3DConePercentStacked => "Bar3DConePercentStacked",
            Self::Bar3DPyramidClustered => "Bar3DPyramidClustered",
            Self::Bar3DPyramidStacked => "Bar3DPyramidStacked",
            Self::Bar3DPyramidPercentStacked => "Bar3DPyramidPercentStacked",
            Self::Bar3DCylinderClustered => "Bar3DCylinderClustered",
            Self::Bar3DCylinderStacked => "Bar3DCylinderStacked",
            Self::Bar3DCylinderPercentStacked => "Bar3DCylinderPercentStacked",
            Self::Col => "Col",
            Self::ColStacked => "ColStacked",
            Self::ColPercentStacked => "ColPercentStacked",
            Self::Col3D => "Col3D",
            Self::Col3DClustered => "Col3DClustered",
            Self::Col3DStacked => "Col3DStacked",
            Self::Col3DPercentStacked => "Col3DPercentStacked",
            Self::Col3DCone => "Col3DCone",
            Self::Col3DConeClustered => "Col3DConeClustered",
            Self::Col3DConeStacked => "Col3DConeStacked",
            Self::Col3DConePercentStacked => "Col3DConePercentStacked",
            Self::Col3DPyramid => "Col3DPyramid",
            Self::Col3DPyramidClustered => "Col3DPyramidClustered",
            Self::Col3DPyramidStacked => "Col3DPyramidStacked",
            Self::Col3DPyramidPercentStacked => "Col3DPyramidPercentStacked",
            Self::Col3DCylinder => "Col3DCylinder",
            Self::Col3DCylinderClustered => "Col3DCylinderClustered",
            Self::Col3DCylinderStacked => "Col3DCylinderStacked",
            Self::Col3DCylinderPercentStacked => "Col3DCylinderPercentStacked",
            Self::Doughnut => "Doughnut",
            Self::Line => "Line",
            Self::Line3D => "Line3D",
            Self::Pie => "Pie",
            Self::Pie3D => "Pie3D",
            Self::PieOfPie => "PieOfPie",
            Self::BarOfPie => "BarOfPie",
            Self::Radar => "Radar",
            Self::Scatter => "Scatter",
            Self::Surface3D => "Surface3D",
            Self::WireframeSurface3D => "WireframeSurface3D",
            Self::Contour => "Contour",
            Self::WireframeContour => "WireframeContour",
            Self::Bubble => "Bubble",
            Self::Bubble3D => "Bubble3D",
        }
    }

    /// Numeric chart type ID.
    #[inline]
    pub const fn id(&self) -> u8 {
        *self as u8
    }

    /// The plot group element this chart type is drawn with.
    pub const fn plot_group(&self) -> PlotGroup {
        use ChartType::*;
        match self {
            Area | AreaStacked | AreaPercentStacked => PlotGroup::Area,
            Area3D | Area3DStacked | Area3DPercentStacked => PlotGroup::Area3D,
            Bar | BarStacked | BarPercentStacked | Col | ColStacked | ColPercentStacked => {
                PlotGroup::Bar
            },
            Doughnut => PlotGroup::Doughnut,
            Line => PlotGroup::Line,
            Line3D => PlotGroup::Line3D,
            Pie => PlotGroup::Pie,
            Pie3D => PlotGroup::Pie3D,
            PieOfPie | BarOfPie => PlotGroup::OfPie,
            Radar => PlotGroup::Radar,
            Scatter => PlotGroup::Scatter,
            Surface3D | WireframeSurface3D => PlotGroup::Surface3D,
            Contour | WireframeContour => PlotGroup::Surface,
            Bubble | Bubble3D => PlotGroup::Bubble,
            _ => PlotGroup::Bar3D,
        }
    }

    /// Shape of the 3D bars (`c:shape`), `None` for every other chart type.
    pub fn bar_shape(&self) -> Option<&'static str> {
        if self.plot_group() != PlotGroup::Bar3D {
            return None;
        }
        let name = self.name();
        Some(if name.contains("Cone") {
            "cone"
        } else if name.contains("Pyramid") {
            "pyramid"
        } else if name.contains("Cylinder") {
            "cylinder"
        } else {
            "box"
        })
    }

    /// Whether surface and contour charts are drawn as wireframes.
    #[inline]
    pub const fn is_wireframe(&self) -> bool {
        matches!(self, Self::WireframeSurface3D | Self::WireframeContour)
    }

    /// Pie, doughnut and of-pie charts carry no axes.
    #[inline]
    pub const fn has_axes(&self) -> bool {
        !matches!(
            self.plot_group(),
            PlotGroup::Pie | PlotGroup::Pie3D | PlotGroup::Doughnut | PlotGroup::OfPie
        )
    }

    /// Whether the plot group needs a series (depth) axis.
    pub fn has_series_axis(&self) -> bool {
        match self.plot_group() {
            PlotGroup::Line3D | PlotGroup::Surface | PlotGroup::Surface3D => true,
            PlotGroup::Area3D | PlotGroup::Bar3D => {
                crate::ooxml::charts::tables::grouping(*self) == Some("standard")
            },
            _ => false,
        }
    }

    /// Scatter and bubble charts plot values against a second value axis.
    #[inline]
    pub const fn has_value_x_axis(&self) -> bool {
        matches!(self.plot_group(), PlotGroup::Scatter | PlotGroup::Bubble)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartType {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Area" => Ok(Self::Area),
            "AreaStacked" => Ok(Self::AreaStacked),
            "AreaPercentStacked" => Ok(Self::AreaPercentStacked),
            "Area3D" => Ok(Self::Area3D),
            "Area3DStacked" => Ok(Self::Area3DStacked),
            "Area3DPercentStacked" => Ok(Self::Area3DPercentStacked),
            "Bar" => Ok(Self::Bar),
            "BarStacked" => Ok(Self::BarStacked),
            "BarPercentStacked" => Ok(Self::BarPercentStacked),
            "Bar3DClustered" => Ok(Self::Bar3DClustered),
            "Bar3DStacked" => Ok(Self::Bar3DStacked),
            "Bar3DPercentStacked" => Ok(Self::Bar3DPercentStacked),
            "Bar3DConeClustered" => Ok(Self::Bar3DConeClustered),
            "Bar3DConeStacked" => Ok(Self::Bar3DConeStacked),
            "Bar3DConePercentStacked" => Ok(Self::Bar3DConePercentStacked),
            "Bar3DPyramidClustered" => Ok(Self::Bar3DPyramidClustered),
            "Bar3DPyramidStacked" => Ok(Self::Bar3DPyramidStacked),
            "Bar3DPyramidPercentStacked" => Ok(Self::Bar3DPyramidPercentStacked),
            "Bar3DCylinderClustered" => Ok(Self::Bar3DCylinderClustered),
            "Bar3DCylinderStacked" => Ok(Self::Bar3DCylinderStacked),
            "Bar3DCylinderPercentStacked" => Ok(Self::Bar3DCylinderPercentStacked),
            "Col" => Ok(Self::Col),
            "ColStacked" => Ok(Self::ColStacked),
            "ColPercentStacked" => Ok(Self::ColPercentStacked),
            "Col3D" => Ok(Self::Col3D),
            "Col3DClustered" => Ok(Self::Col3DClustered),
            "Col3DStacked" => Ok(Self::Col3DStacked),
            "Col3DPercentStacked" => Ok(Self::Col3DPercentStacked),
            "Col3DCone" => Ok(Self::Col3DCone),
            "Col3DConeClustered" => Ok(Self::Col3DConeClustered),
            "Col3DConeStacked" => Ok(Self::Col3DConeStacked),
            "Col3DConePercentStacked" => Ok(Self::Col3DConePercentStacked),
            "Col3DPyramid" => Ok(Self::Col3DPyramid),
            "Col3DPyramidClustered" => Ok(Self::Col3DPyramidClustered),
            "Col3DPyramidStacked" => Ok(Self::Col3DPyramidStacked),
            "Col3DPyramidPercentStacked" => Ok(Self::Col3DPyramidPercentStacked),
            "Col3DCylinder" => Ok(Self::Col3DCylinder),
            "Col3DCylinderClustered" => Ok(Self::Col3DCylinderClustered),
            "Col3DCylinderStacked" => Ok(Self::Col3DCylinderStacked),
            "Col3DCylinderPercentStacked" => Ok(Self::Col3DCylinderPercentStacked),
            "Doughnut" => Ok(Self::Doughnut),
            "Line" => Ok(Self::Line),
            "Line3D" => Ok(Self::Line3D),
            "Pie" => Ok(Self::Pie),
            "Pie3D" => Ok(Self::Pie3D),
            "PieOfPie" => Ok(Self::PieOfPie),
            "BarOfPie" => Ok(Self::BarOfPie),
            "Radar" => Ok(Self::Radar),
            "Scatter" => Ok(Self::Scatter),
            "Surface3D" => Ok(Self::Surface3D),
            "WireframeSurface3D" => Ok(Self::WireframeSurface3D),
            "Contour" => Ok(Self::Contour),
            "WireframeContour" => Ok(Self::WireframeContour),
            "Bubble" => Ok(Self::Bubble),
            "Bubble3D" => Ok(Self::Bubble3D),
            _ => Err(OoxmlError::UnsupportedChartType(s.to_string())),
        }
    }
}

impl TryFrom<u8> for ChartType {
    type Error = OoxmlError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or_else(|| OoxmlError::UnsupportedChartType(id.to_string()))
    }
}

impl TryFrom<String> for ChartType {
    type Error = OoxmlError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<ChartType> for &'static str {
    fn from(chart_type: ChartType) -> Self {
        chart_type.name()
    }
}

/// Legend position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    /// No legend
    #[serde(rename = "none")]
    Hidden,
    Top,
    #[default]
    Bottom,
    Left,
    Right,
    TopRight,
}

impl LegendPosition {
    /// The configuration keyword (`bottom`, `top_right`, ...).
    #[inline]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopRight => "top_right",
        }
    }

    /// The `c:legendPos` value, `None` when the legend is hidden.
    #[inline]
    pub fn xml_value(&self) -> Option<&'static str> {
        crate::ooxml::charts::tables::legend_position(self.keyword())
    }
}

/// How blank cells are plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowBlanksAs {
    /// Blank values are left as a gap
    #[default]
    Gap,
    /// Blank values are spanned with a line
    Span,
    /// Blank values are treated as zero
    Zero,
}

impl ShowBlanksAs {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Gap => "gap",
            Self::Span => "span",
            Self::Zero => "zero",
        }
    }
}

/// Marker symbol of line, scatter and radar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSymbol {
    #[default]
    Auto,
    Circle,
    Dash,
    Diamond,
    Dot,
    #[serde(rename = "none")]
    NoMarker,
    Picture,
    Plus,
    Square,
    Star,
    Triangle,
    X,
}

impl MarkerSymbol {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Circle => "circle",
            Self::Dash => "dash",
            Self::Diamond => "diamond",
            Self::Dot => "dot",
            Self::NoMarker => "none",
            Self::Picture => "picture",
            Self::Plus => "plus",
            Self::Square => "square",
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::X => "x",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_positions() {
        for (idx, chart_type) in ChartType::ALL.iter().enumerate() {
            assert_eq!(usize::from(chart_type.id()), idx);
            assert_eq!(ChartType::try_from(chart_type.id()).unwrap(), *chart_type);
            assert_eq!(chart_type.name().parse::<ChartType>().unwrap(), *chart_type);
        }
        assert_eq!(ChartType::Area.id(), 0);
        assert_eq!(ChartType::Bubble3D.id(), 54);
    }

    #[test]
    fn test_unknown_chart_type() {
        match ChartType::try_from(55u8) {
            Err(OoxmlError::UnsupportedChartType(id)) => assert_eq!(id, "55"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            "Column".parse::<ChartType>(),
            Err(OoxmlError::UnsupportedChartType(name)) if name == "Column"
        ));
    }

    #[test]
    fn test_plot_groups() {
        assert_eq!(ChartType::ColStacked.plot_group(), PlotGroup::Bar);
        assert_eq!(ChartType::Col3DCone.plot_group(), PlotGroup::Bar3D);
        assert_eq!(ChartType::BarOfPie.plot_group(), PlotGroup::OfPie);
        assert_eq!(ChartType::WireframeContour.plot_group(), PlotGroup::Surface);
        assert_eq!(ChartType::Bubble3D.plot_group(), PlotGroup::Bubble);
    }

    #[test]
    fn test_bar_shape() {
        assert_eq!(ChartType::Bar3DConeStacked.bar_shape(), Some("cone"));
        assert_eq!(ChartType::Col3DPyramid.bar_shape(), Some("pyramid"));
        assert_eq!(ChartType::Col3DCylinderClustered.bar_shape(), Some("cylinder"));
        assert_eq!(ChartType::Col3D.bar_shape(), Some("box"));
        assert_eq!(ChartType::Col.bar_shape(), None);
    }

    #[test]
    fn test_axes() {
        assert!(!ChartType::Pie3D.has_axes());
        assert!(!ChartType::Doughnut.has_axes());
        assert!(ChartType::Radar.has_axes());
        assert!(ChartType::Col3D.has_series_axis());
        assert!(!ChartType::Col3DClustered.has_series_axis());
        assert!(ChartType::Contour.has_series_axis());
        assert!(ChartType::Scatter.has_value_x_axis());
    }

    #[test]
    fn test_legend_position() {
        assert_eq!(LegendPosition::default(), LegendPosition::Bottom);
        assert_eq!(LegendPosition::TopRight.xml_value(), Some("tr"));
        assert_eq!(LegendPosition::Hidden.xml_value(), None);
    }
}
