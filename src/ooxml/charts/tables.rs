//! Per-chart-type attribute tables.
//!
//! Each table is keyed by the chart type name (see [`ChartType::name`]). A
//! chart type without an entry in a partial table leaves the corresponding
//! element to its OOXML default.

use phf::phf_map;

use crate::ooxml::charts::types::ChartType;

/// X rotation of the 3D view (`c:view3D/c:rotX`).
pub static CHART_VIEW_3D_ROT_X: phf::Map<&'static str, i32> = phf_map! {
    "Area" => 0,
    "AreaStacked" => 0,
    "AreaPercentStacked" => 0,
    "Area3D" => 15,
    "Area3DStacked" => 15,
    "Area3DPercentStacked" => 15,
    "Bar" => 0,
    "BarStacked" => 0,
    "BarPercentStacked" => 0,
    "Bar3DClustered" => 15,
    "Bar3DStacked" => 15,
    "Bar3DPercentStacked" => 15,
    "Bar3DConeClustered" => 15,
    "Bar3DConeStacked" => 15,
    "Bar3DConePercentStacked" => 15,
    "Bar3DPyramidClustered" => 15,
    "Bar3DPyramidStacked" => 15,
    "Bar3DPyramidPercentStacked" => 15,
    "Bar3DCylinderClustered" => 15,
    "Bar3DCylinderStacked" => 15,
    "Bar3DCylinderPercentStacked" => 15,
    "Col" => 0,
    "ColStacked" => 0,
    "ColPercentStacked" => 0,
    "Col3D" => 15,
    "Col3DClustered" => 15,
    "Col3DStacked" => 15,
    "Col3DPercentStacked" => 15,
    "Col3DCone" => 15,
    "Col3DConeClustered" => 15,
    "Col3DConeStacked" => 15,
    "Col3DConePercentStacked" => 15,
    "Col3DPyramid" => 15,
    "Col3DPyramidClustered" => 15,
    "Col3DPyramidStacked" => 15,
    "Col3DPyramidPercentStacked" => 15,
    "Col3DCylinder" => 15,
    "Col3DCylinderClustered" => 15,
    "Col3DCylinderStacked" => 15,
    "Col3DCylinderPercentStacked" => 15,
    "Doughnut" => 0,
    "Line" => 0,
    "Line3D" => 20,
    "Pie" => 0,
    "Pie3D" => 30,
    "PieOfPie" => 0,
    "BarOfPie" => 0,
    "Radar" => 0,
    "Scatter" => 0,
    "Surface3D" => 15,
    "WireframeSurface3D" => 15,
    "Contour" => 90,
    "WireframeContour" => 90,
};

/// Y rotation of the 3D view (`c:view3D/c:rotY`).
pub static CHART_VIEW_3D_ROT_Y: phf::Map<&'static str, i32> = phf_map! {
    "Area" => 0,
    "AreaStacked" => 0,
    "AreaPercentStacked" => 0,
    "Area3D" => 20,
    "Area3DStacked" => 20,
    "Area3DPercentStacked" => 20,
    "Bar" => 0,
    "BarStacked" => 0,
    "BarPercentStacked" => 0,
    "Bar3DClustered" => 20,
    "Bar3DStacked" => 20,
    "Bar3DPercentStacked" => 20,
    "Bar3DConeClustered" => 20,
    "Bar3DConeStacked" => 20,
    "Bar3DConePercentStacked" => 20,
    "Bar3DPyramidClustered" => 20,
    "Bar3DPyramidStacked" => 20,
    "Bar3DPyramidPercentStacked" => 20,
    "Bar3DCylinderClustered" => 20,
    "Bar3DCylinderStacked" => 20,
    "Bar3DCylinderPercentStacked" => 20,
    "Col" => 0,
    "ColStacked" => 0,
    "ColPercentStacked" => 0,
    "Col3D" => 20,
    "Col3DClustered" => 20,
    "Col3DStacked" => 20,
    "Col3DPercentStacked" => 20,
    "Col3DCone" => 20,
    "Col3DConeClustered" => 20,
    "Col3DConeStacked" => 20,
    "Col3DConePercentStacked" => 20,
    "Col3DPyramid" => 20,
    "Col3DPyramidClustered" => 20,
    "Col3DPyramidStacked" => 20,
    "Col3DPyramidPercentStacked" => 20,
    "Col3DCylinder" => 20,
    "Col3DCylinderClustered" => 20,
    "Col3DCylinderStacked" => 20,
    "Col3DCylinderPercentStacked" => 20,
    "Doughnut" => 0,
    "Line" => 0,
    "Line3D" => 15,
    "Pie" => 0,
    "Pie3D" => 0,
    "PieOfPie" => 0,
    "BarOfPie" => 0,
    "Radar" => 0,
    "Scatter" => 0,
    "Surface3D" => 20,
    "WireframeSurface3D" => 20,
    "Contour" => 0,
    "WireframeContour" => 0,
};

/// Field of view of the 3D view (`c:view3D/c:perspective`).
pub static CHART_VIEW_3D_PERSPECTIVE: phf::Map<&'static str, i32> = phf_map! {
    "Line3D" => 30,
    "Contour" => 0,
    "WireframeContour" => 0,
};

/// Whether the 3D view uses right-angle axes (`c:view3D/c:rAngAx`).
pub static CHART_VIEW_3D_R_ANG_AX: phf::Map<&'static str, bool> = phf_map! {
    "Area" => false,
    "AreaStacked" => false,
    "AreaPercentStacked" => false,
    "Area3D" => true,
    "Area3DStacked" => true,
    "Area3DPercentStacked" => true,
    "Bar" => false,
    "BarStacked" => false,
    "BarPercentStacked" => false,
    "Bar3DClustered" => true,
    "Bar3DStacked" => true,
    "Bar3DPercentStacked" => true,
    "Bar3DConeClustered" => true,
    "Bar3DConeStacked" => true,
    "Bar3DConePercentStacked" => true,
    "Bar3DPyramidClustered" => true,
    "Bar3DPyramidStacked" => true,
    "Bar3DPyramidPercentStacked" => true,
    "Bar3DCylinderClustered" => true,
    "Bar3DCylinderStacked" => true,
    "Bar3DCylinderPercentStacked" => true,
    "Col" => false,
    "ColStacked" => false,
    "ColPercentStacked" => false,
    "Col3D" => true,
    "Col3DClustered" => true,
    "Col3DStacked" => true,
    "Col3DPercentStacked" => true,
    "Col3DCone" => true,
    "Col3DConeClustered" => true,
    "Col3DConeStacked" => true,
    "Col3DConePercentStacked" => true,
    "Col3DPyramid" => true,
    "Col3DPyramidClustered" => true,
    "Col3DPyramidStacked" => true,
    "Col3DPyramidPercentStacked" => true,
    "Col3DCylinder" => true,
    "Col3DCylinderClustered" => true,
    "Col3DCylinderStacked" => true,
    "Col3DCylinderPercentStacked" => true,
    "Doughnut" => false,
    "Line" => false,
    "Line3D" => false,
    "Pie" => false,
    "Pie3D" => false,
    "PieOfPie" => false,
    "BarOfPie" => false,
    "Radar" => false,
    "Scatter" => false,
    "Surface3D" => false,
    "WireframeSurface3D" => false,
    "Contour" => false,
    "Bubble" => false,
    "Bubble3D" => false,
};

/// Number format code of the value axis.
///
/// Every supported chart type has an entry here; a type missing from this
/// table is rejected before any part is written.
pub static CHART_VAL_AX_NUM_FMT_FORMAT_CODE: phf::Map<&'static str, &'static str> = phf_map! {
    "Area" => "General",
    "AreaStacked" => "General",
    "AreaPercentStacked" => "0%",
    "Area3D" => "General",
    "Area3DStacked" => "General",
    "Area3DPercentStacked" => "0%",
    "Bar" => "General",
    "BarStacked" => "General",
    "BarPercentStacked" => "0%",
    "Bar3DClustered" => "General",
    "Bar3DStacked" => "General",
    "Bar3DPercentStacked" => "0%",
    "Bar3DConeClustered" => "General",
    "Bar3DConeStacked" => "General",
    "Bar3DConePercentStacked" => "0%",
    "Bar3DPyramidClustered" => "General",
    "Bar3DPyramidStacked" => "General",
    "Bar3DPyramidPercentStacked" => "0%",
    "Bar3DCylinderClustered" => "General",
    "Bar3DCylinderStacked" => "General",
    "Bar3DCylinderPercentStacked" => "0%",
    "Col" => "General",
    "ColStacked" => "General",
    "ColPercentStacked" => "0%",
    "Col3D" => "General",
    "Col3DClustered" => "General",
    "Col3DStacked" => "General",
    "Col3DPercentStacked" => "0%",
    "Col3DCone" => "General",
    "Col3DConeClustered" => "General",
    "Col3DConeStacked" => "General",
    "Col3DConePercentStacked" => "0%",
    "Col3DPyramid" => "General",
    "Col3DPyramidClustered" => "General",
    "Col3DPyramidStacked" => "General",
    "Col3DPyramidPercentStacked" => "0%",
    "Col3DCylinder" => "General",
    "Col3DCylinderClustered" => "General",
    "Col3DCylinderStacked" => "General",
    "Col3DCylinderPercentStacked" => "0%",
    "Doughnut" => "General",
    "Line" => "General",
    "Line3D" => "General",
    "Pie" => "General",
    "Pie3D" => "General",
    "PieOfPie" => "General",
    "BarOfPie" => "General",
    "Radar" => "General",
    "Scatter" => "General",
    "Surface3D" => "General",
    "WireframeSurface3D" => "General",
    "Contour" => "General",
    "WireframeContour" => "General",
    "Bubble" => "General",
    "Bubble3D" => "General",
};

/// Whether the value axis crosses the category axis between or on categories.
pub static CHART_VAL_AX_CROSS_BETWEEN: phf::Map<&'static str, &'static str> = phf_map! {
    "Area" => "midCat",
    "AreaStacked" => "midCat",
    "AreaPercentStacked" => "midCat",
    "Area3D" => "midCat",
    "Area3DStacked" => "midCat",
    "Area3DPercentStacked" => "midCat",
    "Bar" => "between",
    "BarStacked" => "between",
    "BarPercentStacked" => "between",
    "Bar3DClustered" => "between",
    "Bar3DStacked" => "between",
    "Bar3DPercentStacked" => "between",
    "Bar3DConeClustered" => "between",
    "Bar3DConeStacked" => "between",
    "Bar3DConePercentStacked" => "between",
    "Bar3DPyramidClustered" => "between",
    "Bar3DPyramidStacked" => "between",
    "Bar3DPyramidPercentStacked" => "between",
    "Bar3DCylinderClustered" => "between",
    "Bar3DCylinderStacked" => "between",
    "Bar3DCylinderPercentStacked" => "between",
    "Col" => "between",
    "ColStacked" => "between",
    "ColPercentStacked" => "between",
    "Col3D" => "between",
    "Col3DClustered" => "between",
    "Col3DStacked" => "between",
    "Col3DPercentStacked" => "between",
    "Col3DCone" => "between",
    "Col3DConeClustered" => "between",
    "Col3DConeStacked" => "between",
    "Col3DConePercentStacked" => "between",
    "Col3DPyramid" => "between",
    "Col3DPyramidClustered" => "between",
    "Col3DPyramidStacked" => "between",
    "Col3DPyramidPercentStacked" => "between",
    "Col3DCylinder" => "between",
    "Col3DCylinderClustered" => "between",
    "Col3DCylinderStacked" => "between",
    "Col3DCylinderPercentStacked" => "between",
    "Doughnut" => "between",
    "Line" => "between",
    "Line3D" => "between",
    "Pie" => "between",
    "Pie3D" => "between",
    "PieOfPie" => "between",
    "BarOfPie" => "between",
    "Radar" => "between",
    "Scatter" => "between",
    "Surface3D" => "midCat",
    "WireframeSurface3D" => "midCat",
    "Contour" => "midCat",
    "WireframeContour" => "midCat",
    "Bubble" => "midCat",
    "Bubble3D" => "midCat",
};

/// Grouping of the series in the plot group (`c:grouping`).
pub static PLOT_AREA_CHART_GROUPING: phf::Map<&'static str, &'static str> = phf_map! {
    "Area" => "standard",
    "AreaStacked" => "stacked",
    "AreaPercentStacked" => "percentStacked",
    "Area3D" => "standard",
    "Area3DStacked" => "stacked",
    "Area3DPercentStacked" => "percentStacked",
    "Bar" => "clustered",
    "BarStacked" => "stacked",
    "BarPercentStacked" => "percentStacked",
    "Bar3DClustered" => "clustered",
    "Bar3DStacked" => "stacked",
    "Bar3DPercentStacked" => "percentStacked",
    "Bar3DConeClustered" => "clustered",
    "Bar3DConeStacked" => "stacked",
    "Bar3DConePercentStacked" => "percentStacked",
    "Bar3DPyramidClustered" => "clustered",
    "Bar3DPyramidStacked" => "stacked",
    "Bar3DPyramidPercentStacked" => "percentStacked",
    "Bar3DCylinderClustered" => "clustered",
    "Bar3DCylinderStacked" => "stacked",
    "Bar3DCylinderPercentStacked" => "percentStacked",
    "Col" => "clustered",
    "ColStacked" => "stacked",
    "ColPercentStacked" => "percentStacked",
    "Col3D" => "standard",
    "Col3DClustered" => "clustered",
    "Col3DStacked" => "stacked",
    "Col3DPercentStacked" => "percentStacked",
    "Col3DCone" => "standard",
    "Col3DConeClustered" => "clustered",
    "Col3DConeStacked" => "stacked",
    "Col3DConePercentStacked" => "percentStacked",
    "Col3DPyramid" => "standard",
    "Col3DPyramidClustered" => "clustered",
    "Col3DPyramidStacked" => "stacked",
    "Col3DPyramidPercentStacked" => "percentStacked",
    "Col3DCylinder" => "standard",
    "Col3DCylinderClustered" => "clustered",
    "Col3DCylinderStacked" => "stacked",
    "Col3DCylinderPercentStacked" => "percentStacked",
    "Line" => "standard",
    "Line3D" => "standard",
};

/// Bar direction of the plot group (`c:barDir`).
pub static PLOT_AREA_CHART_BAR_DIR: phf::Map<&'static str, &'static str> = phf_map! {
    "Bar" => "bar",
    "BarStacked" => "bar",
    "BarPercentStacked" => "bar",
    "Bar3DClustered" => "bar",
    "Bar3DStacked" => "bar",
    "Bar3DPercentStacked" => "bar",
    "Bar3DConeClustered" => "bar",
    "Bar3DConeStacked" => "bar",
    "Bar3DConePercentStacked" => "bar",
    "Bar3DPyramidClustered" => "bar",
    "Bar3DPyramidStacked" => "bar",
    "Bar3DPyramidPercentStacked" => "bar",
    "Bar3DCylinderClustered" => "bar",
    "Bar3DCylinderStacked" => "bar",
    "Bar3DCylinderPercentStacked" => "bar",
    "Col" => "col",
    "ColStacked" => "col",
    "ColPercentStacked" => "col",
    "Col3D" => "col",
    "Col3DClustered" => "col",
    "Col3DStacked" => "col",
    "Col3DPercentStacked" => "col",
    "Col3DCone" => "col",
    "Col3DConeStacked" => "col",
    "Col3DConeClustered" => "col",
    "Col3DConePercentStacked" => "col",
    "Col3DPyramid" => "col",
    "Col3DPyramidClustered" => "col",
    "Col3DPyramidStacked" => "col",
    "Col3DPyramidPercentStacked" => "col",
    "Col3DCylinder" => "col",
    "Col3DCylinderClustered" => "col",
    "Col3DCylinderStacked" => "col",
    "Col3DCylinderPercentStacked" => "col",
    "Line" => "standard",
    "Line3D" => "standard",
};

/// Series overlap of stacked 2D bar and column charts (`c:overlap`).
pub static PLOT_AREA_CHART_OVERLAP: phf::Map<&'static str, i32> = phf_map! {
    "BarStacked" => 100,
    "BarPercentStacked" => 100,
    "ColStacked" => 100,
    "ColPercentStacked" => 100,
};

/// Value axis tick label position overrides (`c:tickLblPos`).
pub static VAL_TICK_LBL_POS: phf::Map<&'static str, &'static str> = phf_map! {
    "Contour" => "none",
    "WireframeContour" => "none",
};

/// Legend position keyword to `c:legendPos` value.
pub static CHART_LEGEND_POSITION: phf::Map<&'static str, &'static str> = phf_map! {
    "bottom" => "b",
    "left" => "l",
    "right" => "r",
    "top" => "t",
    "top_right" => "tr",
};

/// Whether the chart type is present in the supported chart type table.
#[inline]
pub fn is_supported(chart_type: ChartType) -> bool {
    CHART_VAL_AX_NUM_FMT_FORMAT_CODE.contains_key(chart_type.name())
}

#[inline]
pub fn view_3d_rot_x(chart_type: ChartType) -> Option<i32> {
    CHART_VIEW_3D_ROT_X.get(chart_type.name()).copied()
}

#[inline]
pub fn view_3d_rot_y(chart_type: ChartType) -> Option<i32> {
    CHART_VIEW_3D_ROT_Y.get(chart_type.name()).copied()
}

#[inline]
pub fn view_3d_perspective(chart_type: ChartType) -> Option<i32> {
    CHART_VIEW_3D_PERSPECTIVE.get(chart_type.name()).copied()
}

#[inline]
pub fn view_3d_r_ang_ax(chart_type: ChartType) -> Option<bool> {
    CHART_VIEW_3D_R_ANG_AX.get(chart_type.name()).copied()
}

#[inline]
pub fn val_ax_num_fmt(chart_type: ChartType) -> Option<&'static str> {
    CHART_VAL_AX_NUM_FMT_FORMAT_CODE.get(chart_type.name()).copied()
}

#[inline]
pub fn val_ax_cross_between(chart_type: ChartType) -> Option<&'static str> {
    CHART_VAL_AX_CROSS_BETWEEN.get(chart_type.name()).copied()
}

#[inline]
pub fn grouping(chart_type: ChartType) -> Option<&'static str> {
    PLOT_AREA_CHART_GROUPING.get(chart_type.name()).copied()
}

#[inline]
pub fn bar_dir(chart_type: ChartType) -> Option<&'static str> {
    PLOT_AREA_CHART_BAR_DIR.get(chart_type.name()).copied()
}

#[inline]
pub fn overlap(chart_type: ChartType) -> Option<i32> {
    PLOT_AREA_CHART_OVERLAP.get(chart_type.name()).copied()
}

#[inline]
pub fn val_tick_lbl_pos(chart_type: ChartType) -> Option<&'static str> {
    VAL_TICK_LBL_POS.get(chart_type.name()).copied()
}

/// `c:legendPos` value for a legend position keyword.
#[inline]
pub fn legend_position(keyword: &str) -> Option<&'static str> {
    CHART_LEGEND_POSITION.get(keyword).copied()
}

/// Axis orientation for the reverse-order flag.
#[inline]
pub const fn orientation(reverse_order: bool) -> &'static str {
    if reverse_order { "maxMin" } else { "minMax" }
}

/// Category axis position for the reverse-order flag.
#[inline]
pub const fn cat_ax_pos(reverse_order: bool) -> &'static str {
    if reverse_order { "t" } else { "b" }
}

/// Value axis position for the reverse-order flag.
#[inline]
pub const fn val_ax_pos(reverse_order: bool) -> &'static str {
    if reverse_order { "r" } else { "l" }
}
