//! Chart XML writer.
//!
//! Serializes a defaulted [`Chart`] and its combo charts into a DrawingML
//! `c:chartSpace` part. The attribute tables decide per chart type the 3D
//! view, grouping, bar direction, overlap and value axis formatting.

use std::io::Write;

use crate::common::unit::pt_to_emus;
use crate::common::xml::{escape_xml, xml_bool};
use crate::ooxml::charts::options::{
    Chart, ChartAxis, ChartLegend, ChartPlotArea, ChartSeries, Font, RichTextRun,
};
use crate::ooxml::charts::tables;
use crate::ooxml::charts::types::{ChartType, LegendPosition, MarkerSymbol, PlotGroup};
use crate::ooxml::opc::constants::namespace;

const PRIMARY_CAT_AX_ID: u32 = 100_000_000;
const PRIMARY_VAL_AX_ID: u32 = 100_000_001;
const SECONDARY_CAT_AX_ID: u32 = 100_000_002;
const SECONDARY_VAL_AX_ID: u32 = 100_000_003;
const SER_AX_ID: u32 = 100_000_005;

const DEFAULT_MARKER_SIZE: u32 = 5;
const DEFAULT_HOLE_SIZE: u32 = 75;

/// Axis IDs a plot group refers to.
#[derive(Debug, Clone, Copy)]
struct AxisIds {
    cat: u32,
    val: u32,
    ser: Option<u32>,
}

impl AxisIds {
    fn for_chart(chart: &Chart) -> Self {
        if chart.y_axis.secondary {
            Self {
                cat: SECONDARY_CAT_AX_ID,
                val: SECONDARY_VAL_AX_ID,
                ser: None,
            }
        } else {
            Self {
                cat: PRIMARY_CAT_AX_ID,
                val: PRIMARY_VAL_AX_ID,
                ser: chart.chart_type.has_series_axis().then_some(SER_AX_ID),
            }
        }
    }
}

/// Write a chart part with the primary chart and its combo charts.
///
/// Both are expected to be defaulted with
/// [`get_chart_options`](crate::ooxml::charts::get_chart_options).
pub fn write_chart<W: Write>(writer: &mut W, opts: &Chart, combo: &[Chart]) -> std::io::Result<()> {
    write!(
        writer,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
    )?;
    write!(
        writer,
        r#"<c:chartSpace xmlns:c="{}" xmlns:a="{}" xmlns:r="{}">"#,
        namespace::DML_CHART,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS
    )?;
    write!(writer, r#"<c:date1904 val="0"/>"#)?;
    write!(writer, r#"<c:lang val="en-US"/>"#)?;
    write!(writer, r#"<c:roundedCorners val="0"/>"#)?;

    write!(writer, "<c:chart>")?;

    if opts.title.is_empty() {
        write!(writer, r#"<c:autoTitleDeleted val="1"/>"#)?;
    } else {
        write_title(writer, &opts.title)?;
        write!(writer, r#"<c:autoTitleDeleted val="0"/>"#)?;
    }

    write_view_3d(writer, opts.chart_type)?;
    if is_3d(opts.chart_type) {
        write_walls(writer)?;
    }
    write_plot_area(writer, opts, combo)?;

    write_legend(writer, &opts.legend)?;

    write!(writer, r#"<c:plotVisOnly val="1"/>"#)?;
    write!(
        writer,
        r#"<c:dispBlanksAs val="{}"/>"#,
        opts.show_blanks_as.unwrap_or_default().xml_value()
    )?;
    write!(writer, "</c:chart>")?;

    write!(writer, "<c:printSettings>")?;
    write!(writer, "<c:headerFooter/>")?;
    write!(
        writer,
        r#"<c:pageMargins b="0.75" l="0.7" r="0.7" t="0.75" header="0.3" footer="0.3"/>"#
    )?;
    write!(writer, "<c:pageSetup/>")?;
    write!(writer, "</c:printSettings>")?;

    write!(writer, "</c:chartSpace>")?;
    Ok(())
}

/// Serialize a chart part into a byte vector.
pub fn chart_to_xml(opts: &Chart, combo: &[Chart]) -> std::io::Result<Vec<u8>> {
    let mut xml = Vec::with_capacity(4096);
    write_chart(&mut xml, opts, combo)?;
    Ok(xml)
}

fn write_title<W: Write>(writer: &mut W, runs: &[RichTextRun]) -> std::io::Result<()> {
    write!(writer, "<c:title>")?;
    write_rich_text(writer, runs)?;
    write!(writer, r#"<c:overlay val="0"/>"#)?;
    write!(writer, "</c:title>")?;
    Ok(())
}

fn write_rich_text<W: Write>(writer: &mut W, runs: &[RichTextRun]) -> std::io::Result<()> {
    write!(writer, "<c:tx><c:rich>")?;
    write!(writer, "<a:bodyPr/><a:lstStyle/>")?;
    write!(writer, "<a:p><a:pPr><a:defRPr/></a:pPr>")?;
    for run in runs {
        write!(writer, "<a:r>")?;
        match &run.font {
            Some(font) => write_run_properties(writer, "a:rPr", font)?,
            None => write!(writer, r#"<a:rPr lang="en-US"/>"#)?,
        }
        write!(writer, "<a:t>{}</a:t></a:r>", escape_xml(&run.text))?;
    }
    write!(writer, "</a:p></c:rich></c:tx>")?;
    Ok(())
}

/// Write `a:rPr` or `a:defRPr` for a font.
fn write_run_properties<W: Write>(writer: &mut W, tag: &str, font: &Font) -> std::io::Result<()> {
    write!(writer, r#"<{} lang="en-US""#, tag)?;
    if font.bold {
        write!(writer, r#" b="1""#)?;
    }
    if font.italic {
        write!(writer, r#" i="1""#)?;
    }
    if font.underline {
        write!(writer, r#" u="sng""#)?;
    }
    if font.strike {
        write!(writer, r#" strike="sngStrike""#)?;
    }
    if font.size > 0.0 {
        write!(writer, r#" sz="{}""#, (font.size * 100.0).round() as i64)?;
    }
    write!(writer, ">")?;
    if !font.color.is_empty() {
        write_solid_fill(writer, &font.color)?;
    }
    if !font.family.is_empty() {
        let family = escape_xml(&font.family);
        write!(
            writer,
            r#"<a:latin typeface="{0}"/><a:ea typeface="{0}"/><a:cs typeface="{0}"/>"#,
            family
        )?;
    }
    write!(writer, "</{}>", tag)?;
    Ok(())
}

fn write_solid_fill<W: Write>(writer: &mut W, color: &str) -> std::io::Result<()> {
    write!(
        writer,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        escape_xml(color.trim_start_matches('#'))
    )
}

fn write_view_3d<W: Write>(writer: &mut W, chart_type: ChartType) -> std::io::Result<()> {
    write!(writer, "<c:view3D>")?;
    if let Some(rot_x) = tables::view_3d_rot_x(chart_type) {
        write!(writer, r#"<c:rotX val="{}"/>"#, rot_x)?;
    }
    if let Some(rot_y) = tables::view_3d_rot_y(chart_type) {
        write!(writer, r#"<c:rotY val="{}"/>"#, rot_y)?;
    }
    if let Some(r_ang_ax) = tables::view_3d_r_ang_ax(chart_type) {
        write!(writer, r#"<c:rAngAx val="{}"/>"#, xml_bool(r_ang_ax))?;
    }
    if let Some(perspective) = tables::view_3d_perspective(chart_type) {
        write!(writer, r#"<c:perspective val="{}"/>"#, perspective)?;
    }
    write!(writer, "</c:view3D>")?;
    Ok(())
}

fn is_3d(chart_type: ChartType) -> bool {
    matches!(
        chart_type.plot_group(),
        PlotGroup::Area3D
            | PlotGroup::Bar3D
            | PlotGroup::Line3D
            | PlotGroup::Pie3D
            | PlotGroup::Surface3D
    )
}

fn write_walls<W: Write>(writer: &mut W) -> std::io::Result<()> {
    for tag in ["c:floor", "c:sideWall", "c:backWall"] {
        write!(writer, r#"<{0}><c:thickness val="0"/></{0}>"#, tag)?;
    }
    Ok(())
}

fn write_plot_area<W: Write>(writer: &mut W, opts: &Chart, combo: &[Chart]) -> std::io::Result<()> {
    write!(writer, "<c:plotArea>")?;
    write!(writer, "<c:layout/>")?;

    // series indices run across every plot group of the chart
    let mut series_idx = 0;
    write_plot_group(writer, opts, opts, &mut series_idx)?;
    for combo_chart in combo {
        write_plot_group(writer, opts, combo_chart, &mut series_idx)?;
    }

    if opts.chart_type.has_axes() {
        let ids = AxisIds::for_chart(opts);
        if opts.chart_type.has_value_x_axis() {
            write_x_val_ax(writer, opts, ids)?;
        } else {
            write_cat_ax(writer, opts, ids)?;
        }
        write_val_ax(writer, opts, ids)?;
        if let Some(ser_id) = ids.ser {
            write_ser_ax(writer, opts, ser_id, ids.val)?;
        }
    }

    if let Some(secondary) = combo
        .iter()
        .find(|c| c.y_axis.secondary && c.chart_type.has_axes())
    {
        write_secondary_axes(writer, secondary)?;
    }

    write!(writer, "</c:plotArea>")?;
    Ok(())
}

/// Write one `c:*Chart` group. `primary` carries the chart-wide settings.
fn write_plot_group<W: Write>(
    writer: &mut W,
    primary: &Chart,
    chart: &Chart,
    series_idx: &mut usize,
) -> std::io::Result<()> {
    let chart_type = chart.chart_type;
    let group = chart_type.plot_group();
    let element = group.xml_element_name();
    let vary_colors = xml_bool(chart.vary_colors.unwrap_or(true));

    write!(writer, "<{}>", element)?;

    match group {
        PlotGroup::Bar | PlotGroup::Bar3D => {
            write!(
                writer,
                r#"<c:barDir val="{}"/>"#,
                tables::bar_dir(chart_type).unwrap_or("col")
            )?;
            write_grouping(writer, chart_type)?;
            write!(writer, r#"<c:varyColors val="{}"/>"#, vary_colors)?;
        },
        PlotGroup::Area | PlotGroup::Area3D | PlotGroup::Line | PlotGroup::Line3D => {
            write_grouping(writer, chart_type)?;
            write!(writer, r#"<c:varyColors val="{}"/>"#, vary_colors)?;
        },
        PlotGroup::OfPie => {
            let of_pie_type = if chart_type == ChartType::BarOfPie {
                "bar"
            } else {
                "pie"
            };
            write!(writer, r#"<c:ofPieType val="{}"/>"#, of_pie_type)?;
            write!(writer, r#"<c:varyColors val="{}"/>"#, vary_colors)?;
        },
        PlotGroup::Radar => {
            write!(writer, r#"<c:radarStyle val="marker"/>"#)?;
            write!(writer, r#"<c:varyColors val="{}"/>"#, vary_colors)?;
        },
        PlotGroup::Scatter => {
            write!(writer, r#"<c:scatterStyle val="smoothMarker"/>"#)?;
            write!(writer, r#"<c:varyColors val="{}"/>"#, vary_colors)?;
        },
        PlotGroup::Surface | PlotGroup::Surface3D => {
            write!(
                writer,
                r#"<c:wireframe val="{}"/>"#,
                xml_bool(chart_type.is_wireframe())
            )?;
        },
        PlotGroup::Pie | PlotGroup::Pie3D | PlotGroup::Doughnut | PlotGroup::Bubble => {
            write!(writer, r#"<c:varyColors val="{}"/>"#, vary_colors)?;
        },
    }

    for series in &chart.series {
        write_series(writer, chart_type, series, *series_idx)?;
        *series_idx += 1;
    }

    if !matches!(group, PlotGroup::Surface | PlotGroup::Surface3D) {
        write_data_labels(writer, &primary.legend, &chart.plot_area)?;
    }

    match group {
        PlotGroup::Bar => {
            write!(writer, r#"<c:gapWidth val="150"/>"#)?;
            if let Some(overlap) = tables::overlap(chart_type) {
                write!(writer, r#"<c:overlap val="{}"/>"#, overlap)?;
            }
        },
        PlotGroup::Bar3D => {
            write!(writer, r#"<c:gapWidth val="150"/>"#)?;
            if let Some(shape) = chart_type.bar_shape() {
                write!(writer, r#"<c:shape val="{}"/>"#, shape)?;
            }
        },
        PlotGroup::Line => {
            write!(writer, r#"<c:marker val="1"/>"#)?;
        },
        PlotGroup::Pie => {
            write!(writer, r#"<c:firstSliceAng val="0"/>"#)?;
        },
        PlotGroup::Doughnut => {
            let hole_size = match chart.hole_size {
                size @ 10..=90 => size,
                _ => DEFAULT_HOLE_SIZE,
            };
            write!(writer, r#"<c:firstSliceAng val="0"/>"#)?;
            write!(writer, r#"<c:holeSize val="{}"/>"#, hole_size)?;
        },
        PlotGroup::OfPie => {
            write!(writer, r#"<c:gapWidth val="150"/>"#)?;
            if chart.plot_area.second_plot_values > 0 {
                write!(writer, r#"<c:splitType val="pos"/>"#)?;
                write!(
                    writer,
                    r#"<c:splitPos val="{}"/>"#,
                    chart.plot_area.second_plot_values
                )?;
            }
            write!(writer, r#"<c:secondPieSize val="75"/>"#)?;
            write!(writer, "<c:serLines/>")?;
        },
        PlotGroup::Bubble => {
            write!(writer, r#"<c:bubbleScale val="100"/>"#)?;
            write!(writer, r#"<c:showNegBubbles val="0"/>"#)?;
        },
        _ => {},
    }

    if chart_type.has_axes() {
        let ids = AxisIds::for_chart(chart);
        write!(writer, r#"<c:axId val="{}"/>"#, ids.cat)?;
        write!(writer, r#"<c:axId val="{}"/>"#, ids.val)?;
        if let Some(ser_id) = ids.ser {
            write!(writer, r#"<c:axId val="{}"/>"#, ser_id)?;
        }
    }

    write!(writer, "</{}>", element)?;
    Ok(())
}

fn write_grouping<W: Write>(writer: &mut W, chart_type: ChartType) -> std::io::Result<()> {
    write!(
        writer,
        r#"<c:grouping val="{}"/>"#,
        tables::grouping(chart_type).unwrap_or("standard")
    )
}

fn write_series<W: Write>(
    writer: &mut W,
    chart_type: ChartType,
    series: &ChartSeries,
    idx: usize,
) -> std::io::Result<()> {
    let group = chart_type.plot_group();

    write!(writer, "<c:ser>")?;
    write!(writer, r#"<c:idx val="{}"/>"#, idx)?;
    write!(writer, r#"<c:order val="{}"/>"#, idx)?;

    if !series.name.is_empty() {
        write!(
            writer,
            "<c:tx><c:strRef><c:f>{}</c:f></c:strRef></c:tx>",
            escape_xml(&series.name)
        )?;
    }

    let line_like = matches!(
        group,
        PlotGroup::Line | PlotGroup::Line3D | PlotGroup::Scatter | PlotGroup::Radar
    );
    write_series_shape_properties(writer, series, line_like)?;

    match group {
        PlotGroup::Bar | PlotGroup::Bar3D | PlotGroup::Bubble => {
            write!(writer, r#"<c:invertIfNegative val="0"/>"#)?;
        },
        PlotGroup::Line | PlotGroup::Scatter | PlotGroup::Radar => {
            write_marker(writer, series)?;
        },
        PlotGroup::Pie | PlotGroup::Pie3D | PlotGroup::Doughnut | PlotGroup::OfPie => {
            write!(writer, r#"<c:explosion val="0"/>"#)?;
        },
        _ => {},
    }

    if chart_type.has_value_x_axis() {
        if !series.categories.is_empty() {
            write!(
                writer,
                "<c:xVal><c:strRef><c:f>{}</c:f></c:strRef></c:xVal>",
                escape_xml(&series.categories)
            )?;
        }
        write!(
            writer,
            "<c:yVal><c:numRef><c:f>{}</c:f></c:numRef></c:yVal>",
            escape_xml(&series.values)
        )?;
    } else {
        if !series.categories.is_empty() {
            write!(
                writer,
                "<c:cat><c:strRef><c:f>{}</c:f></c:strRef></c:cat>",
                escape_xml(&series.categories)
            )?;
        }
        write!(
            writer,
            "<c:val><c:numRef><c:f>{}</c:f></c:numRef></c:val>",
            escape_xml(&series.values)
        )?;
    }

    match group {
        PlotGroup::Line | PlotGroup::Scatter => {
            write!(writer, r#"<c:smooth val="{}"/>"#, xml_bool(series.line.smooth))?;
        },
        PlotGroup::Bubble => {
            let sizes = if series.sizes.is_empty() {
                &series.values
            } else {
                &series.sizes
            };
            write!(
                writer,
                "<c:bubbleSize><c:numRef><c:f>{}</c:f></c:numRef></c:bubbleSize>",
                escape_xml(sizes)
            )?;
            write!(
                writer,
                r#"<c:bubble3D val="{}"/>"#,
                xml_bool(chart_type == ChartType::Bubble3D)
            )?;
        },
        _ => {},
    }

    write!(writer, "</c:ser>")?;
    Ok(())
}

fn write_series_shape_properties<W: Write>(
    writer: &mut W,
    series: &ChartSeries,
    line_like: bool,
) -> std::io::Result<()> {
    let line = &series.line;
    let has_line = line.width > 0.0 || !line.color.is_empty();
    if series.fill.is_empty() && !has_line {
        return Ok(());
    }

    write!(writer, "<c:spPr>")?;
    if !series.fill.is_empty() && !line_like {
        write_solid_fill(writer, &series.fill)?;
    }
    if has_line || line_like {
        write!(writer, r#"<a:ln w="{}" cap="rnd">"#, pt_to_emus(line.width))?;
        let color = if line.color.is_empty() {
            &series.fill
        } else {
            &line.color
        };
        if !color.is_empty() {
            write_solid_fill(writer, color)?;
        }
        write!(writer, "<a:round/></a:ln>")?;
    }
    write!(writer, "</c:spPr>")?;
    Ok(())
}

fn write_marker<W: Write>(writer: &mut W, series: &ChartSeries) -> std::io::Result<()> {
    let marker = &series.marker;
    write!(writer, "<c:marker>")?;
    write!(writer, r#"<c:symbol val="{}"/>"#, marker.symbol.xml_value())?;
    if !matches!(marker.symbol, MarkerSymbol::Auto | MarkerSymbol::NoMarker) {
        let size = match marker.size {
            size @ 2..=72 => size,
            _ => DEFAULT_MARKER_SIZE,
        };
        write!(writer, r#"<c:size val="{}"/>"#, size)?;
    }
    write!(writer, "</c:marker>")?;
    Ok(())
}

fn write_data_labels<W: Write>(
    writer: &mut W,
    legend: &ChartLegend,
    plot_area: &ChartPlotArea,
) -> std::io::Result<()> {
    write!(writer, "<c:dLbls>")?;
    write!(
        writer,
        r#"<c:showLegendKey val="{}"/>"#,
        xml_bool(legend.show_legend_key)
    )?;
    write!(writer, r#"<c:showVal val="{}"/>"#, xml_bool(plot_area.show_val))?;
    write!(
        writer,
        r#"<c:showCatName val="{}"/>"#,
        xml_bool(plot_area.show_cat_name)
    )?;
    write!(
        writer,
        r#"<c:showSerName val="{}"/>"#,
        xml_bool(plot_area.show_ser_name)
    )?;
    write!(
        writer,
        r#"<c:showPercent val="{}"/>"#,
        xml_bool(plot_area.show_percent)
    )?;
    write!(
        writer,
        r#"<c:showBubbleSize val="{}"/>"#,
        xml_bool(plot_area.show_bubble_size)
    )?;
    write!(
        writer,
        r#"<c:showLeaderLines val="{}"/>"#,
        xml_bool(plot_area.show_leader_lines)
    )?;
    write!(writer, "</c:dLbls>")?;
    Ok(())
}

fn write_scaling<W: Write>(writer: &mut W, axis: &ChartAxis) -> std::io::Result<()> {
    write!(writer, "<c:scaling>")?;
    if (2.0..=1000.0).contains(&axis.log_base) {
        write!(writer, r#"<c:logBase val="{}"/>"#, axis.log_base)?;
    }
    write!(
        writer,
        r#"<c:orientation val="{}"/>"#,
        tables::orientation(axis.reverse_order)
    )?;
    if let Some(max) = axis.maximum {
        write!(writer, r#"<c:max val="{}"/>"#, max)?;
    }
    if let Some(min) = axis.minimum {
        write!(writer, r#"<c:min val="{}"/>"#, min)?;
    }
    write!(writer, "</c:scaling>")?;
    Ok(())
}

/// Elements shared by every axis from `c:delete` through `c:numFmt`.
fn write_axis_head<W: Write>(
    writer: &mut W,
    axis: &ChartAxis,
    ax_pos: &str,
    num_fmt: (&str, bool),
) -> std::io::Result<()> {
    write!(writer, r#"<c:delete val="{}"/>"#, xml_bool(axis.none))?;
    write!(writer, r#"<c:axPos val="{}"/>"#, ax_pos)?;
    if axis.major_grid_lines {
        write!(writer, "<c:majorGridlines/>")?;
    }
    if axis.minor_grid_lines {
        write!(writer, "<c:minorGridlines/>")?;
    }
    if !axis.title.is_empty() {
        write_title(writer, &axis.title)?;
    }
    write!(
        writer,
        r#"<c:numFmt formatCode="{}" sourceLinked="{}"/>"#,
        escape_xml(num_fmt.0),
        xml_bool(num_fmt.1)
    )?;
    write!(writer, r#"<c:majorTickMark val="none"/>"#)?;
    write!(writer, r#"<c:minorTickMark val="none"/>"#)?;
    Ok(())
}

fn write_axis_text_properties<W: Write>(writer: &mut W, font: &Font) -> std::io::Result<()> {
    if *font == Font::default() {
        return Ok(());
    }
    write!(writer, "<c:txPr>")?;
    write!(writer, r#"<a:bodyPr rot="-60000000" vert="horz"/><a:lstStyle/>"#)?;
    write!(writer, "<a:p><a:pPr>")?;
    write_run_properties(writer, "a:defRPr", font)?;
    write!(writer, r#"</a:pPr><a:endParaRPr lang="en-US"/></a:p>"#)?;
    write!(writer, "</c:txPr>")?;
    Ok(())
}

fn value_num_fmt<'a>(chart_type: ChartType, axis: &'a ChartAxis) -> (&'a str, bool) {
    if axis.num_fmt.custom_num_fmt.is_empty() {
        (
            tables::val_ax_num_fmt(chart_type).unwrap_or("General"),
            axis.num_fmt.source_linked,
        )
    } else {
        (&axis.num_fmt.custom_num_fmt, axis.num_fmt.source_linked)
    }
}

fn write_cat_ax<W: Write>(writer: &mut W, opts: &Chart, ids: AxisIds) -> std::io::Result<()> {
    let axis = &opts.x_axis;
    write!(writer, "<c:catAx>")?;
    write!(writer, r#"<c:axId val="{}"/>"#, ids.cat)?;
    write_scaling(writer, axis)?;
    write_axis_head(
        writer,
        axis,
        tables::cat_ax_pos(opts.y_axis.reverse_order),
        ("General", true),
    )?;
    write!(writer, r#"<c:tickLblPos val="nextTo"/>"#)?;
    write_axis_text_properties(writer, &axis.font)?;
    write!(writer, r#"<c:crossAx val="{}"/>"#, ids.val)?;
    write!(writer, r#"<c:crosses val="autoZero"/>"#)?;
    write!(writer, r#"<c:auto val="1"/>"#)?;
    write!(writer, r#"<c:lblAlgn val="ctr"/>"#)?;
    write!(writer, r#"<c:lblOffset val="100"/>"#)?;
    if axis.tick_label_skip > 0 {
        write!(writer, r#"<c:tickLblSkip val="{}"/>"#, axis.tick_label_skip)?;
    }
    write!(writer, r#"<c:noMultiLvlLbl val="0"/>"#)?;
    write!(writer, "</c:catAx>")?;
    Ok(())
}

/// The horizontal value axis of scatter and bubble charts.
fn write_x_val_ax<W: Write>(writer: &mut W, opts: &Chart, ids: AxisIds) -> std::io::Result<()> {
    let axis = &opts.x_axis;
    write!(writer, "<c:valAx>")?;
    write!(writer, r#"<c:axId val="{}"/>"#, ids.cat)?;
    write_scaling(writer, axis)?;
    write_axis_head(
        writer,
        axis,
        tables::cat_ax_pos(opts.y_axis.reverse_order),
        ("General", true),
    )?;
    write!(writer, r#"<c:tickLblPos val="nextTo"/>"#)?;
    write_axis_text_properties(writer, &axis.font)?;
    write!(writer, r#"<c:crossAx val="{}"/>"#, ids.val)?;
    write!(writer, r#"<c:crosses val="autoZero"/>"#)?;
    write!(writer, r#"<c:crossBetween val="midCat"/>"#)?;
    if axis.major_unit > 0.0 {
        write!(writer, r#"<c:majorUnit val="{}"/>"#, axis.major_unit)?;
    }
    write!(writer, "</c:valAx>")?;
    Ok(())
}

fn write_val_ax<W: Write>(writer: &mut W, opts: &Chart, ids: AxisIds) -> std::io::Result<()> {
    let chart_type = opts.chart_type;
    let axis = &opts.y_axis;
    write!(writer, "<c:valAx>")?;
    write!(writer, r#"<c:axId val="{}"/>"#, ids.val)?;
    write_scaling(writer, axis)?;
    write_axis_head(
        writer,
        axis,
        tables::val_ax_pos(opts.x_axis.reverse_order),
        value_num_fmt(chart_type, axis),
    )?;
    write!(
        writer,
        r#"<c:tickLblPos val="{}"/>"#,
        tables::val_tick_lbl_pos(chart_type).unwrap_or("nextTo")
    )?;
    write_axis_text_properties(writer, &axis.font)?;
    write!(writer, r#"<c:crossAx val="{}"/>"#, ids.cat)?;
    write!(writer, r#"<c:crosses val="autoZero"/>"#)?;
    write!(
        writer,
        r#"<c:crossBetween val="{}"/>"#,
        tables::val_ax_cross_between(chart_type).unwrap_or("between")
    )?;
    if axis.major_unit > 0.0 {
        write!(writer, r#"<c:majorUnit val="{}"/>"#, axis.major_unit)?;
    }
    write!(writer, "</c:valAx>")?;
    Ok(())
}

fn write_ser_ax<W: Write>(
    writer: &mut W,
    opts: &Chart,
    ser_id: u32,
    cross_id: u32,
) -> std::io::Result<()> {
    write!(writer, "<c:serAx>")?;
    write!(writer, r#"<c:axId val="{}"/>"#, ser_id)?;
    write!(
        writer,
        r#"<c:scaling><c:orientation val="{}"/></c:scaling>"#,
        tables::orientation(opts.x_axis.reverse_order)
    )?;
    write!(writer, r#"<c:delete val="0"/>"#)?;
    write!(writer, r#"<c:axPos val="b"/>"#)?;
    write!(writer, r#"<c:majorTickMark val="out"/>"#)?;
    write!(writer, r#"<c:minorTickMark val="none"/>"#)?;
    write!(writer, r#"<c:tickLblPos val="nextTo"/>"#)?;
    write!(writer, r#"<c:crossAx val="{}"/>"#, cross_id)?;
    write!(writer, r#"<c:crosses val="autoZero"/>"#)?;
    write!(writer, "</c:serAx>")?;
    Ok(())
}

/// Hidden category axis and right-hand value axis for secondary combo charts.
fn write_secondary_axes<W: Write>(writer: &mut W, chart: &Chart) -> std::io::Result<()> {
    let axis = &chart.y_axis;

    write!(writer, "<c:catAx>")?;
    write!(writer, r#"<c:axId val="{}"/>"#, SECONDARY_CAT_AX_ID)?;
    write_scaling(writer, &chart.x_axis)?;
    write!(writer, r#"<c:delete val="1"/>"#)?;
    write!(writer, r#"<c:axPos val="b"/>"#)?;
    write!(writer, r#"<c:majorTickMark val="out"/>"#)?;
    write!(writer, r#"<c:minorTickMark val="none"/>"#)?;
    write!(writer, r#"<c:tickLblPos val="nextTo"/>"#)?;
    write!(writer, r#"<c:crossAx val="{}"/>"#, SECONDARY_VAL_AX_ID)?;
    write!(writer, r#"<c:crosses val="autoZero"/>"#)?;
    write!(writer, r#"<c:auto val="1"/>"#)?;
    write!(writer, r#"<c:lblAlgn val="ctr"/>"#)?;
    write!(writer, r#"<c:lblOffset val="100"/>"#)?;
    write!(writer, r#"<c:noMultiLvlLbl val="0"/>"#)?;
    write!(writer, "</c:catAx>")?;

    write!(writer, "<c:valAx>")?;
    write!(writer, r#"<c:axId val="{}"/>"#, SECONDARY_VAL_AX_ID)?;
    write_scaling(writer, axis)?;
    write_axis_head(writer, axis, "r", value_num_fmt(chart.chart_type, axis))?;
    write!(writer, r#"<c:tickLblPos val="nextTo"/>"#)?;
    write_axis_text_properties(writer, &axis.font)?;
    write!(writer, r#"<c:crossAx val="{}"/>"#, SECONDARY_CAT_AX_ID)?;
    write!(writer, r#"<c:crosses val="max"/>"#)?;
    write!(
        writer,
        r#"<c:crossBetween val="{}"/>"#,
        tables::val_ax_cross_between(chart.chart_type).unwrap_or("between")
    )?;
    write!(writer, "</c:valAx>")?;
    Ok(())
}

fn write_legend<W: Write>(writer: &mut W, legend: &ChartLegend) -> std::io::Result<()> {
    let position = legend.position.unwrap_or_default();
    let Some(legend_pos) = position.xml_value() else {
        return Ok(());
    };
    debug_assert_ne!(position, LegendPosition::Hidden);
    write!(writer, "<c:legend>")?;
    write!(writer, r#"<c:legendPos val="{}"/>"#, legend_pos)?;
    write!(writer, r#"<c:overlay val="0"/>"#)?;
    write!(writer, "</c:legend>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::options::{get_chart_options, ChartSeries};
    use quick_xml::Reader;
    use quick_xml::events::Event;

    fn series() -> ChartSeries {
        ChartSeries {
            name: "Sheet1!$A$2".into(),
            categories: "Sheet1!$B$1:$D$1".into(),
            values: "Sheet1!$B$2:$D$2".into(),
            ..Default::default()
        }
    }

    fn render(chart: Chart, combo: Vec<Chart>) -> String {
        let (opts, combo) = get_chart_options(Some(&chart), &combo).unwrap();
        String::from_utf8(chart_to_xml(&opts, &combo).unwrap()).unwrap()
    }

    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        let mut depth = 0i32;
        loop {
            match reader.read_event().unwrap() {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => break,
                _ => {},
            }
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_every_chart_type_well_formed() {
        for chart_type in ChartType::ALL {
            let mut chart = Chart::new(chart_type);
            chart.series.push(series());
            let xml = render(chart, Vec::new());
            assert_well_formed(&xml);
            assert!(
                xml.contains(chart_type.plot_group().xml_element_name()),
                "{} missing its plot group",
                chart_type
            );
        }
    }

    #[test]
    fn test_bar_3d_attributes() {
        let mut chart = Chart::new(ChartType::Col3DConeStacked);
        chart.series.push(series());
        let xml = render(chart, Vec::new());
        assert!(xml.contains(r#"<c:barDir val="col"/>"#));
        assert!(xml.contains(r#"<c:grouping val="stacked"/>"#));
        assert!(xml.contains(r#"<c:shape val="cone"/>"#));
        assert!(xml.contains(r#"<c:rotX val="15"/>"#));
        assert!(xml.contains(r#"<c:backWall><c:thickness val="0"/></c:backWall>"#));
    }

    #[test]
    fn test_pie_has_no_axes() {
        let mut chart = Chart::new(ChartType::Pie);
        chart.series.push(series());
        let xml = render(chart, Vec::new());
        assert!(!xml.contains("<c:catAx>"));
        assert!(!xml.contains("<c:axId"));
        assert!(!xml.contains("<c:floor>"));
    }

    #[test]
    fn test_scatter_uses_value_axes() {
        let mut chart = Chart::new(ChartType::Scatter);
        chart.series.push(series());
        let xml = render(chart, Vec::new());
        assert!(!xml.contains("<c:catAx>"));
        assert_eq!(xml.matches("<c:valAx>").count(), 2);
        assert!(xml.contains("<c:xVal>"));
        assert!(xml.contains("<c:yVal>"));
    }

    #[test]
    fn test_title_and_legend() {
        let mut chart = Chart::new(ChartType::Line);
        chart.title.push(RichTextRun::new("Q1 & Q2"));
        chart.legend.position = Some(LegendPosition::TopRight);
        let xml = render(chart, Vec::new());
        assert!(xml.contains("<a:t>Q1 &amp; Q2</a:t>"));
        assert!(xml.contains(r#"sz="1400""#));
        assert!(xml.contains(r#"<a:srgbClr val="595959"/>"#));
        assert!(xml.contains(r#"<c:legendPos val="tr"/>"#));
        assert!(xml.contains(r#"<c:autoTitleDeleted val="0"/>"#));
    }

    #[test]
    fn test_hidden_legend() {
        let mut chart = Chart::new(ChartType::Col);
        chart.legend.position = Some(LegendPosition::Hidden);
        let xml = render(chart, Vec::new());
        assert!(!xml.contains("<c:legend>"));
        assert!(xml.contains(r#"<c:autoTitleDeleted val="1"/>"#));
    }

    #[test]
    fn test_combo_secondary_axes() {
        let mut chart = Chart::new(ChartType::Col);
        chart.series.push(series());
        let mut line = Chart::new(ChartType::Line);
        line.series.push(series());
        line.y_axis.secondary = true;

        let xml = render(chart, vec![line]);
        assert_well_formed(&xml);
        assert!(xml.contains("<c:barChart>"));
        assert!(xml.contains("<c:lineChart>"));
        assert!(xml.contains(r#"<c:axId val="100000003"/>"#));
        assert!(xml.contains(r#"<c:crosses val="max"/>"#));
        // series indices continue into the combo group
        assert!(xml.contains(r#"<c:idx val="1"/>"#));
    }

    #[test]
    fn test_doughnut_hole_size() {
        let mut chart = Chart::new(ChartType::Doughnut);
        chart.hole_size = 40;
        assert!(render(chart, Vec::new()).contains(r#"<c:holeSize val="40"/>"#));
    }

    #[test]
    fn test_show_blanks_as() {
        let mut chart = Chart::new(ChartType::Area);
        chart.show_blanks_as = Some(crate::ooxml::charts::types::ShowBlanksAs::Zero);
        assert!(render(chart, Vec::new()).contains(r#"<c:dispBlanksAs val="zero"/>"#));
    }
}
