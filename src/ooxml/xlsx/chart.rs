//! Embedding charts into worksheets and chart sheets.
//!
//! A chart is stored as a `c:chartSpace` part under `/xl/charts/` and shown
//! through a graphic frame in a drawing part. Worksheet charts are anchored
//! between two cells; a chart sheet holds one absolutely positioned chart.

use crate::ooxml::charts::{Chart, chart_to_xml, get_chart_options};
use crate::ooxml::drawings::{
    Drawing, DrawingObject, ObjectKind, Placement, position_object_pixels, scale_px,
};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{BlobPart, PackURI};
use crate::ooxml::xlsx::cell::cell_name_to_coordinates;
use crate::ooxml::xlsx::chartsheet::Chartsheet;
use crate::ooxml::xlsx::workbook::{CHART_STEM, ContentTypePart, DRAWING_STEM, SheetKind, Workbook};

/// Extent of the chart frame on a chart sheet, in EMUs.
const CHARTSHEET_FRAME_CX: i64 = 9_293_679;
const CHARTSHEET_FRAME_CY: i64 = 6_068_786;

impl Workbook {
    /// Add a chart to a worksheet with its top-left corner in `cell`.
    ///
    /// `combo` charts are layered onto the primary chart and share its part.
    /// The chart is anchored between two cells sized from the configured
    /// dimension, scale and offsets.
    ///
    /// Parts created before a failure are left in place.
    ///
    /// ```
    /// use sheetwright::ooxml::charts::{Chart, ChartSeries, ChartType};
    /// use sheetwright::ooxml::xlsx::Workbook;
    ///
    /// let mut wb = Workbook::new();
    /// let mut chart = Chart::new(ChartType::Line);
    /// chart.series.push(ChartSeries {
    ///     name: "Sheet1!$A$1".into(),
    ///     values: "Sheet1!$B$1:$D$1".into(),
    ///     ..Default::default()
    /// });
    /// wb.add_chart("Sheet1", "E1", &chart, &[]).unwrap();
    /// assert_eq!(wb.count_charts(), 1);
    /// ```
    pub fn add_chart(&mut self, sheet: &str, cell: &str, chart: &Chart, combo: &[Chart]) -> Result<()> {
        let ws_index = self.worksheet_index(sheet)?;
        let (opts, combo_charts) = get_chart_options(Some(chart), combo)?;
        let (col, row) = cell_name_to_coordinates(cell)?;

        let drawing_id = self.count_drawings() as u32 + 1;
        let chart_id = self.count_charts() as u32 + 1;
        let (drawing_id, drawing_partname) = self.prepare_drawing(ws_index, drawing_id)?;
        let chart_partname = PackURI::indexed(CHART_STEM, chart_id, "xml")?;
        tracing::debug!(
            sheet,
            drawing_id,
            chart_id,
            drawing = %drawing_partname,
            chart = %chart_partname,
            "adding chart"
        );

        let format = &opts.format;
        let width = scale_px(opts.dimension.width, format.scale_x);
        let height = scale_px(opts.dimension.height, format.scale_y);
        let position = position_object_pixels(
            col - 1,
            row - 1,
            i64::from(format.offset_x),
            i64::from(format.offset_y),
            width,
            height,
        );

        let drawing = self.drawing_mut(&drawing_partname)?;
        let r_id = drawing.relate_to(&chart_partname.relative_ref(drawing_partname.base_uri()), rt::CHART);
        drawing.add_anchor(
            Placement::TwoCell {
                edit_as: format.positioning,
                from: position.from,
                to: position.to,
            },
            DrawingObject::Chart { r_id },
            format,
        );

        self.add_chart_part(chart_partname, &opts, &combo_charts)?;
        self.add_content_type_part(chart_id, ContentTypePart::Chart)?;
        self.try_add_content_type_part(drawing_id, ContentTypePart::Drawings);
        Ok(())
    }

    /// Create a chart sheet named `sheet` holding a single chart.
    ///
    /// Fails with [`OoxmlError::SheetExists`] when any sheet already uses the
    /// name. The new sheet takes the next free sheet ID.
    pub fn add_chart_sheet(&mut self, sheet: &str, chart: &Chart, combo: &[Chart]) -> Result<()> {
        if self.sheet_index(sheet)?.is_some() {
            return Err(OoxmlError::SheetExists(sheet.to_string()));
        }
        let (opts, combo_charts) = get_chart_options(Some(chart), combo)?;

        let sheet_id = self.next_sheet_id();
        let sheet_partname = PackURI::indexed("/xl/chartsheets/sheet", sheet_id, "xml")?;
        let drawing_id = self.count_drawings() as u32 + 1;
        let chart_id = self.count_charts() as u32 + 1;
        let drawing_partname = PackURI::indexed(DRAWING_STEM, drawing_id, "xml")?;
        let chart_partname = PackURI::indexed(CHART_STEM, chart_id, "xml")?;
        tracing::debug!(
            sheet,
            sheet_id,
            drawing_id,
            chart_id,
            chartsheet = %sheet_partname,
            "adding chart sheet"
        );

        let mut chartsheet = Chartsheet::new(sheet, sheet_partname.clone());
        let drawing_rel = chartsheet.rels.get_or_add(
            rt::DRAWING,
            &drawing_partname.relative_ref(sheet_partname.base_uri()),
        );
        chartsheet.drawing = Some(drawing_rel);

        let mut drawing = Drawing::new(drawing_partname.clone());
        let r_id = drawing.relate_to(&chart_partname.relative_ref(drawing_partname.base_uri()), rt::CHART);
        drawing.add_anchor(
            Placement::Absolute {
                x: 0,
                y: 0,
                cx: CHARTSHEET_FRAME_CX,
                cy: CHARTSHEET_FRAME_CY,
            },
            DrawingObject::Chart { r_id },
            &opts.format,
        );
        self.drawings.insert(drawing_partname.to_string(), drawing);

        self.add_chart_part(chart_partname, &opts, &combo_charts)?;
        self.add_content_type_part(chart_id, ContentTypePart::Chart)?;
        self.try_add_content_type_part(sheet_id, ContentTypePart::Chartsheet);
        self.try_add_content_type_part(drawing_id, ContentTypePart::Drawings);

        let r_id = self.rels.get_or_add(rt::CHARTSHEET, sheet_partname.as_str());
        self.register_sheet(sheet, sheet_id, r_id, SheetKind::Chartsheet);
        self.chartsheets.push(chartsheet);
        Ok(())
    }

    /// Delete the charts whose top-left corner is `cell`.
    ///
    /// Pictures anchored at the same cell are kept. The chart part itself
    /// stays in the package, so chart numbers may become non-contiguous.
    pub fn delete_chart(&mut self, sheet: &str, cell: &str) -> Result<()> {
        let (col, row) = cell_name_to_coordinates(cell)?;
        let ws = self.worksheet(sheet)?;
        let Some(partname) = ws.drawing_partname()? else {
            return Ok(());
        };
        let Some(drawing) = self.drawings.get_mut(partname.as_str()) else {
            return Ok(());
        };
        let removed = drawing.remove_at(col - 1, row - 1, ObjectKind::Chart);
        tracing::debug!(sheet, cell, removed, drawing = %partname, "deleted charts");
        Ok(())
    }

    /// Number of chart parts in the package.
    pub fn count_charts(&self) -> usize {
        self.package.count_parts_with_prefix(CHART_STEM)
    }

    pub(crate) fn drawing_mut(&mut self, partname: &PackURI) -> Result<&mut Drawing> {
        self.drawings
            .get_mut(partname.as_str())
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()).into())
    }

    fn add_chart_part(&mut self, partname: PackURI, opts: &Chart, combo: &[Chart]) -> Result<()> {
        let blob = chart_to_xml(opts, combo)?;
        tracing::trace!(chart = %partname, bytes = blob.len(), "serialized chart");
        self.package.add_part(BlobPart::new(partname, ct::DML_CHART, blob));
        Ok(())
    }
}
