//! Workbook model.
//!
//! A [`Workbook`] owns its worksheets, chart sheets and drawings as models and
//! keeps charts and media as serialized parts of an [`OpcPackage`]. Models are
//! serialized into the package only when the workbook is written.
//!
//! ```
//! use sheetwright::ooxml::xlsx::Workbook;
//!
//! let mut wb = Workbook::new();
//! wb.new_sheet("Data").unwrap();
//! wb.set_cell_value("Data", "A1", "Region").unwrap();
//! wb.set_cell_value("Data", "B1", 42.0).unwrap();
//! assert_eq!(wb.sheet_list(), vec!["Sheet1", "Data"]);
//! let bytes = wb.write_to_buffer().unwrap();
//! assert!(bytes.starts_with(b"PK"));
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::common::xml::escape_xml;
use crate::ooxml::drawings::Drawing;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, ContentTypes, OpcPackage, PackURI, PackageWriter, Relationships};
use crate::ooxml::xlsx::cell::{CellValue, cell_name_to_coordinates};
use crate::ooxml::xlsx::chartsheet::Chartsheet;
use crate::ooxml::xlsx::template;
use crate::ooxml::xlsx::worksheet::Worksheet;

const WORKBOOK_PARTNAME: &str = "/xl/workbook.xml";
const STYLES_PARTNAME: &str = "/xl/styles.xml";
const MAX_SHEET_NAME_LEN: usize = 31;

pub(crate) const DRAWING_STEM: &str = "/xl/drawings/drawing";
pub(crate) const CHART_STEM: &str = "/xl/charts/chart";

/// Kind of sheet registered in the workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Worksheet,
    Chartsheet,
}

/// An entry of the workbook's sheet list.
#[derive(Debug, Clone)]
pub struct SheetEntry {
    pub name: String,
    pub sheet_id: u32,
    pub r_id: String,
    pub kind: SheetKind,
}

/// Parts whose content type is registered as an override per index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTypePart {
    Chart,
    Chartsheet,
    Drawings,
    Worksheet,
}

impl ContentTypePart {
    const fn stem_and_type(&self) -> (&'static str, &'static str) {
        match self {
            Self::Chart => (CHART_STEM, ct::DML_CHART),
            Self::Chartsheet => ("/xl/chartsheets/sheet", ct::SML_CHARTSHEET),
            Self::Drawings => (DRAWING_STEM, ct::OFC_DRAWING),
            Self::Worksheet => ("/xl/worksheets/sheet", ct::SML_WORKSHEET),
        }
    }
}

/// An in-memory spreadsheet document.
#[derive(Debug, Clone)]
pub struct Workbook {
    sheets: Vec<SheetEntry>,
    pub(crate) worksheets: Vec<Worksheet>,
    pub(crate) chartsheets: Vec<Chartsheet>,
    /// Drawings keyed by partname
    pub(crate) drawings: BTreeMap<String, Drawing>,
    /// Serialized parts: charts and media
    pub(crate) package: OpcPackage,
    pub(crate) content_types: ContentTypes,
    pub(crate) rels: Relationships,
}

impl Workbook {
    /// Create a workbook holding one empty worksheet named `Sheet1`.
    pub fn new() -> Self {
        let mut package = OpcPackage::new();
        package.relate_to(&WORKBOOK_PARTNAME[1..], rt::OFFICE_DOCUMENT);

        let mut content_types = ContentTypes::new();
        if let Ok(partname) = PackURI::new(WORKBOOK_PARTNAME) {
            content_types.add_override(&partname, ct::SML_SHEET_MAIN);
        }
        if let Ok(partname) = PackURI::new(STYLES_PARTNAME) {
            content_types.add_override(&partname, ct::SML_STYLES);
        }

        let mut rels = Relationships::new("/xl".to_string());
        rels.get_or_add(rt::STYLES, "styles.xml");

        let mut wb = Self {
            sheets: Vec::new(),
            worksheets: Vec::new(),
            chartsheets: Vec::new(),
            drawings: BTreeMap::new(),
            package,
            content_types,
            rels,
        };
        // "Sheet1" is a valid name and the first sheet ID, so this cannot fail
        let _ = wb.insert_worksheet("Sheet1");
        wb
    }

    /// Add a worksheet and return its index in the sheet list.
    ///
    /// When a sheet with that name already exists its index is returned and
    /// nothing is added.
    pub fn new_sheet(&mut self, name: &str) -> Result<usize> {
        if let Some(index) = self.sheet_index(name)? {
            return Ok(index);
        }
        self.insert_worksheet(name)
    }

    fn insert_worksheet(&mut self, name: &str) -> Result<usize> {
        let sheet_id = self.next_sheet_id();
        let partname = PackURI::indexed("/xl/worksheets/sheet", sheet_id, "xml")?;
        let r_id = self
            .rels
            .get_or_add(rt::WORKSHEET, &partname.relative_ref("/xl"));
        self.add_content_type_part(sheet_id, ContentTypePart::Worksheet)?;

        tracing::debug!(sheet = name, sheet_id, partname = %partname, "added worksheet");
        self.worksheets.push(Worksheet::new(name, partname));
        self.register_sheet(name, sheet_id, r_id, SheetKind::Worksheet);
        Ok(self.sheets.len() - 1)
    }

    pub(crate) fn register_sheet(&mut self, name: &str, sheet_id: u32, r_id: String, kind: SheetKind) {
        self.sheets.push(SheetEntry {
            name: name.to_string(),
            sheet_id,
            r_id,
            kind,
        });
    }

    /// One more than the largest sheet ID in use.
    pub(crate) fn next_sheet_id(&self) -> u32 {
        self.sheets.iter().map(|s| s.sheet_id).max().unwrap_or(0) + 1
    }

    /// Index of a sheet in the sheet list, compared case-insensitively.
    ///
    /// Fails with [`OoxmlError::InvalidSheetName`] for a name Excel would not
    /// accept.
    pub fn sheet_index(&self, name: &str) -> Result<Option<usize>> {
        check_sheet_name(name)?;
        Ok(self
            .sheets
            .iter()
            .position(|s| s.name.to_lowercase() == name.to_lowercase()))
    }

    /// Sheet names in workbook order.
    pub fn sheet_list(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn sheets(&self) -> &[SheetEntry] {
        &self.sheets
    }

    pub(crate) fn worksheet_index(&self, name: &str) -> Result<usize> {
        let lower = name.to_lowercase();
        self.worksheets
            .iter()
            .position(|ws| ws.name().to_lowercase() == lower)
            .ok_or_else(|| OoxmlError::SheetNotExist(name.to_string()))
    }

    /// Look up a worksheet; chart sheets are not worksheets.
    pub fn worksheet(&self, name: &str) -> Result<&Worksheet> {
        let index = self.worksheet_index(name)?;
        Ok(&self.worksheets[index])
    }

    pub fn worksheet_mut(&mut self, name: &str) -> Result<&mut Worksheet> {
        let index = self.worksheet_index(name)?;
        Ok(&mut self.worksheets[index])
    }

    pub fn chartsheet(&self, name: &str) -> Result<&Chartsheet> {
        let lower = name.to_lowercase();
        self.chartsheets
            .iter()
            .find(|cs| cs.name().to_lowercase() == lower)
            .ok_or_else(|| OoxmlError::SheetNotExist(name.to_string()))
    }

    /// Write a value into a worksheet cell.
    pub fn set_cell_value(&mut self, sheet: &str, cell: &str, value: impl Into<CellValue>) -> Result<()> {
        let (col, row) = cell_name_to_coordinates(cell)?;
        self.worksheet_mut(sheet)?.set_cell(col, row, value.into());
        Ok(())
    }

    /// The drawing stored under a partname.
    pub fn drawing(&self, partname: &str) -> Option<&Drawing> {
        self.drawings.get(partname)
    }

    /// Number of drawing parts in the workbook.
    pub fn count_drawings(&self) -> usize {
        self.drawings.len()
    }

    /// Register the content type override of an indexed part.
    ///
    /// Registering the same part twice keeps the first registration.
    pub fn add_content_type_part(&mut self, index: u32, part: ContentTypePart) -> Result<()> {
        let (stem, content_type) = part.stem_and_type();
        let partname = PackURI::indexed(stem, index, "xml")?;
        self.content_types.add_override(&partname, content_type);
        Ok(())
    }

    /// Best-effort variant of [`add_content_type_part`](Self::add_content_type_part):
    /// failures are logged and discarded.
    pub(crate) fn try_add_content_type_part(&mut self, index: u32, part: ContentTypePart) {
        if let Err(err) = self.add_content_type_part(index, part) {
            tracing::warn!(index, ?part, %err, "content type registration skipped");
        }
    }

    pub fn content_types(&self) -> &ContentTypes {
        &self.content_types
    }

    /// Return the worksheet's drawing, creating and attaching one numbered
    /// `drawing_id` when the worksheet has none yet.
    ///
    /// An existing drawing keeps its own number.
    pub(crate) fn prepare_drawing(&mut self, ws_index: usize, drawing_id: u32) -> Result<(u32, PackURI)> {
        if let Some(partname) = self.worksheets[ws_index].drawing_partname()? {
            let id = partname.idx().unwrap_or(drawing_id);
            self.drawings
                .entry(partname.to_string())
                .or_insert_with(|| Drawing::new(partname.clone()));
            tracing::debug!(drawing = %partname, "reusing worksheet drawing");
            return Ok((id, partname));
        }

        let partname = PackURI::indexed(DRAWING_STEM, drawing_id, "xml")?;
        let ws = &mut self.worksheets[ws_index];
        let target = partname.relative_ref(ws.partname().base_uri());
        let r_id = ws.rels.get_or_add(rt::DRAWING, &target);
        ws.drawing = Some(r_id);
        self.drawings
            .insert(partname.to_string(), Drawing::new(partname.clone()));
        tracing::debug!(drawing = %partname, sheet = ws.name(), "created worksheet drawing");
        Ok((drawing_id, partname))
    }

    fn workbook_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512 + self.sheets.len() * 96);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<workbook xmlns="{}" xmlns:r="{}">"#,
            namespace::SML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str(r#"<bookViews><workbookView/></bookViews>"#);
        xml.push_str("<sheets>");
        for sheet in &self.sheets {
            write!(
                xml,
                r#"<sheet name="{}" sheetId="{}" r:id="{}"/>"#,
                escape_xml(&sheet.name),
                sheet.sheet_id,
                sheet.r_id
            )
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }
        xml.push_str("</sheets>");
        xml.push_str("</workbook>");
        Ok(xml)
    }

    /// Serialize every model into a snapshot of the package.
    fn assemble_package(&self) -> Result<OpcPackage> {
        let mut package = self.package.clone();

        let workbook = BlobPart::new(
            PackURI::new(WORKBOOK_PARTNAME)?,
            ct::SML_SHEET_MAIN,
            self.workbook_xml()?.into_bytes(),
        )
        .with_rels(self.rels.clone());
        package.add_part(workbook);
        package.add_part(BlobPart::new(
            PackURI::new(STYLES_PARTNAME)?,
            ct::SML_STYLES,
            template::default_styles_xml().as_bytes().to_vec(),
        ));

        for ws in &self.worksheets {
            package.add_part(ws.to_part()?);
        }
        for cs in &self.chartsheets {
            package.add_part(cs.to_part()?);
        }
        for drawing in self.drawings.values() {
            package.add_part(drawing.to_part()?);
        }
        Ok(package)
    }

    /// Serialize the workbook into an `.xlsx` archive in memory.
    pub fn write_to_buffer(&self) -> Result<Vec<u8>> {
        let package = self.assemble_package()?;
        tracing::trace!(parts = package.part_count(), "writing workbook");
        Ok(PackageWriter::to_bytes(&package, &self.content_types)?)
    }

    /// Save the workbook to a file.
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let package = self.assemble_package()?;
        PackageWriter::write(path.as_ref(), &package, &self.content_types)?;
        tracing::debug!(path = %path.as_ref().display(), "saved workbook");
        Ok(())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a sheet name the way Excel does.
fn check_sheet_name(name: &str) -> Result<()> {
    let invalid = || OoxmlError::InvalidSheetName(name.to_string());
    if name.is_empty() || name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(invalid());
    }
    if name.contains([':', '\\', '/', '?', '*', '[', ']']) {
        return Err(invalid());
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn test_new_workbook() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_list(), vec!["Sheet1"]);
        assert_eq!(wb.sheets()[0].sheet_id, 1);
        assert_eq!(wb.count_drawings(), 0);
        assert!(wb.worksheet("sheet1").is_ok());
    }

    #[test]
    fn test_new_sheet() {
        let mut wb = Workbook::new();
        assert_eq!(wb.new_sheet("Data").unwrap(), 1);
        assert_eq!(wb.new_sheet("DATA").unwrap(), 1);
        assert_eq!(wb.sheets()[1].sheet_id, 2);
        assert_eq!(
            wb.worksheet("Data").unwrap().partname().as_str(),
            "/xl/worksheets/sheet2.xml"
        );
    }

    #[test]
    fn test_invalid_sheet_names() {
        let mut wb = Workbook::new();
        let long = "x".repeat(32);
        for name in ["", "a/b", "a[1]", "'quoted'", long.as_str()] {
            assert!(
                matches!(wb.new_sheet(name), Err(OoxmlError::InvalidSheetName(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_set_cell_value_errors() {
        let mut wb = Workbook::new();
        assert!(matches!(
            wb.set_cell_value("Missing", "A1", 1.0),
            Err(OoxmlError::SheetNotExist(_))
        ));
        assert!(matches!(
            wb.set_cell_value("Sheet1", "1A", 1.0),
            Err(OoxmlError::InvalidCellReference(_))
        ));
    }

    #[test]
    fn test_add_content_type_part() {
        let mut wb = Workbook::new();
        wb.add_content_type_part(3, ContentTypePart::Chart).unwrap();
        assert_eq!(
            wb.content_types().override_for("/xl/charts/chart3.xml"),
            Some(ct::DML_CHART)
        );
        assert!(wb.add_content_type_part(0, ContentTypePart::Drawings).is_err());
    }

    #[test]
    fn test_write_to_buffer() {
        let mut wb = Workbook::new();
        wb.set_cell_value("Sheet1", "B2", "hello").unwrap();
        let bytes = wb.write_to_buffer().unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/styles.xml",
            "xl/worksheets/sheet1.xml",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }

        let workbook = read_member(&bytes, "xl/workbook.xml");
        assert!(workbook.contains(r#"<sheet name="Sheet1" sheetId="1" r:id="rId2"/>"#));
        let sheet = read_member(&bytes, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains("<t>hello</t>"));
    }

    #[test]
    fn test_save_as() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xlsx");
        Workbook::new().save_as(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(read_member(&bytes, "[Content_Types].xml").contains(ct::SML_WORKSHEET));
    }
}
