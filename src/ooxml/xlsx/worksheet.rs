//! Worksheet model and serialization.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{BlobPart, PackURI, Relationships};
use crate::ooxml::xlsx::cell::{CellValue, column_to_letters};
use crate::ooxml::xlsx::data_validation::DataValidations;

/// A worksheet: cells, validation rules and an optional drawing.
#[derive(Debug, Clone)]
pub struct Worksheet {
    name: String,
    partname: PackURI,
    /// Cells keyed by one-based (row, column)
    cells: BTreeMap<(u32, u32), CellValue>,
    pub(crate) data_validations: DataValidations,
    /// Relationship ID of the drawing part, once one is attached
    pub(crate) drawing: Option<String>,
    pub(crate) rels: Relationships,
}

impl Worksheet {
    pub fn new(name: impl Into<String>, partname: PackURI) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            name: name.into(),
            partname,
            cells: BTreeMap::new(),
            data_validations: DataValidations::default(),
            drawing: None,
            rels,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Set a cell value by one-based column and row.
    pub fn set_cell(&mut self, col: u32, row: u32, value: CellValue) {
        self.cells.insert((row, col), value);
    }

    pub fn cell(&self, col: u32, row: u32) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// Partname of the worksheet's drawing, resolved through its relationship.
    pub fn drawing_partname(&self) -> Result<Option<PackURI>> {
        let Some(r_id) = self.drawing.as_deref() else {
            return Ok(None);
        };
        let rel = self
            .rels
            .get(r_id)
            .ok_or_else(|| OpcError::RelationshipNotFound(r_id.to_string()))?;
        Ok(Some(rel.target_partname()?))
    }

    /// Serialize the worksheet.
    pub fn to_xml(&self) -> Result<String> {
        self.write_xml().map_err(|e| OoxmlError::Xml(e.to_string()))
    }

    fn write_xml(&self) -> std::result::Result<String, std::fmt::Error> {
        let mut xml = String::with_capacity(1024 + self.cells.len() * 48);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<worksheet xmlns="{}" xmlns:r="{}">"#,
            namespace::SML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;
        xml.push_str(r#"<sheetViews><sheetView workbookViewId="0"/></sheetViews>"#);
        xml.push_str(r#"<sheetFormatPr defaultRowHeight="15"/>"#);

        if self.cells.is_empty() {
            xml.push_str("<sheetData/>");
        } else {
            xml.push_str("<sheetData>");
            let mut current_row = None;
            for (&(row, col), value) in &self.cells {
                if current_row != Some(row) {
                    if current_row.is_some() {
                        xml.push_str("</row>");
                    }
                    write!(xml, r#"<row r="{}">"#, row)?;
                    current_row = Some(row);
                }
                write_cell(&mut xml, col, row, value)?;
            }
            xml.push_str("</row></sheetData>");
        }

        self.data_validations.write_xml(&mut xml)?;

        xml.push_str(
            r#"<pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>"#,
        );
        if let Some(ref r_id) = self.drawing {
            write!(xml, r#"<drawing r:id="{}"/>"#, r_id)?;
        }
        xml.push_str("</worksheet>");
        Ok(xml)
    }

    /// Build the package part for this worksheet.
    pub fn to_part(&self) -> Result<BlobPart> {
        let xml = self.to_xml()?;
        Ok(
            BlobPart::new(self.partname.clone(), ct::SML_WORKSHEET, xml.into_bytes())
                .with_rels(self.rels.clone()),
        )
    }
}

fn write_cell(xml: &mut String, col: u32, row: u32, value: &CellValue) -> std::fmt::Result {
    let reference = column_to_letters(col);
    match value {
        CellValue::Number(n) => write!(xml, r#"<c r="{}{}"><v>{}</v></c>"#, reference, row, n),
        CellValue::Bool(b) => write!(
            xml,
            r#"<c r="{}{}" t="b"><v>{}</v></c>"#,
            reference,
            row,
            u8::from(*b)
        ),
        CellValue::String(s) => write!(
            xml,
            r#"<c r="{}{}" t="inlineStr"><is><t>{}</t></is></c>"#,
            reference,
            row,
            escape_xml(s)
        ),
    }
}
