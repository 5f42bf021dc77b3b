//! Chart sheets: sheets holding a single chart and no cells.

use std::fmt::Write as _;

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::{BlobPart, PackURI, Relationships};

#[derive(Debug, Clone)]
pub struct Chartsheet {
    name: String,
    partname: PackURI,
    zoom_scale: u32,
    zoom_to_fit: bool,
    pub(crate) drawing: Option<String>,
    pub(crate) rels: Relationships,
}

impl Chartsheet {
    /// A chart sheet with one view at 100% zoom, fitted to the window.
    pub fn new(name: impl Into<String>, partname: PackURI) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            name: name.into(),
            partname,
            zoom_scale: 100,
            zoom_to_fit: true,
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

    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<chartsheet xmlns="{}" xmlns:r="{}">"#,
            namespace::SML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        write!(
            xml,
            r#"<sheetViews><sheetView zoomScale="{}"{} workbookViewId="0"/></sheetViews>"#,
            self.zoom_scale,
            if self.zoom_to_fit { r#" zoomToFit="1""# } else { "" }
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str(
            r#"<pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>"#,
        );
        if let Some(ref r_id) = self.drawing {
            write!(xml, r#"<drawing r:id="{}"/>"#, r_id)
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }
        xml.push_str("</chartsheet>");
        Ok(xml)
    }

    pub fn to_part(&self) -> Result<BlobPart> {
        let xml = self.to_xml()?;
        Ok(
            BlobPart::new(self.partname.clone(), ct::SML_CHARTSHEET, xml.into_bytes())
                .with_rels(self.rels.clone()),
        )
    }
}
