//! Spreadsheet drawing part (`xl/drawings/drawingN.xml`).
//!
//! A drawing holds the anchors of every chart frame and picture shown on one
//! worksheet or chart sheet, together with the relationships to the chart
//! and image parts they display.

use std::fmt::Write as _;

use crate::common::xml::{escape_xml, xml_bool};
use crate::ooxml::charts::{GraphicOptions, Positioning};
use crate::ooxml::drawings::anchor::Marker;
use crate::ooxml::drawings::blip::{write_a_blip_embed, write_a_stretch_fill_rect};
use crate::ooxml::drawings::xfrm::{write_a_xfrm_off_ext, write_xfrm_off_ext};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::{BlobPart, PackURI, Relationships};

/// Where an anchored object sits.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// Between two cells of a worksheet
    TwoCell {
        edit_as: Option<Positioning>,
        from: Marker,
        to: Marker,
    },
    /// At a fixed position in EMUs, used by chart sheets
    Absolute { x: i64, y: i64, cx: i64, cy: i64 },
}

/// Kind of object an anchor displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Chart,
    Picture,
}

/// The object an anchor displays.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingObject {
    Chart {
        r_id: String,
    },
    Picture {
        r_id: String,
        name: String,
        /// Extent in EMUs
        cx: i64,
        cy: i64,
    },
}

impl DrawingObject {
    #[inline]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Chart { .. } => ObjectKind::Chart,
            Self::Picture { .. } => ObjectKind::Picture,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    /// Shape ID, unique within the drawing
    pub id: u32,
    pub placement: Placement,
    pub object: DrawingObject,
    pub alt_text: String,
    pub locked: bool,
    pub print_object: bool,
    pub lock_aspect_ratio: bool,
}

impl Anchor {
    /// The cell the anchor starts in, `None` for absolute anchors.
    pub fn from_cell(&self) -> Option<(u32, u32)> {
        match &self.placement {
            Placement::TwoCell { from, .. } => Some((from.col, from.row)),
            Placement::Absolute { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Drawing {
    partname: PackURI,
    anchors: Vec<Anchor>,
    rels: Relationships,
    next_id: u32,
}

impl Drawing {
    pub fn new(partname: PackURI) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            anchors: Vec::new(),
            rels,
            next_id: 1,
        }
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    #[inline]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Relate the drawing to a chart or image part, returning the rId.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref)
    }

    /// Append an anchor and return its shape ID.
    pub fn add_anchor(
        &mut self,
        placement: Placement,
        object: DrawingObject,
        format: &GraphicOptions,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.anchors.push(Anchor {
            id,
            placement,
            object,
            alt_text: format.alt_text.clone(),
            locked: format.locked.unwrap_or(false),
            print_object: format.print_object.unwrap_or(true),
            lock_aspect_ratio: format.lock_aspect_ratio,
        });
        id
    }

    /// Remove every anchor of `kind` whose top-left cell is `col`/`row`
    /// (zero-based), returning how many were removed.
    pub fn remove_at(&mut self, col: u32, row: u32, kind: ObjectKind) -> usize {
        let before = self.anchors.len();
        self.anchors
            .retain(|anchor| !(anchor.object.kind() == kind && anchor.from_cell() == Some((col, row))));
        before - self.anchors.len()
    }

    /// Serialize the drawing as an `xdr:wsDr` document.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.anchors.len() * 768);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<xdr:wsDr xmlns:xdr="{}" xmlns:a="{}" xmlns:r="{}" xmlns:c="{}">"#,
            namespace::DML_SPREADSHEET_DRAWING,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::DML_CHART
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        for anchor in &self.anchors {
            write_anchor(&mut xml, anchor).map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }

        xml.push_str("</xdr:wsDr>");
        Ok(xml)
    }

    /// Build the package part for this drawing.
    pub fn to_part(&self) -> Result<BlobPart> {
        let xml = self.to_xml()?;
        Ok(
            BlobPart::new(self.partname.clone(), ct::OFC_DRAWING, xml.into_bytes())
                .with_rels(self.rels.clone()),
        )
    }
}

fn write_anchor(xml: &mut String, anchor: &Anchor) -> std::fmt::Result {
    let closing = match &anchor.placement {
        Placement::TwoCell { edit_as, from, to } => {
            match edit_as {
                Some(edit_as) => write!(
                    xml,
                    r#"<xdr:twoCellAnchor editAs="{}">"#,
                    edit_as.xml_value()
                )?,
                None => xml.push_str("<xdr:twoCellAnchor>"),
            }
            from.write_xml(xml, "from");
            to.write_xml(xml, "to");
            "</xdr:twoCellAnchor>"
        },
        Placement::Absolute { x, y, cx, cy } => {
            xml.push_str("<xdr:absoluteAnchor>");
            write!(xml, r#"<xdr:pos x="{}" y="{}"/>"#, x, y)?;
            write!(xml, r#"<xdr:ext cx="{}" cy="{}"/>"#, cx, cy)?;
            "</xdr:absoluteAnchor>"
        },
    };

    match &anchor.object {
        DrawingObject::Chart { r_id } => write_graphic_frame(xml, anchor, r_id)?,
        DrawingObject::Picture { r_id, name, cx, cy } => {
            write_picture(xml, anchor, r_id, name, *cx, *cy)?
        },
    }

    write!(
        xml,
        r#"<xdr:clientData fLocksWithSheet="{}" fPrintsWithSheet="{}"/>"#,
        xml_bool(anchor.locked),
        xml_bool(anchor.print_object)
    )?;
    xml.push_str(closing);
    Ok(())
}

fn write_non_visual_props(xml: &mut String, anchor: &Anchor, name: &str) -> std::fmt::Result {
    write!(
        xml,
        r#"<xdr:cNvPr id="{}" name="{}""#,
        anchor.id,
        escape_xml(name)
    )?;
    if !anchor.alt_text.is_empty() {
        write!(xml, r#" descr="{}""#, escape_xml(&anchor.alt_text))?;
    }
    xml.push_str("/>");
    Ok(())
}

fn write_graphic_frame(xml: &mut String, anchor: &Anchor, r_id: &str) -> std::fmt::Result {
    xml.push_str(r#"<xdr:graphicFrame macro="">"#);
    xml.push_str("<xdr:nvGraphicFramePr>");
    write_non_visual_props(xml, anchor, &format!("Chart {}", anchor.id))?;
    xml.push_str("<xdr:cNvGraphicFramePr/>");
    xml.push_str("</xdr:nvGraphicFramePr>");
    write_xfrm_off_ext(xml, "xdr", 0, 0, 0, 0)?;
    xml.push_str("<a:graphic>");
    write!(
        xml,
        r#"<a:graphicData uri="{}"><c:chart r:id="{}"/></a:graphicData>"#,
        namespace::DML_CHART,
        r_id
    )?;
    xml.push_str("</a:graphic>");
    xml.push_str("</xdr:graphicFrame>");
    Ok(())
}

fn write_picture(
    xml: &mut String,
    anchor: &Anchor,
    r_id: &str,
    name: &str,
    cx: i64,
    cy: i64,
) -> std::fmt::Result {
    xml.push_str("<xdr:pic>");
    xml.push_str("<xdr:nvPicPr>");
    write_non_visual_props(xml, anchor, name)?;
    write!(
        xml,
        r#"<xdr:cNvPicPr><a:picLocks noChangeAspect="{}"/></xdr:cNvPicPr>"#,
        xml_bool(anchor.lock_aspect_ratio)
    )?;
    xml.push_str("</xdr:nvPicPr>");
    xml.push_str("<xdr:blipFill>");
    write_a_blip_embed(xml, r_id, false)?;
    write_a_stretch_fill_rect(xml);
    xml.push_str("</xdr:blipFill>");
    xml.push_str("<xdr:spPr>");
    write_a_xfrm_off_ext(xml, 0, 0, cx, cy)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</xdr:spPr>");
    xml.push_str("</xdr:pic>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::drawings::anchor::position_object_pixels;
    use crate::ooxml::opc::constants::relationship_type as rt;

    fn two_cell(col: u32, row: u32) -> Placement {
        let pos = position_object_pixels(col, row, 0, 0, 480, 260);
        Placement::TwoCell {
            edit_as: None,
            from: pos.from,
            to: pos.to,
        }
    }

    fn drawing() -> Drawing {
        Drawing::new(PackURI::new("/xl/drawings/drawing1.xml").unwrap())
    }

    fn options() -> GraphicOptions {
        GraphicOptions::default().with_defaults()
    }

    #[test]
    fn test_chart_anchor_xml() {
        let mut drawing = drawing();
        let r_id = drawing.relate_to("../charts/chart1.xml", rt::CHART);
        let id = drawing.add_anchor(
            two_cell(4, 0),
            DrawingObject::Chart { r_id: r_id.clone() },
            &options(),
        );
        assert_eq!(id, 1);

        let xml = drawing.to_xml().unwrap();
        assert!(xml.contains("<xdr:from><xdr:col>4</xdr:col>"));
        assert!(xml.contains(r#"<c:chart r:id="rId1"/>"#));
        assert!(xml.contains(r#"name="Chart 1""#));
        assert!(xml.contains(r#"fLocksWithSheet="0" fPrintsWithSheet="1""#));
        assert!(!xml.contains("editAs"));
    }

    #[test]
    fn test_absolute_anchor_xml() {
        let mut drawing = drawing();
        let format = GraphicOptions {
            positioning: Some(Positioning::OneCell),
            alt_text: "Sales <2024>".into(),
            ..options()
        };
        drawing.add_anchor(
            Placement::Absolute {
                x: 0,
                y: 0,
                cx: 100,
                cy: 200,
            },
            DrawingObject::Chart { r_id: "rId1".into() },
            &format,
        );
        let xml = drawing.to_xml().unwrap();
        assert!(xml.contains(r#"<xdr:absoluteAnchor><xdr:pos x="0" y="0"/><xdr:ext cx="100" cy="200"/>"#));
        assert!(xml.contains(r#"descr="Sales &lt;2024&gt;""#));
    }

    #[test]
    fn test_remove_at_keeps_pictures() {
        let mut drawing = drawing();
        let format = options();
        drawing.add_anchor(two_cell(1, 1), DrawingObject::Chart { r_id: "rId1".into() }, &format);
        drawing.add_anchor(
            two_cell(1, 1),
            DrawingObject::Picture {
                r_id: "rId2".into(),
                name: "logo.png".into(),
                cx: 9525,
                cy: 9525,
            },
            &format,
        );
        drawing.add_anchor(two_cell(5, 1), DrawingObject::Chart { r_id: "rId3".into() }, &format);

        assert_eq!(drawing.remove_at(1, 1, ObjectKind::Chart), 1);
        assert_eq!(drawing.anchors().len(), 2);
        assert_eq!(drawing.anchors()[0].object.kind(), ObjectKind::Picture);
        assert_eq!(drawing.remove_at(1, 1, ObjectKind::Chart), 0);

        // shape IDs are not reused after removal
        let id = drawing.add_anchor(two_cell(0, 0), DrawingObject::Chart { r_id: "rId4".into() }, &format);
        assert_eq!(id, 4);
    }

    #[test]
    fn test_to_part_carries_rels() {
        let mut drawing = drawing();
        drawing.relate_to("../media/image1.png", rt::IMAGE);
        let part = drawing.to_part().unwrap();
        use crate::ooxml::opc::Part;
        assert_eq!(part.content_type(), ct::OFC_DRAWING);
        assert_eq!(part.rels().len(), 1);
    }
}
