//! Embedding pictures into worksheets.

use std::path::Path;

use crate::common::unit::px_to_emu;
use crate::ooxml::charts::GraphicOptions;
use crate::ooxml::drawings::{DrawingObject, Placement, position_object_pixels, scale_px};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::BlobPart;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::xlsx::cell::cell_name_to_coordinates;
use crate::ooxml::xlsx::workbook::{ContentTypePart, Workbook};

/// An image file to embed.
#[derive(Debug, Clone)]
pub struct Picture {
    /// File extension without the dot, e.g. `png`
    pub extension: String,
    pub file: Vec<u8>,
}

impl Picture {
    pub fn new(extension: impl Into<String>, file: Vec<u8>) -> Self {
        Self {
            extension: extension.into(),
            file,
        }
    }

    /// Read a picture from disk, taking the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| OoxmlError::UnsupportedPictureFormat(path.display().to_string()))?;
        Ok(Self::new(extension, std::fs::read(path)?))
    }

    /// Normalized extension and media content type.
    fn media_type(&self) -> Result<(String, &'static str)> {
        let ext = self.extension.trim_start_matches('.').to_ascii_lowercase();
        let content_type = match ext.as_str() {
            "png" => ct::PNG,
            "jpg" | "jpeg" => ct::JPEG,
            "gif" => ct::GIF,
            "bmp" => ct::BMP,
            "tif" | "tiff" => ct::TIFF,
            _ => return Err(OoxmlError::UnsupportedPictureFormat(self.extension.clone())),
        };
        Ok((ext, content_type))
    }
}

impl Workbook {
    /// Insert a picture with its top-left corner in `cell`.
    ///
    /// The frame is sized from the image's pixel dimensions times the scale
    /// in `options`.
    pub fn add_picture(
        &mut self,
        sheet: &str,
        cell: &str,
        picture: &Picture,
        options: &GraphicOptions,
    ) -> Result<()> {
        let ws_index = self.worksheet_index(sheet)?;
        let (ext, content_type) = picture.media_type()?;
        let (col, row) = cell_name_to_coordinates(cell)?;
        let image = image::load_from_memory(&picture.file)
            .map_err(|e| OoxmlError::UnsupportedPictureFormat(e.to_string()))?;
        let opts = options.clone().with_defaults();

        let drawing_id = self.count_drawings() as u32 + 1;
        let (drawing_id, drawing_partname) = self.prepare_drawing(ws_index, drawing_id)?;

        let media_partname = self
            .package
            .next_partname(&format!("/xl/media/image%d.{}", ext))?;
        self.package.add_part(BlobPart::new(
            media_partname.clone(),
            content_type,
            picture.file.clone(),
        ));
        self.content_types.add_default(&ext, content_type);
        tracing::debug!(
            sheet,
            drawing = %drawing_partname,
            media = %media_partname,
            width = image.width(),
            height = image.height(),
            "adding picture"
        );

        let width = scale_px(image.width(), opts.scale_x);
        let height = scale_px(image.height(), opts.scale_y);
        let position = position_object_pixels(
            col - 1,
            row - 1,
            i64::from(opts.offset_x),
            i64::from(opts.offset_y),
            width,
            height,
        );

        let drawing = self.drawing_mut(&drawing_partname)?;
        let r_id = drawing.relate_to(&media_partname.relative_ref(drawing_partname.base_uri()), rt::IMAGE);
        drawing.add_anchor(
            Placement::TwoCell {
                edit_as: opts.positioning,
                from: position.from,
                to: position.to,
            },
            DrawingObject::Picture {
                r_id,
                name: media_partname.filename().to_string(),
                cx: px_to_emu(width),
                cy: px_to_emu(height),
            },
            &opts,
        );

        self.try_add_content_type_part(drawing_id, ContentTypePart::Drawings);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::{Chart, ChartSeries, ChartType};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Picture {
        let mut buf = Cursor::new(Vec::new());
        image::RgbImage::new(width, height)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        Picture::new("png", buf.into_inner())
    }

    fn chart() -> Chart {
        let mut chart = Chart::new(ChartType::Pie);
        chart.series.push(ChartSeries {
            values: "Sheet1!$B$1:$D$1".into(),
            ..Default::default()
        });
        chart
    }

    #[test]
    fn test_add_picture() {
        let mut wb = Workbook::new();
        wb.add_picture("Sheet1", "B3", &png(128, 40), &GraphicOptions::default())
            .unwrap();

        assert_eq!(wb.count_drawings(), 1);
        assert_eq!(wb.content_types().default_for("png"), Some(ct::PNG));
        let drawing = wb.drawing("/xl/drawings/drawing1.xml").unwrap();
        assert!(
            drawing
                .rels()
                .iter()
                .any(|rel| rel.reltype() == rt::IMAGE && rel.target_ref() == "../media/image1.png")
        );

        let anchor = &drawing.anchors()[0];
        assert_eq!(anchor.from_cell(), Some((1, 2)));
        let DrawingObject::Picture { cx, cy, .. } = anchor.object else {
            panic!("expected a picture");
        };
        assert_eq!((cx, cy), (px_to_emu(128), px_to_emu(40)));
        let Placement::TwoCell { to, .. } = &anchor.placement else {
            panic!("expected a two-cell anchor");
        };
        assert_eq!((to.col, to.row), (3, 4));
    }

    #[test]
    fn test_media_numbering() {
        let mut wb = Workbook::new();
        let options = GraphicOptions::default();
        wb.add_picture("Sheet1", "A1", &png(8, 8), &options).unwrap();
        wb.add_picture("Sheet1", "A5", &png(8, 8), &options).unwrap();

        let drawing = wb.drawing("/xl/drawings/drawing1.xml").unwrap();
        assert_eq!(drawing.anchors().len(), 2);
        assert!(drawing.rels().iter().any(|rel| rel.target_ref() == "../media/image2.png"));
    }

    #[test]
    fn test_unsupported_picture() {
        let mut wb = Workbook::new();
        let options = GraphicOptions::default();
        let svg = Picture::new("svg", b"<svg/>".to_vec());
        assert!(matches!(
            wb.add_picture("Sheet1", "A1", &svg, &options),
            Err(OoxmlError::UnsupportedPictureFormat(_))
        ));
        let garbage = Picture::new("png", b"not an image".to_vec());
        assert!(matches!(
            wb.add_picture("Sheet1", "A1", &garbage, &options),
            Err(OoxmlError::UnsupportedPictureFormat(_))
        ));
        assert_eq!(wb.count_drawings(), 0);
    }

    #[test]
    fn test_delete_chart_keeps_picture() {
        let mut wb = Workbook::new();
        wb.add_picture("Sheet1", "C2", &png(16, 16), &GraphicOptions::default())
            .unwrap();
        wb.add_chart("Sheet1", "C2", &chart(), &[]).unwrap();
        wb.delete_chart("Sheet1", "C2").unwrap();

        let drawing = wb.drawing("/xl/drawings/drawing1.xml").unwrap();
        assert_eq!(drawing.anchors().len(), 1);
        assert!(matches!(drawing.anchors()[0].object, DrawingObject::Picture { .. }));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.PNG");
        std::fs::write(&path, &png(4, 4).file).unwrap();
        let picture = Picture::from_path(&path).unwrap();
        assert_eq!(picture.media_type().unwrap(), ("png".to_string(), ct::PNG));
    }
}
