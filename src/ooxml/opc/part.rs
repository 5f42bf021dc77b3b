use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;
/// Open Packaging Convention (OPC) objects related to package parts.
///
/// Parts are the units of content in a package, each with a unique partname,
/// a content type and optional relationships to other parts.
use std::sync::Arc;

/// Trait representing a part in an OPC package.
pub trait Part {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the serialized content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// Get mutable access to the relationships for this part.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or get a relationship to another part, returning its rId.
    fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels_mut().get_or_add(reltype, target_ref)
    }

    /// Get the target reference for a relationship ID.
    fn target_ref(&self, r_id: &str) -> Result<&str> {
        self.rels()
            .get(r_id)
            .map(|rel| rel.target_ref())
            .ok_or_else(|| OpcError::RelationshipNotFound(format!("rId: {}", r_id)))
    }
}

/// A part holding already-serialized content.
///
/// The blob is shared through an `Arc` so snapshots of a package taken at
/// save time do not copy part content.
#[derive(Debug, Clone)]
pub struct BlobPart {
    partname: PackURI,
    content_type: String,
    blob: Arc<Vec<u8>>,
    rels: Relationships,
}

impl BlobPart {
    /// Create a new BlobPart.
    ///
    /// # Arguments
    /// * `partname` - The partname (URI) of this part
    /// * `content_type` - The content type of this part
    /// * `blob` - The serialized content of this part
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.into(),
            blob: Arc::new(blob),
            rels,
        }
    }

    /// Attach relationships collected while the part was being built.
    pub fn with_rels(mut self, rels: Relationships) -> Self {
        self.rels = rels;
        self
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_blob_part_relate_to() {
        let uri = PackURI::new("/xl/drawings/drawing1.xml").unwrap();
        let mut part = BlobPart::new(uri, ct::OFC_DRAWING, b"<xdr:wsDr/>".to_vec());

        let r_id = part.relate_to("../charts/chart1.xml", rt::CHART);
        assert_eq!(r_id, "rId1");
        assert_eq!(part.relate_to("../charts/chart1.xml", rt::CHART), "rId1");
        assert_eq!(part.target_ref("rId1").unwrap(), "../charts/chart1.xml");
        assert!(matches!(
            part.target_ref("rId9"),
            Err(OpcError::RelationshipNotFound(_))
        ));
    }
}
