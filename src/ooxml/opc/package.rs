/// In-memory OPC package.
///
/// Parts are indexed by partname in an ordered map so that all parts sharing
/// a partname prefix (every chart, every drawing) can be enumerated as a
/// range instead of a scan over the whole package.
use std::collections::BTreeMap;
use std::ops::Bound;

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::{BlobPart, Part};
use crate::ooxml::opc::rel::Relationships;

#[derive(Debug, Clone)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package, indexed by partname
    parts: BTreeMap<String, BlobPart>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: BTreeMap::new(),
        }
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .get(partname.as_str())
            .map(|p| p as &dyn Part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Add a part, replacing any part already stored under its partname.
    pub fn add_part(&mut self, part: BlobPart) {
        let partname = part.partname().to_string();
        self.parts.insert(partname, part);
    }

    /// Iterate over all parts in partname order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.values().map(|p| p as &dyn Part)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Number of parts whose partname starts with `prefix`.
    ///
    /// Walks only the ordered range of matching keys.
    pub fn count_parts_with_prefix(&self, prefix: &str) -> usize {
        self.parts
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(name, _)| name.starts_with(prefix))
            .count()
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part, returning the relationship ID.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref)
    }

    /// Find the next free partname for a template with a `%d` placeholder.
    ///
    /// ```
    /// # use sheetwright::ooxml::opc::OpcPackage;
    /// let pkg = OpcPackage::new();
    /// let next = pkg.next_partname("/xl/media/image%d.png").unwrap();
    /// assert_eq!(next.as_str(), "/xl/media/image1.png");
    /// ```
    pub fn next_partname(&self, template: &str) -> Result<PackURI> {
        let mut buf = itoa::Buffer::new();
        for n in 1u32..=10_000 {
            let candidate = template.replace("%d", buf.format(n));
            if !self.parts.contains_key(&candidate) {
                return PackURI::new(candidate);
            }
        }
        Err(OpcError::InvalidPackUri(format!(
            "no free partname for template '{}'",
            template
        )))
    }

    /// Check if a part exists in the package.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname.as_str())
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;

    fn chart_part(n: u32) -> BlobPart {
        BlobPart::new(
            PackURI::indexed("/xl/charts/chart", n, "xml").unwrap(),
            ct::DML_CHART,
            b"<c:chartSpace/>".to_vec(),
        )
    }

    #[test]
    fn test_count_parts_with_prefix() {
        let mut pkg = OpcPackage::new();
        assert_eq!(pkg.count_parts_with_prefix("/xl/charts/chart"), 0);

        for n in 1..=3 {
            pkg.add_part(chart_part(n));
        }
        pkg.add_part(BlobPart::new(
            PackURI::new("/xl/chartsheets/sheet4.xml").unwrap(),
            ct::SML_CHARTSHEET,
            Vec::new(),
        ));
        pkg.add_part(BlobPart::new(
            PackURI::new("/xl/drawings/drawing1.xml").unwrap(),
            ct::OFC_DRAWING,
            Vec::new(),
        ));

        assert_eq!(pkg.count_parts_with_prefix("/xl/charts/chart"), 3);
        assert_eq!(pkg.count_parts_with_prefix("/xl/drawings/drawing"), 1);
        assert_eq!(pkg.part_count(), 5);
    }

    #[test]
    fn test_add_part_replaces() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(chart_part(1));
        pkg.add_part(chart_part(1));
        assert_eq!(pkg.part_count(), 1);
        let uri = PackURI::new("/xl/charts/chart1.xml").unwrap();
        assert!(pkg.contains_part(&uri));
        assert_eq!(pkg.get_part(&uri).unwrap().content_type(), ct::DML_CHART);
    }

    #[test]
    fn test_next_partname() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(BlobPart::new(
            PackURI::new("/xl/media/image1.png").unwrap(),
            ct::PNG,
            vec![0x89],
        ));
        let next = pkg.next_partname("/xl/media/image%d.png").unwrap();
        assert_eq!(next.as_str(), "/xl/media/image2.png");
    }

    #[test]
    fn test_get_missing_part() {
        let pkg = OpcPackage::new();
        let uri = PackURI::new("/xl/charts/chart1.xml").unwrap();
        assert!(matches!(pkg.get_part(&uri), Err(OpcError::PartNotFound(_))));
    }
}
