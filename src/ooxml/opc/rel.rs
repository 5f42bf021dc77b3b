use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::PackURI;
/// Relationship-related objects for OPC packages.
///
/// A relationship links a source part (or the package itself) to a target
/// part through an `rId` that the source XML refers to.
use std::collections::HashMap;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's directory
    target_ref: String,

    /// Base URI for resolving relative references
    base_uri: String,
}

impl Relationship {
    /// Create a new relationship.
    ///
    /// # Arguments
    /// * `r_id` - Relationship ID (e.g., "rId1")
    /// * `reltype` - Relationship type URI
    /// * `target_ref` - Target reference relative to `base_uri`
    /// * `base_uri` - Directory of the source part
    pub fn new(r_id: String, reltype: String, target_ref: String, base_uri: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Resolve the target reference to an absolute partname.
    pub fn target_partname(&self) -> Result<PackURI> {
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref)
    }
}

/// Collection of relationships from a single source.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Base URI for resolving relative references
    base_uri: String,

    /// Map of relationship ID to Relationship
    rels: HashMap<String, Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection for a source directory.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: HashMap::new(),
        }
    }

    /// Add a relationship under an explicit ID, replacing any existing one.
    pub fn add_relationship(&mut self, reltype: String, target_ref: String, r_id: String) {
        let rel = Relationship::new(r_id.clone(), reltype, target_ref, self.base_uri.clone());
        self.rels.insert(r_id, rel);
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// Get or add a relationship to a target, returning its rId.
    ///
    /// An existing relationship with the same type and target is reused;
    /// otherwise the next free `rIdN` is allocated.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .values()
            .find(|rel| rel.reltype() == reltype && rel.target_ref() == target_ref)
        {
            return rel.r_id().to_string();
        }

        let r_id = self.next_r_id();
        self.add_relationship(reltype.to_string(), target_ref.to_string(), r_id.clone());
        r_id
    }

    /// Next available relationship ID, filling gaps left by removals.
    fn next_r_id(&self) -> String {
        let mut used_numbers: Vec<u32> = self
            .rels
            .keys()
            .filter_map(|r_id| Self::r_id_number(r_id))
            .collect();
        used_numbers.sort_unstable();

        let mut next_num = 1u32;
        for &num in &used_numbers {
            match num.cmp(&next_num) {
                std::cmp::Ordering::Equal => next_num += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }

        format!("rId{}", next_num)
    }

    #[inline]
    fn r_id_number(r_id: &str) -> Option<u32> {
        r_id.strip_prefix("rId")
            .and_then(|digits| atoi_simd::parse::<u32, false, false>(digits.as_bytes()).ok())
    }

    /// Relationships ordered by numeric rId.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        let mut rels: Vec<&Relationship> = self.rels.values().collect();
        rels.sort_by(|a, b| {
            let a_num = Self::r_id_number(a.r_id()).unwrap_or(u32::MAX);
            let b_num = Self::r_id_number(b.r_id()).unwrap_or(u32::MAX);
            a_num.cmp(&b_num).then_with(|| a.r_id().cmp(b.r_id()))
        });
        rels.into_iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in self.iter() {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_next_r_id() {
        let mut rels = Relationships::new("/xl/drawings".to_string());
        assert_eq!(rels.next_r_id(), "rId1");

        rels.add_relationship(
            rt::CHART.to_string(),
            "../charts/chart1.xml".to_string(),
            "rId1".to_string(),
        );
        assert_eq!(rels.next_r_id(), "rId2");
    }

    #[test]
    fn test_next_r_id_fills_gap() {
        let mut rels = Relationships::new("/xl".to_string());
        rels.add_relationship(
            rt::WORKSHEET.to_string(),
            "worksheets/sheet1.xml".to_string(),
            "rId1".to_string(),
        );
        rels.add_relationship(
            rt::STYLES.to_string(),
            "styles.xml".to_string(),
            "rId3".to_string(),
        );
        assert_eq!(rels.next_r_id(), "rId2");
    }

    #[test]
    fn test_get_or_add() {
        let mut rels = Relationships::new("/xl/drawings".to_string());

        assert_eq!(rels.get_or_add(rt::CHART, "../charts/chart1.xml"), "rId1");
        assert_eq!(rels.get_or_add(rt::CHART, "../charts/chart1.xml"), "rId1");
        assert_eq!(rels.get_or_add(rt::CHART, "../charts/chart2.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_target_partname() {
        let mut rels = Relationships::new("/xl/drawings".to_string());
        let r_id = rels.get_or_add(rt::CHART, "../charts/chart4.xml");
        let rel = rels.get(&r_id).unwrap();
        assert_eq!(
            rel.target_partname().unwrap().as_str(),
            "/xl/charts/chart4.xml"
        );
    }

    #[test]
    fn test_to_xml_numeric_order() {
        let mut rels = Relationships::new("/xl".to_string());
        for n in 1..=10 {
            rels.get_or_add(rt::WORKSHEET, &format!("worksheets/sheet{}.xml", n));
        }
        let xml = rels.to_xml();
        let pos2 = xml.find(r#"Id="rId2""#).unwrap();
        let pos10 = xml.find(r#"Id="rId10""#).unwrap();
        assert!(pos2 < pos10);
    }
}
