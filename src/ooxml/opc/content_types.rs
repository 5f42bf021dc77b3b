//! Content type registry serialized as `[Content_Types].xml`.
//!
//! Defaults map file extensions to content types; overrides map individual
//! partnames. Both are kept ordered so the serialized output is stable.

use std::collections::BTreeMap;

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::packuri::PackURI;

#[derive(Debug, Clone)]
pub struct ContentTypes {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    /// Registry holding the `rels` and `xml` defaults every package needs.
    pub fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Register a default for an extension, keeping an existing mapping.
    pub fn add_default(&mut self, ext: &str, content_type: &str) {
        self.defaults
            .entry(ext.to_ascii_lowercase())
            .or_insert_with(|| content_type.to_string());
    }

    /// Register an override for a partname.
    ///
    /// Returns `false` when the partname was already registered.
    pub fn add_override(&mut self, partname: &PackURI, content_type: &str) -> bool {
        if self.overrides.contains_key(partname.as_str()) {
            return false;
        }
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
        true
    }

    pub fn override_for(&self, partname: &str) -> Option<&str> {
        self.overrides.get(partname).map(String::as_str)
    }

    pub fn default_for(&self, ext: &str) -> Option<&str> {
        self.defaults.get(ext).map(String::as_str)
    }

    /// Generate the XML for [Content_Types].xml.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(512 + self.overrides.len() * 128);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_xml() {
        let mut cts = ContentTypes::new();
        cts.add_default("PNG", ct::PNG);
        let chart = PackURI::new("/xl/charts/chart1.xml").unwrap();
        assert!(cts.add_override(&chart, ct::DML_CHART));
        assert!(!cts.add_override(&chart, ct::DML_CHART));

        let xml = cts.to_xml();
        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Override PartName="/xl/charts/chart1.xml""#));
        assert_eq!(xml.matches("<Override ").count(), 1);
    }

    #[test]
    fn test_overrides_sorted() {
        let mut cts = ContentTypes::new();
        for path in ["/xl/worksheets/sheet1.xml", "/xl/charts/chart1.xml"] {
            cts.add_override(&PackURI::new(path).unwrap(), ct::XML);
        }
        let xml = cts.to_xml();
        assert!(xml.find("/xl/charts/chart1.xml").unwrap() < xml.find("/xl/worksheets").unwrap());
    }
}
