//! Fixed parts every new workbook starts from.

/// A minimal valid styles.xml with the single `Normal` cell style.
pub fn default_styles_xml() -> &'static str {
    include_str!("../../../resources/styles.xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_xml() {
        let xml = default_styles_xml();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"<cellXfs count="1">"#));
        assert!(xml.trim_end().ends_with("</styleSheet>"));
    }
}
