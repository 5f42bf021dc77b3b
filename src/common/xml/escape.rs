use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Built once, shared by every writer
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters for element text and attribute values.
///
/// # Examples
///
/// ```
/// use sheetwright::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Write a boolean as the `0`/`1` form SpreadsheetML and DrawingML expect.
#[inline]
pub const fn xml_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_formula_with_quotes() {
        assert_eq!(escape_xml("\"1,2,3\""), "&quot;1,2,3&quot;");
        assert_eq!(escape_xml("Sheet1!$A$1"), "Sheet1!$A$1");
    }

    #[test]
    fn test_xml_bool() {
        assert_eq!(xml_bool(true), "1");
        assert_eq!(xml_bool(false), "0");
    }
}
