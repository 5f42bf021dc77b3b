use std::fmt;
use std::fmt::Write as _;

use crate::ooxml::opc::constants::namespace;

/// Write an `a:blip` referencing an embedded image relationship.
pub fn write_a_blip_embed(xml: &mut String, r_id: &str, include_xmlns_r: bool) -> fmt::Result {
    if include_xmlns_r {
        write!(
            xml,
            r#"<a:blip xmlns:r="{}" r:embed="{}"/>"#,
            namespace::OFC_RELATIONSHIPS,
            r_id
        )
    } else {
        write!(xml, r#"<a:blip r:embed="{}"/>"#, r_id)
    }
}

pub fn write_a_stretch_fill_rect(xml: &mut String) {
    xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blip_embed() {
        let mut xml = String::new();
        write_a_blip_embed(&mut xml, "rId3", false).unwrap();
        assert_eq!(xml, r#"<a:blip r:embed="rId3"/>"#);

        xml.clear();
        write_a_blip_embed(&mut xml, "rId1", true).unwrap();
        assert!(xml.starts_with(r#"<a:blip xmlns:r="http://schemas.openxmlformats.org/"#));
    }
}
