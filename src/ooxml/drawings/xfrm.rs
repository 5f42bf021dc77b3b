use std::fmt;
use std::fmt::Write as _;

/// Write a transform with offset and extent, `prefix` being `a` or `xdr`.
pub fn write_xfrm_off_ext(
    xml: &mut String,
    prefix: &str,
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
) -> fmt::Result {
    write!(xml, "<{}:xfrm>", prefix)?;
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, cx, cy)?;
    write!(xml, "</{}:xfrm>", prefix)
}

#[inline]
pub fn write_a_xfrm_off_ext(xml: &mut String, x: i64, y: i64, cx: i64, cy: i64) -> fmt::Result {
    write_xfrm_off_ext(xml, "a", x, y, cx, cy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xfrm() {
        let mut xml = String::new();
        write_a_xfrm_off_ext(&mut xml, 0, 0, 9525, 19050).unwrap();
        assert_eq!(
            xml,
            r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="9525" cy="19050"/></a:xfrm>"#
        );

        xml.clear();
        write_xfrm_off_ext(&mut xml, "xdr", 0, 0, 0, 0).unwrap();
        assert!(xml.starts_with("<xdr:xfrm>") && xml.ends_with("</xdr:xfrm>"));
    }
}
