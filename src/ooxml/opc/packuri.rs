/// Provides the PackURI value type and utilities for working with package URIs.
///
/// A PackURI is a part name within an OPC package: it always begins with a
/// forward slash and uses forward slashes as separators.
use crate::ooxml::opc::error::{OpcError, Result};

/// A partname within an OPC package, e.g. `/xl/charts/chart1.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a new PackURI from a string.
    ///
    /// Fails with [`OpcError::InvalidPackUri`] unless the URI begins with a slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(OpcError::InvalidPackUri(format!(
                "PackURI must begin with slash, got '{}'",
                uri
            )));
        }
        Ok(PackURI { uri })
    }

    /// Build a tuple partname such as `/xl/drawings/drawing3.xml` from its
    /// stem, a one-based index and an extension.
    ///
    /// Index zero is rejected since tuple partnames are numbered from one.
    pub fn indexed(stem: &str, idx: u32, ext: &str) -> Result<Self> {
        if idx == 0 {
            return Err(OpcError::InvalidPackUri(format!(
                "tuple partname index must be positive for '{}'",
                stem
            )));
        }
        let mut buf = itoa::Buffer::new();
        let digits = buf.format(idx);
        let mut uri = String::with_capacity(stem.len() + digits.len() + ext.len() + 1);
        uri.push_str(stem);
        uri.push_str(digits);
        uri.push('.');
        uri.push_str(ext);
        Self::new(uri)
    }

    /// Resolve a relative reference (like `../charts/chart1.xml`) against a
    /// base URI (like `/xl/drawings`) into an absolute PackURI.
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self> {
        if relative_ref.starts_with('/') {
            return Self::new(Self::normalize_path(relative_ref));
        }
        let joined = Self::join_paths(base_uri, relative_ref);
        Self::new(Self::normalize_path(&joined))
    }

    /// The directory portion, e.g. `/xl/charts` for `/xl/charts/chart1.xml`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// The filename portion, e.g. `chart1.xml`.
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => "",
        }
    }

    /// The partname index for tuple partnames, or `None` for singletons.
    ///
    /// Returns 21 for `/xl/worksheets/sheet21.xml` and `None` for `/xl/workbook.xml`.
    pub fn idx(&self) -> Option<u32> {
        let filename = self.filename();
        let stem = match filename.rfind('.') {
            Some(pos) => &filename[..pos],
            None => filename,
        };
        let digits = stem.bytes().rev().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits == stem.len() {
            return None;
        }
        atoi_simd::parse::<u32, false, false>(&stem.as_bytes()[stem.len() - digits..]).ok()
    }

    /// The URI with its leading slash stripped, as used for ZIP member names.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// The relative reference from `base_uri` to this part.
    ///
    /// `/xl/charts/chart1.xml` seen from `/xl/drawings` is `../charts/chart1.xml`.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }

        let from_parts: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to_parts: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();

        let common = from_parts
            .iter()
            .zip(to_parts.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut result = String::new();
        for _ in common..from_parts.len() {
            result.push_str("../");
        }
        result.push_str(&to_parts[common..].join("/"));
        result
    }

    /// The PackURI of the `.rels` part belonging to this part.
    ///
    /// `/xl/drawings/_rels/drawing1.xml.rels` for `/xl/drawings/drawing1.xml`.
    pub fn rels_uri(&self) -> Result<PackURI> {
        let base_uri = self.base_uri();
        let rels_uri = if base_uri == "/" {
            format!("/_rels/{}.rels", self.filename())
        } else {
            format!("{}/_rels/{}.rels", base_uri, self.filename())
        };
        Self::new(rels_uri)
    }

    /// Get the full URI string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    fn join_paths(base: &str, rel: &str) -> String {
        if base.ends_with('/') {
            format!("{}{}", base, rel)
        } else {
            format!("{}/{}", base, rel)
        }
    }

    /// Resolve `..` and `.` segments.
    fn normalize_path(path: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for part in path.split('/') {
            match part {
                "" | "." => {},
                ".." => {
                    parts.pop();
                },
                _ => parts.push(part),
            }
        }
        format!("/{}", parts.join("/"))
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// The URI for the [Content_Types].xml part
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packuri_new() {
        assert!(PackURI::new("/xl/workbook.xml").is_ok());
        assert!(matches!(
            PackURI::new("xl/workbook.xml"),
            Err(OpcError::InvalidPackUri(_))
        ));
    }

    #[test]
    fn test_indexed() {
        let uri = PackURI::indexed("/xl/charts/chart", 12, "xml").unwrap();
        assert_eq!(uri.as_str(), "/xl/charts/chart12.xml");
        assert_eq!(uri.idx(), Some(12));
        assert!(PackURI::indexed("/xl/charts/chart", 0, "xml").is_err());
    }

    #[test]
    fn test_base_uri_and_filename() {
        let uri = PackURI::new("/xl/drawings/drawing1.xml").unwrap();
        assert_eq!(uri.base_uri(), "/xl/drawings");
        assert_eq!(uri.filename(), "drawing1.xml");

        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.base_uri(), "/");
        assert_eq!(root.filename(), "");
    }

    #[test]
    fn test_idx_singleton() {
        assert_eq!(PackURI::new("/xl/workbook.xml").unwrap().idx(), None);
        assert_eq!(PackURI::new("/xl/media/image7.png").unwrap().idx(), Some(7));
    }

    #[test]
    fn test_rel_ref_round_trip() {
        let chart = PackURI::new("/xl/charts/chart3.xml").unwrap();
        let rel = chart.relative_ref("/xl/drawings");
        assert_eq!(rel, "../charts/chart3.xml");
        assert_eq!(PackURI::from_rel_ref("/xl/drawings", &rel).unwrap(), chart);
        assert_eq!(
            PackURI::from_rel_ref("/xl", "/xl/chartsheets/sheet2.xml")
                .unwrap()
                .as_str(),
            "/xl/chartsheets/sheet2.xml"
        );
    }

    #[test]
    fn test_rels_uri() {
        let uri = PackURI::new("/xl/drawings/drawing1.xml").unwrap();
        assert_eq!(
            uri.rels_uri().unwrap().as_str(),
            "/xl/drawings/_rels/drawing1.xml.rels"
        );
        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.rels_uri().unwrap().as_str(), "/_rels/.rels");
    }
}
