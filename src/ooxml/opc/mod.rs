/// Open Packaging Conventions (OPC) implementation.
///
/// Provides the package structure used by spreadsheet documents:
///
/// - Part names (`PackURI`) and parts (`Part`, `BlobPart`)
/// - Relationships between parts
/// - The `[Content_Types].xml` registry
/// - ZIP-based physical packaging
///
/// Parts are kept in partname order so prefix counts (charts, drawings) are
/// range scans. `atoi_simd` parses relationship IDs and `itoa` formats
/// tuple partname indices.

pub mod constants;
pub mod content_types;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use content_types::ContentTypes;
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
