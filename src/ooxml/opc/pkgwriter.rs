//! Package writer for OPC packages.
//!
//! Serializes `[Content_Types].xml`, the package relationships and every part
//! together with its relationships into a ZIP archive.

use std::path::Path;

use crate::ooxml::opc::content_types::ContentTypes;
use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;

/// Package writer that serializes an OPC package to a ZIP archive.
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    pub fn write<P: AsRef<Path>>(
        path: P,
        package: &OpcPackage,
        content_types: &ContentTypes,
    ) -> Result<()> {
        let bytes = Self::to_bytes(package, content_types)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage, content_types: &ContentTypes) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        let content_types_uri = PackURI::new(CONTENT_TYPES_URI)?;
        phys_writer.write(&content_types_uri, content_types.to_xml().as_bytes())?;

        let rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri()?;
        phys_writer.write(&rels_uri, package.rels().to_xml().as_bytes())?;

        for part in package.iter_parts() {
            tracing::trace!(partname = %part.partname(), bytes = part.blob().len(), "writing part");
            phys_writer.write(part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri()?;
                phys_writer.write(&rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }

        phys_writer.finish()
    }
}
