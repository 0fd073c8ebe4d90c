//! ODF package writing.
//!
//! An ODF file is a ZIP archive whose first entry is an uncompressed
//! `mimetype` file, followed by the XML parts and `META-INF/manifest.xml`
//! listing them.

use crate::common::Result;
use crate::common::xml::escape_xml;
use std::fmt::Write as _;
use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

const MANIFEST_PATH: &str = "META-INF/manifest.xml";

/// Namespace declarations shared by content.xml and styles.xml
pub(crate) const OFFICE_NAMESPACES: &str = concat!(
    r#"xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" "#,
    r#"xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" "#,
    r#"xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" "#,
    r#"xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" "#,
    r#"xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0" "#,
    r#"xmlns:number="urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0" "#,
    r#"xmlns:svg="urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0""#,
);

/// In-memory ODF package.
///
/// The mimetype is taken at construction so it is always the first, stored
/// entry of the archive.
pub struct PackageWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    /// `(full-path, media-type)` pairs for the manifest
    parts: Vec<(String, &'static str)>,
    mimetype: String,
}

impl PackageWriter {
    pub fn new(mimetype: &str) -> Result<Self> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file("mimetype", stored)?;
        zip.write_all(mimetype.as_bytes())?;

        Ok(Self {
            zip,
            parts: Vec::new(),
            mimetype: mimetype.to_string(),
        })
    }

    /// Add a deflated part and list it in the manifest.
    pub fn add_file(&mut self, path: &str, content: &[u8]) -> Result<()> {
        let media_type = if path.ends_with(".xml") {
            "text/xml"
        } else {
            "application/octet-stream"
        };
        self.parts.push((path.to_string(), media_type));
        self.zip.start_file(path, deflated())?;
        self.zip.write_all(content)?;
        Ok(())
    }

    fn manifest_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.parts.len() * 96);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?><manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.3">"#);
        let _ = write!(
            xml,
            r#"<manifest:file-entry manifest:full-path="/" manifest:version="1.3" manifest:media-type="{}"/>"#,
            escape_xml(&self.mimetype)
        );
        for (path, media_type) in &self.parts {
            let _ = write!(
                xml,
                r#"<manifest:file-entry manifest:full-path="{}" manifest:media-type="{}"/>"#,
                escape_xml(path),
                media_type
            );
        }
        xml.push_str("</manifest:manifest>");
        xml
    }

    /// Write the manifest and return the archive bytes.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let manifest = self.manifest_xml();
        self.zip.start_file(MANIFEST_PATH, deflated())?;
        self.zip.write_all(manifest.as_bytes())?;
        Ok(self.zip.finish()?.into_inner())
    }
}

fn deflated() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// styles.xml: the `Default` cell style the built-in styles inherit from, then
/// any common styles.
pub fn styles_xml(common_styles: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><office:document-styles {} office:version="1.3"><office:font-face-decls/><office:styles><style:default-style style:family="table-cell"><style:paragraph-properties style:tab-stop-distance="1.25cm"/></style:default-style><style:style style:name="Default" style:family="table-cell"/>{}</office:styles><office:automatic-styles/><office:master-styles/></office:document-styles>"#,
        OFFICE_NAMESPACES, common_styles
    )
}

/// meta.xml stamped with the generator name and the current time.
pub fn meta_xml(generator: &str) -> String {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><office:document-meta xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0" office:version="1.3"><office:meta><meta:generator>{}</meta:generator><meta:creation-date>{now}</meta:creation-date><dc:date>{now}</dc:date></office:meta></office:document-meta>"#,
        escape_xml(generator),
    )
}
