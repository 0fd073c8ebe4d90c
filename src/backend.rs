//! The seam between the schema engine and the document writer.
//!
//! The generator never touches the file format directly: it hands style
//! markup and finished tables to a [`DocumentBackend`], which owns the output
//! document and knows how to serialize it.

use crate::common::{Error, Result};
use crate::odf::elements::StyleMarkup;
use crate::odf::ods::Table;
use std::path::Path;

/// Capability version of a backend, compared lexicographically.
pub type BackendVersion = (u32, u32, u32);

/// Oldest backend capability the generator can drive.
pub const MIN_BACKEND_VERSION: BackendVersion = (1, 2, 0);

/// Output document construction and serialization.
pub trait DocumentBackend {
    /// Register a style into the output document.
    ///
    /// `name` is `None` for generated styles (column widths); the backend then
    /// picks a fresh name. Automatic styles belong to the document content,
    /// common styles to the shared style sheet. Returns the registered name.
    fn insert_style(
        &mut self,
        markup: &StyleMarkup,
        name: Option<&str>,
        automatic: bool,
    ) -> Result<String>;

    /// Append a finished table to the document body.
    fn append_table(&mut self, table: Table) -> Result<()>;

    /// Serialize the document to `path`.
    fn save(&self, path: &Path) -> Result<()>;

    /// Capability version of this backend.
    fn version(&self) -> BackendVersion;
}

/// Fail when `backend` is older than [`MIN_BACKEND_VERSION`].
pub fn check_backend_version<B: DocumentBackend + ?Sized>(backend: &B) -> Result<()> {
    let version = backend.version();
    if version < MIN_BACKEND_VERSION {
        let (major, minor, patch) = version;
        let (min_major, min_minor, min_patch) = MIN_BACKEND_VERSION;
        return Err(Error::Unsupported(format!(
            "backend version {}.{}.{} is older than required {}.{}.{}",
            major, minor, patch, min_major, min_minor, min_patch
        )));
    }
    Ok(())
}
