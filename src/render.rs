//! Rendering a [`Document`] to PDF bytes and writing them to disk.
//!
//! ```
//! use recette_pdf::{render, DocumentBuilder};
//!
//! let mut builder = DocumentBuilder::new();
//! builder.title("Tests Fonctionnels");
//! let artifact = render(&builder.build()).unwrap();
//! assert_eq!(artifact.page_count(), 1);
//! ```

use crate::document::Document;
use crate::error::{Error, Result};
use crate::layout::layout_document;
use crate::writer::{PdfWriter, PdfWriterConfig};
use std::io::Write;
use std::path::Path;

/// A rendered document: PDF bytes and the number of pages they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    bytes: Vec<u8>,
    page_count: usize,
}

impl Artifact {
    /// The serialized PDF.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of pages in the PDF.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Consume the artifact, returning the PDF bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Write the artifact to `path`.
    ///
    /// The bytes go to a temporary file next to `path` which is then renamed
    /// over it, so a failed write leaves no partial file behind.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(&self.bytes)?;
        file.flush()?;
        file.persist(path).map_err(|e| Error::Io(e.error))?;

        log::info!("Wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(())
    }
}

/// Render `document` with the default writer configuration.
pub fn render(document: &Document) -> Result<Artifact> {
    render_with_config(document, PdfWriterConfig::default())
}

/// Render `document` with a custom writer configuration.
///
/// The document's metadata replaces the metadata of `config`.
pub fn render_with_config(document: &Document, config: PdfWriterConfig) -> Result<Artifact> {
    let pages = layout_document(document);
    let geometry = document.geometry();

    let mut writer = PdfWriter::with_config(config.with_metadata(document.metadata().clone()));
    for page in &pages {
        let mut builder = writer.add_page(geometry.page_width(), geometry.page_height());
        builder.add_commands(&page.commands);
        builder.finish();
    }

    let page_count = writer.page_count();
    let bytes = writer.finish()?;
    log::info!("Rendered {} blocks into {} pages ({} bytes)", document.blocks().len(), page_count, bytes.len());

    Ok(Artifact { bytes, page_count })
}
