//! PDF writing module.
//!
//! ## Architecture
//!
//! ```text
//! PageLayout[] (draw commands)
//!     ↓
//! [ContentStreamBuilder] (commands → content stream bytes)
//!     ↓
//! [PdfWriter] (assembles complete PDF structure)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Low-Level API (PdfWriter)
//!
//! ```
//! use recette_pdf::writer::PdfWriter;
//!
//! let mut writer = PdfWriter::new();
//! writer.add_a4_page().finish();
//! let bytes = writer.finish().unwrap();
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! ```

mod content_stream;
mod object_serializer;
mod pdf_writer;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{PageBuilder, PdfWriter, PdfWriterConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let _serializer = ObjectSerializer::new();
        let _builder = ContentStreamBuilder::new();
        let _config = PdfWriterConfig::default();
    }
}
