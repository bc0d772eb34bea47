//! PDF document writer.
//!
//! Assembles complete PDF documents with proper structure:
//! header, body, xref table, and trailer.
//!
//! Object numbers are allocated in a fixed order (catalog, page tree,
//! fonts, pages with their content streams, info) so the same pages always
//! serialize to the same bytes.

use super::content_stream::ContentStreamBuilder;
use super::object_serializer::ObjectSerializer;
use crate::config::DocumentMetadata;
use crate::error::Result;
use crate::layout::DrawCommand;
use crate::object::{Object, ObjectRef};
use crate::text::StandardFont;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::io::Write;

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.7")
    pub version: String,
    /// Info dictionary content
    pub metadata: DocumentMetadata,
    /// Producer written to the Info dictionary
    pub producer: String,
    /// Whether to compress content streams
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            metadata: DocumentMetadata::default(),
            producer: format!("{} {}", crate::NAME, crate::VERSION),
            compress: false,
        }
    }
}

impl PdfWriterConfig {
    /// Set the document metadata.
    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the PDF version written in the header.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Enable or disable stream compression.
    ///
    /// When enabled, content streams are compressed using FlateDecode
    /// (zlib/deflate) to reduce file size.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Compress data using Flate/Deflate compression.
///
/// Returns compressed bytes suitable for FlateDecode filter.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// A page being built.
pub struct PageBuilder<'a> {
    writer: &'a mut PdfWriter,
    page_index: usize,
}

impl<'a> PageBuilder<'a> {
    /// Add one draw command to the page.
    pub fn add_command(&mut self, command: &DrawCommand) -> &mut Self {
        let page = &mut self.writer.pages[self.page_index];
        page.content_builder.add_command(command);
        self
    }

    /// Add the draw commands of a laid-out page.
    pub fn add_commands(&mut self, commands: &[DrawCommand]) -> &mut Self {
        let page = &mut self.writer.pages[self.page_index];
        page.content_builder.add_commands(commands);
        self
    }

    /// Finish building this page and return to the writer.
    pub fn finish(self) -> &'a mut PdfWriter {
        let page = &mut self.writer.pages[self.page_index];
        page.content_builder.end_text();
        self.writer
    }
}

/// Internal page data.
struct PageData {
    width: f32,
    height: f32,
    content_builder: ContentStreamBuilder,
}

/// PDF document writer.
///
/// Builds a complete PDF document with pages, fonts, and content.
pub struct PdfWriter {
    config: PdfWriterConfig,
    pages: Vec<PageData>,
    /// Object ID counter
    next_obj_id: u32,
    /// Font objects, in resource order
    fonts: IndexMap<StandardFont, ObjectRef>,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            next_obj_id: 1,
            fonts: IndexMap::new(),
        }
    }

    /// Allocate a new object ID.
    fn alloc_obj_id(&mut self) -> u32 {
        let id = self.next_obj_id;
        self.next_obj_id += 1;
        id
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Add a page with the given dimensions.
    pub fn add_page(&mut self, width: f32, height: f32) -> PageBuilder<'_> {
        let page_index = self.pages.len();
        self.pages.push(PageData {
            width,
            height,
            content_builder: ContentStreamBuilder::new(),
        });
        PageBuilder {
            writer: self,
            page_index,
        }
    }

    /// Add an A4 sized page (210mm x 297mm).
    pub fn add_a4_page(&mut self) -> PageBuilder<'_> {
        self.add_page(595.0, 842.0)
    }

    fn font_object(font: StandardFont) -> Object {
        let mut entries = vec![
            ("Type", ObjectSerializer::name("Font")),
            ("Subtype", ObjectSerializer::name("Type1")),
            ("BaseFont", ObjectSerializer::name(font.base_font_name())),
        ];
        if font.uses_winansi() {
            entries.push(("Encoding", ObjectSerializer::name("WinAnsiEncoding")));
        }
        ObjectSerializer::dict(entries)
    }

    fn info_object(&self) -> Object {
        let meta = &self.config.metadata;
        let mut entries = Vec::new();
        if let Some(title) = &meta.title {
            entries.push(("Title", ObjectSerializer::string(title)));
        }
        if let Some(author) = &meta.author {
            entries.push(("Author", ObjectSerializer::string(author)));
        }
        if let Some(subject) = &meta.subject {
            entries.push(("Subject", ObjectSerializer::string(subject)));
        }
        if let Some(creator) = &meta.creator {
            entries.push(("Creator", ObjectSerializer::string(creator)));
        }
        entries.push(("Producer", ObjectSerializer::string(&self.config.producer)));
        if let Some(date) = &meta.creation_date {
            let stamp = date.format("D:%Y%m%d%H%M%S").to_string();
            entries.push(("CreationDate", ObjectSerializer::string(&stamp)));
        }
        ObjectSerializer::dict(entries)
    }

    /// Build the complete PDF document.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::compact();
        let mut output = Vec::new();
        let mut xref_offsets: Vec<(u32, usize)> = Vec::new();

        // PDF Header
        writeln!(output, "%PDF-{}", self.config.version)?;
        // Binary marker (recommended for binary content)
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let catalog_id = self.alloc_obj_id();
        let pages_id = self.alloc_obj_id();

        for font in StandardFont::ALL {
            let font_id = self.alloc_obj_id();
            self.fonts.insert(font, ObjectRef::new(font_id, 0));
        }

        let font_resources: HashMap<String, Object> = self
            .fonts
            .iter()
            .map(|(font, obj_ref)| (font.resource_name().to_string(), Object::Reference(*obj_ref)))
            .collect();

        // Pre-allocate object IDs for all pages
        let page_count = self.pages.len();
        let mut page_ids: Vec<(u32, u32)> = Vec::with_capacity(page_count);
        for _ in 0..page_count {
            let page_id = self.alloc_obj_id();
            let content_id = self.alloc_obj_id();
            page_ids.push((page_id, content_id));
        }
        let info_id = self.alloc_obj_id();

        // Catalog
        let catalog_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(pages_id, 0)),
        ]);
        xref_offsets.push((catalog_id, output.len()));
        serializer.write_indirect(&mut output, catalog_id, 0, &catalog_obj)?;

        // Pages
        let page_refs: Vec<Object> = page_ids
            .iter()
            .map(|(page_id, _)| ObjectSerializer::reference(*page_id, 0))
            .collect();
        let pages_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Kids", ObjectSerializer::array(page_refs)),
            ("Count", ObjectSerializer::integer(page_count as i64)),
        ]);
        xref_offsets.push((pages_id, output.len()));
        serializer.write_indirect(&mut output, pages_id, 0, &pages_obj)?;

        // Font objects
        for (font, font_ref) in &self.fonts {
            xref_offsets.push((font_ref.id, output.len()));
            serializer.write_indirect(&mut output, font_ref.id, 0, &Self::font_object(*font))?;
        }

        // Page and content objects
        for (page_data, (page_id, content_id)) in self.pages.iter().zip(&page_ids) {
            let page_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Page")),
                ("Parent", ObjectSerializer::reference(pages_id, 0)),
                (
                    "MediaBox",
                    ObjectSerializer::rect(0.0, 0.0, page_data.width as f64, page_data.height as f64),
                ),
                ("Contents", ObjectSerializer::reference(*content_id, 0)),
                (
                    "Resources",
                    ObjectSerializer::dict(vec![("Font", Object::Dictionary(font_resources.clone()))]),
                ),
            ]);
            xref_offsets.push((*page_id, output.len()));
            serializer.write_indirect(&mut output, *page_id, 0, &page_obj)?;

            let raw_content = page_data.content_builder.build()?;
            let mut content_dict = HashMap::new();
            let content_bytes = if self.config.compress {
                content_dict.insert("Filter".to_string(), ObjectSerializer::name("FlateDecode"));
                compress_data(&raw_content)?
            } else {
                raw_content
            };
            let content_obj = Object::Stream {
                dict: content_dict,
                data: bytes::Bytes::from(content_bytes),
            };
            xref_offsets.push((*content_id, output.len()));
            serializer.write_indirect(&mut output, *content_id, 0, &content_obj)?;
        }

        // Info object
        xref_offsets.push((info_id, output.len()));
        serializer.write_indirect(&mut output, info_id, 0, &self.info_object())?;

        // Write xref table
        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", self.next_obj_id)?;

        // Object 0 is always free
        writeln!(output, "0000000000 65535 f ")?;

        xref_offsets.sort_by_key(|(id, _)| *id);
        for (_, offset) in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        // Write trailer
        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(self.next_obj_id as i64)),
            ("Root", ObjectSerializer::reference(catalog_id, 0)),
            ("Info", ObjectSerializer::reference(info_id, 0)),
        ]);

        writeln!(output, "trailer")?;
        serializer.write_object(&mut output, &trailer)?;
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        writeln!(output, "%%EOF")?;

        log::debug!("Serialized {} pages into {} bytes", page_count, output.len());
        Ok(output)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use crate::text::TextRun;
    use chrono::NaiveDate;

    fn text(s: &str) -> DrawCommand {
        DrawCommand::Text {
            x: 72.0,
            y: 720.0,
            font_size: 12.0,
            color: Color::black(),
            runs: vec![TextRun {
                text: s.to_string(),
                font: StandardFont::Helvetica,
            }],
        }
    }

    #[test]
    fn test_create_empty_pdf() {
        let mut writer = PdfWriter::new();
        writer.add_a4_page().finish();
        let bytes = writer.finish().unwrap();

        let content = String::from_utf8_lossy(&bytes);
        assert!(content.starts_with("%PDF-1.7"));
        assert!(content.contains("/Type /Catalog>>"));
        assert!(content.contains("/Type /Pages>>"));
        assert!(content.contains("/Type /Page>>"));
        assert!(content.contains("/Count 1"));
        assert!(content.contains("[0 0 595 842]"));
        assert!(content.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_header_version() {
        let mut writer = PdfWriter::with_config(PdfWriterConfig::default().with_version("1.4"));
        writer.add_a4_page().finish();
        let bytes = writer.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4\n"));
    }

    #[test]
    fn test_fonts_and_resources() {
        let mut writer = PdfWriter::new();
        writer.add_a4_page().finish();
        let bytes = writer.finish().unwrap();
        let content = String::from_utf8_lossy(&bytes);

        assert!(content.contains("/BaseFont /Helvetica/Encoding /WinAnsiEncoding"));
        assert!(content.contains("/BaseFont /Helvetica-Bold/Encoding /WinAnsiEncoding"));
        assert!(content.contains("/BaseFont /ZapfDingbats/Subtype"));
        assert!(content.contains("/Font <</F1 3 0 R/F2 4 0 R/F3 5 0 R>>"));
    }

    #[test]
    fn test_pdf_with_text() {
        let mut writer = PdfWriter::new();
        {
            let mut page = writer.add_a4_page();
            page.add_command(&text("Hello, World!"));
            page.finish();
        }

        let bytes = writer.finish().unwrap();
        let content = String::from_utf8_lossy(&bytes);

        assert!(content.contains("BT"));
        assert!(content.contains("/F1 12 Tf"));
        assert!(content.contains("(Hello, World!) Tj"));
        assert!(content.contains("ET"));
    }

    #[test]
    fn test_pdf_with_metadata() {
        let metadata = DocumentMetadata::new()
            .title("Test Document")
            .author("Test Author")
            .creation_date(
                NaiveDate::from_ymd_opt(2025, 11, 24)
                    .and_then(|d| d.and_hms_opt(9, 30, 0))
                    .unwrap(),
            );

        let mut writer = PdfWriter::with_config(PdfWriterConfig::default().with_metadata(metadata));
        writer.add_a4_page().finish();

        let bytes = writer.finish().unwrap();
        let content = String::from_utf8_lossy(&bytes);

        assert!(content.contains("/Title (Test Document)"));
        assert!(content.contains("/Author (Test Author)"));
        assert!(content.contains("/CreationDate (D:20251124093000)"));
        assert!(content.contains("/Producer (recette_pdf "));
    }

    #[test]
    fn test_no_creation_date_by_default() {
        let mut writer = PdfWriter::new();
        writer.add_a4_page().finish();
        let bytes = writer.finish().unwrap();
        assert!(!String::from_utf8_lossy(&bytes).contains("CreationDate"));
    }

    #[test]
    fn test_multiple_pages() {
        let mut writer = PdfWriter::new();
        writer.add_a4_page().finish();
        writer.add_page(612.0, 792.0).finish();
        assert_eq!(writer.page_count(), 2);

        let bytes = writer.finish().unwrap();
        let content = String::from_utf8_lossy(&bytes);

        assert!(content.contains("/Count 2"));
        assert!(content.contains("/Kids [6 0 R 8 0 R]"));
        assert!(content.contains("[0 0 612 792]"));
        assert!(content.contains("[0 0 595 842]"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let mut writer = PdfWriter::new();
        {
            let mut page = writer.add_a4_page();
            page.add_command(&text("Bonjour"));
            page.finish();
        }
        let bytes = writer.finish().unwrap();
        let content = String::from_utf8_lossy(&bytes).into_owned();

        let xref_pos = content.rfind("\nxref\n").unwrap() + 1;
        let entries: Vec<usize> = content[xref_pos..]
            .lines()
            .skip(3)
            .take_while(|l| l.ends_with(" n "))
            .map(|l| l[..10].parse().unwrap())
            .collect();
        assert_eq!(entries.len(), 8);
        for (i, offset) in entries.iter().enumerate() {
            let expected = format!("{} 0 obj", i + 1);
            assert!(content[*offset..].starts_with(&expected), "object {} misplaced", i + 1);
        }

        let startxref: usize = content
            .lines()
            .skip_while(|l| *l != "startxref")
            .nth(1)
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(startxref, xref_pos);
    }

    #[test]
    fn test_compressed_content() {
        let mut writer = PdfWriter::with_config(PdfWriterConfig::default().with_compress(true));
        {
            let mut page = writer.add_a4_page();
            page.add_command(&text("Hello"));
            page.finish();
        }
        let bytes = writer.finish().unwrap();
        let content = String::from_utf8_lossy(&bytes);
        assert!(content.contains("/Filter /FlateDecode"));
        assert!(!content.contains("(Hello) Tj"));
    }
}
