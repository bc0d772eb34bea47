//! Document model: an ordered list of content blocks plus page geometry.
//!
//! A [`Document`] is assembled with a [`DocumentBuilder`] through append-only
//! operations and is immutable once built.
//!
//! # Example
//!
//! ```
//! use recette_pdf::document::DocumentBuilder;
//! use recette_pdf::geometry::cm;
//!
//! let mut builder = DocumentBuilder::new();
//! builder.title("Tests Fonctionnels");
//! builder.spacer(cm(1.0));
//! builder.paragraph("Date : 24/11/2025");
//! let document = builder.build();
//! assert_eq!(document.blocks().len(), 3);
//! ```

use crate::config::{DocumentMetadata, PageGeometry};
use crate::error::Result;
use crate::style::{ParagraphStyle, StyleSheet};
use crate::table::{format_table, TableBlock};

/// Text of a title, heading or paragraph with its style.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Text, with optional `<b>` / `<br/>` markup
    pub text: String,
    /// Style used to lay out the text
    pub style: ParagraphStyle,
}

impl TextBlock {
    /// Create a text block.
    pub fn new(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One laid-out unit of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// Document title
    Title(TextBlock),
    /// Section heading
    Heading1(TextBlock),
    /// Sub-section heading
    Heading2(TextBlock),
    /// Body paragraph
    Paragraph(TextBlock),
    /// Formatted table
    Table(TableBlock),
    /// Vertical space in points
    Spacer(f32),
    /// Unconditional page break
    PageBreak,
}

impl ContentBlock {
    /// Short name of the block kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Title(_) => "title",
            ContentBlock::Heading1(_) => "heading1",
            ContentBlock::Heading2(_) => "heading2",
            ContentBlock::Paragraph(_) => "paragraph",
            ContentBlock::Table(_) => "table",
            ContentBlock::Spacer(_) => "spacer",
            ContentBlock::PageBreak => "page break",
        }
    }

    /// The text block of a text variant.
    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            ContentBlock::Title(t)
            | ContentBlock::Heading1(t)
            | ContentBlock::Heading2(t)
            | ContentBlock::Paragraph(t) => Some(t),
            _ => None,
        }
    }
}

/// An immutable, ordered sequence of content blocks ready to render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    blocks: Vec<ContentBlock>,
    geometry: PageGeometry,
    metadata: DocumentMetadata,
}

impl Document {
    /// Blocks in document order.
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Page size and margins.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Info dictionary metadata.
    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Whether the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Accumulates content blocks in document order.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    blocks: Vec<ContentBlock>,
    geometry: PageGeometry,
    metadata: DocumentMetadata,
    styles: StyleSheet,
}

impl DocumentBuilder {
    /// Create a builder with A4 geometry and the default style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the document metadata.
    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the style sheet used by the convenience appenders.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// The active style sheet.
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Append one block at the end of the document.
    pub fn append(&mut self, block: ContentBlock) -> &mut Self {
        self.blocks.push(block);
        self
    }

    /// Append a title.
    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        let style = self.styles.title.clone();
        self.append(ContentBlock::Title(TextBlock::new(text, style)))
    }

    /// Append a section heading.
    pub fn heading1(&mut self, text: impl Into<String>) -> &mut Self {
        let style = self.styles.heading1.clone();
        self.append(ContentBlock::Heading1(TextBlock::new(text, style)))
    }

    /// Append a sub-section heading.
    pub fn heading2(&mut self, text: impl Into<String>) -> &mut Self {
        let style = self.styles.heading2.clone();
        self.append(ContentBlock::Heading2(TextBlock::new(text, style)))
    }

    /// Append a body paragraph.
    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        let style = self.styles.normal.clone();
        self.append(ContentBlock::Paragraph(TextBlock::new(text, style)))
    }

    /// Append vertical space.
    pub fn spacer(&mut self, height: f32) -> &mut Self {
        self.append(ContentBlock::Spacer(height.max(0.0)))
    }

    /// Append an unconditional page break.
    pub fn page_break(&mut self) -> &mut Self {
        self.append(ContentBlock::PageBreak)
    }

    /// Append an already formatted table.
    pub fn table(&mut self, table: TableBlock) -> &mut Self {
        self.append(ContentBlock::Table(table))
    }

    /// Format `rows` with the default table style and append the result.
    ///
    /// Nothing is appended when the grid is malformed.
    pub fn table_rows(&mut self, rows: Vec<Vec<String>>, column_widths: Vec<f32>) -> Result<&mut Self> {
        let table = format_table(rows, column_widths)?;
        Ok(self.table(table))
    }

    /// Number of blocks appended so far.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no block has been appended.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Freeze the blocks into an immutable document.
    pub fn build(self) -> Document {
        log::debug!("Built document with {} blocks", self.blocks.len());
        Document {
            blocks: self.blocks,
            geometry: self.geometry,
            metadata: self.metadata,
        }
    }
}
