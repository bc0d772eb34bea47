//! Page geometry and document metadata.

use crate::geometry::{cm, Rect};
use chrono::NaiveDateTime;

/// Standard page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    /// A4 (210mm x 297mm)
    #[default]
    A4,
    /// US Letter (8.5" x 11")
    Letter,
    /// Custom dimensions in points
    Custom(f32, f32),
}

impl PageSize {
    /// Get dimensions in points (1 inch = 72 points).
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Left margin
    pub left: f32,
    /// Right margin
    pub right: f32,
    /// Top margin
    pub top: f32,
    /// Bottom margin
    pub bottom: f32,
}

impl Margins {
    /// Create margins from the four sides.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same margin on every side.
    pub fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl Default for Margins {
    /// 1.5 cm left and right, 2 cm top and bottom.
    fn default() -> Self {
        Self::new(cm(1.5), cm(1.5), cm(2.0), cm(2.0))
    }
}

/// Page size plus margins; identical for every page of a document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageGeometry {
    /// Page size
    pub size: PageSize,
    /// Page margins
    pub margins: Margins,
}

impl PageGeometry {
    /// Create a geometry from a page size and margins.
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Self { size, margins }
    }

    /// Page width in points.
    pub fn page_width(&self) -> f32 {
        self.size.dimensions().0
    }

    /// Page height in points.
    pub fn page_height(&self) -> f32 {
        self.size.dimensions().1
    }

    /// The frame: the area inside the margins where blocks are placed.
    pub fn frame(&self) -> Rect {
        let (width, height) = self.size.dimensions();
        Rect::new(
            self.margins.left,
            self.margins.bottom,
            (width - self.margins.left - self.margins.right).max(0.0),
            (height - self.margins.top - self.margins.bottom).max(0.0),
        )
    }
}

/// Metadata for a PDF document, written to the Info dictionary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Creation date; omitted when `None` so output stays reproducible
    pub creation_date: Option<NaiveDateTime>,
}

impl DocumentMetadata {
    /// Create new empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set document subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set creator application.
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the creation date.
    pub fn creation_date(mut self, date: NaiveDateTime) -> Self {
        self.creation_date = Some(date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_dimensions() {
        assert_eq!(PageSize::A4.dimensions(), (595.0, 842.0));
        assert_eq!(PageSize::default(), PageSize::A4);
        assert_eq!(PageSize::Custom(100.0, 200.0).dimensions(), (100.0, 200.0));
    }

    #[test]
    fn test_default_frame() {
        let geometry = PageGeometry::default();
        let frame = geometry.frame();
        assert!((frame.x - 42.519_685).abs() < 1e-3);
        assert!((frame.y - 56.692_913).abs() < 1e-3);
        assert!((frame.width - (595.0 - 2.0 * 42.519_685)).abs() < 1e-3);
        assert!((frame.top() - (842.0 - 56.692_913)).abs() < 1e-3);
    }

    #[test]
    fn test_frame_never_negative() {
        let geometry = PageGeometry::new(PageSize::Custom(50.0, 50.0), Margins::uniform(40.0));
        assert_eq!(geometry.frame().width, 0.0);
        assert_eq!(geometry.frame().height, 0.0);
    }

    #[test]
    fn test_metadata_builder() {
        let meta = DocumentMetadata::new().title("Tests Fonctionnels").author("Équipe");
        assert_eq!(meta.title.as_deref(), Some("Tests Fonctionnels"));
        assert_eq!(meta.author.as_deref(), Some("Équipe"));
        assert!(meta.creation_date.is_none());
    }
}
