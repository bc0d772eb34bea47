//! Text styles and the fixed colour palette of the report.

use crate::text::FontWeight;

/// RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// Create a new color.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use recette_pdf::style::Color;
    ///
    /// let blue = Color::from_hex(0x3498db);
    /// assert!((blue.b - 219.0 / 255.0).abs() < 1e-6);
    /// ```
    pub fn from_hex(rgb: u32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Black.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// White.
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Whitesmoke (`#f5f5f5`).
    pub fn whitesmoke() -> Self {
        Self::from_hex(0xF5F5F5)
    }

    /// Mid grey (`#808080`), used for table grids.
    pub fn grey() -> Self {
        Self::from_hex(0x808080)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Left-aligned text (default)
    #[default]
    Left,
    /// Center-aligned text
    Center,
    /// Right-aligned text
    Right,
}

/// Style of a text block (title, heading or paragraph).
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    /// Font size in points
    pub font_size: f32,
    /// Distance between consecutive baselines
    pub leading: f32,
    /// Text color
    pub color: Color,
    /// Horizontal alignment inside the frame
    pub align: TextAlign,
    /// Vertical space before the block (dropped at the top of a page)
    pub space_before: f32,
    /// Vertical space after the block
    pub space_after: f32,
    /// Weight of text outside `<b>` runs
    pub weight: FontWeight,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            font_size: 9.0,
            leading: 12.0,
            color: Color::black(),
            align: TextAlign::Left,
            space_before: 0.0,
            space_after: 0.0,
            weight: FontWeight::Normal,
        }
    }
}

impl ParagraphStyle {
    /// Bold heading style.
    pub fn heading(font_size: f32, leading: f32, color: Color) -> Self {
        Self {
            font_size,
            leading,
            color,
            weight: FontWeight::Bold,
            ..Self::default()
        }
    }

    /// Set the alignment.
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set space before and after the block.
    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Set the leading.
    pub fn with_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }
}

/// The named styles used by the document builder.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    /// Document title: 24pt bold on 22pt leading, centered, `#2c3e50`
    pub title: ParagraphStyle,
    /// Section heading: 16pt bold on 22pt leading, `#34495e`
    pub heading1: ParagraphStyle,
    /// Sub-section heading: 13pt bold on 18pt leading, `#7f8c8d`
    pub heading2: ParagraphStyle,
    /// Body text: 9pt Helvetica, 12pt leading
    pub normal: ParagraphStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            title: ParagraphStyle::heading(24.0, 22.0, Color::from_hex(0x2C3E50))
                .with_align(TextAlign::Center)
                .with_spacing(0.0, 30.0),
            heading1: ParagraphStyle::heading(16.0, 22.0, Color::from_hex(0x34495E)).with_spacing(20.0, 12.0),
            heading2: ParagraphStyle::heading(13.0, 18.0, Color::from_hex(0x7F8C8D)).with_spacing(12.0, 8.0),
            normal: ParagraphStyle::default(),
        }
    }
}
