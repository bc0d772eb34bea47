//! Table formatting.
//!
//! [`format_table`] validates a grid of cell strings against its column
//! widths and produces a styled [`TableBlock`]. Validation happens here, at
//! document assembly time, so a malformed grid never reaches the renderer.
//!
//! # Example
//!
//! ```
//! use recette_pdf::geometry::cm;
//! use recette_pdf::table::format_table;
//!
//! let table = format_table(
//!     vec![
//!         vec!["Étape".to_string(), "Résultat".to_string()],
//!         vec!["1".to_string(), "✅ OK".to_string()],
//!     ],
//!     vec![cm(2.0), cm(4.0)],
//! )
//! .unwrap();
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.column_count(), 2);
//! ```

use crate::error::{Error, Result};
use crate::style::Color;
use crate::text::StandardFont;

/// Horizontal alignment for cell content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellAlign {
    /// Align to the left
    Left,
    /// Center horizontally
    #[default]
    Center,
    /// Align to the right
    Right,
}

/// Vertical alignment for cell content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellVAlign {
    /// Align to the top
    Top,
    /// Center vertically
    #[default]
    Middle,
    /// Align to the bottom
    Bottom,
}

/// Grid line style for tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableBorderStyle {
    /// Line width in points
    pub width: f32,
    /// Line color
    pub color: Color,
}

impl TableBorderStyle {
    /// Create a grey grid line of the given width.
    pub fn grey(width: f32) -> Self {
        Self {
            width,
            color: Color::grey(),
        }
    }
}

/// Cell padding configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPadding {
    /// Top padding in points
    pub top: f32,
    /// Right padding in points
    pub right: f32,
    /// Bottom padding in points
    pub bottom: f32,
    /// Left padding in points
    pub left: f32,
}

impl CellPadding {
    /// Create padding with horizontal and vertical values.
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Replace the top and bottom padding.
    pub fn with_vertical(mut self, top: f32, bottom: f32) -> Self {
        self.top = top;
        self.bottom = bottom;
        self
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Text and padding of one kind of row (header, body or total).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStyle {
    /// Font of the cell text
    pub font: StandardFont,
    /// Font size in points
    pub font_size: f32,
    /// Text color
    pub text_color: Color,
    /// Cell padding
    pub padding: CellPadding,
    /// Background fill; `None` falls back to the body stripes
    pub background: Option<Color>,
}

impl RowStyle {
    /// Height of one text line in this row (1.2 x font size).
    pub fn line_height(&self) -> f32 {
        self.font_size * 1.2
    }
}

/// Table style configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    /// First row
    pub header: RowStyle,
    /// Data rows
    pub body: RowStyle,
    /// Style of a highlighted last row (the "total" line), if any
    pub total: Option<RowStyle>,
    /// Alternating body backgrounds, by body-row parity
    pub stripes: Vec<Color>,
    /// Grid drawn around every cell
    pub grid: Option<TableBorderStyle>,
    /// Horizontal alignment of every cell
    pub align: CellAlign,
    /// Vertical alignment of every cell
    pub valign: CellVAlign,
}

impl Default for TableStyle {
    /// The test-step table style.
    fn default() -> Self {
        let padding = CellPadding::symmetric(4.0, 6.0);
        Self {
            header: RowStyle {
                font: StandardFont::HelveticaBold,
                font_size: 9.0,
                text_color: Color::whitesmoke(),
                padding: padding.with_vertical(8.0, 8.0),
                background: Some(Color::from_hex(0x3498DB)),
            },
            body: RowStyle {
                font: StandardFont::Helvetica,
                font_size: 8.0,
                text_color: Color::black(),
                padding,
                background: None,
            },
            total: None,
            stripes: vec![Color::white(), Color::from_hex(0xF8F9FA)],
            grid: Some(TableBorderStyle::grey(0.5)),
            align: CellAlign::Center,
            valign: CellVAlign::Middle,
        }
    }
}

impl TableStyle {
    /// The summary ("Bilan") table style with a highlighted total row.
    pub fn summary() -> Self {
        let padding = CellPadding::symmetric(6.0, 3.0);
        let body = RowStyle {
            font: StandardFont::Helvetica,
            font_size: 10.0,
            text_color: Color::black(),
            padding,
            background: None,
        };
        Self {
            header: RowStyle {
                font: StandardFont::HelveticaBold,
                font_size: 11.0,
                text_color: Color::whitesmoke(),
                padding: padding.with_vertical(3.0, 12.0),
                background: Some(Color::from_hex(0x3498DB)),
            },
            body,
            total: Some(RowStyle {
                font: StandardFont::HelveticaBold,
                background: Some(Color::from_hex(0xECF0F1)),
                ..body
            }),
            stripes: vec![Color::white(), Color::from_hex(0xF8F9FA)],
            grid: Some(TableBorderStyle::grey(1.0)),
            align: CellAlign::Center,
            valign: CellVAlign::Bottom,
        }
    }
}

/// A validated, styled table ready for layout.
///
/// Every row has exactly `column_widths.len()` cells; row 0 is the header.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    rows: Vec<Vec<String>>,
    column_widths: Vec<f32>,
    style: TableStyle,
}

impl TableBlock {
    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The header row.
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Column widths in points.
    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    /// Table style.
    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Number of rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Sum of the column widths.
    pub fn total_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Style of row `index`.
    pub fn row_style(&self, index: usize) -> &RowStyle {
        if index == 0 {
            return &self.style.header;
        }
        match &self.style.total {
            Some(total) if index + 1 == self.rows.len() => total,
            _ => &self.style.body,
        }
    }

    /// Background fill of row `index`, if any.
    ///
    /// Body rows without their own background alternate through the
    /// stripe colors, starting with the first data row.
    pub fn row_background(&self, index: usize) -> Option<Color> {
        let style = self.row_style(index);
        if style.background.is_some() || index == 0 {
            return style.background;
        }
        if self.style.stripes.is_empty() {
            return None;
        }
        Some(self.style.stripes[(index - 1) % self.style.stripes.len()])
    }

    /// Height of row `index`: tallest cell (lines x line height) plus padding.
    pub fn row_height(&self, index: usize) -> f32 {
        let style = self.row_style(index);
        let max_lines = self.rows[index]
            .iter()
            .map(|cell| cell.split('\n').count())
            .max()
            .unwrap_or(1);
        max_lines as f32 * style.line_height() + style.padding.vertical()
    }

    /// Total height of all rows.
    pub fn total_height(&self) -> f32 {
        (0..self.rows.len()).map(|i| self.row_height(i)).sum()
    }
}

/// Format a grid with the default (test-step) style.
pub fn format_table(rows: Vec<Vec<String>>, column_widths: Vec<f32>) -> Result<TableBlock> {
    format_table_with_style(rows, column_widths, TableStyle::default())
}

/// Format a grid with an explicit style.
///
/// Fails with [`Error::EmptyTable`] when there is no header row,
/// [`Error::InvalidColumnWidth`] for a non-positive or non-finite width, and
/// [`Error::Structural`] for the first row whose cell count differs from the
/// number of columns.
pub fn format_table_with_style(
    rows: Vec<Vec<String>>,
    column_widths: Vec<f32>,
    style: TableStyle,
) -> Result<TableBlock> {
    if rows.is_empty() {
        return Err(Error::EmptyTable);
    }

    if let Some((column, &width)) = column_widths
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w <= 0.0)
    {
        return Err(Error::InvalidColumnWidth { column, width });
    }

    let expected = column_widths.len();
    if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
        return Err(Error::Structural {
            row,
            expected,
            found: cells.len(),
        });
    }

    log::trace!("Formatted table: {} rows x {} columns", rows.len(), expected);

    Ok(TableBlock {
        rows,
        column_widths,
        style,
    })
}
