//! Pagination: places content blocks top-to-bottom inside the page frame.
//!
//! Placement rules:
//! - blocks are placed in document order; a block that does not fit in the
//!   remaining space moves to a new page;
//! - a page break always closes the current page;
//! - space before a block is dropped at the top of a page;
//! - a spacer that does not fit closes the page and is discarded;
//! - a table taller than a whole frame is split by rows, the header row
//!   repeated on every page; a paragraph taller than a frame is split by lines;
//! - tables are centered horizontally in the frame.

pub mod paragraph;
pub mod table;

use crate::document::{ContentBlock, Document, TextBlock};
use crate::geometry::{Point, Rect};
use crate::style::Color;
use crate::table::TableBlock;
use crate::text::TextRun;
use paragraph::ParagraphLayout;

/// Tolerance for floating point fit checks.
pub(crate) const EPSILON: f32 = 1e-3;

/// A drawing primitive on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A line of text starting at (`x`, `y`) on the baseline
    Text {
        /// Left edge of the first glyph
        x: f32,
        /// Baseline
        y: f32,
        /// Font size in points
        font_size: f32,
        /// Fill color of the glyphs
        color: Color,
        /// Runs drawn one after the other
        runs: Vec<TextRun>,
    },
    /// A filled rectangle
    FillRect {
        /// Rectangle to fill
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// A stroked line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Line width
        width: f32,
        /// Stroke color
        color: Color,
    },
}

/// Drawing commands of one page, in painting order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    /// Commands in painting order
    pub commands: Vec<DrawCommand>,
}

impl PageLayout {
    /// Whether nothing is drawn on the page.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text of every text command, runs concatenated, in painting order.
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { runs, .. } => Some(runs.iter().map(|r| r.text.as_str()).collect()),
                _ => None,
            })
            .collect()
    }
}

/// Lay out every block of `document` onto pages.
///
/// Always returns at least one page.
pub fn layout_document(document: &Document) -> Vec<PageLayout> {
    let mut paginator = Paginator::new(document.geometry().frame());
    for block in document.blocks() {
        paginator.place(block);
    }
    paginator.finish()
}

/// Stateful top-to-bottom placement of blocks.
#[derive(Debug)]
pub struct Paginator {
    frame: Rect,
    pages: Vec<PageLayout>,
    current: PageLayout,
    /// Top of the remaining free space on the current page
    cursor: f32,
}

impl Paginator {
    /// Create a paginator for pages with the given frame.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            pages: Vec::new(),
            current: PageLayout::default(),
            cursor: frame.top(),
        }
    }

    /// Remaining vertical space on the current page.
    pub fn remaining(&self) -> f32 {
        (self.cursor - self.frame.bottom()).max(0.0)
    }

    /// Whether nothing has been placed on the current page yet.
    pub fn at_page_top(&self) -> bool {
        self.cursor >= self.frame.top() - EPSILON
    }

    fn fits(&self, height: f32) -> bool {
        height <= self.remaining() + EPSILON
    }

    /// Close the current page and start a new one.
    pub fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.cursor = self.frame.top();
        log::debug!("Starting page {}", self.pages.len() + 1);
    }

    /// Place one block.
    pub fn place(&mut self, block: &ContentBlock) {
        match block {
            ContentBlock::Title(text)
            | ContentBlock::Heading1(text)
            | ContentBlock::Heading2(text)
            | ContentBlock::Paragraph(text) => self.place_text(text),
            ContentBlock::Table(table) => self.place_table(table),
            ContentBlock::Spacer(height) => self.place_spacer(*height),
            ContentBlock::PageBreak => self.new_page(),
        }
    }

    fn place_spacer(&mut self, height: f32) {
        let height = height.max(0.0);
        if self.fits(height) {
            self.cursor -= height;
        } else if !self.at_page_top() {
            log::trace!("Spacer of {:.1}pt does not fit, closing page", height);
            self.new_page();
        }
    }

    fn place_text(&mut self, block: &TextBlock) {
        let layout = ParagraphLayout::new(block, self.frame.width);
        let height = layout.height();

        let space_before = if self.at_page_top() {
            0.0
        } else {
            layout.style.space_before
        };
        if !self.fits(space_before + height) && !self.at_page_top() {
            self.new_page();
        } else {
            self.cursor -= space_before;
        }

        let mut next = 0;
        loop {
            let fitting = layout.lines_fitting(self.remaining());
            // At the top of a page at least one line is placed
            let count = if self.at_page_top() { fitting.max(1) } else { fitting };
            let end = (next + count).min(layout.lines.len());
            let commands = layout.draw(next..end, self.cursor, &self.frame);
            self.current.commands.extend(commands);
            self.cursor -= layout.lines_height(end - next);
            next = end;
            if next >= layout.lines.len() {
                break;
            }
            log::debug!("Paragraph split after line {} of {}", next, layout.lines.len());
            self.new_page();
        }

        self.cursor = (self.cursor - layout.style.space_after).max(self.frame.bottom());
    }

    fn place_table(&mut self, table: &TableBlock) {
        let x = self.frame.left() + (self.frame.width - table.total_width()) / 2.0;
        let height = table.total_height();

        if !self.fits(height) && !self.at_page_top() && height <= self.frame.height + EPSILON {
            self.new_page();
        }

        if self.fits(height) {
            let commands = table::draw_rows(table, 1..table.row_count(), x, self.cursor);
            self.current.commands.extend(commands);
            self.cursor -= height;
            return;
        }

        // A lone header taller than the frame overflows a page of its own
        if table.row_count() == 1 {
            if !self.at_page_top() {
                self.new_page();
            }
            let commands = table::draw_rows(table, 1..1, x, self.cursor);
            self.current.commands.extend(commands);
            self.cursor = (self.cursor - height).max(self.frame.bottom());
            return;
        }

        // Taller than the frame: split by rows, header repeated on each page
        let mut next = 1;
        while next < table.row_count() {
            let mut end = next;
            while end < table.row_count() && self.fits(table::rows_height(table, next..end + 1)) {
                end += 1;
            }
            if end == next {
                if self.at_page_top() {
                    // A single row taller than the frame overflows its page
                    end = next + 1;
                } else {
                    self.new_page();
                    continue;
                }
            }
            let commands = table::draw_rows(table, next..end, x, self.cursor);
            self.current.commands.extend(commands);
            self.cursor -= table::rows_height(table, next..end);
            next = end;
            if next < table.row_count() {
                log::debug!("Table split before row {} of {}", next, table.row_count());
                self.new_page();
            }
        }
        self.cursor = self.cursor.max(self.frame.bottom());
    }

    /// Finish layout and return the pages.
    ///
    /// A trailing page with nothing on it is dropped unless it is the only
    /// page, so an empty document still yields one blank page.
    pub fn finish(mut self) -> Vec<PageLayout> {
        if !self.current.is_empty() || !self.at_page_top() || self.pages.is_empty() {
            let page = std::mem::take(&mut self.current);
            self.pages.push(page);
        }
        self.pages
    }
}
