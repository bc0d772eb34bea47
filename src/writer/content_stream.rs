//! PDF content stream builder.
//!
//! Builds PDF content streams containing graphics and text operators
//! according to PDF specification ISO 32000-1:2008 Section 8-9.

use crate::layout::DrawCommand;
use crate::style::Color;
use crate::text::encoding;
use std::io::{self, Write};

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font resource and size (Tf)
    SetFont(String, f32),
    /// Set text matrix (Tm)
    SetTextMatrix(f32, f32, f32, f32, f32, f32),
    /// Show text (Tj) from already encoded bytes
    ShowText(Vec<u8>),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f32, f32, f32),
    /// Set stroke color RGB (RG)
    SetStrokeColorRGB(f32, f32, f32),
    /// Set line width (w)
    SetLineWidth(f32),
    /// Move to (m)
    MoveTo(f32, f32),
    /// Line to (l)
    LineTo(f32, f32),
    /// Rectangle (re)
    Rectangle(f32, f32, f32, f32),
    /// Stroke (S)
    Stroke,
    /// Fill (f)
    Fill,
}

/// Builder for PDF content streams.
///
/// Redundant font and color changes are elided, so the builder tracks the
/// current text and graphics state.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// Current font resource name and size
    current_font: Option<(String, f32)>,
    /// Current fill color
    fill_color: Option<(f32, f32, f32)>,
    /// Current stroke color
    stroke_color: Option<(f32, f32, f32)>,
    /// Current line width
    line_width: Option<f32>,
    /// Whether we're in a text object
    in_text_object: bool,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Operations recorded so far.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    /// Begin a text object.
    pub fn begin_text(&mut self) -> &mut Self {
        if !self.in_text_object {
            self.op(ContentStreamOp::BeginText);
            self.in_text_object = true;
        }
        self
    }

    /// End a text object.
    pub fn end_text(&mut self) -> &mut Self {
        if self.in_text_object {
            self.op(ContentStreamOp::EndText);
            self.in_text_object = false;
            // Tf is part of the text state, which does not survive ET
            self.current_font = None;
        }
        self
    }

    /// Set font for text operations.
    pub fn set_font(&mut self, resource_name: &str, size: f32) -> &mut Self {
        let unchanged = matches!(&self.current_font, Some((name, s)) if name == resource_name && *s == size);
        if !unchanged {
            self.op(ContentStreamOp::SetFont(resource_name.to_string(), size));
            self.current_font = Some((resource_name.to_string(), size));
        }
        self
    }

    /// Show encoded text at a position.
    pub fn text(&mut self, bytes: Vec<u8>, x: f32, y: f32) -> &mut Self {
        self.begin_text();
        self.op(ContentStreamOp::SetTextMatrix(1.0, 0.0, 0.0, 1.0, x, y));
        self.op(ContentStreamOp::ShowText(bytes));
        self
    }

    /// Set the fill color.
    pub fn fill_color(&mut self, color: Color) -> &mut Self {
        let rgb = (color.r, color.g, color.b);
        if self.fill_color != Some(rgb) {
            self.op(ContentStreamOp::SetFillColorRGB(rgb.0, rgb.1, rgb.2));
            self.fill_color = Some(rgb);
        }
        self
    }

    /// Set the stroke color.
    pub fn stroke_color(&mut self, color: Color) -> &mut Self {
        let rgb = (color.r, color.g, color.b);
        if self.stroke_color != Some(rgb) {
            self.op(ContentStreamOp::SetStrokeColorRGB(rgb.0, rgb.1, rgb.2));
            self.stroke_color = Some(rgb);
        }
        self
    }

    /// Set the line width.
    pub fn set_line_width(&mut self, width: f32) -> &mut Self {
        if self.line_width != Some(width) {
            self.op(ContentStreamOp::SetLineWidth(width));
            self.line_width = Some(width);
        }
        self
    }

    /// Move to a point (start a new subpath).
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::MoveTo(x, y))
    }

    /// Append a straight line segment.
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::LineTo(x, y))
    }

    /// Append a rectangle.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.op(ContentStreamOp::Rectangle(x, y, width, height))
    }

    /// Stroke the current path.
    pub fn stroke(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Stroke)
    }

    /// Fill the current path.
    pub fn fill(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Fill)
    }

    /// Append the operators for one draw command.
    pub fn add_command(&mut self, command: &DrawCommand) -> &mut Self {
        match command {
            DrawCommand::FillRect { rect, color } => {
                self.end_text();
                self.fill_color(*color)
                    .rect(rect.x, rect.y, rect.width, rect.height)
                    .fill();
            },
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                self.end_text();
                self.set_line_width(*width)
                    .stroke_color(*color)
                    .move_to(from.x, from.y)
                    .line_to(to.x, to.y)
                    .stroke();
            },
            DrawCommand::Text {
                x,
                y,
                font_size,
                color,
                runs,
            } => {
                self.begin_text();
                self.fill_color(*color);
                let mut pen_x = *x;
                for run in runs {
                    for span in encoding::encode(&run.text, run.font) {
                        let advance = span.width(*font_size);
                        self.set_font(span.font.resource_name(), *font_size);
                        self.text(span.bytes, pen_x, *y);
                        pen_x += advance;
                    }
                }
            },
        }
        self
    }

    /// Append the operators for a whole page.
    pub fn add_commands<'a>(&mut self, commands: impl IntoIterator<Item = &'a DrawCommand>) -> &mut Self {
        for command in commands {
            self.add_command(command);
        }
        self.end_text()
    }

    /// Build the content stream to bytes.
    pub fn build(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();

        for op in &self.operations {
            self.write_op(&mut buf, op)?;
            writeln!(buf)?;
        }

        Ok(buf)
    }

    /// Write a single operation to the buffer.
    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> io::Result<()> {
        match op {
            ContentStreamOp::BeginText => write!(w, "BT"),
            ContentStreamOp::EndText => write!(w, "ET"),
            ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, num(*size)),
            ContentStreamOp::SetTextMatrix(a, b, c, d, e, f) => write!(
                w,
                "{} {} {} {} {} {} Tm",
                num(*a),
                num(*b),
                num(*c),
                num(*d),
                num(*e),
                num(*f)
            ),
            ContentStreamOp::ShowText(bytes) => {
                write!(w, "(")?;
                write_escaped_bytes(w, bytes)?;
                write!(w, ") Tj")
            },
            ContentStreamOp::SetFillColorRGB(r, g, b) => {
                write!(w, "{} {} {} rg", num(*r), num(*g), num(*b))
            },
            ContentStreamOp::SetStrokeColorRGB(r, g, b) => {
                write!(w, "{} {} {} RG", num(*r), num(*g), num(*b))
            },
            ContentStreamOp::SetLineWidth(width) => write!(w, "{} w", num(*width)),
            ContentStreamOp::MoveTo(x, y) => write!(w, "{} {} m", num(*x), num(*y)),
            ContentStreamOp::LineTo(x, y) => write!(w, "{} {} l", num(*x), num(*y)),
            ContentStreamOp::Rectangle(x, y, w_val, h) => {
                write!(w, "{} {} {} {} re", num(*x), num(*y), num(*w_val), num(*h))
            },
            ContentStreamOp::Stroke => write!(w, "S"),
            ContentStreamOp::Fill => write!(w, "f"),
        }
    }
}

/// Format a number with at most 3 decimals, trailing zeros trimmed.
fn num(value: f32) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Write bytes for a literal string; bytes outside printable ASCII use octal escapes.
fn write_escaped_bytes<W: Write>(w: &mut W, bytes: &[u8]) -> io::Result<()> {
    for &byte in bytes {
        match byte {
            b'(' => write!(w, "\\(")?,
            b')' => write!(w, "\\)")?,
            b'\\' => write!(w, "\\\\")?,
            0x20..=0x7E => w.write_all(&[byte])?,
            _ => write!(w, "\\{:03o}", byte)?,
        }
    }
    Ok(())
}
