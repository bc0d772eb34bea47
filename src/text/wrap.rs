//! Greedy word wrapping over styled runs.

use super::fonts::{FontWeight, StandardFont};
use super::markup::Inline;

/// A piece of text drawn with one font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Text content
    pub text: String,
    /// Font used for the run
    pub font: StandardFont,
}

/// A laid-out line of a paragraph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Runs in drawing order
    pub runs: Vec<TextRun>,
    /// Line width in points
    pub width: f32,
}

impl Line {
    /// Whether the line has no text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated text of the line.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    fn push(&mut self, text: &str, font: StandardFont, font_size: f32) {
        self.width += font.text_width(text, font_size);
        match self.runs.last_mut() {
            Some(last) if last.font == font => last.text.push_str(text),
            _ => self.runs.push(TextRun {
                text: text.to_string(),
                font,
            }),
        }
    }
}

/// A word: consecutive non-whitespace pieces, possibly mixing fonts.
#[derive(Debug, Default)]
struct Word {
    pieces: Vec<(String, StandardFont)>,
    /// Font of the whitespace that preceded the word, if any
    space_font: Option<StandardFont>,
}

impl Word {
    fn width(&self, font_size: f32) -> f32 {
        self.pieces
            .iter()
            .map(|(text, font)| font.text_width(text, font_size))
            .sum()
    }

    fn push_char(&mut self, ch: char, font: StandardFont) {
        match self.pieces.last_mut() {
            Some((text, f)) if *f == font => text.push(ch),
            _ => self.pieces.push((ch.to_string(), font)),
        }
    }
}

enum Token {
    Word(Word),
    Break,
}

fn tokenize(inlines: &[Inline], weight: FontWeight) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = Word::default();
    let mut pending_space: Option<StandardFont> = None;

    for inline in inlines {
        match inline {
            Inline::LineBreak => {
                if !current.pieces.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut current)));
                }
                pending_space = None;
                tokens.push(Token::Break);
            },
            Inline::Text { text, bold } => {
                let font = if *bold {
                    StandardFont::HelveticaBold
                } else {
                    StandardFont::helvetica(weight)
                };
                for ch in text.chars() {
                    if ch.is_whitespace() && ch != '\u{00A0}' {
                        if !current.pieces.is_empty() {
                            tokens.push(Token::Word(std::mem::take(&mut current)));
                        }
                        pending_space.get_or_insert(font);
                    } else {
                        if current.pieces.is_empty() {
                            current.space_font = pending_space.take();
                        }
                        current.push_char(ch, font);
                    }
                }
            },
        }
    }

    if !current.pieces.is_empty() {
        tokens.push(Token::Word(current));
    }
    tokens
}

/// Wrap inline elements into lines no wider than `max_width`.
///
/// Runs of whitespace collapse to a single space and leading or trailing
/// whitespace on a line is dropped. A word wider than `max_width` is placed
/// alone on its own line. `weight` is the font weight of text outside `<b>`.
pub fn wrap_inlines(inlines: &[Inline], weight: FontWeight, font_size: f32, max_width: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = Line::default();

    for token in tokenize(inlines, weight) {
        match token {
            Token::Break => {
                lines.push(std::mem::take(&mut line));
            },
            Token::Word(word) => {
                let word_width = word.width(font_size);
                if !line.is_empty() {
                    let space_font = word
                        .space_font
                        .unwrap_or_else(|| StandardFont::helvetica(weight));
                    let space_width = space_font.text_width(" ", font_size);
                    if line.width + space_width + word_width <= max_width {
                        line.push(" ", space_font, font_size);
                    } else {
                        lines.push(std::mem::take(&mut line));
                    }
                }
                for (text, font) in &word.pieces {
                    line.push(text, *font, font_size);
                }
            },
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Wrap plain text (no markup) into lines.
pub fn wrap_text(text: &str, font: StandardFont, font_size: f32, max_width: f32) -> Vec<Line> {
    let weight = if font.is_bold() {
        FontWeight::Bold
    } else {
        FontWeight::Normal
    };
    let inlines = [Inline::Text {
        text: text.to_string(),
        bold: false,
    }];
    wrap_inlines(&inlines, weight, font_size, max_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::markup;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.text()).collect()
    }

    #[test]
    fn test_short_text_single_line() {
        let lines = wrap_text("Bonjour le monde", StandardFont::Helvetica, 9.0, 500.0);
        assert_eq!(texts(&lines), vec!["Bonjour le monde"]);
        let expected = StandardFont::Helvetica.text_width("Bonjour le monde", 9.0);
        assert!((lines[0].width - expected).abs() < 1e-3);
    }

    #[test]
    fn test_whitespace_collapses() {
        let lines = wrap_text("  un   deux\n\ttrois  ", StandardFont::Helvetica, 9.0, 500.0);
        assert_eq!(texts(&lines), vec!["un deux trois"]);
    }

    #[test]
    fn test_wraps_at_width() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let max = StandardFont::Helvetica.text_width("alpha beta gamma", 10.0) + 0.5;
        let lines = wrap_text(text, StandardFont::Helvetica, 10.0, max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width <= max + 1e-3, "{:?} too wide", line.text());
        }
        assert_eq!(texts(&lines).join(" "), text);
    }

    #[test]
    fn test_long_word_stays_alone() {
        let lines = wrap_text("a anticonstitutionnellement b", StandardFont::Helvetica, 10.0, 30.0);
        assert_eq!(texts(&lines), vec!["a", "anticonstitutionnellement", "b"]);
    }

    #[test]
    fn test_bold_runs_and_breaks() {
        let inlines = markup::parse("<b>Nom :</b> Aziz<br/><br/>Fin");
        let lines = wrap_inlines(&inlines, FontWeight::Normal, 9.0, 500.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].runs.len(), 2);
        assert_eq!(lines[0].runs[0].font, StandardFont::HelveticaBold);
        assert_eq!(lines[0].runs[0].text, "Nom :");
        assert_eq!(lines[0].runs[1].text, " Aziz");
        assert!(lines[1].is_empty());
        assert_eq!(lines[2].text(), "Fin");
    }

    #[test]
    fn test_font_change_inside_word_does_not_break() {
        let inlines = markup::parse("<b>abc</b>def");
        let lines = wrap_inlines(&inlines, FontWeight::Normal, 10.0, 5.0);
        assert_eq!(texts(&lines), vec!["abcdef"]);
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(wrap_text("   ", StandardFont::Helvetica, 9.0, 100.0).is_empty());
    }
}
