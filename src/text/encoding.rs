//! Single-byte text encoding for the standard fonts.
//!
//! Helvetica faces are declared with `/WinAnsiEncoding`, which covers
//! French text (accents, `°`, `•`, `€`, typographic quotes). Check marks
//! are not part of WinAnsi and are drawn with ZapfDingbats instead.

use super::fonts::StandardFont;

/// Byte substituted for characters no font can draw.
pub const REPLACEMENT: u8 = b'?';

/// Map a Unicode code point to its WinAnsiEncoding byte.
pub fn unicode_to_winansi(codepoint: u32) -> Option<u8> {
    // Printable ASCII and Latin-1 map to themselves
    if (0x20..0x7F).contains(&codepoint) || (0xA0..=0xFF).contains(&codepoint) {
        return Some(codepoint as u8);
    }

    match codepoint {
        0x20AC => Some(0x80), // Euro sign
        0x201A => Some(0x82), // Single low-9 quotation mark
        0x0192 => Some(0x83), // Latin small letter f with hook
        0x201E => Some(0x84), // Double low-9 quotation mark
        0x2026 => Some(0x85), // Horizontal ellipsis
        0x2020 => Some(0x86), // Dagger
        0x2021 => Some(0x87), // Double dagger
        0x02C6 => Some(0x88), // Modifier letter circumflex accent
        0x2030 => Some(0x89), // Per mille sign
        0x0160 => Some(0x8A), // Latin capital letter S with caron
        0x2039 => Some(0x8B), // Single left-pointing angle quotation mark
        0x0152 => Some(0x8C), // Latin capital ligature OE
        0x017D => Some(0x8E), // Latin capital letter Z with caron
        0x2018 => Some(0x91), // Left single quotation mark
        0x2019 => Some(0x92), // Right single quotation mark
        0x201C => Some(0x93), // Left double quotation mark
        0x201D => Some(0x94), // Right double quotation mark
        0x2022 => Some(0x95), // Bullet
        0x2013 => Some(0x96), // En dash
        0x2014 => Some(0x97), // Em dash
        0x02DC => Some(0x98), // Small tilde
        0x2122 => Some(0x99), // Trade mark sign
        0x0161 => Some(0x9A), // Latin small letter s with caron
        0x203A => Some(0x9B), // Single right-pointing angle quotation mark
        0x0153 => Some(0x9C), // Latin small ligature oe
        0x017E => Some(0x9E), // Latin small letter z with caron
        0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
        _ => None,
    }
}

/// ZapfDingbats code for the check-mark symbols.
pub fn dingbat_code(ch: char) -> Option<u8> {
    match ch {
        '\u{2713}' => Some(0x33),             // ✓ check mark (a19)
        '\u{2714}' | '\u{2705}' => Some(0x34), // ✔ heavy check mark (a20), ✅ drawn as ✔
        _ => None,
    }
}

/// A run of bytes drawn with a single font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSpan {
    /// Font the bytes are encoded for
    pub font: StandardFont,
    /// Encoded glyph codes
    pub bytes: Vec<u8>,
    /// Total advance width in font units (1/1000 em)
    pub advance: u32,
}

impl EncodedSpan {
    /// Advance width in points at `font_size`.
    pub fn width(&self, font_size: f32) -> f32 {
        self.advance as f32 * font_size / 1000.0
    }
}

/// Encode `text` for drawing with `font`.
///
/// Consecutive characters that end up in the same font are grouped into one
/// span; check marks switch to ZapfDingbats. Characters with no glyph are
/// replaced with `?` and reported with a warning.
pub fn encode(text: &str, font: StandardFont) -> Vec<EncodedSpan> {
    let mut spans: Vec<EncodedSpan> = Vec::new();

    for ch in text.chars() {
        let (target, byte, drawn) = match dingbat_code(ch) {
            Some(code) => (StandardFont::ZapfDingbats, code, ch),
            None => match unicode_to_winansi(ch as u32) {
                Some(byte) => (font, byte, ch),
                None => {
                    log::warn!(
                        "No glyph for {:?} (U+{:04X}) in {}, drawing '?'",
                        ch,
                        ch as u32,
                        font.base_font_name()
                    );
                    (font, REPLACEMENT, REPLACEMENT as char)
                },
            },
        };
        let advance = u32::from(font.char_width(drawn));

        match spans.last_mut() {
            Some(last) if last.font == target => {
                last.bytes.push(byte);
                last.advance += advance;
            },
            _ => spans.push(EncodedSpan {
                font: target,
                bytes: vec![byte],
                advance,
            }),
        }
    }

    spans
}

/// Whether every character of `text` can be drawn without substitution.
pub fn is_encodable(text: &str) -> bool {
    text.chars()
        .all(|ch| dingbat_code(ch).is_some() || unicode_to_winansi(ch as u32).is_some())
}
