//! Base-14 standard fonts and their advance widths.
//!
//! Widths come from the Adobe Font Metrics files shipped with every PDF
//! reader, in units of 1/1000 em. Only the fonts the report draws with are
//! described: Helvetica, Helvetica-Bold and ZapfDingbats.

use super::encoding;

/// A Base-14 font used by the renderer.
///
/// The declaration order is the order of the font resources in the output
/// file, which keeps the serialized bytes stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    /// Helvetica (regular weight)
    Helvetica,
    /// Helvetica-Bold
    HelveticaBold,
    /// ZapfDingbats (check marks)
    ZapfDingbats,
}

/// Font weight selector for text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Normal weight
    #[default]
    Normal,
    /// Bold weight
    Bold,
}

impl StandardFont {
    /// Every font, in resource order.
    pub const ALL: [StandardFont; 3] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::ZapfDingbats,
    ];

    /// Select the Helvetica face for a weight.
    pub fn helvetica(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Normal => StandardFont::Helvetica,
            FontWeight::Bold => StandardFont::HelveticaBold,
        }
    }

    /// PostScript name written as `/BaseFont`.
    pub fn base_font_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
            StandardFont::ZapfDingbats => "F3",
        }
    }

    /// Whether the font is declared with `/WinAnsiEncoding`.
    ///
    /// ZapfDingbats is a symbolic font and keeps its built-in encoding.
    pub fn uses_winansi(&self) -> bool {
        !matches!(self, StandardFont::ZapfDingbats)
    }

    /// Whether this is a bold face.
    pub fn is_bold(&self) -> bool {
        matches!(self, StandardFont::HelveticaBold)
    }

    /// Ascender height in font units.
    pub fn ascender(&self) -> f32 {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaBold => 718.0,
            StandardFont::ZapfDingbats => 820.0,
        }
    }

    /// Descender depth in font units (negative).
    pub fn descender(&self) -> f32 {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaBold => -207.0,
            StandardFont::ZapfDingbats => -143.0,
        }
    }

    /// Advance width of a character in font units.
    ///
    /// Characters drawn with ZapfDingbats (check marks) report the dingbat
    /// width whatever the receiving font, since that is the glyph that ends
    /// up on the page.
    pub fn char_width(&self, ch: char) -> u16 {
        if let Some(code) = encoding::dingbat_code(ch) {
            return dingbat_width(code);
        }
        match self {
            StandardFont::Helvetica => helvetica_width(ch),
            StandardFont::HelveticaBold => helvetica_bold_width(ch),
            // Only check marks are ever routed to ZapfDingbats.
            StandardFont::ZapfDingbats => DEFAULT_WIDTH,
        }
    }

    /// Width of `text` in points at `font_size`.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        units as f32 * font_size / 1000.0
    }
}

const DEFAULT_WIDTH: u16 = 556;

/// Helvetica widths for the printable ASCII range 0x20..=0x7E.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
    334, 260, 334, 584, // {..~
];

/// Helvetica-Bold widths for the printable ASCII range 0x20..=0x7E.
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a..m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n..z
    389, 280, 389, 584, // {..~
];

fn ascii_width(table: &[u16; 95], ch: char) -> Option<u16> {
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        Some(table[(code - 0x20) as usize])
    } else {
        None
    }
}

fn helvetica_width(ch: char) -> u16 {
    if let Some(w) = ascii_width(&HELVETICA_ASCII, ch) {
        return w;
    }
    match ch {
        '\u{00A0}' => 278,
        '°' => 400,
        '•' => 350,
        '€' => 556,
        '‘' | '’' => 222,
        '“' | '”' => 333,
        '«' | '»' => 556,
        '…' => 1000,
        '–' => 556,
        '—' => 1000,
        'œ' => 944,
        'Œ' => 1000,
        'æ' => 889,
        'Æ' => 1000,
        // Accented i glyphs are built on the dotless i.
        'ì' | 'í' | 'î' | 'ï' => 278,
        _ => fold_accent(ch)
            .and_then(|base| ascii_width(&HELVETICA_ASCII, base))
            .unwrap_or(DEFAULT_WIDTH),
    }
}

fn helvetica_bold_width(ch: char) -> u16 {
    if let Some(w) = ascii_width(&HELVETICA_BOLD_ASCII, ch) {
        return w;
    }
    match ch {
        '\u{00A0}' => 278,
        '°' => 400,
        '•' => 350,
        '€' => 556,
        '‘' | '’' => 278,
        '“' | '”' => 500,
        '«' | '»' => 556,
        '…' => 1000,
        '–' => 556,
        '—' => 1000,
        'œ' => 944,
        'Œ' => 1000,
        'æ' => 889,
        'Æ' => 1000,
        _ => fold_accent(ch)
            .and_then(|base| ascii_width(&HELVETICA_BOLD_ASCII, base))
            .unwrap_or(DEFAULT_WIDTH),
    }
}

/// ZapfDingbats widths for the codes the renderer emits.
fn dingbat_width(code: u8) -> u16 {
    match code {
        0x33 => 834,
        0x34 => 846,
        _ => 788,
    }
}

/// Map a Latin-1 accented letter to its unaccented base letter.
///
/// Accented glyphs in the standard fonts share the advance width of their
/// base letter.
pub(crate) fn fold_accent(ch: char) -> Option<char> {
    let base = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' | 'Ÿ' => 'Y',
        _ => return None,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names_are_stable() {
        let names: Vec<_> = StandardFont::ALL.iter().map(|f| f.resource_name()).collect();
        assert_eq!(names, vec!["F1", "F2", "F3"]);
        assert_eq!(StandardFont::HelveticaBold.base_font_name(), "Helvetica-Bold");
    }

    #[test]
    fn test_helvetica_ascii_widths() {
        let f = StandardFont::Helvetica;
        assert_eq!(f.char_width(' '), 278);
        assert_eq!(f.char_width('A'), 667);
        assert_eq!(f.char_width('W'), 944);
        assert_eq!(f.char_width('i'), 222);
        assert_eq!(f.char_width('m'), 833);
        assert_eq!(f.char_width('@'), 1015);
        assert_eq!(f.char_width('~'), 584);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = StandardFont::Helvetica.text_width("Connexion", 10.0);
        let bold = StandardFont::HelveticaBold.text_width("Connexion", 10.0);
        assert!(bold > regular);
        assert_eq!(StandardFont::HelveticaBold.char_width('b'), 611);
    }

    #[test]
    fn test_accented_letters_use_base_width() {
        let f = StandardFont::Helvetica;
        assert_eq!(f.char_width('é'), f.char_width('e'));
        assert_eq!(f.char_width('Ç'), f.char_width('C'));
        assert_eq!(f.char_width('ï'), 278);
        assert_eq!(f.char_width('°'), 400);
    }

    #[test]
    fn test_check_marks_use_dingbat_widths() {
        assert_eq!(StandardFont::Helvetica.char_width('✔'), 846);
        assert_eq!(StandardFont::HelveticaBold.char_width('✓'), 834);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let f = StandardFont::Helvetica;
        // "Test" = 611 + 556 + 500 + 278
        assert!((f.text_width("Test", 10.0) - 19.45).abs() < 1e-4);
        assert!((f.text_width("Test", 20.0) - 38.9).abs() < 1e-4);
        assert_eq!(f.text_width("", 12.0), 0.0);
    }
}
