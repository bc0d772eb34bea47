//! Inline paragraph markup.
//!
//! Paragraph text accepts a tiny subset of the markup used by the report
//! sources: `<b>...</b>` for a bold run and `<br/>` for a forced line break.
//! The entities `&amp;`, `&lt;`, `&gt;` and `&quot;` are decoded. Any other tag
//! is dropped with a debug message and its content kept as plain text.

/// One inline element of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Text drawn in the paragraph font, or in bold
    Text {
        /// Raw text (whitespace not yet collapsed)
        text: String,
        /// Whether the text is inside `<b>...</b>`
        bold: bool,
    },
    /// Forced line break
    LineBreak,
}

/// Parse paragraph markup into inline elements.
///
/// Unbalanced `</b>` tags are ignored and an unclosed `<b>` extends to the
/// end of the text.
pub fn parse(markup: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut bold_depth = 0usize;
    let mut buf = String::new();
    let mut rest = markup;

    while let Some(pos) = rest.find(['<', '&']) {
        buf.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with('&') {
            let (decoded, consumed) = decode_entity(rest);
            buf.push_str(decoded);
            rest = &rest[consumed..];
            continue;
        }

        let Some(end) = rest.find('>') else {
            // A lone '<' is plain text
            buf.push('<');
            rest = &rest[1..];
            continue;
        };

        let tag = rest[1..end].trim().to_ascii_lowercase();
        rest = &rest[end + 1..];

        match tag.as_str() {
            "b" | "strong" => {
                flush(&mut out, &mut buf, bold_depth > 0);
                bold_depth += 1;
            },
            "/b" | "/strong" => {
                flush(&mut out, &mut buf, bold_depth > 0);
                bold_depth = bold_depth.saturating_sub(1);
            },
            "br" | "br/" | "br /" => {
                flush(&mut out, &mut buf, bold_depth > 0);
                out.push(Inline::LineBreak);
            },
            other => {
                log::debug!("Ignoring unsupported paragraph tag <{}>", other);
            },
        }
    }

    buf.push_str(rest);
    flush(&mut out, &mut buf, bold_depth > 0);
    out
}

fn flush(out: &mut Vec<Inline>, buf: &mut String, bold: bool) {
    if buf.is_empty() {
        return;
    }
    let text = std::mem::take(buf);
    match out.last_mut() {
        Some(Inline::Text { text: prev, bold: prev_bold }) if *prev_bold == bold => {
            prev.push_str(&text);
        },
        _ => out.push(Inline::Text { text, bold }),
    }
}

/// Decode the entity at the start of `s`; returns the text and the bytes consumed.
fn decode_entity(s: &str) -> (&'static str, usize) {
    const ENTITIES: [(&str, &str); 5] = [
        ("&amp;", "&"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&nbsp;", "\u{00A0}"),
    ];
    for (entity, text) in ENTITIES {
        if s.starts_with(entity) {
            return (text, entity.len());
        }
    }
    ("&", 1)
}
