//! Text measurement, encoding and line breaking for the standard fonts.
//!
//! - [`fonts`]: Base-14 fonts and AFM advance widths
//! - [`encoding`]: WinAnsi and ZapfDingbats byte encoding
//! - [`markup`]: `<b>` / `<br/>` paragraph markup
//! - [`wrap`]: greedy word wrapping into lines of styled runs

pub mod encoding;
pub mod fonts;
pub mod markup;
pub mod wrap;

pub use encoding::{encode, EncodedSpan};
pub use fonts::{FontWeight, StandardFont};
pub use markup::Inline;
pub use wrap::{wrap_inlines, wrap_text, Line, TextRun};
