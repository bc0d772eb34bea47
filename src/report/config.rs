//! Fixed layout values of the report.

use crate::config::DocumentMetadata;
use crate::geometry::cm;

/// Output file, relative to the working directory.
pub const OUTPUT_PATH: &str = "TESTS_FONCTIONNELS.pdf";

/// Title of the report.
pub const TITLE: &str = "Tests Fonctionnels";

/// Subtitle, the application under test.
pub const SUBTITLE: &str = "Application de Gestion d'Abonnements";

/// Column widths of a step table: N°, action, expected, obtained, comments.
pub fn step_column_widths() -> Vec<f32> {
    vec![cm(1.0), cm(4.5), cm(4.5), cm(2.0), cm(3.0)]
}

/// Column widths of the summary table.
pub fn summary_column_widths() -> Vec<f32> {
    vec![cm(5.0), cm(3.0), cm(2.5), cm(4.0)]
}

/// Space under a section heading.
pub fn section_gap() -> f32 {
    cm(0.3)
}

/// Space after an introduction paragraph or a step table.
pub fn block_gap() -> f32 {
    cm(0.5)
}

/// Info dictionary of the report.
pub fn metadata() -> DocumentMetadata {
    DocumentMetadata::new()
        .title(TITLE)
        .subject(SUBTITLE)
        .author("Aziz TLILI, Maissara FERKOUS, Doan Thi Mai Chi")
        .creator(crate::NAME)
}
