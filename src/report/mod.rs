//! The functional test report of the subscription manager.
//!
//! [`build_report`] assembles the whole document: title page, the eight
//! test sections with their step tables, the summary table, the test
//! environment and the conclusion.

pub mod config;
pub mod data;

use crate::document::{Document, DocumentBuilder};
use crate::error::Result;
use crate::geometry::cm;
use crate::table::{format_table_with_style, TableBlock, TableStyle};
use data::{Section, TestCase, SECTIONS, STEP_HEADER, SUMMARY_HEADER, TESTERS, TEST_ENVIRONMENT};

/// Build the report document.
///
/// Fails with a structural error if a step table is malformed.
pub fn build_report() -> Result<Document> {
    let mut builder = DocumentBuilder::new().with_metadata(config::metadata());

    title_page(&mut builder);

    for section in SECTIONS {
        add_section(&mut builder, section)?;
    }

    builder.heading1("Bilan des Tests").spacer(config::block_gap());
    builder.table(summary_table(SECTIONS)?);
    builder.spacer(cm(1.0));

    builder.heading1("Infos Tests");
    for (label, value) in TEST_ENVIRONMENT {
        builder.paragraph(format!("• <b>{}</b> : {}", label, value));
    }
    builder.spacer(cm(1.0));

    builder.heading1("Conclusion").paragraph(data::CONCLUSION);

    let document = builder.build();
    log::debug!("Report assembled with {} blocks", document.blocks().len());
    Ok(document)
}

fn title_page(builder: &mut DocumentBuilder) {
    builder
        .title(config::TITLE)
        .heading1(config::SUBTITLE)
        .spacer(cm(1.0))
        .paragraph(format!("Date : {}", data::REPORT_DATE))
        .paragraph("Testeurs :");
    for (name, number) in TESTERS {
        builder.paragraph(format!("• {} - {}", name, number));
    }
    builder.spacer(cm(2.0));
}

fn add_section(builder: &mut DocumentBuilder, section: &Section) -> Result<()> {
    builder
        .heading1(section.heading)
        .spacer(config::section_gap())
        .paragraph(section.intro)
        .spacer(config::block_gap());

    for test in section.tests {
        builder.heading2(test.title);
        builder.table_rows(step_rows(test), config::step_column_widths())?;
        builder.spacer(config::block_gap());
    }

    if section.page_break_after {
        builder.page_break();
    }
    Ok(())
}

/// Header plus the step rows of `test`, as owned cells.
pub fn step_rows(test: &TestCase) -> Vec<Vec<String>> {
    std::iter::once(STEP_HEADER.as_slice())
        .chain(test.steps.iter().copied())
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// Summary table: one row per section with its test count and passed count,
/// then a total row.
pub fn summary_table(sections: &[Section]) -> Result<TableBlock> {
    let mut rows: Vec<Vec<String>> = vec![SUMMARY_HEADER.iter().map(|s| s.to_string()).collect()];
    let mut total = 0;
    let mut passed = 0;

    for section in sections {
        let count = section.tests.len();
        let ok = section.tests.iter().filter(|t| t.passed()).count();
        total += count;
        passed += ok;
        rows.push(vec![
            section.summary_label.to_string(),
            count.to_string(),
            ok.to_string(),
            section.summary_remark.to_string(),
        ]);
    }

    let rate = if total == 0 { 0 } else { passed * 100 / total };
    rows.push(vec![
        "TOTAL".to_string(),
        total.to_string(),
        passed.to_string(),
        format!("{}%", rate),
    ]);

    format_table_with_style(rows, config::summary_column_widths(), TableStyle::summary())
}
