//! Generate the functional test report.
//!
//! Writes `TESTS_FONCTIONNELS.pdf` in the working directory.
//!
//! Usage:
//!   cargo run --release --bin generate_report
//!   RUST_LOG=debug cargo run --bin generate_report

use recette_pdf::report::{self, config::OUTPUT_PATH};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let document = report::build_report()?;
    let artifact = recette_pdf::render(&document)?;
    artifact.save(OUTPUT_PATH)?;

    log::info!("{} pages", artifact.page_count());
    println!("PDF généré avec succès : {}", OUTPUT_PATH);
    Ok(())
}
