// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # recette_pdf
//!
//! Paginated PDF report of the functional tests ("Tests Fonctionnels") of
//! a subscription management application, built from a typed block model.
//!
//! ## Core Features
//!
//! - **Block model**: title, headings, paragraphs, tables, spacers and page
//!   breaks collected by a [`DocumentBuilder`] into an immutable [`Document`]
//! - **Table formatting**: header shading, row banding, grid and padding,
//!   with row/column consistency checked up front ([`format_table`])
//! - **Pagination**: automatic page starts, explicit page breaks, tables
//!   split by rows with a repeated header
//! - **PDF 1.7 output**: Base-14 fonts with WinAnsi encoding, Info
//!   dictionary, optional Flate compression, deterministic bytes
//!
//! ## Quick Start
//!
//! ```
//! use recette_pdf::{render, DocumentBuilder};
//!
//! # fn main() -> recette_pdf::Result<()> {
//! let mut builder = DocumentBuilder::new();
//! builder.title("Tests Fonctionnels");
//! builder.table_rows(
//!     vec![
//!         vec!["N°".into(), "Action".into()],
//!         vec!["1".into(), "J'ouvre login.html".into()],
//!     ],
//!     vec![30.0, 150.0],
//! )?;
//!
//! let artifact = render(&builder.build())?;
//! assert_eq!(artifact.page_count(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Core types
pub mod config;
pub mod document;
pub mod geometry;
pub mod object;
pub mod style;
pub mod table;

// Text measurement and encoding
pub mod text;

// Pagination
pub mod layout;

// PDF serialization
pub mod render;
pub mod writer;

// The test report itself
pub mod report;

// Re-exports
pub use document::{ContentBlock, Document, DocumentBuilder};
pub use error::{Error, Result};
pub use render::{render, render_with_config, Artifact};
pub use table::{format_table, format_table_with_style, TableBlock, TableStyle};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
