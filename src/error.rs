//! Error types for the report builder.
//!
//! Two families of failure exist: a table whose shape is inconsistent
//! (detected while the document is assembled, before any rendering), and
//! I/O failures while the artifact is written.

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A table row does not have as many cells as the header/column widths.
    #[error("Malformed table: row {row} has {found} cells, expected {expected}")]
    Structural {
        /// Index of the offending row (0 is the header)
        row: usize,
        /// Number of columns declared by the column widths
        expected: usize,
        /// Number of cells found in the row
        found: usize,
    },

    /// A table was given no rows at all (a header row is required).
    #[error("Malformed table: at least a header row is required")]
    EmptyTable,

    /// A column width is zero, negative or not finite.
    #[error("Malformed table: column {column} has invalid width {width}")]
    InvalidColumnWidth {
        /// Column index
        column: usize,
        /// Offending width in points
        width: f32,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error comes from an inconsistent table shape.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::Structural { .. } | Error::EmptyTable | Error::InvalidColumnWidth { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_error_message() {
        let err = Error::Structural {
            row: 2,
            expected: 5,
            found: 4,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("row 2"));
        assert!(msg.contains("4 cells"));
        assert!(msg.contains("expected 5"));
        assert!(err.is_structural());
    }

    #[test]
    fn test_invalid_width_message() {
        let err = Error::InvalidColumnWidth {
            column: 1,
            width: -3.0,
        };
        assert!(format!("{}", err).contains("column 1"));
        assert!(err.is_structural());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_structural());
        assert!(format!("{}", err).contains("denied"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
