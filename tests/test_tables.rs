//! Integration tests for table formatting.
//!
//! Tests shape validation, styling and the table rendering path.

use recette_pdf::table::{CellVAlign, TableStyle};
use recette_pdf::{format_table, format_table_with_style, render, DocumentBuilder, Error};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn step_header() -> Vec<String> {
    row(&["N°", "Action", "Résultat attendu", "Résultat\nobtenu", "Commentaires"])
}

fn step_widths() -> Vec<f32> {
    vec![28.35, 127.56, 127.56, 56.69, 85.04]
}

// =============================================================================
// SHAPE VALIDATION TESTS
// =============================================================================

mod shape_tests {
    use super::*;

    #[test]
    fn test_well_formed_table() {
        let rows = vec![
            step_header(),
            row(&["1", "J'ouvre la page\nlogin.html", "La page de connexion\ns'affiche", "✅ OK", "-"]),
        ];
        let table = format_table(rows, step_widths()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 5);
        assert_eq!(table.header()[0], "N°");
    }

    #[test]
    fn test_short_data_row_is_structural_error() {
        let rows = vec![
            step_header(),
            row(&["1", "Je clique", "Ça marche", "✅ OK", "-"]),
            row(&["J'attends", "Y'a un truc qui tourne", "✅ OK", "chargement"]),
        ];
        match format_table(rows, step_widths()) {
            Err(Error::Structural { row, expected, found }) => {
                assert_eq!(row, 2);
                assert_eq!(expected, 5);
                assert_eq!(found, 4);
            },
            other => panic!("expected structural error, got {:?}", other.map(|t| t.row_count())),
        }
    }

    #[test]
    fn test_structural_error_appends_nothing() {
        let mut builder = DocumentBuilder::new();
        builder.title("Tests Fonctionnels");
        let result = builder.table_rows(vec![step_header(), row(&["1", "a", "b", "c"])], step_widths());
        let err = result.err().unwrap();
        assert!(err.is_structural());
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_header_wider_than_widths() {
        let err = format_table(vec![step_header()], vec![50.0, 50.0]).unwrap_err();
        assert!(matches!(err, Error::Structural { row: 0, expected: 2, found: 5 }));
    }

    #[test]
    fn test_empty_table() {
        assert!(matches!(format_table(Vec::new(), vec![10.0]), Err(Error::EmptyTable)));
    }

    #[test]
    fn test_invalid_width() {
        let err = format_table(vec![row(&["a", "b"])], vec![10.0, f32::NAN]).unwrap_err();
        assert!(matches!(err, Error::InvalidColumnWidth { column: 1, .. }));
        let err = format_table(vec![row(&["a"])], vec![0.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidColumnWidth { column: 0, .. }));
    }
}

// =============================================================================
// STYLE TESTS
// =============================================================================

mod style_tests {
    use super::*;
    use recette_pdf::style::Color;

    #[test]
    fn test_default_banding() {
        let rows = vec![row(&["h"]), row(&["a"]), row(&["b"]), row(&["c"])];
        let table = format_table(rows, vec![50.0]).unwrap();
        assert_eq!(table.row_background(0), Some(Color::from_hex(0x3498DB)));
        assert_eq!(table.row_background(1), Some(Color::white()));
        assert_eq!(table.row_background(2), Some(Color::from_hex(0xF8F9FA)));
        assert_eq!(table.row_background(3), Some(Color::white()));
    }

    #[test]
    fn test_multiline_row_is_taller() {
        let rows = vec![step_header(), row(&["1", "une ligne", "-", "-", "-"]), row(&["2", "deux\nlignes", "-", "-", "-"])];
        let table = format_table(rows, step_widths()).unwrap();
        let single = table.row_height(1);
        let double = table.row_height(2);
        assert!((double - single - 8.0 * 1.2).abs() < 1e-4);
    }

    #[test]
    fn test_summary_total_row() {
        let rows = vec![
            row(&["Partie testée", "Nombre tests", "Réussis", "Remarques"]),
            row(&["Recherche", "2", "2", "OK"]),
            row(&["TOTAL", "2", "2", "100%"]),
        ];
        let table = format_table_with_style(rows, vec![141.7, 85.0, 70.9, 113.4], TableStyle::summary()).unwrap();
        assert_eq!(table.style().valign, CellVAlign::Bottom);
        assert_eq!(table.row_background(2), Some(Color::from_hex(0xECF0F1)));
        assert!(table.row_style(2).font.is_bold());
        assert!(!table.row_style(1).font.is_bold());
    }
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn cell_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Zéà0-9 ]{0,12}"
    }

    /// Rows all of length `columns`
    fn grid_strategy() -> impl Strategy<Value = (usize, Vec<Vec<String>>)> {
        (1usize..6).prop_flat_map(|columns| {
            (
                Just(columns),
                prop::collection::vec(prop::collection::vec(cell_strategy(), columns), 1..12),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_well_formed_tables_format((columns, rows) in grid_strategy()) {
            let count = rows.len();
            let widths = vec![40.0; columns];
            let table = format_table(rows, widths);
            prop_assert!(table.is_ok());
            prop_assert_eq!(table.unwrap().row_count(), count);
        }

        #[test]
        fn prop_one_bad_row_is_rejected(
            (columns, rows) in grid_strategy(),
            index in any::<prop::sample::Index>(),
            extra in 1usize..3,
            shorten in any::<bool>(),
        ) {
            let mut rows = rows;
            let bad = index.index(rows.len());
            if shorten {
                rows[bad].pop();
            } else {
                for _ in 0..extra {
                    rows[bad].push("x".to_string());
                }
            }
            let widths = vec![40.0; columns];
            match format_table(rows, widths) {
                Err(Error::Structural { row, expected, .. }) => {
                    prop_assert_eq!(row, bad);
                    prop_assert_eq!(expected, columns);
                },
                Err(other) => prop_assert!(false, "unexpected error {}", other),
                Ok(_) => prop_assert!(false, "malformed table accepted"),
            }
        }
    }
}

// =============================================================================
// RENDERING TESTS
// =============================================================================

mod render_tests {
    use super::*;

    #[test]
    fn test_tall_table_splits_with_header_repeated() {
        let mut rows = vec![step_header()];
        for i in 1..=80 {
            rows.push(row(&[&i.to_string(), "Je clique\nsur le bouton", "Ça marche", "✅ OK", "-"]));
        }
        let mut builder = DocumentBuilder::new();
        builder.table_rows(rows, step_widths()).unwrap();
        let artifact = render(&builder.build()).unwrap();
        assert!(artifact.page_count() > 1);

        let content = String::from_utf8_lossy(artifact.bytes());
        assert_eq!(content.matches("(Commentaires) Tj").count(), artifact.page_count());
    }
}
