//! Integration tests for the block model and its layout on A4 pages.

use recette_pdf::document::ContentBlock;
use recette_pdf::geometry::cm;
use recette_pdf::layout::{layout_document, DrawCommand};
use recette_pdf::DocumentBuilder;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn step_widths() -> Vec<f32> {
    vec![cm(1.0), cm(4.5), cm(4.5), cm(2.0), cm(3.0)]
}

fn first_text_position(commands: &[DrawCommand]) -> (f32, f32) {
    commands
        .iter()
        .find_map(|c| match c {
            DrawCommand::Text { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
        .unwrap()
}

// =============================================================================
// BUILDER TESTS
// =============================================================================

mod builder_tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut builder = DocumentBuilder::new();
        builder
            .title("Tests Fonctionnels")
            .heading1("1. Tests Connexion / Inscription")
            .spacer(cm(0.3))
            .paragraph("Cette section teste le système d'authentification.")
            .heading2("Test 1.1 : Se connecter avec un compte qui existe");
        builder.page_break();

        let document = builder.build();
        let kinds: Vec<&str> = document.blocks().iter().map(ContentBlock::kind).collect();
        assert_eq!(kinds, vec!["title", "heading1", "spacer", "paragraph", "heading2", "page break"]);
    }

    #[test]
    fn test_document_is_independent_of_later_builders() {
        let mut builder = DocumentBuilder::new();
        builder.paragraph("un");
        let first = builder.clone().build();
        builder.paragraph("deux");
        let second = builder.build();
        assert_eq!(first.blocks().len(), 1);
        assert_eq!(second.blocks().len(), 2);
    }
}

// =============================================================================
// A4 LAYOUT TESTS
// =============================================================================

mod a4_layout_tests {
    use super::*;

    #[test]
    fn test_title_baseline_at_frame_top() {
        let mut builder = DocumentBuilder::new();
        builder.title("Tests Fonctionnels");
        let pages = layout_document(&builder.build());
        let (_, y) = first_text_position(&pages[0].commands);
        let frame_top = 842.0 - cm(2.0);
        assert!((y - (frame_top - 24.0)).abs() < 1e-3);
    }

    #[test]
    fn test_paragraph_wraps_inside_frame() {
        let text = "Cette section teste la fonction de recherche qui permet de trouver rapidement un abonnement \
            parmi tous ceux qu'on a enregistrés. La barre de recherche est un champ de texte où on peut taper \
            le nom d'un service et l'application affiche uniquement les abonnements correspondants.";
        let mut builder = DocumentBuilder::new();
        builder.paragraph(text);
        let pages = layout_document(&builder.build());

        let lines: Vec<(f32, f32)> = pages[0]
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert!(lines.len() >= 2);
        for pair in lines.windows(2) {
            assert!((pair[0].0 - cm(1.5)).abs() < 1e-3);
            assert!((pair[0].1 - pair[1].1 - 12.0).abs() < 1e-3);
        }
        let joined = pages[0].texts().join(" ");
        assert_eq!(joined, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_step_table_is_centered() {
        let mut builder = DocumentBuilder::new();
        builder
            .table_rows(
                vec![
                    row(&["N°", "Action", "Résultat attendu", "Résultat\nobtenu", "Commentaires"]),
                    row(&["1", "Je tape \"Bonjour\"", "Le bot répond", "✅ OK", "rapide"]),
                ],
                step_widths(),
            )
            .unwrap();
        let pages = layout_document(&builder.build());

        let frame_left = cm(1.5);
        let frame_width = 595.0 - 2.0 * cm(1.5);
        let expected_x = frame_left + (frame_width - cm(15.0)) / 2.0;
        match &pages[0].commands[0] {
            DrawCommand::FillRect { rect, .. } => {
                assert!((rect.x - expected_x).abs() < 1e-3);
                assert!((rect.width - cm(15.0)).abs() < 1e-3);
            },
            other => panic!("expected header background, got {:?}", other),
        }
    }

    #[test]
    fn test_heading_moves_to_next_page_with_its_space() {
        let mut builder = DocumentBuilder::new();
        for i in 0..58 {
            builder.paragraph(format!("ligne {}", i));
        }
        builder.heading1("Bilan des Tests");
        let pages = layout_document(&builder.build());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].texts(), vec!["Bilan des Tests"]);

        // Space before is dropped at the top of the page
        let (_, y) = first_text_position(&pages[1].commands);
        assert!((y - (842.0 - cm(2.0) - 16.0)).abs() < 1e-3);
    }
}
