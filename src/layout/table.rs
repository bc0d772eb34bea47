//! Table drawing: backgrounds, grid and centered cell text.

use super::DrawCommand;
use crate::geometry::{Point, Rect};
use crate::table::{CellAlign, CellVAlign, TableBlock};
use crate::text::TextRun;

/// Draw the header row followed by body rows `body` of `table`.
///
/// `x` is the left edge of the table and `top` the top edge of the header.
/// Backgrounds are painted first, then the grid, then the text.
pub fn draw_rows(table: &TableBlock, body: std::ops::Range<usize>, x: f32, top: f32) -> Vec<DrawCommand> {
    let rows: Vec<usize> = std::iter::once(0).chain(body).collect();
    let widths = table.column_widths();
    let total_width = table.total_width();

    let mut row_tops = Vec::with_capacity(rows.len() + 1);
    let mut y = top;
    for &r in &rows {
        row_tops.push(y);
        y -= table.row_height(r);
    }
    let bottom = y;
    row_tops.push(bottom);

    let mut commands = Vec::new();

    for (i, &r) in rows.iter().enumerate() {
        if let Some(color) = table.row_background(r) {
            let height = row_tops[i] - row_tops[i + 1];
            commands.push(DrawCommand::FillRect {
                rect: Rect::new(x, row_tops[i + 1], total_width, height),
                color,
            });
        }
    }

    if let Some(grid) = table.style().grid {
        for &y in &row_tops {
            commands.push(DrawCommand::Line {
                from: Point::new(x, y),
                to: Point::new(x + total_width, y),
                width: grid.width,
                color: grid.color,
            });
        }
        let mut col_x = x;
        for edge in 0..=widths.len() {
            commands.push(DrawCommand::Line {
                from: Point::new(col_x, top),
                to: Point::new(col_x, bottom),
                width: grid.width,
                color: grid.color,
            });
            if let Some(w) = widths.get(edge) {
                col_x += w;
            }
        }
    }

    for (i, &r) in rows.iter().enumerate() {
        let row_top = row_tops[i];
        let row_bottom = row_tops[i + 1];
        let mut col_x = x;
        for (cell, &width) in table.rows()[r].iter().zip(widths) {
            let cell_rect = Rect::new(col_x, row_bottom, width, row_top - row_bottom);
            draw_cell(table, r, cell, &cell_rect, &mut commands);
            col_x += width;
        }
    }

    commands
}

/// Height of the header plus body rows `body`.
pub fn rows_height(table: &TableBlock, body: std::ops::Range<usize>) -> f32 {
    table.row_height(0) + body.map(|r| table.row_height(r)).sum::<f32>()
}

fn draw_cell(table: &TableBlock, row: usize, cell: &str, rect: &Rect, out: &mut Vec<DrawCommand>) {
    let style = table.row_style(row);
    let padding = style.padding;
    let leading = style.line_height();
    let lines: Vec<&str> = cell.split('\n').collect();
    let n = lines.len() as f32;

    // Baseline of the first line
    let first_baseline = match table.style().valign {
        CellVAlign::Top => rect.top() - padding.top - style.font_size,
        CellVAlign::Middle => {
            rect.bottom() + (padding.bottom + rect.height - padding.top + n * leading) / 2.0 - style.font_size
        },
        CellVAlign::Bottom => rect.bottom() + padding.bottom + n * leading - style.font_size,
    };

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let text_width = style.font.text_width(line, style.font_size);
        let x = match table.style().align {
            CellAlign::Left => rect.left() + padding.left,
            CellAlign::Center => rect.left() + (rect.width + padding.left - padding.right) / 2.0 - text_width / 2.0,
            CellAlign::Right => rect.right() - padding.right - text_width,
        };
        out.push(DrawCommand::Text {
            x,
            y: first_baseline - i as f32 * leading,
            font_size: style.font_size,
            color: style.text_color,
            runs: vec![TextRun {
                text: line.to_string(),
                font: style.font,
            }],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::format_table;

    fn table() -> TableBlock {
        format_table(
            vec![
                vec!["N°".to_string(), "Action".to_string()],
                vec!["1".to_string(), "Je clique".to_string()],
                vec!["2".to_string(), "Je tape\nmon email".to_string()],
            ],
            vec![30.0, 120.0],
        )
        .unwrap()
    }

    fn texts(commands: &[DrawCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { runs, .. } => Some(runs.iter().map(|r| r.text.as_str()).collect()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_text_in_row_order() {
        let t = table();
        let commands = draw_rows(&t, 1..3, 100.0, 700.0);
        assert_eq!(texts(&commands), vec!["N°", "Action", "1", "Je clique", "2", "Je tape", "mon email"]);
    }

    #[test]
    fn test_backgrounds_then_grid_then_text() {
        let t = table();
        let commands = draw_rows(&t, 1..3, 100.0, 700.0);
        let first_line = commands.iter().position(|c| matches!(c, DrawCommand::Line { .. })).unwrap();
        let last_fill = commands.iter().rposition(|c| matches!(c, DrawCommand::FillRect { .. })).unwrap();
        let first_text = commands.iter().position(|c| matches!(c, DrawCommand::Text { .. })).unwrap();
        assert!(last_fill < first_line);
        assert!(first_line < first_text);
        // 3 fills, 4 horizontal + 3 vertical grid lines
        assert_eq!(last_fill, 2);
        assert_eq!(first_text - first_line, 7);
    }

    #[test]
    fn test_header_only_segment() {
        let t = table();
        let commands = draw_rows(&t, 1..1, 0.0, 500.0);
        assert_eq!(texts(&commands), vec!["N°", "Action"]);
        assert!((rows_height(&t, 1..1) - t.row_height(0)).abs() < 1e-5);
    }

    #[test]
    fn test_cell_text_is_centered() {
        let t = table();
        let commands = draw_rows(&t, 1..1, 0.0, 500.0);
        match commands.iter().find(|c| matches!(c, DrawCommand::Text { .. })) {
            Some(DrawCommand::Text { x, y, .. }) => {
                let w = t.row_style(0).font.text_width("N°", 9.0);
                assert!((x - (15.0 - w / 2.0)).abs() < 1e-4);
                // middle: bottom + (8 + 26.8 - 8 + 10.8) / 2 - 9
                let bottom: f32 = 500.0 - 26.8;
                assert!((y - (bottom + (8.0 + 26.8 - 8.0 + 10.8) / 2.0 - 9.0)).abs() < 1e-3);
            },
            other => panic!("unexpected command {:?}", other),
        }
    }
}
