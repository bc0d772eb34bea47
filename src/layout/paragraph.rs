//! Paragraph layout: markup parsing, wrapping and line placement.

use super::DrawCommand;
use crate::document::TextBlock;
use crate::geometry::Rect;
use crate::style::{ParagraphStyle, TextAlign};
use crate::text::{markup, wrap_inlines, Line};

/// A text block wrapped to a frame width.
#[derive(Debug, Clone)]
pub struct ParagraphLayout {
    /// Wrapped lines; empty lines come from consecutive `<br/>`
    pub lines: Vec<Line>,
    /// Style of the block
    pub style: ParagraphStyle,
}

impl ParagraphLayout {
    /// Wrap `block` to `width`.
    pub fn new(block: &TextBlock, width: f32) -> Self {
        let inlines = markup::parse(&block.text);
        let lines = wrap_inlines(&inlines, block.style.weight, block.style.font_size, width);
        Self {
            lines,
            style: block.style.clone(),
        }
    }

    /// Height of `count` lines.
    pub fn lines_height(&self, count: usize) -> f32 {
        count as f32 * self.style.leading
    }

    /// Height of the whole block, without space before or after.
    pub fn height(&self) -> f32 {
        self.lines_height(self.lines.len())
    }

    /// Number of lines that fit in `available` points.
    pub fn lines_fitting(&self, available: f32) -> usize {
        if self.style.leading <= 0.0 {
            return self.lines.len();
        }
        let fitting = ((available + super::EPSILON) / self.style.leading).floor();
        (fitting.max(0.0) as usize).min(self.lines.len())
    }

    /// Draw lines `range` with the first line's top at `top`, inside `frame`.
    ///
    /// Baseline of line `i` is `top - i * leading - font_size`.
    pub fn draw(&self, range: std::ops::Range<usize>, top: f32, frame: &Rect) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        for (i, line) in self.lines[range].iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let x = match self.style.align {
                TextAlign::Left => frame.left(),
                TextAlign::Center => frame.left() + (frame.width - line.width) / 2.0,
                TextAlign::Right => frame.right() - line.width,
            };
            let y = top - i as f32 * self.style.leading - self.style.font_size;
            commands.push(DrawCommand::Text {
                x,
                y,
                font_size: self.style.font_size,
                color: self.style.color,
                runs: line.runs.clone(),
            });
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleSheet;

    fn frame() -> Rect {
        Rect::new(50.0, 50.0, 400.0, 700.0)
    }

    #[test]
    fn test_height_is_lines_times_leading() {
        let styles = StyleSheet::default();
        let block = TextBlock::new("un<br/>deux<br/>trois", styles.normal);
        let layout = ParagraphLayout::new(&block, 400.0);
        assert_eq!(layout.lines.len(), 3);
        assert_eq!(layout.height(), 36.0);
        assert_eq!(layout.lines_fitting(25.0), 2);
        assert_eq!(layout.lines_fitting(36.0), 3);
        assert_eq!(layout.lines_fitting(500.0), 3);
    }

    #[test]
    fn test_draw_baselines() {
        let styles = StyleSheet::default();
        let block = TextBlock::new("a<br/>b", styles.normal);
        let layout = ParagraphLayout::new(&block, 400.0);
        let commands = layout.draw(0..2, 700.0, &frame());
        let ys: Vec<f32> = commands
            .iter()
            .map(|c| match c {
                DrawCommand::Text { y, .. } => *y,
                _ => panic!("unexpected command"),
            })
            .collect();
        assert_eq!(ys, vec![691.0, 679.0]);
    }

    #[test]
    fn test_centered_title() {
        let styles = StyleSheet::default();
        let block = TextBlock::new("Tests Fonctionnels", styles.title);
        let layout = ParagraphLayout::new(&block, 400.0);
        let commands = layout.draw(0..1, 700.0, &frame());
        match &commands[0] {
            DrawCommand::Text { x, .. } => {
                let expected = 50.0 + (400.0 - layout.lines[0].width) / 2.0;
                assert!((x - expected).abs() < 1e-4);
            },
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_empty_lines_are_not_drawn() {
        let styles = StyleSheet::default();
        let block = TextBlock::new("a<br/><br/>b", styles.normal);
        let layout = ParagraphLayout::new(&block, 400.0);
        assert_eq!(layout.lines.len(), 3);
        assert_eq!(layout.draw(0..3, 700.0, &frame()).len(), 2);
    }
}
