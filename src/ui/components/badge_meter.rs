use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

/// Bordered bar showing `current` out of `target`.
pub struct BadgeMeter<'a> {
    pub label: String,
    pub current: i64,
    pub target: i64,
    pub theme: &'a Theme,
}

impl<'a> BadgeMeter<'a> {
    pub fn new(label: &str, current: i64, target: i64, theme: &'a Theme) -> Self {
        Self {
            label: label.to_string(),
            current,
            target,
            theme,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.target <= 0 {
            return 1.0;
        }
        (self.current as f64 / self.target as f64).clamp(0.0, 1.0)
    }
}

impl Widget for BadgeMeter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_width = (self.ratio() * inner.width as f64) as u16;
        let label = format!("{} / {}", self.current.min(self.target), self.target);

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped() {
        let theme = Theme::default();
        assert_eq!(BadgeMeter::new("x", 5, 10, &theme).ratio(), 0.5);
        assert_eq!(BadgeMeter::new("x", 250, 100, &theme).ratio(), 1.0);
        assert_eq!(BadgeMeter::new("x", 0, 0, &theme).ratio(), 1.0);
    }

    #[test]
    fn renders_count_label() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        BadgeMeter::new("Words", 3, 10, &theme).render(area, &mut buf);
        let row: String = (0..20).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("3 / 10"), "{row:?}");
    }
}
