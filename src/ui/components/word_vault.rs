use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget};

use crate::store::schema::COLUMNS;
use crate::ui::theme::Theme;
use crate::vocab::VocabEntry;

/// Read-only table of every entry in insertion order.
pub struct WordVault<'a> {
    pub entries: &'a [VocabEntry],
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> WordVault<'a> {
    pub fn new(entries: &'a [VocabEntry], selected: usize, theme: &'a Theme) -> Self {
        Self {
            entries,
            selected,
            theme,
        }
    }
}

impl Widget for WordVault<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" Word Vault ({}) ", self.entries.len()))
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));

        if self.entries.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            let msg = Paragraph::new(Line::from(Span::styled(
                "  Your vault is empty. Add your first word to get started!",
                Style::default().fg(colors.muted()),
            )));
            msg.render(inner, buf);
            return;
        }

        let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
            .style(
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            );

        let rows = self.entries.iter().map(|e| {
            Row::new([
                Cell::from(e.word.as_str()),
                Cell::from(e.meaning.as_str()),
                Cell::from(e.sentence.as_str()),
                Cell::from(e.part_of_speech.as_str()),
                Cell::from(e.synonyms.as_str()),
                Cell::from(e.notes.as_str()),
                Cell::from(e.points.to_string()),
                Cell::from(e.date_added.format("%Y-%m-%d").to_string()),
            ])
            .style(Style::default().fg(colors.fg()))
        });

        let widths = [
            Constraint::Percentage(12),
            Constraint::Percentage(20),
            Constraint::Percentage(22),
            Constraint::Length(14),
            Constraint::Percentage(12),
            Constraint::Percentage(10),
            Constraint::Length(6),
            Constraint::Length(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(Style::default().bg(colors.selection_bg()));

        let selected = self.selected.min(self.entries.len() - 1);
        let mut state = TableState::default().with_selected(Some(selected));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
