use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::app::{FormField, FormState, StatusKind, StatusMessage};
use crate::ui::line_input::LineInput;
use crate::ui::theme::{Theme, ThemeColors};
use crate::vocab::PartOfSpeech;

pub struct AddWordForm<'a> {
    pub form: &'a FormState,
    pub status: Option<&'a StatusMessage>,
    pub theme: &'a Theme,
}

impl<'a> AddWordForm<'a> {
    pub fn new(form: &'a FormState, status: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self {
            form,
            status,
            theme,
        }
    }

    fn field_lines(&self, field: FormField, colors: &ThemeColors) -> Vec<Line<'a>> {
        let focused = self.form.focused() == field;
        let indicator = if focused { " > " } else { "   " };
        let label_style = if focused {
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.fg())
        };

        if field == FormField::Submit {
            let button_style = if focused {
                Style::default()
                    .fg(colors.bg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.accent())
            };
            return vec![Line::from(vec![
                Span::raw(indicator),
                Span::styled(format!("[ {} ]", field.label()), button_style),
            ])];
        }

        let label = Line::from(Span::styled(
            format!("{indicator}{}:", field.label()),
            label_style,
        ));

        let value = match self.form.input(field) {
            Some(input) => input_line(input, focused, colors),
            None => pos_selector_line(self.form.part_of_speech, focused, colors),
        };
        vec![label, value]
    }
}

fn input_line<'a>(input: &LineInput, focused: bool, colors: &ThemeColors) -> Line<'a> {
    let text_style = Style::default().fg(colors.fg());
    if !focused {
        return Line::from(vec![
            Span::raw("     "),
            Span::styled(input.value().to_string(), text_style),
        ]);
    }

    let cursor_style = Style::default().fg(colors.bg()).bg(colors.accent());
    let (before, cursor, after) = input.render_parts();
    let cursor_text = cursor.map_or_else(|| " ".to_string(), |c| c.to_string());
    Line::from(vec![
        Span::raw("     "),
        Span::styled(before.to_string(), text_style),
        Span::styled(cursor_text, cursor_style),
        Span::styled(after.to_string(), text_style),
    ])
}

fn pos_selector_line<'a>(current: PartOfSpeech, focused: bool, colors: &ThemeColors) -> Line<'a> {
    let mut spans = vec![Span::raw("     ")];
    if focused {
        spans.push(Span::styled("< ", Style::default().fg(colors.accent())));
    }
    for (i, pos) in PartOfSpeech::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *pos == current {
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(colors.muted())
        };
        spans.push(Span::styled(pos.as_str(), style));
    }
    if focused {
        spans.push(Span::styled(" >", Style::default().fg(colors.accent())));
    }
    Line::from(spans)
}

impl Widget for AddWordForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Add a New Word ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(inner);

        let mut lines: Vec<Line> = Vec::new();
        for field in FormField::ALL {
            if field == FormField::Submit {
                lines.push(Line::default());
            }
            lines.extend(self.field_lines(field, colors));
        }
        Paragraph::new(lines).render(layout[0], buf);

        if let Some(status) = self.status {
            let color = match status.kind {
                StatusKind::Success => colors.success(),
                StatusKind::Warning => colors.warning(),
                StatusKind::Error => colors.error(),
            };
            let line = Line::from(Span::styled(
                format!("  {}", status.text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            Paragraph::new(line).render(layout[1], buf);
        }
    }
}
