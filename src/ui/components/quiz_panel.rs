use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::app::QuizState;
use crate::engine::quiz::{QUIZ_REWARD, Question};
use crate::ui::theme::{Theme, ThemeColors};

pub struct QuizPanel<'a> {
    pub state: &'a QuizState,
    pub theme: &'a Theme,
}

impl<'a> QuizPanel<'a> {
    pub fn new(state: &'a QuizState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

fn question_lines<'a>(
    question: &'a Question,
    selected: usize,
    answered: bool,
    colors: &ThemeColors,
) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("  What does '{}' mean?", question.prompt_word),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let is_selected = i == selected;
        let marker = if is_selected { "(•)" } else { "( )" };
        let mut style = Style::default().fg(colors.fg());
        if answered && *option == question.correct_meaning {
            style = style.fg(colors.success()).add_modifier(Modifier::BOLD);
        } else if answered && is_selected {
            style = style.fg(colors.error());
        } else if is_selected {
            style = style.bg(colors.selection_bg()).add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(Span::styled(
            format!("  [{}] {marker} {option}", i + 1),
            style,
        )));
    }
    lines
}

impl Widget for QuizPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Quiz Time ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.state {
            QuizState::Unavailable(e) => vec![Line::from(Span::styled(
                format!("  ⚠ {e}"),
                Style::default().fg(colors.warning()),
            ))],
            QuizState::Asking { question, selected } => {
                question_lines(question, *selected, false, colors)
            }
            QuizState::Answered {
                question,
                selected,
                outcome,
            } => {
                let mut lines = question_lines(question, *selected, true, colors);
                lines.push(Line::default());
                let verdict = if outcome.correct {
                    Span::styled(
                        format!("  🎉 Correct! +{QUIZ_REWARD} points!"),
                        Style::default()
                            .fg(colors.success())
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(
                        format!(
                            "  Oops! The correct answer was: {}",
                            question.correct_meaning
                        ),
                        Style::default()
                            .fg(colors.error())
                            .add_modifier(Modifier::BOLD),
                    )
                };
                lines.push(Line::from(verdict));
                lines
            }
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
