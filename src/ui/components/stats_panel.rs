use std::collections::BTreeSet;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::scoring::{Badge, VOCAB_CHAMPION_POINTS, WORD_COLLECTOR_ENTRIES};
use crate::ui::components::badge_meter::BadgeMeter;
use crate::ui::theme::Theme;

pub struct StatsPanel<'a> {
    pub total_entries: usize,
    pub total_points: i64,
    pub badges: &'a BTreeSet<Badge>,
    pub theme: &'a Theme,
}

impl<'a> StatsPanel<'a> {
    pub fn new(
        total_entries: usize,
        total_points: i64,
        badges: &'a BTreeSet<Badge>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            total_entries,
            total_points,
            badges,
            theme,
        }
    }
}

fn badge_icon(badge: Badge) -> &'static str {
    match badge {
        Badge::WordCollector => "🏅",
        Badge::VocabChampion => "🏆",
    }
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" My Stats ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(Badge::ALL.len() as u16 + 1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let metric_style = Style::default()
            .fg(colors.accent())
            .add_modifier(Modifier::BOLD);
        let totals = vec![
            Line::from(vec![
                Span::styled("  Total Words:  ", Style::default().fg(colors.fg())),
                Span::styled(self.total_entries.to_string(), metric_style),
            ]),
            Line::from(vec![
                Span::styled("  Total Points: ", Style::default().fg(colors.fg())),
                Span::styled(self.total_points.to_string(), metric_style),
            ]),
        ];
        Paragraph::new(totals).render(layout[0], buf);

        let badge_lines: Vec<Line> = Badge::ALL
            .iter()
            .map(|&badge| {
                if self.badges.contains(&badge) {
                    Line::from(Span::styled(
                        format!("  {} Badge Unlocked: {}!", badge_icon(badge), badge.label()),
                        Style::default()
                            .fg(colors.success())
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  🔒 {} ({})", badge.label(), badge.requirement()),
                        Style::default()
                            .fg(colors.muted())
                            .add_modifier(Modifier::DIM),
                    ))
                }
            })
            .collect();
        Paragraph::new(badge_lines).render(layout[1], buf);

        BadgeMeter::new(
            Badge::WordCollector.label(),
            self.total_entries as i64,
            WORD_COLLECTOR_ENTRIES as i64,
            self.theme,
        )
        .render(layout[2], buf);
        BadgeMeter::new(
            Badge::VocabChampion.label(),
            self.total_points,
            VOCAB_CHAMPION_POINTS,
            self.theme,
        )
        .render(layout[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(panel: StatsPanel) -> String {
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_totals_and_unlocked_badges() {
        let theme = Theme::default();
        let badges = BTreeSet::from([Badge::WordCollector]);
        let text = rendered(StatsPanel::new(10, 100, &badges, &theme));
        assert!(text.contains("Total Words:  10"));
        assert!(text.contains("Total Points: 100"));
        assert!(text.contains("Badge Unlocked: Word Collector!"));
        assert!(!text.contains("Badge Unlocked: Vocab Champion!"));
    }

    #[test]
    fn locked_badges_show_requirement() {
        let theme = Theme::default();
        let badges = BTreeSet::new();
        let text = rendered(StatsPanel::new(0, 0, &badges, &theme));
        assert!(text.contains("add 10 words"));
        assert!(text.contains("reach 100 points"));
    }
}
