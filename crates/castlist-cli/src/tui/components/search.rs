use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::{AppState, Focus};

pub(crate) struct SearchComponent;

impl Component for SearchComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Search;

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                " Search ",
                border_style.add_modifier(Modifier::BOLD),
            ));

        let mut spans = Vec::new();
        if state.roster.search().is_empty() && !focused {
            spans.push(Span::styled(
                "press / to filter by name",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(
                state.roster.search().to_string(),
                Style::default().fg(Color::White),
            ));
        }
        if focused {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
