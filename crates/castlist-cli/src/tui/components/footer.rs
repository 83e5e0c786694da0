use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::{AppState, Focus};

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let hints = if state.delete_prompt_target().is_some() {
            "y confirm · n cancel"
        } else if state.focus == Focus::Search {
            "type to filter · enter/esc back to list"
        } else if state.editing_id().is_some() {
            "tab next field · ←/→ pick gender · enter save · esc cancel"
        } else {
            "/ search · j/k move · enter expand · e edit · d delete · q quit"
        };

        let mut lines = vec![Line::from(hints)];
        if !state.roster.search().is_empty() {
            let matching = state
                .roster
                .profiles()
                .iter()
                .filter(|p| castlist_engine::Roster::matches(p, state.roster.search()))
                .count();
            lines.push(Line::from(format!(
                "{} of {} match \"{}\" (non-matches listed below)",
                matching,
                state.roster.len(),
                state.roster.search()
            )));
        }

        let footer = Paragraph::new(lines)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );

        f.render_widget(footer, area);
    }
}
