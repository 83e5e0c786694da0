use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::Component;
use crate::tui::app::AppState;

pub(crate) struct ConfirmComponent;

impl Component for ConfirmComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let Some(id) = state.delete_prompt_target() else {
            return;
        };
        let name = state
            .roster
            .get(id)
            .map(|p| p.full_name())
            .unwrap_or_else(|| id.to_string());

        let dialog = centered_rect(area, 46, 7);
        f.render_widget(Clear, dialog);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightRed))
            .title(Span::styled(
                " Confirm delete ",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ));

        let text = Text::from(vec![
            Line::from(""),
            Line::from(format!("Are you sure you want to delete {}?", name)),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "[y] delete",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("      "),
                Span::styled(
                    "[n] cancel",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ]);

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, dialog);
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
