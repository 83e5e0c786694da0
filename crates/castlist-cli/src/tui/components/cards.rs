use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::Component;
use crate::tui::app::{AppState, EditField};
use castlist_engine::{CardMode, CardState};
use castlist_types::Profile;

pub(crate) struct CardsComponent;

impl Component for CardsComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let visible = state.roster.visible();
        if visible.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "Roster is empty. Run `castlist init` to seed a sample roster.",
                Style::default().fg(Color::DarkGray),
            )));
            f.render_widget(empty, area);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        let mut selected_line = 0usize;

        for (idx, profile) in visible.iter().enumerate() {
            let selected = idx == state.selected;
            if selected {
                selected_line = lines.len();
            }

            let card = state.card(profile.id);
            let expanded = state.roster.is_expanded(profile.id);

            lines.push(header_line(profile, expanded, selected));
            if expanded {
                match card.mode() {
                    CardMode::Editing(_) => {
                        push_edit_body(&mut lines, profile, &card, state);
                    }
                    CardMode::Display => {
                        push_display_body(&mut lines, profile, state);
                    }
                }
            }
            lines.push(Line::from(""));
        }

        // Keep the selected header roughly centered once the list outgrows
        // the viewport.
        let height = area.height as usize;
        let offset = if height == 0 || lines.len() <= height {
            0
        } else {
            selected_line
                .saturating_sub(height / 2)
                .min(lines.len().saturating_sub(height))
        };

        let paragraph = Paragraph::new(Text::from(lines)).scroll((offset as u16, 0));
        f.render_widget(paragraph, area);
    }
}

fn header_line(profile: &Profile, expanded: bool, selected: bool) -> Line<'static> {
    let marker = if expanded { "-" } else { "+" };

    let name_style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if expanded {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(format!(" {} ", marker), Style::default().fg(Color::Cyan)),
        Span::styled(format!(" {} ", profile.full_name()), name_style),
    ])
}

fn push_display_body(lines: &mut Vec<Line<'static>>, profile: &Profile, state: &AppState) {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White);

    lines.push(Line::from(vec![
        Span::styled("     Age: ", label),
        Span::styled(profile.age_on(state.today).to_string(), value),
    ]));
    lines.push(Line::from(vec![
        Span::styled("     Gender: ", label),
        Span::styled(profile.gender.clone(), value),
    ]));
    lines.push(Line::from(vec![
        Span::styled("     Country: ", label),
        Span::styled(profile.country.clone(), value),
    ]));
    lines.push(Line::from(vec![
        Span::styled("     Description: ", label),
        Span::styled(profile.description.clone(), value),
    ]));

    if CardState::actions_offered(profile, state.today) {
        lines.push(Line::from(vec![
            Span::styled("     [e] ", Style::default().fg(Color::Green)),
            Span::styled("edit   ", label),
            Span::styled("[d] ", Style::default().fg(Color::Red)),
            Span::styled("delete", label),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "     view only (under 18)",
            Style::default().fg(Color::DarkGray),
        )));
    }
}

fn push_edit_body(
    lines: &mut Vec<Line<'static>>,
    profile: &Profile,
    card: &CardState,
    state: &AppState,
) {
    let Some(draft) = card.draft() else {
        return;
    };
    let status = card.status(profile);

    lines.push(field_line(
        "Gender",
        &format!("‹ {} ›", draft.gender),
        state.edit_field == EditField::Gender,
    ));
    lines.push(field_line(
        "Country",
        &draft.country,
        state.edit_field == EditField::Country,
    ));
    if !status.country_valid {
        lines.push(error_line("Country must only contain letters."));
    }
    lines.push(field_line(
        "Description",
        &draft.description,
        state.edit_field == EditField::Description,
    ));
    if !status.description_valid {
        lines.push(error_line("Description cannot be empty."));
    }

    let save_style = if card.can_save(profile, state.today) {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(vec![
        Span::styled("     [enter] save", save_style),
        Span::styled("   [esc] cancel", Style::default().fg(Color::Gray)),
    ]));
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(format!("     {:<13}", format!("{}:", label)), label_style),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ];
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("     {}", message),
        Style::default().fg(Color::Red),
    ))
}
