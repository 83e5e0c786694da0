use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::AppState;
use super::components::{
    CardsComponent, Component, ConfirmComponent, FooterComponent, SearchComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let full = f.area();

    // The footer grows a line when a search term is active (match count).
    let footer_height = if state.roster.search().is_empty() { 2 } else { 3 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(full);

    let search = SearchComponent;
    search.render(f, main_chunks[0], state);

    let cards = CardsComponent;
    cards.render(f, main_chunks[1], state);

    let footer = FooterComponent;
    footer.render(f, main_chunks[2], state);

    // The confirmation dialog overlays everything else.
    if state.delete_prompt_target().is_some() {
        let confirm = ConfirmComponent;
        confirm.render(f, full, state);
    }
}
