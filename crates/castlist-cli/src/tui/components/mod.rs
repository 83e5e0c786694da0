mod cards;
mod confirm;
mod footer;
mod search;

use super::app::AppState;
use ratatui::{Frame, layout::Rect};

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) use cards::CardsComponent;
pub(crate) use confirm::ConfirmComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use search::SearchComponent;
