pub mod card;
pub mod roster;
pub mod validate;

pub use card::{CardMode, CardState, DraftStatus, EditDraft};
pub use roster::Roster;
pub use validate::{country_is_valid, description_is_valid};
