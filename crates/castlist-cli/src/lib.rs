// NOTE: castlist Architecture Rationale
//
// Why one in-memory roster (not a database)?
// - The data source is a single static JSON file read once at startup
// - Every mutation is session-local by design; nothing writes back
// - Reordering on search is a pure function of (collection, term), so the
//   canonical Vec is the only state worth keeping
//
// Why does search reorder instead of filter?
// - Matches float to the top in their original relative order; non-matches
//   stay visible below in theirs (a stable partition)
// - The list never appears to "lose" records while typing
//
// Why is card state per-record and expansion roster-owned?
// - Draft values, validity, dirtiness, and the delete prompt belong to one
//   card; keeping them per-record means two mid-edit cards cannot interfere
// - The at-most-one-expanded invariant is enforced in exactly one place by
//   making the expanded id a single roster-owned value

mod args;
mod commands;
mod handlers;
mod tui;
mod types;
mod views;

pub use args::{Cli, Commands};
pub use commands::run;
