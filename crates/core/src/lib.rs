//! Core library for Roster — member records, the directory filter, and
//! roster file loading.
//!
//! Everything in this crate is UI-free and callable from unit tests without
//! instantiating any UI runtime.

pub mod filter;
pub mod roster;
pub mod types;

pub use filter::filter_members;
pub use roster::load_roster;
pub use types::{Role, User, UserId};
