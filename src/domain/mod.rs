pub mod dates;
pub mod models;
mod roster;
pub mod team;

pub use models::*;
pub use roster::Roster;
pub use team::{Pairing, TeamKey, pairing};
