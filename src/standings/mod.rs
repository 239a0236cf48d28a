mod calculator;
mod types;

pub use calculator::{champion, champion_of, compute_standings, label_standings};
pub use types::StandingEntry;
