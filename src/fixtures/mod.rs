mod draw;
mod error;
mod live;
pub mod scheduler;

pub use draw::{PLAYERS, TEAM_NAMES, TeamDraw};
pub use error::SchedulerError;
pub use live::LiveTournament;
pub use scheduler::{FixtureScheduler, RoundOutcome};
