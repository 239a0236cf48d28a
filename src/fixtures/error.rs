use thiserror::Error;

/// Structural problems that stop the next round from being built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("expected 4 distinct teams with 8 distinct players: {0}")]
    InvalidTeams(String),

    #[error("round {round} must have exactly one match on court 1 and one on court 2")]
    MalformedRound { round: u8 },

    #[error("match {0} is tied and ties are not accepted")]
    TiedMatch(String),

    #[error("team {0} has no unplayed opponent left")]
    NoUnplayedOpponent(String),

    #[error("expected {expected} players for the draw, got {actual}")]
    WrongPlayerCount { expected: usize, actual: usize },

    #[error("tournament {0} has no fixtures yet")]
    NotStarted(String),
}
