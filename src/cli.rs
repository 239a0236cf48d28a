use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::Side;
use crate::stats::TimeRange;

#[derive(Parser, Debug)]
#[command(author, version, about = "padel tournament fixtures, standings and ratings")]
pub struct Cli {
    /// Snapshot file with players and tournaments (defaults to PADEL_DATA_PATH or padel_data.json)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Replay all finished tournaments and print the leaderboard
    Ratings,
    /// Rating trajectory and head-to-head record of one player
    History { player_id: String },
    /// Standings of one tournament
    Standings { tournament_id: String },
    /// Career stats over finished tournaments
    Stats {
        #[arg(long, value_enum, default_value_t = RangeArg::All)]
        range: RangeArg,
    },
    /// Draw teams for a scheduled tournament and generate round 1
    Draw {
        tournament_id: String,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Add (or with --down remove) a point in a live match
    Score {
        tournament_id: String,
        match_id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        team: u8,
        #[arg(long)]
        down: bool,
    },
    /// Close the current round and generate the next one
    NextRound { tournament_id: String },
    /// Print a shell completion script
    Completions { shell: Shell },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum RangeArg {
    All,
    Month,
    Year,
}

impl From<RangeArg> for TimeRange {
    fn from(range: RangeArg) -> Self {
        match range {
            RangeArg::All => TimeRange::All,
            RangeArg::Month => TimeRange::Month,
            RangeArg::Year => TimeRange::Year,
        }
    }
}

pub fn side_from_team(team: u8) -> Side {
    if team == 2 { Side::Team2 } else { Side::Team1 }
}
