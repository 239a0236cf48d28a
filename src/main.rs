use anyhow::Result;

use padel_ranking::cli::{Cli, Command};
use padel_ranking::{
    handle_completions, handle_draw, handle_history, handle_next_round, handle_ratings,
    handle_score, handle_standings, handle_stats, interpret, load_config,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = load_config(cli.data.as_deref());
    match &cli.command {
        Command::Ratings => handle_ratings(config),
        Command::History { player_id } => handle_history(config, player_id),
        Command::Standings { tournament_id } => handle_standings(config, tournament_id),
        Command::Stats { range } => handle_stats(config, *range),
        Command::Draw {
            tournament_id,
            seed,
        } => handle_draw(config, tournament_id, *seed),
        Command::Score {
            tournament_id,
            match_id,
            team,
            down,
        } => handle_score(config, tournament_id, match_id, *team, *down),
        Command::NextRound { tournament_id } => handle_next_round(config, tournament_id),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
