pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod rating;
pub mod services;
pub mod standings;
pub mod stats;
pub mod storage;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::{RangeArg, side_from_team};
use crate::config::AppConfig;
use crate::services::{LiveService, ReportService};

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Environment configuration, with `--data` taking precedence
pub fn load_config(data: Option<&Path>) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(path) = data {
        config.storage.data_path = path.display().to_string();
    }
    config
}

pub fn handle_ratings(config: AppConfig) -> Result<()> {
    print!("{}", ReportService::new(config).ratings()?);
    Ok(())
}

pub fn handle_history(config: AppConfig, player_id: &str) -> Result<()> {
    print!("{}", ReportService::new(config).history(player_id)?);
    Ok(())
}

pub fn handle_standings(config: AppConfig, tournament_id: &str) -> Result<()> {
    print!("{}", ReportService::new(config).standings(tournament_id)?);
    Ok(())
}

pub fn handle_stats(config: AppConfig, range: RangeArg) -> Result<()> {
    print!("{}", ReportService::new(config).stats(range.into())?);
    Ok(())
}

pub fn handle_draw(config: AppConfig, tournament_id: &str, seed: Option<u64>) -> Result<()> {
    print!("{}", LiveService::new(config).draw(tournament_id, seed)?);
    Ok(())
}

pub fn handle_score(
    config: AppConfig,
    tournament_id: &str,
    match_id: &str,
    team: u8,
    down: bool,
) -> Result<()> {
    let service = LiveService::new(config);
    print!("{}", service.score(tournament_id, match_id, side_from_team(team), !down)?);
    Ok(())
}

pub fn handle_next_round(config: AppConfig, tournament_id: &str) -> Result<()> {
    print!("{}", LiveService::new(config).next_round(tournament_id)?);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
