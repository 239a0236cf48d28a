use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::{Player, Tournament};
use crate::errors::{require, with_parse_context, with_snapshot_context};

/// Everything the ranking needs: the roster and the tournament history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
}

impl Snapshot {
    pub fn tournament(&self, id: &str) -> Result<&Tournament> {
        require(self.tournaments.iter().find(|t| t.id == id), "tournament", id)
    }

    pub fn tournament_mut(&mut self, id: &str) -> Result<&mut Tournament> {
        require(self.tournaments.iter_mut().find(|t| t.id == id), "tournament", id)
    }

    pub fn player(&self, id: &str) -> Result<&Player> {
        require(self.players.iter().find(|p| p.id == id), "player", id)
    }
}

/// JSON file holding a [`Snapshot`]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the snapshot; a missing file is an empty one
    pub fn load(&self) -> Result<Snapshot> {
        let display = self.path.display().to_string();
        if !self.path.exists() {
            info!("No snapshot at {}, starting empty", display);
            return Ok(Snapshot::default());
        }

        let json = with_snapshot_context(fs::read_to_string(&self.path), "read", &display)?;
        let snapshot: Snapshot = with_parse_context(serde_json::from_str(&json), "snapshot JSON")?;

        info!(
            "Loaded {} players and {} tournaments from {}",
            snapshot.players.len(),
            snapshot.tournaments.len(),
            display
        );
        Ok(snapshot)
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let display = self.path.display().to_string();
        let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
        with_snapshot_context(fs::write(&self.path, json), "write", &display)?;

        info!("Saved snapshot to {}", display);
        Ok(())
    }
}
