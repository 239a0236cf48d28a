use std::collections::HashMap;

use super::models::Player;
use super::team::TeamKey;

/// Players indexed by id, used to turn ids back into display names
pub struct Roster<'a> {
    players: HashMap<&'a str, &'a Player>,
}

impl<'a> Roster<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        Self {
            players: players.iter().map(|p| (p.id.as_str(), p)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a Player> {
        self.players.get(id).copied()
    }

    /// Display name, or the raw id for players no longer on the roster
    pub fn display_name<'b>(&'b self, id: &'b str) -> &'b str {
        match self.get(id) {
            Some(player) => player.display_name(),
            None => id,
        }
    }

    pub fn team_label(&self, team: &TeamKey) -> String {
        let [first, second] = team.players();
        format!("{} & {}", self.display_name(first), self.display_name(second))
    }
}
