use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::settings::TierThresholds;

/// Coarse classification of a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Level 1")]
    Level1,
    #[serde(rename = "Level 2")]
    Level2,
    #[serde(rename = "Level 3")]
    Level3,
    #[serde(rename = "Pro")]
    Pro,
}

impl Tier {
    pub fn from_points(points: i32, thresholds: &TierThresholds) -> Self {
        if points >= thresholds.pro {
            Tier::Pro
        } else if points >= thresholds.level_3 {
            Tier::Level3
        } else if points >= thresholds.level_2 {
            Tier::Level2
        } else {
            Tier::Level1
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tier::Level1 => "Level 1",
            Tier::Level2 => "Level 2",
            Tier::Level3 => "Level 3",
            Tier::Pro => "Pro",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
