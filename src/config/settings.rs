use std::env;

use log::warn;

#[derive(Debug, Clone)]
pub struct TierThresholds {
    pub level_2: i32,
    pub level_3: i32,
    pub pro: i32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            level_2: 1200,
            level_3: 1400,
            pro: 1600,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RatingSettings {
    pub starter_rating: i32,
    pub win_points: i32,
    pub loss_points: i32,
    pub rating_floor: i32,
    pub champion_bonus: i32,
    pub starter_label: &'static str,
    pub tiers: TierThresholds,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            starter_rating: 1000,
            win_points: 20,
            loss_points: 12,
            rating_floor: 800,
            champion_bonus: 50, // once per tournament, not per match
            starter_label: "start",
            tiers: TierThresholds::default(),
        }
    }
}

/// What closing a round does with a match that ended level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiePolicy {
    /// team1 advances as the "winner" unless team2 scored strictly more
    #[default]
    Team1Advances,
    /// a tied match blocks the round until the score is corrected
    Reject,
}

impl TiePolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "team1" | "team1-advances" => Some(TiePolicy::Team1Advances),
            "reject" => Some(TiePolicy::Reject),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchedulerSettings {
    pub tie_policy: TiePolicy,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub data_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_path: "padel_data.json".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub scheduler: SchedulerSettings,
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            scheduler: SchedulerSettings::default(),
            storage: StorageSettings::default(),
        }
    }

    /// Defaults, overridden by `PADEL_TIE_POLICY` and `PADEL_DATA_PATH`
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(value) = env::var("PADEL_TIE_POLICY") {
            match TiePolicy::parse(&value) {
                Some(policy) => config.scheduler.tie_policy = policy,
                None => warn!("Ignoring unknown PADEL_TIE_POLICY value: {}", value),
            }
        }

        if let Ok(path) = env::var("PADEL_DATA_PATH") {
            config.storage.data_path = path;
        }

        config
    }
}
