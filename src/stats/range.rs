use chrono::{Datelike, NaiveDate};

use crate::domain::{Tournament, chronological};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    All,
    Month,
    Year,
}

impl TimeRange {
    /// Undated tournaments only count towards `All`
    pub fn includes(&self, tournament: &Tournament, reference: NaiveDate) -> bool {
        if *self == TimeRange::All {
            return true;
        }

        let Some(date) = tournament.parsed_date().map(|dt| dt.date()) else {
            return false;
        };

        match self {
            TimeRange::Month => date.year() == reference.year() && date.month() == reference.month(),
            TimeRange::Year => date.year() == reference.year(),
            TimeRange::All => true,
        }
    }
}

/// Finished tournaments inside `range`, oldest first
pub fn timeline(tournaments: &[Tournament], range: TimeRange, reference: NaiveDate) -> Vec<&Tournament> {
    chronological(tournaments)
        .into_iter()
        .filter(|t| range.includes(t, reference))
        .collect()
}
