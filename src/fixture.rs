use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::schedule::Schedule;
use crate::search::{find_closest, Keyed};

/// A scheduled match between two teams.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Match {
    pub slug: String,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
}

impl Match {
    pub fn new(
        slug: &str,
        date: NaiveDate,
        home_team: &str,
        away_team: &str,
    ) -> Self {
        Self {
            slug: slug.to_string(),
            date,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
        }
    }
}

impl Keyed for Match {
    type Key = NaiveDate;

    fn key(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} v {} ({})",
            self.date, self.home_team, self.away_team, self.slug
        )
    }
}

/// Parse a calendar date such as `2019-12-01` or `2019-12-1`.
pub fn parse_date(input: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| {
        Error::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

/// Index of the match played nearest to `date` in a date-sorted list.
pub fn closest_match(date: NaiveDate, matches: &[Match]) -> Option<usize> {
    find_closest(&date, matches)
}

impl Schedule<Match> {
    /// Load a fixture list from its s-expression form.
    pub fn from_sexpr(text: &str) -> Result<Self, Error> {
        let matches: Vec<Match> = serde_lexpr::from_str(text)?;
        debug!(matches = matches.len(), "decoded fixtures");
        Ok(Self::new(matches))
    }

    pub fn to_sexpr(&self) -> Result<String, Error> {
        Ok(serde_lexpr::to_string(self)?)
    }
}
