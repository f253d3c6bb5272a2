use std::fmt;
use std::str::FromStr;

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Stable catalog identity of a spell. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellId(u32);

impl SpellId {
    pub const fn new(id: u32) -> Self {
        SpellId(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SpellId {
    fn from(id: u32) -> Self {
        SpellId(id)
    }
}

impl fmt::Display for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum GameDateError {
    #[error("Invalid calendar date (expected YYYY-MM-DD): {0}")]
    Invalid(String),
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day in the player's local time zone.
/// Serialized as zero-padded `YYYY-MM-DD`, which is also the record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameDate(NaiveDate);

impl GameDate {
    pub fn new(date: NaiveDate) -> Self {
        GameDate(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, GameDateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(GameDate)
            .ok_or_else(|| GameDateError::Invalid(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// The local calendar day, not the UTC one.
    pub fn today() -> Self {
        GameDate(Local::now().date_naive())
    }

    /// The day `days` before this one, or `None` before the calendar start.
    pub fn days_before(self, days: u32) -> Option<Self> {
        self.0.checked_sub_days(Days::new(u64::from(days))).map(GameDate)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for GameDate {
    type Err = GameDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(GameDate)
            .map_err(|_| GameDateError::Invalid(s.to_string()))
    }
}

impl Serialize for GameDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
