use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Zero-based offset into the archive day's 24-entry hourly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("hour {0} is out of range (expected 0..=23)")]
pub struct InvalidHour(pub u8);

impl Hour {
    pub const MAX: u8 = 23;

    pub fn new(value: u8) -> Result<Self, InvalidHour> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(InvalidHour(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Index into the parallel hourly arrays.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Every hour of the day, in order.
    pub fn all() -> impl Iterator<Item = Hour> {
        (0..=Self::MAX).map(Hour)
    }
}

impl TryFrom<u8> for Hour {
    type Error = InvalidHour;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> u8 {
        hour.0
    }
}

impl std::fmt::Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// One hour's readings for the fixed observation point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Time of day as `HH:MM`.
    pub time: String,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub cloud_cover_pct: f64,
}

/// One past radar frame from the maps feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarFrame {
    /// Time of day as `HH:MM`, derived from the frame's unix timestamp.
    pub time: String,
    pub tile_url: String,
}

/// The merged view-model for one selected hour. Replaced wholesale on every
/// selection; never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub weather: WeatherSnapshot,
    /// Every past frame the radar feed reported.
    pub frames: Vec<RadarFrame>,
    /// The frames within the tolerance window of `weather.time`.
    pub aligned: Vec<RadarFrame>,
}

/// View state of a scrub session. The variants are mutually exclusive: an
/// error is never shown next to a snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Ready(Snapshot),
}
