use crate::{
    config::Settings,
    error::FetchError,
    model::{Hour, RadarFrame, WeatherSnapshot},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;
pub mod rainviewer;

use openmeteo::OpenMeteoFetcher;
use rainviewer::RainViewerFetcher;

/// Fetches the archived weather sample for one hour of the archive day.
#[async_trait]
pub trait WeatherFetch: Send + Sync + Debug {
    async fn fetch(&self, hour: Hour) -> Result<WeatherSnapshot, FetchError>;
}

/// Fetches the currently available set of past radar frames. Not
/// parameterized by the selected hour; filtering happens downstream.
#[async_trait]
pub trait RadarFetch: Send + Sync + Debug {
    async fn fetch(&self) -> Result<Vec<RadarFrame>, FetchError>;
}

/// Construct the weather fetcher for the configured endpoint and point.
pub fn weather_from_settings(settings: &Settings) -> Box<dyn WeatherFetch> {
    Box::new(OpenMeteoFetcher::new(settings))
}

/// Construct the radar fetcher for the configured feed.
pub fn radar_from_settings(settings: &Settings) -> Box<dyn RadarFetch> {
    Box::new(RainViewerFetcher::new(settings))
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
