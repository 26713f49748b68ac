use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::Settings,
    error::FetchError,
    model::{Hour, WeatherSnapshot},
};

use super::{WeatherFetch, truncate_body};

/// Client for the Open-Meteo hourly archive endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoFetcher {
    http: Client,
    url: String,
    latitude: f64,
    longitude: f64,
    start_date: String,
    end_date: String,
}

impl OpenMeteoFetcher {
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: Client::new(),
            url: settings.archive_url.clone(),
            latitude: settings.latitude,
            longitude: settings.longitude,
            start_date: settings.archive_day.format("%Y-%m-%d").to_string(),
            end_date: settings.end_date().format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    hourly: Option<HourlySeries>,
}

/// The parallel hourly arrays of the archive response, all indexed by hour
/// offset.
#[derive(Debug, Deserialize)]
struct HourlySeries {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    precipitation: Vec<f64>,
    cloud_cover: Vec<f64>,
}

/// Index each series at `hour` and format the sample's time of day.
fn sample_at(series: &HourlySeries, hour: Hour) -> Result<WeatherSnapshot, FetchError> {
    let idx = hour.index();

    let time = series.time.get(idx).ok_or(FetchError::Shape("hourly.time"))?;
    let temperature_c = series
        .temperature_2m
        .get(idx)
        .copied()
        .ok_or(FetchError::Shape("hourly.temperature_2m"))?;
    let precipitation_mm = series
        .precipitation
        .get(idx)
        .copied()
        .ok_or(FetchError::Shape("hourly.precipitation"))?;
    let cloud_cover_pct = series
        .cloud_cover
        .get(idx)
        .copied()
        .ok_or(FetchError::Shape("hourly.cloud_cover"))?;

    let parsed = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
        .map_err(|_| FetchError::Timestamp(time.clone()))?;

    Ok(WeatherSnapshot {
        time: parsed.format("%H:%M").to_string(),
        temperature_c,
        precipitation_mm,
        cloud_cover_pct,
    })
}

#[async_trait]
impl WeatherFetch for OpenMeteoFetcher {
    async fn fetch(&self, hour: Hour) -> Result<WeatherSnapshot, FetchError> {
        let res = self
            .http
            .get(&self.url)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("start_date", self.start_date.clone()),
                ("end_date", self.end_date.clone()),
                (
                    "hourly",
                    "temperature_2m,precipitation,cloud_cover".to_string(),
                ),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: ArchiveResponse = serde_json::from_str(&body)?;
        let series = parsed.hourly.ok_or(FetchError::Shape("hourly"))?;

        debug!("archive returned {} hourly samples", series.time.len());

        sample_at(&series, hour)
    }
}
