use async_trait::async_trait;
use chrono::DateTime;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{config::Settings, error::FetchError, model::RadarFrame};

use super::{RadarFetch, truncate_body};

/// Suffix that turns a frame path into a concrete 256px tile request.
const TILE_SUFFIX: &str = "/256/0/0/0/1/0_0.png";

/// Client for the RainViewer weather-maps feed.
#[derive(Debug, Clone)]
pub struct RainViewerFetcher {
    http: Client,
    url: String,
}

impl RainViewerFetcher {
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: Client::new(),
            url: settings.radar_url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MapsResponse {
    host: Option<String>,
    radar: Option<RadarSection>,
}

#[derive(Debug, Deserialize)]
struct RadarSection {
    past: Option<Vec<FrameEntry>>,
}

#[derive(Debug, Deserialize)]
struct FrameEntry {
    /// Unix seconds.
    time: i64,
    path: String,
}

/// Map raw feed entries to displayable frames.
fn frames_from(host: &str, entries: &[FrameEntry]) -> Result<Vec<RadarFrame>, FetchError> {
    entries
        .iter()
        .map(|entry| {
            let time = unix_to_hhmm(entry.time)
                .ok_or_else(|| FetchError::Timestamp(entry.time.to_string()))?;

            Ok(RadarFrame {
                time,
                tile_url: format!("{host}{}{TILE_SUFFIX}", entry.path),
            })
        })
        .collect()
}

fn unix_to_hhmm(ts: i64) -> Option<String> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.format("%H:%M").to_string())
}

#[async_trait]
impl RadarFetch for RainViewerFetcher {
    async fn fetch(&self) -> Result<Vec<RadarFrame>, FetchError> {
        let res = self.http.get(&self.url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: MapsResponse = serde_json::from_str(&body)?;

        let host = parsed.host.ok_or(FetchError::Shape("host"))?;
        let past = parsed
            .radar
            .and_then(|section| section.past)
            .ok_or(FetchError::Shape("radar.past"))?;

        debug!("radar feed returned {} past frames", past.len());

        frames_from(&host, &past)
    }
}
