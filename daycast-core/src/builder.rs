//! Snapshot building and scrub-session state.

use log::{debug, warn};

use crate::{
    align,
    config::Settings,
    error::BuildError,
    fetch::{self, RadarFetch, WeatherFetch},
    model::{Hour, LoadState, Snapshot},
};

/// Builds one merged snapshot per selected hour. No caching: building the
/// same hour twice performs both requests again.
#[derive(Debug)]
pub struct SnapshotBuilder {
    weather: Box<dyn WeatherFetch>,
    radar: Box<dyn RadarFetch>,
}

impl SnapshotBuilder {
    pub fn new(weather: Box<dyn WeatherFetch>, radar: Box<dyn RadarFetch>) -> Self {
        Self { weather, radar }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            fetch::weather_from_settings(settings),
            fetch::radar_from_settings(settings),
        )
    }

    /// Fetch both feeds concurrently, merge them, and precompute the aligned
    /// frames. A failure on either side fails the whole build; no partial
    /// snapshot is ever produced.
    ///
    /// The radar outcome is inspected first so that when both feeds fail the
    /// radar error is the one reported.
    pub async fn build(&self, hour: Hour) -> Result<Snapshot, BuildError> {
        let (weather, frames) = tokio::join!(self.weather.fetch(hour), self.radar.fetch());

        let frames = frames.map_err(BuildError::Radar)?;
        let weather = weather.map_err(BuildError::Weather)?;

        let aligned = align::matching_frames(&weather.time, &frames);
        debug!(
            "built snapshot for {hour}: {} of {} frames aligned",
            aligned.len(),
            frames.len()
        );

        Ok(Snapshot {
            weather,
            frames,
            aligned,
        })
    }
}

/// Owns the view state for scrubbing across the day.
///
/// Selecting an hour issues a build token and flips the state to `Loading`
/// before any request is sent. A settled build is applied only while its
/// token is still the latest issued, so a newer selection wins even if an
/// older build settles after it.
#[derive(Debug)]
pub struct ScrubSession {
    builder: SnapshotBuilder,
    state: LoadState,
    issued: u64,
}

impl ScrubSession {
    pub fn new(builder: SnapshotBuilder) -> Self {
        Self {
            builder,
            state: LoadState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Issue a new build token and enter `Loading`, clearing any previous
    /// error or snapshot.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.state = LoadState::Loading;
        self.issued
    }

    /// Apply a settled build if `token` is still the latest issued. Returns
    /// whether the state changed.
    pub fn apply(&mut self, token: u64, outcome: Result<Snapshot, BuildError>) -> bool {
        if token != self.issued {
            debug!("discarding stale build {token} (latest is {})", self.issued);
            return false;
        }

        self.state = match outcome {
            Ok(snapshot) => LoadState::Ready(snapshot),
            Err(err) => {
                warn!("snapshot build failed: {}", err.cause());
                LoadState::Error(err.to_string())
            }
        };

        true
    }

    /// Begin, build, and apply in one step, for callers that await each
    /// selection before making the next.
    pub async fn select(&mut self, hour: Hour) -> &LoadState {
        let token = self.begin();
        let outcome = self.builder.build(hour).await;
        self.apply(token, outcome);

        &self.state
    }
}
