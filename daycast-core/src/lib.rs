//! Core library for the `daycast` CLI.
//!
//! This crate defines:
//! - Settings for the fixed observation point and upstream endpoints
//! - The weather and radar fetchers and their trait seams
//! - Snapshot building, time alignment, and the scrub-session state
//!
//! It is used by `daycast-cli`, but can also be reused by other binaries or services.

pub mod align;
pub mod builder;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;

pub use builder::{ScrubSession, SnapshotBuilder};
pub use config::Settings;
pub use error::{BuildError, FetchError};
pub use model::{Hour, InvalidHour, LoadState, RadarFrame, Snapshot, WeatherSnapshot};
