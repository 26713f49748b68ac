use anyhow::Context;
use clap::{Parser, Subcommand};
use daycast_core::{Hour, LoadState, ScrubSession, Settings, Snapshot, SnapshotBuilder};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "daycast", version, about = "Hourly weather and radar for one archived day")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the snapshot for one hour of the archive day.
    Show {
        /// Hour of the day, 0-23.
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=23))]
        hour: u8,
    },

    /// Scrub interactively across the 24 hours of the archive day.
    Scrub,

    /// Write the active settings to the config file and print its path.
    InitConfig,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let settings = Settings::load().context("Failed to load settings")?;
        let mut session = ScrubSession::new(SnapshotBuilder::from_settings(&settings));

        match self.command {
            Command::Show { hour } => {
                let hour = Hour::try_from(hour)?;
                show_hour(&mut session, &settings, hour).await;
            }
            Command::Scrub => scrub_loop(&mut session, &settings).await?,
            Command::InitConfig => {
                settings.save().context("Failed to write config file")?;
                println!("Wrote {}", Settings::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

async fn show_hour(session: &mut ScrubSession, settings: &Settings, hour: Hour) {
    println!("Fetching weather for {} {hour}...", settings.archive_day);

    match session.select(hour).await {
        LoadState::Ready(snapshot) => render(snapshot),
        LoadState::Error(message) => eprintln!("{message}"),
        LoadState::Idle | LoadState::Loading => {}
    }
}

async fn scrub_loop(session: &mut ScrubSession, settings: &Settings) -> anyhow::Result<()> {
    let hours: Vec<Hour> = Hour::all().collect();
    let prompt = format!("Hour of {}:", settings.archive_day);

    loop {
        let picked = inquire::Select::new(&prompt, hours.clone()).prompt();

        match picked {
            Ok(hour) => show_hour(session, settings, hour).await,
            Err(
                inquire::InquireError::OperationCanceled
                | inquire::InquireError::OperationInterrupted,
            ) => break,
            Err(err) => return Err(err).context("Hour selection failed"),
        }
    }

    Ok(())
}

fn render(snapshot: &Snapshot) {
    let weather = &snapshot.weather;

    println!("Time: {}", weather.time);
    println!("Temperature: {} °C", weather.temperature_c);
    println!("Precipitation: {} mm", weather.precipitation_mm);
    println!("Cloud cover: {} %", weather.cloud_cover_pct);

    if snapshot.aligned.is_empty() {
        println!("No radar frames within 10 minutes of {}.", weather.time);
    } else {
        for frame in &snapshot.aligned {
            println!("Radar {}: {}", frame.time, frame.tile_url);
        }
    }
}
