//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;

use crate::{
    services::{SoundPlayer, Storage},
    state::{ServerInfo, TimerSettings},
};

/// Longest phase accepted on the command line: one day
pub const MAX_PHASE_MINUTES: u64 = 24 * 60;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "elmodoro")]
#[command(about = "A Pomodoro timer with persisted progress and a bell on every phase change")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Work phase length in minutes
    #[arg(short, long, default_value = "25", value_parser = clap::value_parser!(u64).range(1..=MAX_PHASE_MINUTES))]
    pub work: u64,

    /// Short break length in minutes
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..=MAX_PHASE_MINUTES))]
    pub short_break: u64,

    /// Long break length in minutes
    #[arg(long, default_value = "15", value_parser = clap::value_parser!(u64).range(1..=MAX_PHASE_MINUTES))]
    pub long_break: u64,

    /// Completed work phases per long break
    #[arg(short, long, default_value = "4", value_parser = clap::value_parser!(u64).range(1..))]
    pub cycle: u64,

    /// Directory holding the saved timer
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Bell sound file
    #[arg(long, default_value = "bell.oga")]
    pub bell: PathBuf,

    /// Audio player command used for the bell ("none" disables playback)
    #[arg(long, default_value = "paplay")]
    pub player: String,

    /// Viewport width reported to clients
    #[arg(long, default_value = "360")]
    pub width: u32,

    /// Viewport height reported to clients
    #[arg(long, default_value = "640")]
    pub height: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn timer_settings(&self) -> TimerSettings {
        TimerSettings::from_minutes(self.work, self.short_break, self.long_break, self.cycle)
    }

    pub fn server_info(&self) -> ServerInfo {
        ServerInfo {
            host: self.host.clone(),
            port: self.port,
            viewport_width: self.width,
            viewport_height: self.height,
        }
    }

    pub fn storage(&self) -> Storage {
        Storage::new(&self.data_dir)
    }

    pub fn sound_player(&self) -> SoundPlayer {
        SoundPlayer::new(self.player.clone(), self.bell.clone())
    }
}
