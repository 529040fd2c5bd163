//! Bell playback through an external audio player

use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, error, info};

/// Plays the notification bell with a configured player command
#[derive(Debug, Clone)]
pub struct SoundPlayer {
    player: String,
    bell: PathBuf,
}

impl SoundPlayer {
    pub fn new(player: impl Into<String>, bell: impl Into<PathBuf>) -> Self {
        Self {
            player: player.into(),
            bell: bell.into(),
        }
    }

    /// Player value that turns playback off
    pub const DISABLED: &'static str = "none";

    pub fn is_enabled(&self) -> bool {
        !self.player.is_empty() && self.player != Self::DISABLED
    }

    /// Ring the bell without waiting for playback to finish
    pub fn play(&self) {
        if !self.is_enabled() {
            info!("Bell (playback disabled)");
            return;
        }

        let player = self.clone();
        tokio::spawn(async move {
            if let Err(e) = player.play_bell().await {
                error!("Error when playing sound: {}", e);
            }
        });
    }

    async fn play_bell(&self) -> Result<(), String> {
        if !self.bell.is_file() {
            return Err(format!("Audio file not found: {}", self.bell.display()));
        }

        debug!("Playing {} with {}", self.bell.display(), self.player);

        let output = Command::new(&self.player)
            .arg(&self.bell)
            .output()
            .await
            .map_err(|e| format!("Failed to execute {}: {}", self.player, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("{} failed: {}", self.player, stderr));
        }

        Ok(())
    }
}
