//! File-backed slot for the persisted timer

use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Fixed key the timer is stored under
pub const STORAGE_KEY: &str = "elmodoro";

/// A single overwrite-only value stored at `<data_dir>/elmodoro`
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORAGE_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    /// Read the stored value, `None` when nothing is saved or it cannot be read
    pub async fn load(&self) -> Option<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                debug!("Loaded timer from {}", self.path.display());
                Some(raw)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No saved timer at {}", self.path.display());
                None
            }
            Err(e) => {
                error!("Failed to load timer from {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Overwrite the stored value. Failures are logged and dropped.
    pub async fn save(&self, raw: &str) {
        if let Err(e) = self.write(raw).await {
            error!("Failed to save timer: {}", e);
        }
    }

    async fn write(&self, raw: &str) -> Result<(), String> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
        }

        // Write beside the target and rename, so a crash never leaves a partial value
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| format!("Failed to write {}: {}", tmp.display(), e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| format!("Failed to replace {}: {}", self.path.display(), e))?;

        debug!("Saved timer to {}", self.path.display());
        Ok(())
    }
}
