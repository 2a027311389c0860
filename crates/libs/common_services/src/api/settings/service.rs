use crate::api::settings::error::SettingsError;
use crate::api::settings::interfaces::SystemSettings;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, warn};

/// Durable store for [`SystemSettings`], backed by a JSON file under the
/// data root. Values are clamped to their allowed range both on load and
/// on save, so out-of-range values can never round-trip.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    file: PathBuf,
    min_photos_count: usize,
    max_photos_count: usize,
    default_photos_count: usize,
}

impl SettingsStore {
    #[must_use]
    pub fn new(
        file: PathBuf,
        min_photos_count: usize,
        max_photos_count: usize,
        default_photos_count: usize,
    ) -> Self {
        Self {
            file,
            min_photos_count,
            max_photos_count,
            default_photos_count,
        }
    }

    /// Loads the persisted settings, falling back to defaults when the file
    /// is missing or unreadable.
    pub async fn load(&self) -> SystemSettings {
        let settings = match fs::read(&self.file).await {
            Ok(bytes) => match serde_json::from_slice::<SystemSettings>(&bytes) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("settings file is corrupt, using defaults: {e}");
                    self.defaults()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => self.defaults(),
            Err(e) => {
                warn!("cannot read settings file, using defaults: {e}");
                self.defaults()
            }
        };
        self.clamped(settings)
    }

    /// Clamps and persists a new carousel window size, returning what was
    /// actually stored.
    pub async fn update_carousel_photos_count(
        &self,
        count: usize,
    ) -> Result<SystemSettings, SettingsError> {
        let settings = self.clamped(SystemSettings {
            carousel_photos_count: count,
        });

        if let Some(parent) = self.file.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.file, serde_json::to_vec_pretty(&settings)?).await?;
        info!(
            carousel_photos_count = settings.carousel_photos_count,
            "settings saved"
        );
        Ok(settings)
    }

    fn defaults(&self) -> SystemSettings {
        SystemSettings {
            carousel_photos_count: self.default_photos_count,
        }
    }

    fn clamped(&self, settings: SystemSettings) -> SystemSettings {
        SystemSettings {
            carousel_photos_count: settings
                .carousel_photos_count
                .clamp(self.min_photos_count, self.max_photos_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("system_settings.json"), 3, 8, 5)
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store(&dir).load().await.carousel_photos_count, 5);
    }

    #[tokio::test]
    async fn oversized_count_is_clamped_and_persisted_as_max() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let saved = store.update_carousel_photos_count(10).await.unwrap();
        assert_eq!(saved.carousel_photos_count, 8);
        // A fresh store instance reads the clamped value back.
        let reread = SettingsStore::new(dir.path().join("system_settings.json"), 3, 8, 5);
        assert_eq!(reread.load().await.carousel_photos_count, 8);
    }

    #[tokio::test]
    async fn undersized_count_is_clamped_to_min() {
        let dir = tempfile::tempdir().unwrap();
        let saved = store(&dir).update_carousel_photos_count(1).await.unwrap();
        assert_eq!(saved.carousel_photos_count, 3);
    }

    #[tokio::test]
    async fn in_range_count_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.update_carousel_photos_count(6).await.unwrap();
        assert_eq!(store.load().await.carousel_photos_count, 6);
    }

    #[tokio::test]
    async fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        fs::write(&dir.path().join("system_settings.json"), b"not json")
            .await
            .unwrap();
        assert_eq!(store.load().await.carousel_photos_count, 5);
    }
}
