use crate::{ApiSettings, RawSettings, SecretSettings};
use serde::Deserialize;
use std::path::{PathBuf, absolute};

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub storage: StoragePaths,
    pub api: ApiSettings,
    pub secrets: SecretSettings,
}

/// Absolute storage paths derived from the raw settings.
#[derive(Debug, Deserialize, Clone)]
pub struct StoragePaths {
    pub media_root: PathBuf,
    pub data_root: PathBuf,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let media_root = absolute(&raw.storage.media_folder).expect("Invalid media_folder");
        let data_root = absolute(&raw.storage.data_folder).expect("Invalid data_folder");

        Self {
            storage: StoragePaths {
                media_root,
                data_root,
            },
            api: raw.api,
            secrets: raw.secrets,
        }
    }
}

impl StoragePaths {
    /// Path of the durable local settings file (the service-side analogue of
    /// the client's durable storage).
    #[must_use]
    pub fn system_settings_file(&self) -> PathBuf {
        self.data_root.join("system_settings.json")
    }
}
