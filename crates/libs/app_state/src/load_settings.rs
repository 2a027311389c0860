use crate::{AppConstants, AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

pub fn load_app_settings() -> Result<AppSettings> {
    // Load .env first so env vars can overwrite file settings.
    dotenv::from_path(".env").ok();
    let raw_settings = load_raw_settings()?;
    let settings: AppSettings = raw_settings.into();

    fs::create_dir_all(&settings.storage.media_root).expect("Cannot create media folder");
    fs::create_dir_all(&settings.storage.data_root).expect("Cannot create data folder");

    Ok(settings)
}

fn load_raw_settings() -> Result<RawSettings> {
    let config_path = Path::new("config/settings.yaml").canonicalize()?;
    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    Ok(builder.build()?.try_deserialize::<RawSettings>()?)
}

fn load_app_constants() -> Result<AppConstants> {
    Ok(load_raw_settings()?.into())
}

pub static CONSTANTS: LazyLock<AppConstants> =
    LazyLock::new(|| load_app_constants().expect("Cannot load app settings."));

#[must_use]
pub fn constants() -> &'static AppConstants {
    &CONSTANTS
}
