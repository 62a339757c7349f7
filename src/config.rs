use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::data::{builtin_recipes, load_recipes};
use crate::error::RecipeError;
use crate::model::Recipe;

/// Application settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// JSON recipe file to load; the bundled catalogue is used when unset
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    /// Directory prefix for recipe card images
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: None,
            images_dir: default_images_dir(),
        }
    }
}

fn default_images_dir() -> String {
    "assets/images".to_string()
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PETITS_PLATS__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PETITS_PLATS__IMAGES_DIR
    pub fn load() -> Result<Self, RecipeError> {
        load_config()
    }

    /// The recipe collection these settings point at
    pub fn recipes(&self) -> Result<Vec<Recipe>, RecipeError> {
        match &self.data_path {
            Some(path) => load_recipes(path),
            None => Ok(builtin_recipes()),
        }
    }
}

/// Load settings from file and environment variables
///
/// See [`Settings::load`] for the source priority.
pub fn load_config() -> Result<Settings, RecipeError> {
    let builder = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("PETITS_PLATS")
                .separator("__")
                .try_parsing(true),
        );

    settings_from(builder)
}

fn settings_from(builder: ConfigBuilder<DefaultState>) -> Result<Settings, RecipeError> {
    let settings = builder.build()?.try_deserialize()?;
    Ok(settings)
}
