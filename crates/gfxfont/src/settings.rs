use std::{
    fs,
    path::{Path, PathBuf},
};

use gfxfont_engine::font_model::{DEFAULT_FONT_NAME, DEFAULT_HEIGHT, DEFAULT_WIDTH, FIRST_PRINTABLE, LAST_PRINTABLE};
use serde::{Deserialize, Serialize};

use crate::CliResult;

const SETTINGS_FILE: &str = "settings.toml";

/// Defaults for fonts created by `gfxfont new`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_width")]
    pub default_width: i32,

    #[serde(default = "default_height")]
    pub default_height: i32,

    #[serde(default = "default_code_start")]
    pub default_code_start: u32,

    #[serde(default = "default_code_end")]
    pub default_code_end: u32,

    #[serde(default = "default_font_name")]
    pub default_font_name: String,
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

fn default_code_start() -> u32 {
    FIRST_PRINTABLE as u32
}

fn default_code_end() -> u32 {
    LAST_PRINTABLE as u32
}

fn default_font_name() -> String {
    DEFAULT_FONT_NAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_width: default_width(),
            default_height: default_height(),
            default_code_start: default_code_start(),
            default_code_end: default_code_end(),
            default_font_name: default_font_name(),
        }
    }
}

/// The config directory, created on first use
pub fn config_dir() -> Option<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "GitHub", "gfxfont")?;
    let dir = proj_dirs.config_dir().to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

impl Settings {
    /// Load the settings file, or the defaults when there is none.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file exists but can't be read or parsed.
    pub fn load() -> CliResult<Self> {
        match settings_file() {
            Some(file) => Self::load_from(&file),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(file: &Path) -> CliResult<Self> {
        if !file.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(file)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load the settings, logging a broken file and using the defaults instead
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("Error loading settings: {}", err);
                Self::default()
            }
        }
    }

    /// Store the settings in the config directory.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file can't be written.
    pub fn store(&self) -> CliResult<PathBuf> {
        let Some(file) = settings_file() else {
            anyhow::bail!("No config directory available");
        };
        self.store_to(&file)?;
        Ok(file)
    }

    pub fn store_to(&self, file: &Path) -> CliResult<()> {
        let mut write_name = file.to_path_buf();
        write_name.set_extension("new");

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&write_name, toml_string)?;
        fs::rename(&write_name, file)?;
        Ok(())
    }
}
