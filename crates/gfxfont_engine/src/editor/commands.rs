//! Session commands that go through prompt services
//!
//! Every command makes a single attempt and reports its outcome as a
//! [`SessionMessage`] for the UI to display. A cancelled prompt or a failed
//! read/write leaves the font exactly as it was.

use std::fmt;
use std::path::PathBuf;

use crate::export::{export, sanitize_font_name};
use crate::font_model::FontSetting;
use crate::persistence::{load_font, save_font, write_header};
use crate::services::PromptService;
use crate::FontError;

use super::EditorSession;

/// Outcome of a session command
#[derive(Debug)]
pub enum SessionMessage {
    /// A prompt was cancelled, nothing happened
    Cancelled,
    /// A setting prompt returned something that is not a number
    InvalidInput { setting: FontSetting, input: String },
    SettingChanged { setting: FontSetting, value: u32 },
    Saved { path: PathBuf },
    Loaded { path: PathBuf, width: i32, height: i32 },
    Exported { path: PathBuf, font_name: String },
    Failed { action: &'static str, error: FontError },
}

impl SessionMessage {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::InvalidInput { .. })
    }
}

impl fmt::Display for SessionMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "Cancelled"),
            Self::InvalidInput { setting, input } => write!(f, "Invalid value for {}: {:?}", setting, input),
            Self::SettingChanged { setting, value } => write!(f, "{} set to {}", setting, value),
            Self::Saved { path } => write!(f, "Font data saved successfully to {}!", path.display()),
            Self::Loaded { path, width, height } => write!(
                f,
                "Font data loaded successfully from {} with width {} and height {}!",
                path.display(),
                width,
                height
            ),
            Self::Exported { path, font_name } => write!(f, "Font successfully exported to {} as {}", path.display(), font_name),
            Self::Failed { action, error } => write!(f, "Error {}: {}", action, error),
        }
    }
}

impl EditorSession {
    /// Ask for a new value of `setting` and apply it.
    ///
    /// Only plain digits are accepted. An accepted value resets all glyphs and
    /// moves the selection back to the first glyph.
    pub fn edit_setting(&mut self, setting: FontSetting, prompts: &mut dyn PromptService) -> SessionMessage {
        let current = self.model.setting_value(setting);
        let prompt = format!("Enter new value for {} (Current: {}):", setting, current);
        let Some(input) = prompts.input(&prompt, setting.label()) else {
            return SessionMessage::Cancelled;
        };

        let input = input.trim().to_string();
        if input.is_empty() || !input.chars().all(|ch| ch.is_ascii_digit()) {
            log::warn!("Rejected value {:?} for {}", input, setting);
            return SessionMessage::InvalidInput { setting, input };
        }
        let Ok(value) = input.parse::<u32>() else {
            return SessionMessage::InvalidInput { setting, input };
        };

        if let Err(error) = self.model.apply_setting(setting, value) {
            log::warn!("Rejected {} = {}: {}", setting, value, error);
            return SessionMessage::Failed {
                action: "changing settings",
                error,
            };
        }
        self.reset_selection();
        SessionMessage::SettingChanged {
            setting,
            value: self.model.setting_value(setting),
        }
    }

    /// Ask for a path and save the font there
    pub fn save(&mut self, prompts: &mut dyn PromptService) -> SessionMessage {
        let Some(path) = prompts.select_file("Select Save Location", true) else {
            return SessionMessage::Cancelled;
        };
        match save_font(&mut self.model, &path) {
            Ok(()) => SessionMessage::Saved { path },
            Err(error) => {
                log::error!("Error saving font data: {}", error);
                SessionMessage::Failed {
                    action: "saving font data",
                    error,
                }
            }
        }
    }

    /// Ask for a file and replace the font with its contents
    pub fn load(&mut self, prompts: &mut dyn PromptService) -> SessionMessage {
        let Some(path) = prompts.select_file("Select Font File to Load", false) else {
            return SessionMessage::Cancelled;
        };
        match load_font(&path) {
            Ok(model) => {
                let (width, height) = model.font_size();
                self.replace_model(model);
                SessionMessage::Loaded { path, width, height }
            }
            Err(error) => {
                log::error!("Error loading font data: {}", error);
                SessionMessage::Failed {
                    action: "loading font data",
                    error,
                }
            }
        }
    }

    /// Ask for a path and a font name, then write the C header.
    ///
    /// A cancelled or empty name falls back to the default name.
    pub fn export(&mut self, prompts: &mut dyn PromptService) -> SessionMessage {
        let Some(path) = prompts.select_file("Select Export Location", true) else {
            return SessionMessage::Cancelled;
        };
        let font_name = sanitize_font_name(&prompts.input("Enter font name:", "Font Name").unwrap_or_default());

        let result = export(&self.model).and_then(|result| write_header(&result, &font_name, &path));
        match result {
            Ok(()) => {
                self.model.set_font_name(font_name.clone());
                SessionMessage::Exported { path, font_name }
            }
            Err(error) => {
                log::error!("Error exporting font: {}", error);
                SessionMessage::Failed {
                    action: "exporting font",
                    error,
                }
            }
        }
    }
}
