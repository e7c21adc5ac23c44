//! Renderer configuration: optional JSON file plus `TONIGHT_*` overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tonight_layout::TagStyle;
use tracing::{info, warn};

use crate::error::{CardError, Result};
use crate::theme::ColorScheme;

const MAX_WIDTH: u32 = 8192;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Card width in pixels; the height follows from the content.
    pub width: u32,
    pub font_path: Option<PathBuf>,
    pub scheme: ColorScheme,
    /// Paint the page background behind the card.
    pub background: bool,
    pub tags: TagStyle,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: 420,
            font_path: None,
            scheme: ColorScheme::Dark,
            background: true,
            tags: TagStyle::default(),
        }
    }
}

impl CardConfig {
    /// Load from `path` if given, then apply environment overrides.
    /// A config file that does not exist falls back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => match Self::from_file(path) {
                Err(CardError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                    warn!(config = %path.display(), "config file not found, using defaults");
                    Self::default()
                }
                other => other?,
            },
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CardError::io(path, e))?;
        let config = Self::from_json(&raw)?;
        info!(config = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| CardError::json("config", e))
    }

    /// Apply `TONIGHT_FONT`, `TONIGHT_WIDTH` and `TONIGHT_SCHEME`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(font) = lookup("TONIGHT_FONT").filter(|f| !f.trim().is_empty()) {
            self.font_path = Some(PathBuf::from(font));
        }
        if let Some(width) = lookup("TONIGHT_WIDTH") {
            match width.trim().parse::<u32>() {
                Ok(w) => self.width = w,
                Err(_) => warn!(value = %width, "ignoring unparsable TONIGHT_WIDTH"),
            }
        }
        if let Some(scheme) = lookup("TONIGHT_SCHEME") {
            match scheme.parse::<ColorScheme>() {
                Ok(s) => self.scheme = s,
                Err(e) => warn!(error = %e, "ignoring TONIGHT_SCHEME"),
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(CardError::InvalidConfig(format!(
                "width must be between 1 and {MAX_WIDTH}, got {}",
                self.width
            )));
        }
        if !(self.tags.font_size.is_finite() && self.tags.font_size > 0.0) {
            return Err(CardError::InvalidConfig(format!(
                "tags.font_size must be positive, got {}",
                self.tags.font_size
            )));
        }
        Ok(())
    }

    pub fn font_path(&self) -> Result<&Path> {
        self.font_path.as_deref().ok_or(CardError::MissingFont)
    }
}
