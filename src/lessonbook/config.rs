use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const PREFS_FILENAME: &str = "preferences.json";

/// Font size of the command box, one of a fixed set of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Xsmall,
    Small,
    #[default]
    Normal,
    Large,
    Xlarge,
}

impl FontSize {
    pub const TOKENS: &'static [&'static str] = &["xsmall", "small", "normal", "large", "xlarge"];
}

impl FromStr for FontSize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xsmall" => Ok(FontSize::Xsmall),
            "small" => Ok(FontSize::Small),
            "normal" => Ok(FontSize::Normal),
            "large" => Ok(FontSize::Large),
            "xlarge" => Ok(FontSize::Xlarge),
            _ => Err(AppError::validation(
                "font size",
                format!(
                    "Font size should be one of: {}",
                    FontSize::TOKENS.join(", ")
                ),
            )),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            FontSize::Xsmall => "xsmall",
            FontSize::Small => "small",
            FontSize::Normal => "normal",
            FontSize::Large => "large",
            FontSize::Xlarge => "xlarge",
        };
        f.write_str(token)
    }
}

/// User preferences, stored in <data dir>/preferences.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPrefs {
    #[serde(default)]
    pub font_size: FontSize,

    /// Whether command keywords are highlighted as they are typed
    #[serde(default = "default_highlight")]
    pub highlight: bool,
}

fn default_highlight() -> bool {
    true
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            font_size: FontSize::default(),
            highlight: default_highlight(),
        }
    }
}

impl UserPrefs {
    /// Load prefs from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(PREFS_FILENAME);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(AppError::Io)?;
        let prefs: UserPrefs = serde_json::from_str(&content).map_err(AppError::Serialization)?;
        Ok(prefs)
    }

    /// Save prefs to the given directory
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();

        if !dir.exists() {
            fs::create_dir_all(dir).map_err(AppError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(AppError::Serialization)?;
        fs::write(dir.join(PREFS_FILENAME), content).map_err(AppError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefs() {
        let prefs = UserPrefs::default();
        assert_eq!(prefs.font_size, FontSize::Normal);
        assert!(prefs.highlight);
    }

    #[test]
    fn test_font_size_tokens() {
        for token in FontSize::TOKENS {
            let size: FontSize = token.parse().unwrap();
            assert_eq!(size.to_string(), *token);
        }
        assert_eq!("LARGE".parse::<FontSize>().unwrap(), FontSize::Large);
        assert!("huge".parse::<FontSize>().is_err());
    }

    #[test]
    fn test_load_missing_prefs() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = UserPrefs::load(dir.path()).unwrap();
        assert_eq!(prefs, UserPrefs::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = UserPrefs {
            font_size: FontSize::Xlarge,
            highlight: false,
        };
        prefs.save(dir.path().join("sub")).unwrap();

        let loaded = UserPrefs::load(dir.path().join("sub")).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: UserPrefs = serde_json::from_str(r#"{"font_size":"small"}"#).unwrap();
        assert_eq!(parsed.font_size, FontSize::Small);
        assert!(parsed.highlight);
    }
}
