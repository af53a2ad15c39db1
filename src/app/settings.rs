use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::error::AppError;

/// Background color behind the rendered equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    Transparent,
    White,
    LightGray,
}

impl Background {
    /// RGB value for non-transparent backgrounds.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Transparent => None,
            Self::White => Some((255, 255, 255)),
            Self::LightGray => Some((211, 211, 211)),
        }
    }

    /// Hex color string for SVG markup.
    pub fn hex(&self) -> Option<&'static str> {
        match self {
            Self::Transparent => None,
            Self::White => Some("#ffffff"),
            Self::LightGray => Some("#d3d3d3"),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Transparent => "Transparent",
            Self::White => "White",
            Self::LightGray => "Light Gray",
        }
    }

    pub fn all() -> &'static [Background] {
        &[Self::Transparent, Self::White, Self::LightGray]
    }
}

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    #[default]
    Svg,
    Png,
    Pdf,
}

impl SaveFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Svg => "SVG",
            Self::Png => "PNG",
            Self::Pdf => "PDF",
        }
    }

    pub fn all() -> &'static [SaveFormat] {
        &[Self::Svg, Self::Png, Self::Pdf]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(rename = "fontsize", default = "default_font_size")]
    pub font_size: u32,

    #[serde(rename = "bgcolor", default)]
    pub background: Background,

    #[serde(rename = "displaystyle", default)]
    pub display_style: bool,

    #[serde(default)]
    pub use_equation_filename: bool,

    #[serde(default)]
    pub save_format: SaveFormat,
}

fn default_font_size() -> u32 {
    24
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            background: Background::Transparent,
            display_style: false,
            use_equation_filename: false,
            save_format: SaveFormat::Svg,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save_to(config_path);
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("mathpad");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font_size, 24);
        assert_eq!(settings.background, Background::Transparent);
        assert!(!settings.display_style);
        assert!(!settings.use_equation_filename);
        assert_eq!(settings.save_format, SaveFormat::Svg);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            font_size: 36,
            background: Background::LightGray,
            display_style: true,
            use_equation_filename: true,
            save_format: SaveFormat::Pdf,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_wire_key_names() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"fontsize\""));
        assert!(json.contains("\"bgcolor\""));
        assert!(json.contains("\"displaystyle\""));
        assert!(json.contains("\"use_equation_filename\""));
        assert!(json.contains("\"save_format\""));
    }

    #[test]
    fn test_enum_wire_values() {
        let settings = AppSettings {
            background: Background::LightGray,
            save_format: SaveFormat::Png,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"lightgray\""));
        assert!(json.contains("\"png\""));
    }

    #[test]
    fn test_partial_config() {
        // Config missing newer fields should fill in defaults
        let json = r#"{"fontsize": 48}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 48);
        assert_eq!(settings.background, Background::Transparent);
        assert_eq!(settings.save_format, SaveFormat::Svg);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = AppSettings {
            font_size: 18,
            background: Background::White,
            display_style: true,
            use_equation_filename: false,
            save_format: SaveFormat::Png,
        };
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path);
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("settings.json");

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json at all").unwrap();

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_background_rgb() {
        assert_eq!(Background::Transparent.rgb(), None);
        assert_eq!(Background::White.rgb(), Some((255, 255, 255)));
        assert_eq!(Background::LightGray.rgb(), Some((211, 211, 211)));
    }
}
