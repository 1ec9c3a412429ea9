use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::placement::PlacementConfig;
use crate::trigger::Locale;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Language of the menu item labels
    #[serde(default)]
    pub locale: Locale,

    /// Popup placement tunables, in terminal cells
    #[serde(
        default = "PlacementConfig::cells",
        deserialize_with = "deserialize_cell_placement"
    )]
    #[schemars(with = "CellPlacement")]
    pub placement: PlacementConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    /// Optional path to a JSON theme file (built-in dark theme otherwise)
    #[serde(default)]
    pub theme: Option<PathBuf>,
}

/// Where and how the trigger buttons are drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LayoutConfig {
    /// Columns between the side buttons and the left/right viewport edges
    #[serde(default = "default_inset_x")]
    pub inset_x: u16,

    /// Rows between the buttons and the top viewport edge
    #[serde(default = "default_inset_y")]
    pub inset_y: u16,

    /// Glyph shown on every trigger button
    #[serde(default = "default_glyph")]
    pub glyph: String,
}

/// The `placement` section as written in a config file. Fields left out take
/// the cell-scaled values, not the engine defaults.
#[derive(Deserialize, JsonSchema)]
struct CellPlacement {
    /// Gap between the trigger edge and the popup, in cells
    #[serde(default = "default_cell_offset")]
    offset: i32,

    /// Minimum distance between the popup and every viewport edge, in cells
    #[serde(default = "default_cell_margin")]
    margin: i32,
}

fn default_cell_offset() -> i32 {
    PlacementConfig::cells().offset
}

fn default_cell_margin() -> i32 {
    PlacementConfig::cells().margin
}

fn deserialize_cell_placement<'de, D>(deserializer: D) -> Result<PlacementConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let CellPlacement { offset, margin } = CellPlacement::deserialize(deserializer)?;
    Ok(PlacementConfig { offset, margin })
}

fn default_inset_x() -> u16 {
    2
}

fn default_inset_y() -> u16 {
    1
}

fn default_glyph() -> String {
    "☰".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            inset_x: default_inset_x(),
            inset_y: default_inset_y(),
            glyph: default_glyph(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            placement: PlacementConfig::cells(),
            layout: LayoutConfig::default(),
            theme: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placement.offset < 0 {
            return Err(ConfigError::ValidationError(
                "placement.offset must be >= 0".to_string(),
            ));
        }

        if self.placement.margin < 0 {
            return Err(ConfigError::ValidationError(
                "placement.margin must be >= 0".to_string(),
            ));
        }

        if self.layout.glyph.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "layout.glyph cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// JSON Schema describing the configuration file
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Config)).unwrap_or_default()
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
