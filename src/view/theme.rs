use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable color representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorDef {
    /// RGB color as [r, g, b]
    Rgb(u8, u8, u8),
    /// Named color
    Named(String),
}

impl From<ColorDef> for Color {
    fn from(def: ColorDef) -> Self {
        match def {
            ColorDef::Rgb(r, g, b) => Color::Rgb(r, g, b),
            ColorDef::Named(name) => match name.as_str() {
                "Black" => Color::Black,
                "Red" => Color::Red,
                "Green" => Color::Green,
                "Yellow" => Color::Yellow,
                "Blue" => Color::Blue,
                "Magenta" => Color::Magenta,
                "Cyan" => Color::Cyan,
                "Gray" => Color::Gray,
                "DarkGray" => Color::DarkGray,
                "LightRed" => Color::LightRed,
                "LightGreen" => Color::LightGreen,
                "LightYellow" => Color::LightYellow,
                "LightBlue" => Color::LightBlue,
                "LightMagenta" => Color::LightMagenta,
                "LightCyan" => Color::LightCyan,
                "White" => Color::White,
                _ => Color::White, // Default fallback
            },
        }
    }
}

/// Serializable theme definition (matches JSON structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    name: String,
    #[serde(default)]
    background: Option<ColorDef>,
    buttons: ButtonColors,
    menu: MenuColors,
    #[serde(default = "default_status_fg")]
    status_fg: ColorDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ButtonColors {
    fg: ColorDef,
    border_fg: ColorDef,
    #[serde(default = "default_button_active_fg")]
    active_fg: ColorDef,
    #[serde(default = "default_button_active_border_fg")]
    active_border_fg: ColorDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MenuColors {
    border_fg: ColorDef,
    bg: ColorDef,
    fg: ColorDef,
    #[serde(default = "default_menu_hover_bg")]
    hover_bg: ColorDef,
    #[serde(default = "default_menu_hover_fg")]
    hover_fg: ColorDef,
}

// Defaults for optional keys so older theme files keep loading
fn default_status_fg() -> ColorDef {
    ColorDef::Named("DarkGray".to_string())
}
fn default_button_active_fg() -> ColorDef {
    ColorDef::Rgb(255, 255, 255)
}
fn default_button_active_border_fg() -> ColorDef {
    ColorDef::Rgb(86, 156, 214)
}
fn default_menu_hover_bg() -> ColorDef {
    ColorDef::Rgb(38, 79, 120)
}
fn default_menu_hover_fg() -> ColorDef {
    ColorDef::Rgb(255, 255, 255)
}

/// Resolved colors used while rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub button_fg: Color,
    pub button_border_fg: Color,
    pub button_active_fg: Color,
    pub button_active_border_fg: Color,
    pub popup_border_fg: Color,
    pub popup_bg: Color,
    pub popup_text_fg: Color,
    pub menu_hover_bg: Color,
    pub menu_hover_fg: Color,
    pub status_fg: Color,
}

impl From<ThemeFile> for Theme {
    fn from(file: ThemeFile) -> Self {
        Self {
            name: file.name,
            background: file.background.map(Color::from).unwrap_or(Color::Reset),
            button_fg: file.buttons.fg.into(),
            button_border_fg: file.buttons.border_fg.into(),
            button_active_fg: file.buttons.active_fg.into(),
            button_active_border_fg: file.buttons.active_border_fg.into(),
            popup_border_fg: file.menu.border_fg.into(),
            popup_bg: file.menu.bg.into(),
            popup_text_fg: file.menu.fg.into(),
            menu_hover_bg: file.menu.hover_bg.into(),
            menu_hover_fg: file.menu.hover_fg.into(),
            status_fg: file.status_fg.into(),
        }
    }
}

/// Theme loading error types
#[derive(Debug)]
pub enum ThemeError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::IoError(msg) => write!(f, "IO error: {}", msg),
            ThemeError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl Theme {
    /// Built-in dark theme
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color::Reset,
            button_fg: Color::Rgb(212, 212, 212),
            button_border_fg: Color::Rgb(100, 100, 100),
            button_active_fg: Color::Rgb(255, 255, 255),
            button_active_border_fg: Color::Rgb(86, 156, 214),
            popup_border_fg: Color::Gray,
            popup_bg: Color::Rgb(30, 30, 30),
            popup_text_fg: Color::Rgb(220, 220, 220),
            menu_hover_bg: Color::Rgb(38, 79, 120),
            menu_hover_fg: Color::Rgb(255, 255, 255),
            status_fg: Color::DarkGray,
        }
    }

    /// Parse a theme from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile =
            serde_json::from_str(json).map_err(|e| ThemeError::ParseError(e.to_string()))?;
        Ok(file.into())
    }

    /// Load a theme from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ThemeError::IoError(e.to_string()))?;
        let theme = Self::from_json(&contents)?;
        tracing::info!("Loaded theme '{}' from {:?}", theme.name, path.as_ref());
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
