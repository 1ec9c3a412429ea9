//! Trigger identities and the menu actions they expose.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the fixed anchor points a menu can be opened from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trigger {
    TopLeft,
    TopCenter,
    TopRight,
}

impl Trigger {
    /// Every trigger, in render order
    pub const ALL: [Trigger; 3] = [Trigger::TopLeft, Trigger::TopCenter, Trigger::TopRight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::TopLeft => "top-left",
            Trigger::TopCenter => "top-center",
            Trigger::TopRight => "top-right",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trigger name that does not match any anchor point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTrigger(pub String);

impl std::fmt::Display for UnknownTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown trigger '{}' (expected top-left, top-center or top-right)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTrigger {}

impl FromStr for Trigger {
    type Err = UnknownTrigger;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Trigger::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTrigger(s.to_string()))
    }
}

/// Language used for menu item labels
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

/// An item of the popup menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Open,
    Save,
    Delete,
}

impl MenuAction {
    /// Items in the order they are listed in the popup
    pub const ALL: [MenuAction; 3] = [MenuAction::Open, MenuAction::Save, MenuAction::Delete];

    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, MenuAction::Open) => "Open",
            (Locale::En, MenuAction::Save) => "Save",
            (Locale::En, MenuAction::Delete) => "Delete",
            (Locale::Ru, MenuAction::Open) => "Открыть",
            (Locale::Ru, MenuAction::Save) => "Сохранить",
            (Locale::Ru, MenuAction::Delete) => "Удалить",
        }
    }

    /// Labels of every item, in popup order
    pub fn labels(locale: Locale) -> [&'static str; 3] {
        Self::ALL.map(|action| action.label(locale))
    }

    /// Item at a popup row, if any
    pub fn from_index(index: usize) -> Option<MenuAction> {
        Self::ALL.get(index).copied()
    }
}
