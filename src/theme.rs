//! Theme state and display-class computation.
//!
//! The engine computes which classes a display layer should apply; actually
//! applying them to a document is the display layer's job, invoked at the
//! boundary. Nothing here mutates ambient state.

use serde::{Deserialize, Deserializer, Serialize};

/// Light or dark display mode.
///
/// Unknown mode strings degrade to light, the upstream default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// The default light appearance.
    #[default]
    Light,
    /// The dark appearance.
    Dark,
}

impl<'de> Deserialize<'de> for ThemeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(if value == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
    }
}

/// The user's chosen display theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Light or dark mode.
    pub mode: ThemeMode,
    /// The accent colour theme name, e.g. "blue".
    pub color_theme: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            color_theme: "blue".to_owned(),
        }
    }
}

/// The classes and attribute value a display layer should apply for a theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeClasses {
    /// Class names to set on the document root. Dark mode contributes
    /// "dark"; light mode contributes nothing.
    pub class_names: Vec<&'static str>,
    /// The value for the document's colour-theme data attribute.
    pub color_theme_attribute: String,
}

/// Computes the display classes for a theme state.
pub fn compute_theme_classes(state: &ThemeState) -> ThemeClasses {
    let class_names = match state.mode {
        ThemeMode::Dark => vec!["dark"],
        ThemeMode::Light => Vec::new(),
    };

    ThemeClasses {
        class_names,
        color_theme_attribute: state.color_theme.clone(),
    }
}
