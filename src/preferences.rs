//! User preferences and their merge semantics.
//!
//! Preferences are persisted upstream and fetched as a partial document;
//! anything the server omits keeps its current value. The defaults here
//! match what a brand-new account sees.

use serde::{Deserialize, Serialize};

use crate::theme::{ThemeMode, ThemeState};

/// Which notification emails the user has opted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Send email notifications at all.
    #[serde(default = "enabled")]
    pub email_notifications: bool,
    /// Alert when a budget is close to its cap.
    #[serde(default = "enabled")]
    pub budget_alerts: bool,
    /// Notify on savings goal milestones.
    #[serde(default = "enabled")]
    pub goal_progress: bool,
    /// Send a weekly summary digest.
    #[serde(default)]
    pub weekly_summary: bool,
}

fn enabled() -> bool {
    true
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            budget_alerts: true,
            goal_progress: true,
            weekly_summary: false,
        }
    }
}

/// The user's display and notification preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// The display currency, e.g. "USD ($)".
    pub currency: String,
    /// The date display format, e.g. "MM/DD/YYYY".
    pub date_format: String,
    /// Light or dark mode.
    pub theme: ThemeMode,
    /// The accent colour theme name.
    pub color_theme: String,
    /// Notification opt-ins.
    #[serde(rename = "notificationSettings", default)]
    pub notifications: NotificationSettings,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            currency: "USD ($)".to_owned(),
            date_format: "MM/DD/YYYY".to_owned(),
            theme: ThemeMode::Light,
            color_theme: "blue".to_owned(),
            notifications: NotificationSettings::default(),
        }
    }
}

impl UserPreferences {
    /// Merges a partial update over the current preferences, field by field.
    pub fn apply(&mut self, update: PreferencesUpdate) {
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
        if let Some(date_format) = update.date_format {
            self.date_format = date_format;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(color_theme) = update.color_theme {
            self.color_theme = color_theme;
        }
        if let Some(notifications) = update.notifications {
            notifications.apply_to(&mut self.notifications);
        }
    }

    /// The theme portion of the preferences, for class computation.
    pub fn theme_state(&self) -> ThemeState {
        ThemeState {
            mode: self.theme,
            color_theme: self.color_theme.clone(),
        }
    }
}

/// A partial preferences document: absent fields leave the current value
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    /// New display currency, if changed.
    #[serde(default)]
    pub currency: Option<String>,
    /// New date format, if changed.
    #[serde(default)]
    pub date_format: Option<String>,
    /// New theme mode, if changed.
    #[serde(default)]
    pub theme: Option<ThemeMode>,
    /// New colour theme, if changed.
    #[serde(default)]
    pub color_theme: Option<String>,
    /// Per-field notification changes, if any.
    #[serde(rename = "notificationSettings", default)]
    pub notifications: Option<NotificationUpdate>,
}

/// A partial notification settings document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUpdate {
    /// New email opt-in, if changed.
    #[serde(default)]
    pub email_notifications: Option<bool>,
    /// New budget alert opt-in, if changed.
    #[serde(default)]
    pub budget_alerts: Option<bool>,
    /// New goal progress opt-in, if changed.
    #[serde(default)]
    pub goal_progress: Option<bool>,
    /// New weekly summary opt-in, if changed.
    #[serde(default)]
    pub weekly_summary: Option<bool>,
}

impl NotificationUpdate {
    fn apply_to(self, settings: &mut NotificationSettings) {
        if let Some(value) = self.email_notifications {
            settings.email_notifications = value;
        }
        if let Some(value) = self.budget_alerts {
            settings.budget_alerts = value;
        }
        if let Some(value) = self.goal_progress {
            settings.goal_progress = value;
        }
        if let Some(value) = self.weekly_summary {
            settings.weekly_summary = value;
        }
    }
}
