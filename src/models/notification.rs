// ============================================================================
// NOTIFICATION - Opciones del toast (nombres de campo del plugin bs4-toast)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToastOptions {
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Tiempo visible en ms
    pub delay: u32,
    pub pause_on_hover: bool,
}

impl ToastOptions {
    pub fn defaults(content: &str, delay: u32) -> Self {
        Self {
            title: "Notification".to_string(),
            subtitle: None,
            content: content.to_string(),
            severity: Severity::Info,
            delay,
            pause_on_hover: true,
        }
    }

    /// Aplica los overrides presentes sobre `self`
    pub fn merged(mut self, overrides: ToastOverrides) -> Self {
        if let Some(title) = overrides.title {
            self.title = title;
        }
        if let Some(subtitle) = overrides.subtitle {
            self.subtitle = Some(subtitle);
        }
        if let Some(content) = overrides.content {
            self.content = content;
        }
        if let Some(severity) = overrides.severity {
            self.severity = severity;
        }
        if let Some(delay) = overrides.delay {
            self.delay = delay;
        }
        if let Some(pause_on_hover) = overrides.pause_on_hover {
            self.pause_on_hover = pause_on_hover;
        }
        self
    }
}

/// Opciones parciales del llamador; lo que falte se toma de los defaults
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastOverrides {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub severity: Option<Severity>,
    pub delay: Option<u32>,
    pub pause_on_hover: Option<bool>,
}

impl ToastOverrides {
    pub fn titled(severity: Severity, title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            severity: Some(severity),
            ..Self::default()
        }
    }
}
