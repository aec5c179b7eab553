use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{SelectionError, SelectionResult};

/// Read-only styling and behavior supplied when the renderer is built.
///
/// Serializable so hosts can persist overlay setup next to their chart config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRendererConfig {
    pub width: f64,
    #[serde(default = "default_inactive_bar_color")]
    pub inactive_bar_color: String,
    #[serde(default = "default_inactive_bar_opacity")]
    pub inactive_bar_opacity: f64,
    #[serde(default = "default_over_selection_color")]
    pub over_selection_color: String,
    #[serde(default = "default_over_selection_opacity")]
    pub over_selection_opacity: f64,
    /// Fallback color for enabled ranges that do not declare one.
    #[serde(default)]
    pub selection_color: Option<String>,
    #[serde(default = "default_handle_grab_tolerance_px")]
    pub handle_grab_tolerance_px: f64,
    #[serde(default = "default_transition_duration_seconds")]
    pub transition_duration_seconds: f64,
    #[serde(default)]
    pub transition_easing: Easing,
}

impl SelectionRendererConfig {
    /// Creates a config with default styling for a chart `width` pixels wide.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            inactive_bar_color: default_inactive_bar_color(),
            inactive_bar_opacity: default_inactive_bar_opacity(),
            over_selection_color: default_over_selection_color(),
            over_selection_opacity: default_over_selection_opacity(),
            selection_color: None,
            handle_grab_tolerance_px: default_handle_grab_tolerance_px(),
            transition_duration_seconds: default_transition_duration_seconds(),
            transition_easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn with_inactive_bar(mut self, color: impl Into<String>, opacity: f64) -> Self {
        self.inactive_bar_color = color.into();
        self.inactive_bar_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_over_selection(mut self, color: impl Into<String>, opacity: f64) -> Self {
        self.over_selection_color = color.into();
        self.over_selection_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_selection_color(mut self, color: impl Into<String>) -> Self {
        self.selection_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_handle_grab_tolerance_px(mut self, tolerance_px: f64) -> Self {
        self.handle_grab_tolerance_px = tolerance_px;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, duration_seconds: f64, easing: Easing) -> Self {
        self.transition_duration_seconds = duration_seconds;
        self.transition_easing = easing;
        self
    }

    pub fn validate(&self) -> SelectionResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(SelectionError::InvalidConfig(
                "width must be finite and > 0".to_owned(),
            ));
        }
        for (name, opacity) in [
            ("inactive_bar_opacity", self.inactive_bar_opacity),
            ("over_selection_opacity", self.over_selection_opacity),
        ] {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(SelectionError::InvalidConfig(format!(
                    "`{name}` must be finite and in [0, 1]"
                )));
            }
        }
        for (name, color) in [
            ("inactive_bar_color", Some(&self.inactive_bar_color)),
            ("over_selection_color", Some(&self.over_selection_color)),
            ("selection_color", self.selection_color.as_ref()),
        ] {
            if color.is_some_and(|color| color.trim().is_empty()) {
                return Err(SelectionError::InvalidConfig(format!(
                    "`{name}` must not be empty"
                )));
            }
        }
        if !self.handle_grab_tolerance_px.is_finite() || self.handle_grab_tolerance_px < 0.0 {
            return Err(SelectionError::InvalidConfig(
                "handle grab tolerance must be finite and >= 0".to_owned(),
            ));
        }
        if !self.transition_duration_seconds.is_finite() || self.transition_duration_seconds < 0.0
        {
            return Err(SelectionError::InvalidConfig(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> SelectionResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> SelectionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_inactive_bar_color() -> String {
    "grey".to_owned()
}

fn default_inactive_bar_opacity() -> f64 {
    0.5
}

fn default_over_selection_color() -> String {
    "yellow".to_owned()
}

fn default_over_selection_opacity() -> f64 {
    1.0
}

fn default_handle_grab_tolerance_px() -> f64 {
    6.0
}

fn default_transition_duration_seconds() -> f64 {
    0.3
}
