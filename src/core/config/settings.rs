//! Runtime settings for the distance display
//!
//! Built-in defaults, optionally overridden by the user config file.

use serde::{Deserialize, Serialize};

use super::user_config::ConfigFile;

/// Default widget frame inside the glyph view, in pixels
pub const DEFAULT_WIDGET_FRAME: WidgetFrame = WidgetFrame {
    x: 20.0,
    y: 22.0,
    width: 120.0,
    height: 22.0,
};

/// How far the widget moves when the view shows rulers
pub const DEFAULT_RULERS_SHIFT: WidgetOffset = WidgetOffset { x: 16.0, y: 16.0 };

pub const DEFAULT_LOG_FILTER: &str = "showdist=info";

/// Pixel frame of the text widget relative to the view's corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WidgetFrame {
    pub fn offset_by(self, offset: WidgetOffset) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..self
        }
    }
}

impl Default for WidgetFrame {
    fn default() -> Self {
        DEFAULT_WIDGET_FRAME
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetOffset {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Also write logs to ~/.config/showdist/logs
    pub log_to_file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            log_to_file: false,
        }
    }
}

/// Settings used by the extension and its display adapters
#[derive(Debug, Clone, PartialEq)]
pub struct ShowDistSettings {
    pub widget_frame: WidgetFrame,
    pub rulers_shift: WidgetOffset,
    pub logging: LoggingSettings,
}

impl Default for ShowDistSettings {
    fn default() -> Self {
        Self {
            widget_frame: DEFAULT_WIDGET_FRAME,
            rulers_shift: DEFAULT_RULERS_SHIFT,
            logging: LoggingSettings::default(),
        }
    }
}

impl ShowDistSettings {
    /// Defaults with the user config file applied on top
    pub fn load() -> Self {
        let mut settings = Self::default();
        if let Some(config) = ConfigFile::load() {
            settings.apply_config(&config);
        }
        settings
    }

    pub fn apply_config(&mut self, config: &ConfigFile) {
        if let Some(frame) = config.widget_frame {
            self.widget_frame = frame;
        }
        if let Some(shift) = config.rulers_shift {
            self.rulers_shift = shift;
        }
        if let Some(filter) = &config.log_filter {
            self.logging.filter = filter.clone();
        }
        if let Some(log_to_file) = config.log_to_file {
            self.logging.log_to_file = log_to_file;
        }
    }

    /// Widget frame for a view, shifted when rulers are visible
    pub fn widget_frame_for(&self, rulers_visible: bool) -> WidgetFrame {
        if rulers_visible {
            self.widget_frame.offset_by(self.rulers_shift)
        } else {
            self.widget_frame
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rulers_shift_the_widget() {
        let settings = ShowDistSettings::default();
        assert_eq!(settings.widget_frame_for(false), DEFAULT_WIDGET_FRAME);

        let shifted = settings.widget_frame_for(true);
        assert_eq!(shifted.x, 36.0);
        assert_eq!(shifted.y, 38.0);
        assert_eq!(shifted.width, 120.0);
        assert_eq!(shifted.height, 22.0);
    }

    #[test]
    fn config_overrides_only_what_it_sets() {
        let mut settings = ShowDistSettings::default();
        let config = ConfigFile {
            log_filter: Some("showdist=debug".to_string()),
            ..Default::default()
        };
        settings.apply_config(&config);

        assert_eq!(settings.logging.filter, "showdist=debug");
        assert!(!settings.logging.log_to_file);
        assert_eq!(settings.widget_frame, DEFAULT_WIDGET_FRAME);
    }
}
