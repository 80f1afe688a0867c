//! Configuration management
//!
//! - Built-in settings and their defaults
//! - The optional user configuration file

pub mod settings;
pub mod user_config;

pub use settings::{
    LoggingSettings, ShowDistSettings, WidgetFrame, WidgetOffset, DEFAULT_RULERS_SHIFT,
    DEFAULT_WIDGET_FRAME,
};
pub use user_config::ConfigFile;
