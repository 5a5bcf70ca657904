//! Configuration management for todoline.
//!
//! This module handles loading configuration from `~/.todoline/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, FormatConfig, GeneralConfig};
