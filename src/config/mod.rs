//! Configuration file support for pixelpaint.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/pixelpaint/config.toml`. Settings include the initial image,
//! tool defaults, airbrush behaviour and the frame border.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{AirbrushConfig, BorderConfig, CanvasConfig, ToolsConfig};

use crate::draw::surface::MAX_DIMENSION;
use crate::draw::{BorderStyle, Color};
use crate::input::EngineSettings;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_TOOL_SIZE: u32 = 512;
const MAX_BORDER_WIDTH: u32 = 32;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 640
/// height = 480
/// background_color = "white"
///
/// [tools]
/// default_tool = "pencil"
/// default_size = 1
/// foreground_color = [255, 128, 0]
///
/// [airbrush]
/// density = 0.25
///
/// [border]
/// width = 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial image size and fill
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Tool defaults (tool, size, paint color)
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Airbrush density and seed
    #[serde(default)]
    pub airbrush: AirbrushConfig,

    /// Frame border
    #[serde(default)]
    pub border: BorderConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default, for colors) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `tools.max_size`: 1 - 512
    /// - `tools.default_size`: 0 - `tools.max_size`
    /// - `airbrush.density`: 0.0 - 1.0
    /// - `border.width`: 0 - 32
    pub fn validate_and_clamp(&mut self) {
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_DIMENSION).contains(&*value) {
                warn!("Invalid canvas {name} {value}, clamping to 1-{MAX_DIMENSION} range");
                *value = (*value).clamp(1, MAX_DIMENSION);
            }
        }

        if !(1..=MAX_TOOL_SIZE).contains(&self.tools.max_size) {
            warn!(
                "Invalid max_size {}, clamping to 1-{MAX_TOOL_SIZE} range",
                self.tools.max_size
            );
            self.tools.max_size = self.tools.max_size.clamp(1, MAX_TOOL_SIZE);
        }

        if self.tools.default_size > self.tools.max_size {
            warn!(
                "Invalid default_size {}, clamping to 0-{} range",
                self.tools.default_size, self.tools.max_size
            );
            self.tools.default_size = self.tools.max_size;
        }

        // NaN fails the range check too; it falls back to the default
        if !(0.0..=1.0).contains(&self.airbrush.density) {
            warn!(
                "Invalid airbrush density {}, clamping to 0.0-1.0 range",
                self.airbrush.density
            );
            self.airbrush.density = if self.airbrush.density.is_nan() {
                AirbrushConfig::default().density
            } else {
                self.airbrush.density.clamp(0.0, 1.0)
            };
        }

        if self.border.width > MAX_BORDER_WIDTH {
            warn!(
                "Invalid border width {}, clamping to 0-{MAX_BORDER_WIDTH} range",
                self.border.width
            );
            self.border.width = MAX_BORDER_WIDTH;
        }

        if let Err(err) = self.canvas.background_color.to_color() {
            warn!("Invalid background_color ({err}), falling back to 'white'");
            self.canvas.background_color = types::default_background_color();
        }

        if let Err(err) = self.tools.foreground_color.to_color() {
            warn!("Invalid foreground_color ({err}), falling back to 'black'");
            self.tools.foreground_color = types::default_foreground_color();
        }
    }

    /// Initial background (fill and eraser) color.
    pub fn background_color(&self) -> Color {
        self.canvas
            .background_color
            .to_color()
            .unwrap_or(crate::draw::WHITE)
    }

    /// Initial foreground (paint) color.
    pub fn foreground_color(&self) -> Color {
        self.tools
            .foreground_color
            .to_color()
            .unwrap_or(crate::draw::BLACK)
    }

    /// Engine settings derived from this configuration.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            tool: self.tools.default_tool,
            tool_size: self.tools.default_size,
            foreground: self.foreground_color(),
            background: self.background_color(),
            airbrush_density: self.airbrush.density,
            seed: self.airbrush.seed,
            border: BorderStyle {
                width: self.border.width,
            },
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pixelpaint/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pixelpaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Serializes the config to TOML and writes it to `config_path`,
    /// creating the parent directory if needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a documented default configuration file at the default location.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::create_default_file_at(&config_path)?;
        Ok(config_path)
    }

    /// Writes the example config from `config.example.toml` to `config_path`.
    pub fn create_default_file_at(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(config_path, Self::example_toml())
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// The documented example configuration shipped with the crate.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
