//! Demo configuration
//!
//! Loaded with two layers of precedence (highest wins):
//! 1. Environment variables: `LIMBER_DEBUG`, `LIMBER_TICK_RATE`
//! 2. A TOML file, where every section and field is optional
//!
//! Skeleton topology and clips are authored in code and never come from here.

use limber_animation::FigureStyle;
use limber_core::{Color, LimberError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub floor_height: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            floor_height: 0.0,
        }
    }
}

/// Values the driver uses to script the player's velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Starting x; half the world width when absent
    pub start_x: Option<f64>,
    pub run_speed: f64,
    pub jump_height: f64,
    pub gravity: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: None,
            run_speed: 10.0,
            jump_height: 15.0,
            gravity: 0.98,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub line_thickness: f64,
    pub head_width: f64,
    pub head_height: f64,
    pub debug: bool,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            line_thickness: 6.0,
            head_width: 16.0,
            head_height: 20.0,
            debug: false,
        }
    }
}

impl FigureConfig {
    pub fn style(&self) -> FigureStyle {
        FigureStyle {
            line_thickness: self.line_thickness,
            head_width: self.head_width,
            head_height: self.head_height,
            color: Color::RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub tick_rate_hz: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { tick_rate_hz: 60.0 }
    }
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub figure: FigureConfig,
    pub clock: ClockConfig,
}

impl DemoConfig {
    /// Load a file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load a file with no environment overrides
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| {
            let reason = format!("Failed to load config {}: {}", path.display(), e);
            LimberError::ConfigError(reason)
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Override fields from `lookup` (the environment, outside of tests)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("LIMBER_DEBUG") {
            self.figure.debug = matches!(value.as_str(), "1" | "true" | "yes");
        }
        if let Some(value) = lookup("LIMBER_TICK_RATE") {
            let Ok(rate) = value.parse::<f64>() else {
                return Err(LimberError::InvalidParameter {
                    name: "LIMBER_TICK_RATE".into(),
                    reason: format!("'{}' is not a number", value),
                });
            };
            self.clock.tick_rate_hz = rate;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("world.width", self.world.width),
            ("world.height", self.world.height),
            ("figure.line_thickness", self.figure.line_thickness),
            ("clock.tick_rate_hz", self.clock.tick_rate_hz),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(LimberError::InvalidParameter {
                    name: name.into(),
                    reason: format!("must be positive, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Player start x, defaulting to the middle of the world
    pub fn start_x(&self) -> f64 {
        self.player.start_x.unwrap_or(self.world.width * 0.5)
    }
}
