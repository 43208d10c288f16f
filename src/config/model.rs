//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the page works out of the box.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ConfigError;

/// The reveal spring is integrated in fixed 4 ms substeps, which diverge once
/// `sqrt(stiffness) * 0.004` reaches 2 (stiffness 250 000).
pub const MAX_REVEAL_STIFFNESS: f32 = 100_000.0;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub background: BackgroundConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rotation: RotationConfig::default(),
            animation: AnimationConfig::default(),
            background: BackgroundConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reject values that would stall the timers or divide by zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rotation.interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("rotation.interval_ms"));
        }
        if self.animation.tick_ms == 0 {
            return Err(ConfigError::ZeroDuration("animation.tick_ms"));
        }
        if self.animation.transition_ms == 0 {
            return Err(ConfigError::ZeroDuration("animation.transition_ms"));
        }
        if !(self.animation.reveal_stiffness > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "animation.reveal_stiffness",
                value: self.animation.reveal_stiffness,
            });
        }
        if !(self.animation.reveal_stiffness < MAX_REVEAL_STIFFNESS) {
            return Err(ConfigError::TooLarge {
                field: "animation.reveal_stiffness",
                value: self.animation.reveal_stiffness,
                max: MAX_REVEAL_STIFFNESS,
            });
        }
        if !(self.animation.reveal_damping >= 0.0) {
            return Err(ConfigError::Negative {
                field: "animation.reveal_damping",
                value: self.animation.reveal_damping,
            });
        }
        if !(self.background.primary_divisor > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "background.primary_divisor",
                value: self.background.primary_divisor,
            });
        }
        if !(self.background.secondary_divisor > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "background.secondary_divisor",
                value: self.background.secondary_divisor,
            });
        }
        self.logging.level()?;
        Ok(())
    }
}

/// Greeting rotation timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl RotationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Frame tick, greeting transition, card reveal spring and entrance stagger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Duration of each half (exit, then enter) of a greeting swap.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "default_reveal_stiffness")]
    pub reveal_stiffness: f32,
    #[serde(default = "default_reveal_damping")]
    pub reveal_damping: f32,
    #[serde(default = "default_intro_delay_ms")]
    pub intro_delay_ms: u64,
    #[serde(default = "default_cards_delay_ms")]
    pub cards_delay_ms: u64,
    #[serde(default = "default_footer_delay_ms")]
    pub footer_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            transition_ms: default_transition_ms(),
            reveal_stiffness: default_reveal_stiffness(),
            reveal_damping: default_reveal_damping(),
            intro_delay_ms: default_intro_delay_ms(),
            cards_delay_ms: default_cards_delay_ms(),
            footer_delay_ms: default_footer_delay_ms(),
        }
    }
}

impl AnimationConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Pointer-driven background blobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// The top-left blob sits at `pointer / primary_divisor`.
    #[serde(default = "default_primary_divisor")]
    pub primary_divisor: f32,
    /// The bottom-right blob sits at `pointer / secondary_divisor` from the far edges.
    #[serde(default = "default_secondary_divisor")]
    pub secondary_divisor: f32,
    #[serde(default = "default_radius_x")]
    pub radius_x: u16,
    #[serde(default = "default_radius_y")]
    pub radius_y: u16,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            primary_divisor: default_primary_divisor(),
            secondary_divisor: default_secondary_divisor(),
            radius_x: default_radius_x(),
            radius_y: default_radius_y(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.level.clone()))
    }
}

fn default_true() -> bool {
    true
}

fn default_interval_ms() -> u64 {
    2000
}

fn default_tick_ms() -> u64 {
    50
}

fn default_transition_ms() -> u64 {
    500
}

fn default_reveal_stiffness() -> f32 {
    400.0
}

fn default_reveal_damping() -> f32 {
    10.0
}

fn default_intro_delay_ms() -> u64 {
    400
}

fn default_cards_delay_ms() -> u64 {
    600
}

fn default_footer_delay_ms() -> u64 {
    1000
}

fn default_primary_divisor() -> f32 {
    10.0
}

fn default_secondary_divisor() -> f32 {
    15.0
}

fn default_radius_x() -> u16 {
    24
}

fn default_radius_y() -> u16 {
    8
}

fn default_log_dir() -> String {
    "~/.local/share/greetpage/logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
