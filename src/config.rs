//! Output settings for the demo renderer, overridable from the environment.

use crate::march::{QualityTier, UnknownQuality};
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_QUALITY: &str = "CRITTER_QUALITY";
pub const ENV_WIDTH: &str = "CRITTER_WIDTH";
pub const ENV_HEIGHT: &str = "CRITTER_HEIGHT";
pub const ENV_FRAMES: &str = "CRITTER_FRAMES";
pub const ENV_OUTLINE: &str = "CRITTER_OUTLINE";
pub const ENV_OUTPUT: &str = "CRITTER_OUTPUT";

const KEYS: [&str; 6] = [ENV_QUALITY, ENV_WIDTH, ENV_HEIGHT, ENV_FRAMES, ENV_OUTLINE, ENV_OUTPUT];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownQuality(#[from] UnknownQuality),
    #[error("{key} expects a positive integer, got '{value}'")]
    InvalidNumber { key: String, value: String },
    #[error("{key} expects 0/1 or true/false, got '{value}'")]
    InvalidFlag { key: String, value: String },
    #[error("unknown setting '{0}'")]
    UnknownKey(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub quality: QualityTier,
    pub frames: u32,
    pub fps: f32,
    /// Draw an outline where rays pass close to the creature.
    pub track_nearest: bool,
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 180,
            quality: QualityTier::Medium,
            frames: 8,
            fps: 12.0,
            track_nearest: true,
            output_dir: PathBuf::from("frames"),
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_quality(mut self, quality: QualityTier) -> Self {
        self.quality = quality;
        self
    }

    /// Defaults overridden by any `CRITTER_*` variables that are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    /// Values that fail to parse are logged and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        for key in KEYS {
            if let Some(value) = lookup(key) {
                if let Err(err) = config.apply(key, &value) {
                    log::warn!("ignoring {key}: {err}");
                }
            }
        }
        config
    }

    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            ENV_QUALITY => self.quality = value.parse()?,
            ENV_WIDTH => self.width = parse_count(key, value)?,
            ENV_HEIGHT => self.height = parse_count(key, value)?,
            ENV_FRAMES => self.frames = parse_count(key, value)?,
            ENV_OUTLINE => self.track_nearest = parse_flag(key, value)?,
            ENV_OUTPUT => self.output_dir = PathBuf::from(value),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
