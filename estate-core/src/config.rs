//! Carousel tuning loaded from TOML.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::carousel::animator::Easing;
use crate::error::{CoreError, Result};

/// Environment variable naming an explicit carousel config file.
pub const CONFIG_PATH_ENV: &str = "ESTATE_SITE_CONFIG";

/// Source that produced the carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    File(PathBuf),
}

/// Breakpoints and visible-window sizes for the project carousel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Window widths at or above this many logical pixels are `Wide`.
    pub wide_breakpoint_px: f32,
    /// Upper bound on slides shown at once in a wide window. The effective
    /// count is further capped by the number of slides.
    pub wide_max_visible: usize,
    /// Slides shown at once in a narrow window.
    pub narrow_visible: usize,
    /// Eased transition used whenever the strip settles on an index.
    pub settle: SettleConfig,
}

/// Transition applied when the strip moves to a new settled position.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SettleConfig {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            wide_breakpoint_px: 1024.0,
            wide_max_visible: 4,
            narrow_visible: 1,
            settle: SettleConfig::default(),
        }
    }
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            easing: Easing::EaseInOut,
        }
    }
}

impl CarouselConfig {
    const MAX_SETTLE_MS: u64 = 10_000;

    /// Resolve configuration from the environment.
    ///
    /// Evaluation order:
    /// 1) `$ESTATE_SITE_CONFIG`,
    /// 2) `carousel.toml` or `config/carousel.toml` in the working directory,
    /// 3) defaults.
    pub fn load_from_env() -> Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|source| CoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate. Missing keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.wide_breakpoint_px.is_finite() || self.wide_breakpoint_px <= 0.0
        {
            return Err(CoreError::InvalidConfig(format!(
                "wide_breakpoint_px must be a positive number, got {}",
                self.wide_breakpoint_px
            )));
        }
        if self.wide_max_visible == 0 {
            return Err(CoreError::InvalidConfig(
                "wide_max_visible must be at least 1".into(),
            ));
        }
        if self.narrow_visible == 0 {
            return Err(CoreError::InvalidConfig(
                "narrow_visible must be at least 1".into(),
            ));
        }
        if self.settle.duration_ms > Self::MAX_SETTLE_MS {
            return Err(CoreError::InvalidConfig(format!(
                "settle.duration_ms must not exceed {} ms, got {}",
                Self::MAX_SETTLE_MS,
                self.settle.duration_ms
            )));
        }
        Ok(())
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &["carousel.toml", "config/carousel.toml"];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}
