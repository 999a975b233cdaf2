//! Cube configuration, validation, and error types.
//!
//! [`CubeConfig`] is passed to [`Cube::new`](crate::Cube::new) and carries
//! every animation and behavior option the engine reads. There is no
//! process-wide options object.

use std::error::Error;
use std::fmt;
use std::time::Duration;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`CubeConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `frame_rate` is zero.
    InvalidFrameRate {
        /// The configured value.
        value: u32,
    },
    /// `anim_length` is NaN, infinite, or negative.
    InvalidAnimLength {
        /// The configured value.
        value: f64,
    },
    /// `origin` has a non-finite component.
    InvalidOrigin {
        /// The configured value.
        value: [f32; 3],
    },
    /// `max_queued_requests` is zero.
    QueueCapacityZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrameRate { value } => {
                write!(f, "frame_rate must be at least 1, got {value}")
            }
            Self::InvalidAnimLength { value } => {
                write!(f, "anim_length must be finite and non-negative, got {value}")
            }
            Self::InvalidOrigin { value } => {
                write!(f, "origin must be finite, got {value:?}")
            }
            Self::QueueCapacityZero => write!(f, "max_queued_requests must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── CubeConfig ─────────────────────────────────────────────────────

/// Complete configuration for a [`Cube`](crate::Cube).
#[derive(Clone, Debug, PartialEq)]
pub struct CubeConfig {
    /// Animation frames per quarter turn. Default: 10. Minimum: 1.
    pub frame_rate: u32,
    /// Seconds a quarter turn stays on screen, spread evenly over its
    /// frames. Default: 0.25. Zero disables pacing.
    pub anim_length: f64,
    /// Record the inverse of each applied move so [`resolve`](crate::Cube::resolve)
    /// can undo it. Default: true.
    pub record_undo: bool,
    /// Apply [`DEMO_SCRAMBLE`](cubelet_core::DEMO_SCRAMBLE) once at
    /// construction. Default: false.
    pub start_scrambled: bool,
    /// Center of the cube; every rotation pivots here. Default: the origin.
    pub origin: [f32; 3],
    /// Requests buffered by a [`CubeService`](crate::CubeService) before
    /// submission fails with `ChannelFull`. Default: 64.
    pub max_queued_requests: usize,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            frame_rate: 10,
            anim_length: 0.25,
            record_undo: true,
            start_scrambled: false,
            origin: [0.0; 3],
            max_queued_requests: 64,
        }
    }
}

impl CubeConfig {
    /// Defaults with pacing disabled: one frame per turn, no pause.
    ///
    /// Suited to tests and headless use where only the logical state matters.
    pub fn instant() -> Self {
        Self {
            frame_rate: 1,
            anim_length: 0.0,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidFrameRate {
                value: self.frame_rate,
            });
        }
        if !self.anim_length.is_finite() || self.anim_length < 0.0 {
            return Err(ConfigError::InvalidAnimLength {
                value: self.anim_length,
            });
        }
        if self.origin.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::InvalidOrigin { value: self.origin });
        }
        if self.max_queued_requests == 0 {
            return Err(ConfigError::QueueCapacityZero);
        }
        Ok(())
    }

    /// Pause after each animation frame: `anim_length / frame_rate`.
    ///
    /// Assumes a validated config.
    pub fn frame_pause(&self) -> Duration {
        Duration::from_secs_f64(self.anim_length / self.frame_rate.max(1) as f64)
    }
}
