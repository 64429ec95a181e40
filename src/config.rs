//! Riser configuration — fixed for the lifetime of an engine.

use serde::{Deserialize, Serialize};

use crate::error::RiserError;

/// Output sample rate in Hz. The riser renders at this rate only.
pub const SAMPLE_RATE: u32 = 44_100;

/// Fastest accepted rise: one octave per sample.
pub const MAX_OCTAVES_PER_SECOND: f64 = SAMPLE_RATE as f64;

/// Largest accepted total rise over a clip, in octaves. Keeps the octave
/// counter of the lowest partial far from `i32` overflow.
pub const MAX_TOTAL_RISE_OCTAVES: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiserConfig {
    /// Pitch rise in octaves per second of elapsed time.
    #[serde(default = "RiserConfig::default_octaves_per_second")]
    pub octaves_per_second: f64,
    /// Clip length in seconds. Zero or negative renders nothing.
    #[serde(default = "RiserConfig::default_duration_secs")]
    pub duration_secs: f64,
    /// Centre of the Gaussian loudness curve, in Hz.
    #[serde(default = "RiserConfig::default_volume_center_hz")]
    pub volume_center_hz: f64,
    /// Standard deviation of the loudness curve, in Hz.
    #[serde(default = "RiserConfig::default_volume_std_dev_hz")]
    pub volume_std_dev_hz: f64,
    /// Output gain. Not normalised; pick it low enough to avoid clipping.
    #[serde(default = "RiserConfig::default_gain")]
    pub gain: f64,
}

impl RiserConfig {
    fn default_octaves_per_second() -> f64 {
        0.1
    }
    fn default_duration_secs() -> f64 {
        60.0
    }
    fn default_volume_center_hz() -> f64 {
        1000.0
    }
    fn default_volume_std_dev_hz() -> f64 {
        800.0
    }
    fn default_gain() -> f64 {
        0.05
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, RiserError> {
        let config: RiserConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the sample loop cannot handle.
    ///
    /// A non-positive duration is accepted: it just produces an empty clip.
    pub fn validate(&self) -> Result<(), RiserError> {
        if !self.octaves_per_second.is_finite() || self.octaves_per_second < 0.0 {
            return Err(invalid(
                "octavesPerSecond",
                format!("must be a non-negative number, got {}", self.octaves_per_second),
            ));
        }
        if self.octaves_per_second > MAX_OCTAVES_PER_SECOND {
            return Err(invalid(
                "octavesPerSecond",
                format!(
                    "must be at most {MAX_OCTAVES_PER_SECOND}, got {}",
                    self.octaves_per_second
                ),
            ));
        }
        if !self.duration_secs.is_finite() {
            return Err(invalid(
                "durationSecs",
                format!("must be finite, got {}", self.duration_secs),
            ));
        }
        if self.duration_secs * self.octaves_per_second > MAX_TOTAL_RISE_OCTAVES {
            return Err(invalid(
                "durationSecs",
                format!(
                    "rises {} octaves over the clip, at most {MAX_TOTAL_RISE_OCTAVES} allowed",
                    self.duration_secs * self.octaves_per_second
                ),
            ));
        }
        if !self.volume_center_hz.is_finite() {
            return Err(invalid(
                "volumeCenterHz",
                format!("must be finite, got {}", self.volume_center_hz),
            ));
        }
        if !self.volume_std_dev_hz.is_finite() || self.volume_std_dev_hz <= 0.0 {
            return Err(invalid(
                "volumeStdDevHz",
                format!("must be a positive number, got {}", self.volume_std_dev_hz),
            ));
        }
        if !self.gain.is_finite() {
            return Err(invalid("gain", format!("must be finite, got {}", self.gain)));
        }
        Ok(())
    }

    /// Number of samples in the clip: `round(sample_rate * duration)`, never negative.
    pub fn total_samples(&self, sample_rate: u32) -> usize {
        let n = (sample_rate as f64 * self.duration_secs).round();
        if n > 0.0 { n as usize } else { 0 }
    }
}

impl Default for RiserConfig {
    fn default() -> Self {
        Self {
            octaves_per_second: Self::default_octaves_per_second(),
            duration_secs: Self::default_duration_secs(),
            volume_center_hz: Self::default_volume_center_hz(),
            volume_std_dev_hz: Self::default_volume_std_dev_hz(),
            gain: Self::default_gain(),
        }
    }
}

fn invalid(field: &'static str, reason: String) -> RiserError {
    RiserError::InvalidConfig { field, reason }
}
