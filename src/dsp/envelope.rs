//! Amplitude shaping: the Gaussian loudness curve over frequency and the
//! linear fade over clip time.

/// Loudness weight for a partial at `frequency` Hz.
///
/// `exp(-0.5 * ((frequency - center) / std_dev)^2)`: 1.0 at the centre,
/// falling off smoothly towards both ends of the audible band.
pub fn bell_curve(frequency: f64, center_hz: f64, std_dev_hz: f64) -> f64 {
    let z = (frequency - center_hz) / std_dev_hz;
    (-0.5 * z * z).exp()
}

/// Linear fade-in over the first second and fade-out over the last second.
///
/// Fade-in covers `[0, 1s)`, fade-out covers `(duration - 1s, duration]`.
/// On clips of two seconds or less both windows can cover the same sample,
/// in which case both factors apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    duration_secs: f64,
}

impl Fade {
    pub const LENGTH_SECS: f64 = 1.0;

    pub fn new(duration_secs: f64) -> Self {
        Fade { duration_secs }
    }

    /// Gain factor at `t` seconds into the clip.
    pub fn gain_at(&self, t: f64) -> f64 {
        let mut gain = 1.0;
        if t < Self::LENGTH_SECS {
            gain *= t / Self::LENGTH_SECS;
        }
        if t > self.duration_secs - Self::LENGTH_SECS {
            gain *= (self.duration_secs - t) / Self::LENGTH_SECS;
        }
        gain
    }
}
