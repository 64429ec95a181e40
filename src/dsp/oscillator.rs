//! Sine partial — a bare phase accumulator.

use std::f64::consts::TAU;

/// One sine oscillator. Holds only its phase in radians, kept in `[0, 2π)`;
/// the frequency is supplied on every step by whoever owns the partial.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Partial {
    phase: f64,
}

impl Partial {
    /// A fresh partial starting at phase 0.
    pub fn new() -> Self {
        Partial { phase: 0.0 }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance one sample at `frequency` Hz and return the sine of the new phase.
    ///
    /// The phase is wrapped every call so its magnitude never grows.
    pub fn next_sample(&mut self, frequency: f64, sample_rate: f64) -> f64 {
        self.phase = (self.phase + frequency / sample_rate * TAU) % TAU;
        self.phase.sin()
    }
}
