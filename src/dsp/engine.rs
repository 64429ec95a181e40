//! Riser Engine — renders the endless rise to 16-bit mono samples.
//!
//! Each sample runs the same steps in order: bring in any partials that
//! have risen above the audible floor, sum the partials that are still
//! below the ceiling (dropping the ones that are not), then apply the
//! fade, the gain and quantization. Every sample depends on the phases and
//! population left by the one before it, so samples are produced strictly
//! in index order.

use crate::chord::Chord;
use crate::config::{RiserConfig, SAMPLE_RATE};

use super::envelope::{Fade, bell_curve};
use super::population::{PitchLadder, Population};

#[derive(Debug, Clone)]
pub struct RiserEngine {
    config: RiserConfig,
    ladder: PitchLadder,
    population: Population,
    fade: Fade,
    sample_rate: f64,
    total_samples: usize,
    /// Index of the next sample to render.
    cursor: usize,
    peak_population: usize,
}

impl RiserEngine {
    /// Build an engine for an already-validated config (see [`RiserConfig::validate`]).
    pub fn new(config: RiserConfig, chord: Chord) -> Self {
        let ladder = PitchLadder::new(chord, config.octaves_per_second);
        let population = Population::new(&ladder);
        let total_samples = config.total_samples(SAMPLE_RATE);
        tracing::debug!(
            chord = ?ladder.chord().ratios(),
            octaves_per_second = config.octaves_per_second,
            total_samples,
            "riser engine created"
        );
        RiserEngine {
            fade: Fade::new(config.duration_secs),
            config,
            ladder,
            population,
            sample_rate: SAMPLE_RATE as f64,
            total_samples,
            cursor: 0,
            peak_population: 0,
        }
    }

    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// Number of partials currently alive.
    pub fn population_len(&self) -> usize {
        self.population.len()
    }

    /// Most partials sounding at once so far.
    pub fn peak_population(&self) -> usize {
        self.peak_population
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn ladder(&self) -> &PitchLadder {
        &self.ladder
    }

    /// Render the next sample, or `None` once the clip is complete.
    pub fn next_sample(&mut self) -> Option<i16> {
        if self.cursor >= self.total_samples {
            return None;
        }
        let t = self.cursor as f64 / self.sample_rate;
        self.cursor += 1;

        self.population.grow(&self.ladder, t);

        let center = self.config.volume_center_hz;
        let std_dev = self.config.volume_std_dev_hz;
        let mut s = self
            .population
            .sample_and_prune(&self.ladder, t, self.sample_rate, |hz| {
                bell_curve(hz, center, std_dev)
            });
        self.peak_population = self.peak_population.max(self.population.len());

        s *= self.fade.gain_at(t);
        // Scale down to reduce clipping.
        s *= self.config.gain;
        Some(quantize(s))
    }

    /// Render the rest of the clip and hand the buffer over.
    pub fn generate(mut self) -> Vec<i16> {
        let mut samples = Vec::with_capacity(self.total_samples - self.cursor);
        while let Some(s) = self.next_sample() {
            samples.push(s);
        }
        tracing::debug!(
            samples = samples.len(),
            peak_population = self.peak_population,
            final_population = self.population.len(),
            "riser generated"
        );
        samples
    }
}

impl Iterator for RiserEngine {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        self.next_sample()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total_samples - self.cursor;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RiserEngine {}

/// Clamp to [-1, 1], scale by `i16::MAX` and truncate toward zero.
pub fn quantize(s: f64) -> i16 {
    (s.clamp(-1.0, 1.0) * i16::MAX as f64) as i16
}
