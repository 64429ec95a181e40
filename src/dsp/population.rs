//! Partial population — the rising stack of chord tones.
//!
//! Partials carry no frequency of their own. Each one's pitch is implied by
//! where it sits in the stack: partial 0 sounds one chord step above the
//! base position (octave, chord index), and every partial above it is one
//! chord step higher than its neighbour. A new partial is born once the
//! step below the base rises above the audible floor; the base then moves
//! down to that step. Frequencies are recomputed from elapsed time on every
//! sample.

use std::collections::VecDeque;

use crate::chord::Chord;

use super::oscillator::Partial;

/// Partials at or below this frequency are not born.
pub const MIN_AUDIBLE_HZ: f64 = 20.0;
/// Partials at or above this frequency are dropped.
pub const MAX_AUDIBLE_HZ: f64 = 20_000.0;

/// A point on the chord ladder: chord tone `index` in octave `octave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub octave: i32,
    pub index: usize,
}

impl Position {
    /// One chord step lower, wrapping into the octave below.
    fn step_down(self, chord_len: usize) -> Self {
        if self.index == 0 {
            Position {
                octave: self.octave - 1,
                index: chord_len - 1,
            }
        } else {
            Position {
                octave: self.octave,
                index: self.index - 1,
            }
        }
    }

    /// One chord step higher, wrapping into the octave above.
    fn step_up(self, chord_len: usize) -> Self {
        if self.index + 1 >= chord_len {
            Position {
                octave: self.octave + 1,
                index: 0,
            }
        } else {
            Position {
                octave: self.octave,
                index: self.index + 1,
            }
        }
    }
}

/// A chord laid out over every octave and sliding upward in time.
#[derive(Debug, Clone)]
pub struct PitchLadder {
    chord: Chord,
    octaves_per_second: f64,
}

impl PitchLadder {
    pub fn new(chord: Chord, octaves_per_second: f64) -> Self {
        PitchLadder {
            chord,
            octaves_per_second,
        }
    }

    pub fn chord(&self) -> &Chord {
        &self.chord
    }

    /// `ratio[index] * 2^(t * octaves_per_second + octave)`.
    pub fn frequency(&self, position: Position, t: f64) -> f64 {
        let exp = t * self.octaves_per_second + position.octave as f64;
        self.chord.ratio(position.index) * 2.0_f64.powf(exp)
    }
}

/// The live partials, lowest first, plus the base position below them.
#[derive(Debug, Clone)]
pub struct Population {
    partials: VecDeque<Partial>,
    base: Position,
}

impl Population {
    /// An empty population whose base sits just above the audible ceiling at
    /// t = 0, so the first `grow` fills the whole audible band beneath it.
    pub fn new(ladder: &PitchLadder) -> Self {
        let mut base = Position {
            octave: 0,
            index: 0,
        };
        while ladder.frequency(base, 0.0) <= MAX_AUDIBLE_HZ {
            base.octave += 1;
        }
        // Large custom root ratios start above the ceiling already.
        loop {
            let lower = Position {
                octave: base.octave - 1,
                index: 0,
            };
            if ladder.frequency(lower, 0.0) <= MAX_AUDIBLE_HZ {
                break;
            }
            base = lower;
        }
        Population {
            partials: VecDeque::new(),
            base,
        }
    }

    pub fn len(&self) -> usize {
        self.partials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partials.is_empty()
    }

    /// The position one chord step below the lowest partial.
    pub fn base(&self) -> Position {
        self.base
    }

    /// Phases of the live partials, lowest first.
    pub fn phases(&self) -> impl Iterator<Item = f64> + '_ {
        self.partials.iter().map(Partial::phase)
    }

    /// Positions of the live partials, lowest first.
    pub fn positions<'a>(&self, ladder: &'a PitchLadder) -> impl Iterator<Item = Position> + 'a {
        let len = ladder.chord().len();
        let mut position = self.base;
        (0..self.partials.len()).map(move |_| {
            position = position.step_up(len);
            position
        })
    }

    /// Prepend a new partial for every step below the base that has risen
    /// above the audible floor by time `t`. Returns how many were born.
    pub fn grow(&mut self, ladder: &PitchLadder, t: f64) -> usize {
        let len = ladder.chord().len();
        let mut born = 0;
        loop {
            let candidate = self.base.step_down(len);
            if ladder.frequency(candidate, t) > MIN_AUDIBLE_HZ {
                self.partials.push_front(Partial::new());
                self.base = candidate;
                born += 1;
            } else {
                return born;
            }
        }
    }

    /// Advance every audible partial by one sample and return their weighted
    /// sum. The first partial found at or above the ceiling, and everything
    /// above it, is removed without sounding.
    pub fn sample_and_prune<W>(
        &mut self,
        ladder: &PitchLadder,
        t: f64,
        sample_rate: f64,
        weight: W,
    ) -> f64
    where
        W: Fn(f64) -> f64,
    {
        let len = ladder.chord().len();
        let mut position = self.base;
        let mut keep = self.partials.len();
        let mut sum = 0.0;
        for (i, partial) in self.partials.iter_mut().enumerate() {
            position = position.step_up(len);
            let hz = ladder.frequency(position, t);
            if hz >= MAX_AUDIBLE_HZ {
                keep = i;
                break;
            }
            sum += partial.next_sample(hz, sample_rate) * weight(hz);
        }
        self.partials.truncate(keep);
        sum
    }
}
