//! Chord table — just-intonation frequency ratios relative to the root.

use std::str::FromStr;

use crate::error::RiserError;

pub const UNISON: f64 = 1.0;
pub const MINOR_THIRD: f64 = 5.0 / 4.0;
pub const MAJOR_THIRD: f64 = 4.0 / 3.0;
pub const DIMINISHED_FIFTH: f64 = 36.0 / 25.0;
pub const PERFECT_FIFTH: f64 = 3.0 / 2.0;
pub const AUGMENTED_FIFTH: f64 = 8.0 / 5.0;
pub const MAJOR_SIXTH: f64 = 5.0 / 3.0;
pub const MINOR_SEVENTH: f64 = 9.0 / 5.0;
pub const MAJOR_SEVENTH: f64 = 15.0 / 8.0;

/// Every name `chord_for_name` recognises, in table order.
pub const CHORD_NAMES: [&str; 10] = [
    "maj", "min", "aug", "dim", "maj6", "min6", "dom7", "maj7", "min7", "aug7",
];

/// Ordered frequency ratios. Index order is the order in which the riser
/// stacks partials going up through each octave.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    ratios: Vec<f64>,
}

impl Chord {
    /// Build a chord from custom ratios.
    ///
    /// Ratios must strictly ascend and stay below twice the first one, so that
    /// stacking the chord octave over octave keeps every pitch in order.
    pub fn from_ratios(ratios: Vec<f64>) -> Result<Self, RiserError> {
        if ratios.is_empty() {
            return Err(RiserError::InvalidChord("no ratios given".to_string()));
        }
        if let Some(bad) = ratios.iter().find(|r| !r.is_finite() || **r <= 0.0) {
            return Err(RiserError::InvalidChord(format!(
                "ratio {bad} is not a positive finite number"
            )));
        }
        if let Some(w) = ratios.windows(2).find(|w| w[1] <= w[0]) {
            return Err(RiserError::InvalidChord(format!(
                "ratios must strictly ascend, got {} then {}",
                w[0], w[1]
            )));
        }
        let octave = 2.0 * ratios[0];
        if let Some(top) = ratios.last().filter(|&&r| r >= octave) {
            return Err(RiserError::InvalidChord(format!(
                "ratio {top} reaches the octave above the root ({octave})"
            )));
        }
        Ok(Chord { ratios })
    }

    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Ratio at `index`. Panics if out of range; callers keep the index wrapped.
    pub fn ratio(&self, index: usize) -> f64 {
        self.ratios[index]
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

/// Look up a named chord. `None` means the name is not in the table.
pub fn chord_for_name(name: &str) -> Option<Chord> {
    let ratios: &[f64] = match name {
        "maj" => &[UNISON, MAJOR_THIRD, PERFECT_FIFTH],
        "min" => &[UNISON, MINOR_THIRD, PERFECT_FIFTH],
        "aug" => &[UNISON, MAJOR_THIRD, AUGMENTED_FIFTH],
        "dim" => &[UNISON, MINOR_THIRD, DIMINISHED_FIFTH],
        "maj6" => &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MAJOR_SIXTH],
        "min6" => &[UNISON, MINOR_THIRD, PERFECT_FIFTH, MAJOR_SIXTH],
        "dom7" => &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH],
        "maj7" => &[UNISON, MAJOR_THIRD, PERFECT_FIFTH, MAJOR_SEVENTH],
        "min7" => &[UNISON, MINOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH],
        "aug7" => &[UNISON, MAJOR_THIRD, AUGMENTED_FIFTH, MINOR_SEVENTH],
        _ => return None,
    };
    Some(Chord {
        ratios: ratios.to_vec(),
    })
}

impl FromStr for Chord {
    type Err = RiserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chord_for_name(s).ok_or_else(|| RiserError::UnknownChord(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_is_root_third_fifth() {
        let chord = chord_for_name("maj").expect("maj should exist");
        assert_eq!(chord.ratios(), &[1.0, 4.0 / 3.0, 1.5]);
    }

    #[test]
    fn dom7_has_four_notes() {
        let chord = chord_for_name("dom7").unwrap();
        assert_eq!(chord.len(), 4);
        assert_eq!(chord.ratio(3), MINOR_SEVENTH);
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in CHORD_NAMES {
            let chord = chord_for_name(name).unwrap_or_else(|| panic!("{name} missing"));
            assert_eq!(chord.ratio(0), UNISON, "{name} should start at the root");
            assert!(
                chord.ratios().windows(2).all(|w| w[0] < w[1]),
                "{name} ratios should ascend"
            );
        }
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert!(chord_for_name("xyz").is_none());
        assert!(chord_for_name("MAJ").is_none(), "lookup is case-sensitive");
        assert!(matches!(
            "xyz".parse::<Chord>(),
            Err(RiserError::UnknownChord(name)) if name == "xyz"
        ));
    }

    #[test]
    fn custom_ratios_validated() {
        assert!(Chord::from_ratios(vec![]).is_err());
        assert!(Chord::from_ratios(vec![1.0, 0.0]).is_err());
        assert!(Chord::from_ratios(vec![1.0, f64::NAN]).is_err());
        let chord = Chord::from_ratios(vec![1.0, 1.25]).unwrap();
        assert_eq!(chord.len(), 2);
        assert!(Chord::from_ratios(vec![0.9]).is_ok());
    }

    #[test]
    fn custom_ratios_must_fit_one_ascending_octave() {
        for ratios in [
            vec![1.0, 3.0],
            vec![1.0, 2.0],
            vec![1.5, 1.25],
            vec![1.0, 1.25, 1.25],
        ] {
            assert!(
                matches!(
                    Chord::from_ratios(ratios.clone()),
                    Err(RiserError::InvalidChord(_))
                ),
                "{ratios:?} should be rejected"
            );
        }
        assert!(Chord::from_ratios(vec![1.0, 1.999]).is_ok());
    }
}
