use std::fmt;

#[derive(Debug)]
pub enum RiserError {
    /// Chord name not present in the chord table.
    UnknownChord(String),
    /// Custom chord that is empty, has a non-positive ratio, does not strictly
    /// ascend, or spans an octave or more.
    InvalidChord(String),
    InvalidConfig { field: &'static str, reason: String },
    Json(serde_json::Error),
    Wav(hound::Error),
    Io(std::io::Error),
}

impl fmt::Display for RiserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiserError::UnknownChord(name) => write!(
                f,
                "Unknown chord '{name}' (expected one of: {})",
                crate::chord::CHORD_NAMES.join(", ")
            ),
            RiserError::InvalidChord(reason) => write!(f, "Invalid chord: {reason}"),
            RiserError::InvalidConfig { field, reason } => {
                write!(f, "Invalid config field '{field}': {reason}")
            }
            RiserError::Json(e) => write!(f, "Config parse error: {e}"),
            RiserError::Wav(e) => write!(f, "WAV encode error: {e}"),
            RiserError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RiserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RiserError::Json(e) => Some(e),
            RiserError::Wav(e) => Some(e),
            RiserError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RiserError {
    fn from(e: serde_json::Error) -> Self {
        RiserError::Json(e)
    }
}

impl From<hound::Error> for RiserError {
    fn from(e: hound::Error) -> Self {
        RiserError::Wav(e)
    }
}

impl From<std::io::Error> for RiserError {
    fn from(e: std::io::Error) -> Self {
        RiserError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_chord_lists_valid_names() {
        let msg = RiserError::UnknownChord("xyz".to_string()).to_string();
        assert!(msg.contains("'xyz'"), "got: {msg}");
        assert!(msg.contains("maj") && msg.contains("aug7"), "got: {msg}");
    }

    #[test]
    fn json_error_keeps_source() {
        let err: RiserError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
