//! WAV renderer — renders a riser to a WAV byte buffer.

use std::io::Cursor;

use crate::chord::Chord;
use crate::config::{RiserConfig, SAMPLE_RATE};
use crate::error::RiserError;

use super::engine::RiserEngine;

/// Render a riser to a WAV file as bytes (16-bit mono PCM at [`SAMPLE_RATE`]).
pub fn render_wav(config: &RiserConfig, chord: &Chord) -> Result<Vec<u8>, RiserError> {
    let pcm = RiserEngine::new(config.clone(), chord.clone()).generate();
    encode_wav(&pcm, SAMPLE_RATE)
}

/// Encode mono i16 PCM samples into an in-memory WAV file.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, RiserError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
    let mut pcm = writer.get_i16_writer(samples.len() as u32);
    for &s in samples {
        pcm.write_sample(s);
    }
    pcm.flush()?;
    writer.finalize()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::chord_for_name;

    fn read_back(wav: &[u8]) -> (hound::WavSpec, Vec<i16>) {
        let reader = hound::WavReader::new(Cursor::new(wav)).expect("valid WAV");
        let spec = reader.spec();
        let samples = reader
            .into_samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .expect("readable samples");
        (spec, samples)
    }

    #[test]
    fn wav_header_valid() {
        let wav = encode_wav(&[0, 1, -1], 44100).unwrap();

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");

        let (spec, samples) = read_back(&wav);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(samples, vec![0, 1, -1]);
    }

    #[test]
    fn extreme_samples_survive() {
        let wav = encode_wav(&[i16::MAX, i16::MIN, -2], 44100).unwrap();
        let (_, samples) = read_back(&wav);
        assert_eq!(samples, vec![i16::MAX, i16::MIN, -2]);
    }

    #[test]
    fn wav_size_correct() {
        let config = RiserConfig {
            duration_secs: 0.5,
            ..Default::default()
        };
        let wav = render_wav(&config, &chord_for_name("maj").unwrap()).unwrap();

        // 0.5s = 22050 mono samples
        let (_, samples) = read_back(&wav);
        assert_eq!(samples.len(), 22050);
        let riff_size = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]);
        assert_eq!(riff_size as usize, wav.len() - 8);
    }

    #[test]
    fn empty_clip_has_no_samples() {
        let config = RiserConfig {
            duration_secs: 0.0,
            ..Default::default()
        };
        let wav = render_wav(&config, &chord_for_name("min").unwrap()).unwrap();
        let (_, samples) = read_back(&wav);
        assert!(samples.is_empty());
    }
}
