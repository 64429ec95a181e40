//! uprise — render an endlessly rising chord to a WAV file.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use uprise::chord::Chord;
use uprise::config::{RiserConfig, SAMPLE_RATE};
use uprise::dsp::engine::RiserEngine;
use uprise::dsp::renderer::encode_wav;
use uprise::error::RiserError;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output WAV path
    #[arg(long, default_value = "out.wav")]
    out: PathBuf,

    /// Output gain; the mix is not normalised [default: 0.05]
    #[arg(long, allow_negative_numbers = true)]
    gain: Option<f64>,

    /// Pitch rise in octaves per second [default: 0.1]
    #[arg(long, alias = "octavesHz")]
    octaves_per_second: Option<f64>,

    /// Clip length in seconds [default: 60]
    #[arg(long, alias = "durationSec", allow_negative_numbers = true)]
    duration_secs: Option<f64>,

    /// Chord to stack (maj, min, aug, dim, maj6, min6, dom7, maj7, min7, aug7)
    #[arg(long, alias = "chordName", default_value = "maj")]
    chord: String,

    /// Centre of the loudness curve in Hz [default: 1000]
    #[arg(long, alias = "volumeCenterHz", allow_negative_numbers = true)]
    volume_center_hz: Option<f64>,

    /// Standard deviation of the loudness curve in Hz [default: 800]
    #[arg(long, alias = "volumeStdDevHz")]
    volume_std_dev_hz: Option<f64>,

    /// JSON file with riser settings; flags given on the command line win
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn riser_config(&self) -> Result<RiserConfig, RiserError> {
        let mut config = match &self.config {
            Some(path) => RiserConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => RiserConfig::default(),
        };
        if let Some(v) = self.gain {
            config.gain = v;
        }
        if let Some(v) = self.octaves_per_second {
            config.octaves_per_second = v;
        }
        if let Some(v) = self.duration_secs {
            config.duration_secs = v;
        }
        if let Some(v) = self.volume_center_hz {
            config.volume_center_hz = v;
        }
        if let Some(v) = self.volume_std_dev_hz {
            config.volume_std_dev_hz = v;
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(args: &Args) -> Result<(), RiserError> {
    let config = args.riser_config()?;
    let chord: Chord = args.chord.parse()?;
    tracing::info!(
        chord = %args.chord,
        octaves_per_second = config.octaves_per_second,
        duration_secs = config.duration_secs,
        gain = config.gain,
        volume_center_hz = config.volume_center_hz,
        volume_std_dev_hz = config.volume_std_dev_hz,
        "rendering riser"
    );

    let started = Instant::now();
    let samples = RiserEngine::new(config, chord).generate();
    let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0);
    tracing::info!(
        samples = samples.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        peak,
        "render finished"
    );
    if peak >= i16::MAX as u16 {
        tracing::warn!("output clipped; try a lower --gain");
    }

    std::fs::write(&args.out, encode_wav(&samples, SAMPLE_RATE)?)?;
    tracing::info!(path = %args.out.display(), "written");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_defaults() {
        let args = Args::try_parse_from(["uprise"]).unwrap();
        assert_eq!(args.out, PathBuf::from("out.wav"));
        assert_eq!(args.chord, "maj");
        assert_eq!(args.riser_config().unwrap(), RiserConfig::default());
    }

    #[test]
    fn legacy_flag_names_accepted() {
        let args = Args::try_parse_from([
            "uprise",
            "--octavesHz",
            "0.5",
            "--durationSec",
            "10",
            "--chordName",
            "dom7",
        ])
        .unwrap();
        let config = args.riser_config().unwrap();
        assert_eq!(config.octaves_per_second, 0.5);
        assert_eq!(config.duration_secs, 10.0);
        assert_eq!(args.chord, "dom7");
    }

    #[test]
    fn rejects_invalid_values() {
        let args = Args::try_parse_from(["uprise", "--volume-std-dev-hz", "0"]).unwrap();
        assert!(args.riser_config().is_err());
        let args = Args::try_parse_from(["uprise", "--chord", "xyz"]).unwrap();
        assert!(args.chord.parse::<Chord>().is_err());
    }
}
