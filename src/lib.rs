pub mod chord;
pub mod config;
pub mod dsp;
pub mod error;

use crate::chord::Chord;
use crate::config::RiserConfig;
use crate::dsp::engine::RiserEngine;
use crate::error::RiserError;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the uprise version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Validate `config`, resolve `chord_name` and render the whole clip as 16-bit mono PCM.
///
/// All failures surface here, before the first sample is computed.
pub fn render(config: &RiserConfig, chord_name: &str) -> Result<Vec<i16>, RiserError> {
    config.validate()?;
    let chord: Chord = chord_name.parse()?;
    Ok(RiserEngine::new(config.clone(), chord).generate())
}

/// Like [`render`], but returns a complete WAV file.
pub fn render_wav_bytes(config: &RiserConfig, chord_name: &str) -> Result<Vec<u8>, RiserError> {
    config.validate()?;
    let chord: Chord = chord_name.parse()?;
    dsp::renderer::render_wav(config, &chord)
}

/// `undefined`/`null` mean "all defaults"; otherwise a (partial) config object.
fn config_from_js(config: JsValue) -> Result<RiserConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(RiserConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a riser to a WAV byte array.
#[wasm_bindgen]
pub fn render_riser_wav(chord_name: &str, config: JsValue) -> Result<Vec<u8>, JsValue> {
    let config = config_from_js(config)?;
    render_wav_bytes(&config, chord_name).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a riser to mono f32 samples in [-1, 1].
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn render_riser_samples(chord_name: &str, config: JsValue) -> Result<Vec<f32>, JsValue> {
    let config = config_from_js(config)?;
    let pcm = render(&config, chord_name).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(pcm.iter().map(|&s| s as f32 / i16::MAX as f32).collect())
}
