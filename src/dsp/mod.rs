//! DSP — the riser's synthesis pipeline.
//!
//! Everything renders offline into one buffer. The same code backs the CLI
//! (WAV export) and the WASM bindings.

pub mod engine;
pub mod envelope;
pub mod oscillator;
pub mod population;
pub mod renderer;
