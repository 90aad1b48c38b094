//! Tone Spectrum - from-scratch spectral analysis of a synthetic tone
//! 
//! Generates a sine tone, applies a window, and computes its magnitude
//! spectrum with a direct discrete Fourier transform.

pub mod config;
pub mod error;
pub mod report;
pub mod signal;
pub mod spectrum;

pub use config::AnalyzerConfig;
pub use error::{Result, SpectrumError};
pub use report::{SpectrumReporter, TableReporter};
pub use signal::ToneGenerator;
pub use spectrum::{Spectrum, SpectrumAnalyzer, SpectrumPoint, WindowType};
