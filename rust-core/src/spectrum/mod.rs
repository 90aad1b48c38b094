//! Spectral analysis with a direct DFT

pub mod dft;
pub mod windowing;
pub mod analysis;

pub use dft::{DftEngine, FrequencyCoefficients};
pub use windowing::{apply_window, WindowType};
pub use analysis::{compute_spectrum, Spectrum, SpectrumAnalyzer, SpectrumPoint};
