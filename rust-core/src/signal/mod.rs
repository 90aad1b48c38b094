//! Synthetic test signals

pub mod tone;

pub use tone::ToneGenerator;
