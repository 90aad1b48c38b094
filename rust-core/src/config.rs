//! Analyzer configuration with the reference defaults

use crate::error::{Result, SpectrumError};
use crate::spectrum::windowing::WindowType;

/// Reference sample rate (Hz)
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Reference sample count N (0.5 s at 44.1 kHz)
pub const DEFAULT_SAMPLE_COUNT: usize = 22050;

/// Reference tone frequency (Hz)
pub const DEFAULT_TONE_FREQUENCY: f64 = 440.0;

/// Reference tone amplitude
pub const DEFAULT_AMPLITUDE: f64 = 10000.0;

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of samples N (transform length)
    pub sample_count: usize,

    /// Frequency of the synthesized tone in Hz
    pub tone_frequency: f64,

    /// Peak amplitude of the synthesized tone
    pub amplitude: f64,

    /// Window applied before the transform
    pub window: WindowType,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            sample_count: DEFAULT_SAMPLE_COUNT,
            tone_frequency: DEFAULT_TONE_FREQUENCY,
            amplitude: DEFAULT_AMPLITUDE,
            window: WindowType::Hann,
        }
    }
}

impl AnalyzerConfig {
    /// Reject parameters the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(SpectrumError::InvalidConfiguration(
                "sample count must be greater than zero".into(),
            ));
        }
        if self.sample_rate == 0 {
            return Err(SpectrumError::InvalidConfiguration(
                "sample rate must be greater than zero".into(),
            ));
        }
        if !self.tone_frequency.is_finite() || self.tone_frequency < 0.0 {
            return Err(SpectrumError::InvalidConfiguration(format!(
                "tone frequency must be a finite non-negative value (got {})",
                self.tone_frequency
            )));
        }
        if !self.amplitude.is_finite() {
            return Err(SpectrumError::InvalidConfiguration(format!(
                "amplitude must be finite (got {})",
                self.amplitude
            )));
        }
        Ok(())
    }

    /// Number of spectrum bins M = floor(N/2)
    pub fn num_bins(&self) -> usize {
        self.sample_count / 2
    }

    /// Frequency resolution Fs/N in Hz
    pub fn bin_spacing_hz(&self) -> f64 {
        self.sample_rate as f64 / self.sample_count as f64
    }

    /// Signal duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.sample_count as f64 / self.sample_rate as f64
    }

    /// Bin closest to the configured tone, round(f0·N/Fs)
    pub fn tone_bin(&self) -> usize {
        (self.tone_frequency * self.sample_count as f64 / self.sample_rate as f64).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.sample_count, 22050);
        assert_eq!(config.tone_frequency, 440.0);
        assert_eq!(config.amplitude, 10000.0);
        assert_eq!(config.window, WindowType::Hann);
        assert!(config.validate().is_ok());

        assert_eq!(config.num_bins(), 11025);
        assert!((config.bin_spacing_hz() - 2.0).abs() < 1e-12);
        assert!((config.duration_secs() - 0.5).abs() < 1e-12);
        assert_eq!(config.tone_bin(), 220);
    }

    #[test]
    fn test_invalid_configurations() {
        let cases = [
            AnalyzerConfig { sample_count: 0, ..Default::default() },
            AnalyzerConfig { sample_rate: 0, ..Default::default() },
            AnalyzerConfig { tone_frequency: -1.0, ..Default::default() },
            AnalyzerConfig { tone_frequency: f64::NAN, ..Default::default() },
            AnalyzerConfig { amplitude: f64::INFINITY, ..Default::default() },
        ];

        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(SpectrumError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_zero_frequency_allowed() {
        let config = AnalyzerConfig { tone_frequency: 0.0, ..Default::default() };
        assert!(config.validate().is_ok());
        assert_eq!(config.tone_bin(), 0);
    }
}
