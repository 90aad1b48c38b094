//! Pure-tone waveform synthesis
//! 
//! sample[i] = A * sin(2π * f0 * i / Fs)

use crate::error::{zeroed_buffer, Result};
use std::f64::consts::PI;

/// Sine tone generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneGenerator {
    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Tone frequency in Hz
    pub frequency: f64,

    /// Peak amplitude
    pub amplitude: f64,
}

impl ToneGenerator {
    pub fn new(sample_rate: u32, frequency: f64, amplitude: f64) -> Self {
        Self {
            sample_rate,
            frequency,
            amplitude,
        }
    }

    /// Sample value at index `i`
    #[inline]
    pub fn sample_at(&self, i: usize) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * i as f64 / self.sample_rate as f64).sin()
    }

    /// Generate `num_samples` samples starting at t = 0
    pub fn generate(&self, num_samples: usize) -> Result<Vec<f64>> {
        let mut waveform = zeroed_buffer("waveform", num_samples)?;
        for (i, sample) in waveform.iter_mut().enumerate() {
            *sample = self.sample_at(i);
        }
        Ok(waveform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_samples() {
        let generator = ToneGenerator::new(8000, 1000.0, 2.0);
        let waveform = generator.generate(8).unwrap();

        assert_eq!(waveform.len(), 8);
        assert_eq!(waveform[0], 0.0);

        // 8 samples per cycle: peaks at i = 2 and i = 6
        assert!((waveform[2] - 2.0).abs() < 1e-12);
        assert!((waveform[6] + 2.0).abs() < 1e-12);
        assert!(waveform[4].abs() < 1e-12);
    }

    #[test]
    fn test_reference_tone_bounds() {
        let generator = ToneGenerator::new(44100, 440.0, 10000.0);
        let waveform = generator.generate(22050).unwrap();

        assert_eq!(waveform.len(), 22050);
        assert!(waveform.iter().all(|s| s.abs() <= 10000.0));
        let peak = waveform.iter().fold(0.0_f64, |m, s| m.max(s.abs()));
        assert!(peak > 9999.0);
    }

    #[test]
    fn test_zero_frequency_is_silent() {
        let generator = ToneGenerator::new(44100, 0.0, 10000.0);
        let waveform = generator.generate(64).unwrap();
        assert!(waveform.iter().all(|&s| s == 0.0));
    }
}
