//! Magnitude spectrum and the end-to-end analysis pipeline
//! 
//! Tone generator → window → direct DFT → magnitude/frequency per bin

use super::dft::{DftEngine, FrequencyCoefficients};
use super::windowing::{apply_window_inplace, window_coherent_gain};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::signal::ToneGenerator;
use log::{debug, info};
use std::time::Instant;

/// One bin of the magnitude spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumPoint {
    /// Bin index k
    pub index: usize,

    /// Bin frequency k·Fs/N in Hz
    pub frequency: f64,

    /// sqrt(Re² + Im²)
    pub magnitude: f64,

    /// Re_F(k)
    pub real: f64,

    /// Im_F(k)
    pub imag: f64,
}

/// Ordered magnitude spectrum, ascending in k
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    points: Vec<SpectrumPoint>,
    sample_count: usize,
    sample_rate: u32,
}

impl Spectrum {
    pub fn points(&self) -> &[SpectrumPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpectrumPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Transform length N the spectrum was computed from
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Magnitude per bin
    pub fn magnitudes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.magnitude).collect()
    }

    /// Frequency per bin in Hz
    pub fn frequencies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.frequency).collect()
    }

    /// Bin with the largest magnitude (lowest index on ties)
    pub fn peak(&self) -> Option<&SpectrumPoint> {
        self.points.iter().fold(None, |best: Option<&SpectrumPoint>, p| match best {
            Some(b) if b.magnitude >= p.magnitude => Some(b),
            _ => Some(p),
        })
    }

    /// Fraction of total magnitude-squared energy within `center ± half_width` bins
    pub fn band_energy_fraction(&self, center: usize, half_width: usize) -> f64 {
        let total: f64 = self.points.iter().map(|p| p.magnitude * p.magnitude).sum();
        if total == 0.0 {
            return 0.0;
        }
        let lo = center.saturating_sub(half_width);
        let hi = center.saturating_add(half_width).min(self.points.len().saturating_sub(1));
        let band: f64 = self
            .points
            .get(lo..=hi)
            .unwrap_or(&[])
            .iter()
            .map(|p| p.magnitude * p.magnitude)
            .sum();
        band / total
    }
}

impl<'a> IntoIterator for &'a Spectrum {
    type Item = &'a SpectrumPoint;
    type IntoIter = std::slice::Iter<'a, SpectrumPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Derive magnitude and physical frequency for every bin
/// 
/// # Arguments
/// * `coefficients` - DFT output, M bins
/// * `sample_count` - Transform length N
/// * `sample_rate` - Sample rate in Hz
pub fn compute_spectrum(
    coefficients: &FrequencyCoefficients,
    sample_count: usize,
    sample_rate: u32,
) -> Spectrum {
    let points = coefficients
        .real()
        .iter()
        .zip(coefficients.imag().iter())
        .enumerate()
        .map(|(k, (&real, &imag))| SpectrumPoint {
            index: k,
            frequency: (k as f64 / sample_count as f64) * sample_rate as f64,
            magnitude: (real * real + imag * imag).sqrt(),
            real,
            imag,
        })
        .collect();

    Spectrum {
        points,
        sample_count,
        sample_rate,
    }
}

/// Synthesizes the configured tone and computes its spectrum
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    dft_engine: DftEngine,
    #[cfg(feature = "parallel")]
    parallel: bool,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    /// 
    /// The configuration is validated before anything is allocated.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let dft_engine = DftEngine::new(config.sample_count)?;

        Ok(Self {
            config,
            dft_engine,
            #[cfg(feature = "parallel")]
            parallel: false,
        })
    }

    /// Distribute DFT bins across the rayon thread pool
    #[cfg(feature = "parallel")]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run the full pipeline on the configured tone
    pub fn run(&mut self) -> Result<Spectrum> {
        let generator = ToneGenerator::new(
            self.config.sample_rate,
            self.config.tone_frequency,
            self.config.amplitude,
        );

        let started = Instant::now();
        let waveform = generator.generate(self.config.sample_count)?;
        debug!(
            "generated {} samples of {} Hz tone in {:?}",
            waveform.len(),
            self.config.tone_frequency,
            started.elapsed()
        );

        let spectrum = self.analyze(waveform)?;

        if let Some(peak) = spectrum.peak() {
            info!(
                "peak at bin {} ({:.3} Hz), magnitude {:.5e}; expected bin {}",
                peak.index,
                peak.frequency,
                peak.magnitude,
                self.config.tone_bin()
            );
        }
        Ok(spectrum)
    }

    /// Window, transform and derive the spectrum of a caller-supplied waveform
    /// 
    /// # Arguments
    /// * `waveform` - Time-domain samples (truncated to N before windowing,
    ///   zero-padded to N after)
    pub fn analyze(&mut self, mut waveform: Vec<f64>) -> Result<Spectrum> {
        let started = Instant::now();
        // Window must span the N samples the transform sees
        waveform.truncate(self.dft_engine.size());
        apply_window_inplace(&mut waveform, self.config.window);
        debug!(
            "applied {} window (coherent gain {:.4}) in {:?}",
            self.config.window,
            window_coherent_gain(self.config.window, waveform.len()),
            started.elapsed()
        );

        let started = Instant::now();
        let coefficients = self.transform(&waveform)?;
        debug!("transform finished in {:?}", started.elapsed());

        Ok(compute_spectrum(
            &coefficients,
            self.config.sample_count,
            self.config.sample_rate,
        ))
    }

    #[cfg(feature = "parallel")]
    fn transform(&mut self, windowed: &[f64]) -> Result<FrequencyCoefficients> {
        if self.parallel {
            self.dft_engine.transform_parallel(windowed)
        } else {
            self.dft_engine.transform(windowed)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn transform(&mut self, windowed: &[f64]) -> Result<FrequencyCoefficients> {
        self.dft_engine.transform(windowed)
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Get number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.dft_engine.num_bins()
    }
}
