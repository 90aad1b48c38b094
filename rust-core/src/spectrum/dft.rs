//! Direct discrete Fourier transform for real-valued signals
//! 
//! O(N·N/2) trigonometric summation over the non-redundant half spectrum

use crate::error::{zeroed_buffer, Result, SpectrumError};
use log::debug;
use std::f64::consts::PI;

/// Cosine and sine correlation sums for bins k = 0..N/2
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyCoefficients {
    real: Vec<f64>,
    imag: Vec<f64>,
}

impl FrequencyCoefficients {
    /// Explicitly zeroed accumulators for `num_bins` bins
    pub fn zeroed(num_bins: usize) -> Result<Self> {
        Ok(Self {
            real: zeroed_buffer("real coefficients", num_bins)?,
            imag: zeroed_buffer("imaginary coefficients", num_bins)?,
        })
    }

    /// Build from precomputed real and imaginary parts of equal length
    pub fn from_parts(real: Vec<f64>, imag: Vec<f64>) -> Result<Self> {
        if real.len() != imag.len() {
            return Err(SpectrumError::LengthMismatch {
                real: real.len(),
                imag: imag.len(),
            });
        }
        Ok(Self { real, imag })
    }

    /// Re_F(k) = Σ x[i]·cos(2πki/N)
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Im_F(k) = Σ x[i]·sin(2πki/N)
    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    pub fn len(&self) -> usize {
        self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }
}

/// Correlate the signal against bin `k`, i ascending
#[inline]
fn correlate_bin(signal: &[f64], k: usize, n: f64) -> (f64, f64) {
    let mut re = 0.0;
    let mut im = 0.0;
    for (i, &x) in signal.iter().enumerate() {
        let angle = (2.0 * PI * k as f64 * i as f64) / n;
        re += x * angle.cos();
        im += x * angle.sin();
    }
    (re, im)
}

/// Direct DFT engine for a fixed transform length
#[derive(Debug, Clone)]
pub struct DftEngine {
    /// Transform length N
    size: usize,

    /// Reusable input buffer (zero-padded or truncated signal)
    input_buffer: Vec<f64>,
}

impl DftEngine {
    /// Create new DFT engine
    /// 
    /// # Arguments
    /// * `size` - Transform length N
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SpectrumError::InvalidConfiguration(
                "transform size must be greater than zero".into(),
            ));
        }
        Ok(Self {
            size,
            input_buffer: zeroed_buffer("transform input", size)?,
        })
    }

    /// Transform length N
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of output bins (floor(N/2))
    pub fn num_bins(&self) -> usize {
        self.size / 2
    }

    /// Copy signal into the input buffer, zero-padding to N
    fn load(&mut self, signal: &[f64]) {
        let copy_len = signal.len().min(self.size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        self.input_buffer[copy_len..].fill(0.0);
    }

    /// Compute Re_F(k) and Im_F(k) for k = 0..N/2
    /// 
    /// # Arguments
    /// * `signal` - Input signal (zero-padded or truncated to N)
    /// 
    /// Loop order is k outer ascending, i inner ascending.
    pub fn transform(&mut self, signal: &[f64]) -> Result<FrequencyCoefficients> {
        self.load(signal);
        let mut coefficients = FrequencyCoefficients::zeroed(self.num_bins())?;
        let n = self.size as f64;

        for k in 0..self.num_bins() {
            let (re, im) = correlate_bin(&self.input_buffer, k, n);
            coefficients.real[k] += re;
            coefficients.imag[k] += im;
        }

        debug!("direct DFT: N={} bins={}", self.size, coefficients.len());
        Ok(coefficients)
    }

    /// Same as [`DftEngine::transform`], with bins distributed across the rayon pool
    /// 
    /// Each bin's inner summation is identical to the sequential path, so the
    /// output is bit-for-bit the same.
    #[cfg(feature = "parallel")]
    pub fn transform_parallel(&mut self, signal: &[f64]) -> Result<FrequencyCoefficients> {
        use rayon::prelude::*;

        self.load(signal);
        let mut coefficients = FrequencyCoefficients::zeroed(self.num_bins())?;
        let n = self.size as f64;
        let input = &self.input_buffer;

        coefficients
            .real
            .par_iter_mut()
            .zip(coefficients.imag.par_iter_mut())
            .enumerate()
            .for_each(|(k, (re, im))| {
                let (bin_re, bin_im) = correlate_bin(input, k, n);
                *re += bin_re;
                *im += bin_im;
            });

        debug!(
            "direct DFT (parallel, {} threads): N={} bins={}",
            rayon::current_num_threads(),
            self.size,
            coefficients.len()
        );
        Ok(coefficients)
    }
}
