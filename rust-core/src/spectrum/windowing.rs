//! Windowing functions for spectral analysis
//! 
//! Applies windows to time-domain signals before the DFT to reduce spectral leakage

use std::f64::consts::PI;
use std::fmt;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// Periodic Hann window: w[n] = 0.5*(1 - cos(2πn/N))
    /// Zero at n = 0, small but nonzero at n = N-1
    #[default]
    Hann,

    /// Rectangular window (no windowing)
    Rectangular,
}

impl WindowType {
    /// Name used on the command line and in logs
    pub fn name(&self) -> &'static str {
        match self {
            WindowType::Hann => "hann",
            WindowType::Rectangular => "rectangular",
        }
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Window weight at index `n` of a length-`length` window
#[inline]
pub fn window_weight(window_type: WindowType, n: usize, length: usize) -> f64 {
    match window_type {
        // Divisor is N, not N-1
        WindowType::Hann => 0.5 * (1.0 - ((2.0 * PI * n as f64) / length as f64).cos()),
        WindowType::Rectangular => 1.0,
    }
}

/// Generate window coefficients
/// 
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N)
/// 
/// # Returns
/// Vector of window coefficients w[n] for n = 0..N-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    (0..length)
        .map(|n| window_weight(window_type, n, length))
        .collect()
}

/// Apply window to signal
/// 
/// # Returns
/// Windowed signal of the same length
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    let mut windowed = signal.to_vec();
    apply_window_inplace(&mut windowed, window_type);
    windowed
}

/// Apply window in-place
pub fn apply_window_inplace(signal: &mut [f64], window_type: WindowType) {
    let length = signal.len();
    if window_type == WindowType::Rectangular {
        return;
    }

    for (n, s) in signal.iter_mut().enumerate() {
        // Same operand order as x * 0.5 * (1 - cos(..))
        *s = *s * 0.5 * (1.0 - ((2.0 * PI * n as f64) / length as f64).cos());
    }
}

/// Mean window weight (coherent gain)
/// 
/// A tone's peak magnitude after windowing is scaled by this factor.
pub fn window_coherent_gain(window_type: WindowType, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    let sum: f64 = (0..length)
        .map(|n| window_weight(window_type, n, length))
        .sum();
    sum / length as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_hann_boundaries() {
        let length = 16;
        let window = generate_window(WindowType::Hann, length);

        assert_eq!(window.len(), length);
        assert_eq!(window[0], 0.0);

        // Asymmetric: last weight does not reach zero
        let expected_last = 0.5 * (1.0 - (2.0 * PI * 15.0 / 16.0).cos());
        assert!(window[length - 1] > 0.0);
        assert!((window[length - 1] - expected_last).abs() < 1e-15);
        assert!((window[length - 1] - window[1]).abs() < 1e-12);

        // Peak of 1.0 at N/2
        assert!((window[length / 2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_window_matches_weights() {
        let signal: Vec<f64> = (0..32).map(|n| n as f64 - 10.0).collect();
        let windowed = apply_window(&signal, WindowType::Hann);
        let weights = generate_window(WindowType::Hann, signal.len());

        assert_eq!(windowed.len(), signal.len());
        assert_eq!(windowed[0], 0.0);
        for ((&w, &s), &c) in windowed.iter().zip(signal.iter()).zip(weights.iter()) {
            assert!((w - s * c).abs() < 1e-12);
        }
    }

    #[test]
    fn test_window_not_idempotent() {
        let signal = vec![1.0; 8];
        let once = apply_window(&signal, WindowType::Hann);
        let twice = apply_window(&once, WindowType::Hann);

        assert_ne!(once, twice);
        // Index 2 of 8 has weight 0.5, squared after the second pass
        assert!((once[2] - 0.5).abs() < 1e-12);
        assert!((twice[2] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_rectangular_window() {
        let window = generate_window(WindowType::Rectangular, 100);
        assert_eq!(window.len(), 100);
        assert!(window.iter().all(|&w| w == 1.0));

        let signal = vec![3.0, -2.0, 7.5];
        assert_eq!(apply_window(&signal, WindowType::Rectangular), signal);
    }

    #[test]
    fn test_coherent_gain() {
        let hann = window_coherent_gain(WindowType::Hann, 1024);
        let rect = window_coherent_gain(WindowType::Rectangular, 1024);

        assert!((hann - 0.5).abs() < 1e-12);
        assert!((rect - 1.0).abs() < 1e-12);
        assert_eq!(window_coherent_gain(WindowType::Hann, 0), 0.0);
    }
}
