//! Text table output for a computed spectrum

use crate::error::Result;
use crate::spectrum::analysis::Spectrum;
use std::io::Write;

const SEPARATOR: &str = "#-------------------------------------------------------------";
const HEADER: &str = "# freq(Hz)   Spectrum   Re_F(k)   Im_F(k)";

/// Consumer of a finished spectrum
pub trait SpectrumReporter {
    /// Emit every point in ascending bin order, exactly once
    fn report(&mut self, spectrum: &Spectrum) -> Result<()>;
}

/// Fixed-layout table: frequency, magnitude, real part, imaginary part
pub struct TableReporter<W: Write> {
    writer: W,
}

impl<W: Write> TableReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SpectrumReporter for TableReporter<W> {
    fn report(&mut self, spectrum: &Spectrum) -> Result<()> {
        writeln!(self.writer, "{SEPARATOR}")?;
        writeln!(self.writer, "{HEADER}")?;
        writeln!(self.writer, "{SEPARATOR}")?;
        for point in spectrum {
            writeln!(
                self.writer,
                "{:9.3}   {:>12}   {:>12}   {:>12}",
                point.frequency,
                format_scientific(point.magnitude, 5),
                format_scientific(point.real, 5),
                format_scientific(point.imag, 5),
            )?;
        }
        writeln!(self.writer, "{SEPARATOR}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Scientific notation with a signed, at least two-digit exponent (`1.23450e+03`)
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::analysis::compute_spectrum;
    use crate::spectrum::dft::FrequencyCoefficients;

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(1234.5, 5), "1.23450e+03");
        assert_eq!(format_scientific(-0.00012345, 5), "-1.23450e-04");
        assert_eq!(format_scientific(0.0, 5), "0.00000e+00");
        assert_eq!(format_scientific(1.1025e8, 5), "1.10250e+08");
        assert_eq!(format_scientific(2.5e-300, 5), "2.50000e-300");
        assert_eq!(format_scientific(f64::NAN, 5), "nan");
        assert_eq!(format_scientific(f64::NEG_INFINITY, 5), "-inf");
    }

    #[test]
    fn test_table_layout() {
        let coefficients =
            FrequencyCoefficients::from_parts(vec![8.0, 0.0], vec![0.0, -2.0]).unwrap();
        let spectrum = compute_spectrum(&coefficients, 4, 44100);

        let mut reporter = TableReporter::new(Vec::new());
        reporter.report(&spectrum).unwrap();
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], SEPARATOR);
        assert_eq!(lines[1], HEADER);
        assert_eq!(lines[2], SEPARATOR);
        assert_eq!(
            lines[3],
            "    0.000    8.00000e+00    8.00000e+00    0.00000e+00"
        );
        assert_eq!(
            lines[4],
            "11025.000    2.00000e+00    0.00000e+00   -2.00000e+00"
        );
        assert_eq!(lines[5], SEPARATOR);
    }
}
