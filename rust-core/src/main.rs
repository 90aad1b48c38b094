use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::io;
use std::process::ExitCode;
use tone_spectrum::config::{
    DEFAULT_AMPLITUDE, DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_RATE, DEFAULT_TONE_FREQUENCY,
};
use tone_spectrum::{AnalyzerConfig, SpectrumAnalyzer, SpectrumReporter, TableReporter, WindowType};

#[derive(ValueEnum, Clone, Copy)]
enum Window {
    Hann,
    Rectangular,
}

impl From<Window> for WindowType {
    fn from(window: Window) -> Self {
        match window {
            Window::Hann => WindowType::Hann,
            Window::Rectangular => WindowType::Rectangular,
        }
    }
}

/// Print the magnitude spectrum of a synthesized sine tone.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Sample rate in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Number of samples N (transform length)
    #[arg(long = "samples", default_value_t = DEFAULT_SAMPLE_COUNT)]
    sample_count: usize,

    /// Tone frequency in Hz
    #[arg(long, default_value_t = DEFAULT_TONE_FREQUENCY, allow_negative_numbers = true)]
    frequency: f64,

    /// Peak amplitude of the tone
    #[arg(long, default_value_t = DEFAULT_AMPLITUDE, allow_negative_numbers = true)]
    amplitude: f64,

    /// Window applied before the transform
    #[arg(long, value_enum, default_value_t = Window::Hann)]
    window: Window,

    /// Spread DFT bins across all cores (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Log pipeline progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = AnalyzerConfig {
        sample_rate: args.sample_rate,
        sample_count: args.sample_count,
        tone_frequency: args.frequency,
        amplitude: args.amplitude,
        window: args.window.into(),
    };

    let analyzer = match SpectrumAnalyzer::new(config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    #[cfg(feature = "parallel")]
    let analyzer = analyzer.with_parallel(args.parallel);
    if args.parallel && !cfg!(feature = "parallel") {
        warn!("built without the `parallel` feature; running sequentially");
    }
    let mut analyzer = analyzer;

    info!(
        "analyzing {} samples at {} Hz ({:.3} s, {} bins, {:.3} Hz/bin)",
        analyzer.config().sample_count,
        analyzer.config().sample_rate,
        analyzer.config().duration_secs(),
        analyzer.num_bins(),
        analyzer.config().bin_spacing_hz()
    );

    let result = analyzer.run().and_then(|spectrum| {
        let stdout = io::stdout();
        TableReporter::new(stdout.lock()).report(&spectrum)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
