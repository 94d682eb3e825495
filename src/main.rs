use anyhow::{Context, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use resonator::config::{FilterConfig, FilterKind, Frequency};
use resonator::signal_processing::{amplitude_to_db, peak, rms};
use resonator::wav::{filter_interleaved, read_wav, write_wav};

#[derive(Parser, Debug)]
#[command(name = "resonator")]
#[command(about = "Filter WAV files with a recalculating band-pass or notch IIR filter", long_about = None)]
struct Args {
    /// Input WAV file
    input: Option<PathBuf>,

    /// Output WAV file (32-bit float)
    output: Option<PathBuf>,

    /// TOML filter configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter response: band-pass, notch
    #[arg(short, long, value_enum)]
    kind: Option<FilterKind>,

    /// Center frequency (e.g., "1000", "440hz", "1.5khz")
    #[arg(short, long)]
    frequency: Option<Frequency>,

    /// Bandwidth (e.g., "100", "50hz")
    #[arg(short, long)]
    bandwidth: Option<Frequency>,

    /// Sample rate in Hz (ignored when an input file is given)
    #[arg(long)]
    sample_rate: Option<f32>,

    /// Print the derived coefficients and response
    #[arg(long)]
    coefficients: bool,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match args.config {
        Some(ref path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };
    if let Some(kind) = args.kind {
        config.kind = kind;
    }
    if let Some(frequency) = args.frequency {
        config.frequency_hz = frequency.as_hz();
    }
    if let Some(bandwidth) = args.bandwidth {
        config.bandwidth_hz = bandwidth.as_hz();
    }
    if let Some(sample_rate) = args.sample_rate {
        config.sample_rate = sample_rate;
    }

    match (&args.input, &args.output) {
        (Some(input), Some(output)) => filter_file(input, output, &mut config)?,
        (Some(_), None) => bail!("An output file is required when filtering"),
        _ if args.coefficients => {}
        _ => bail!("Nothing to do: give INPUT and OUTPUT files or --coefficients"),
    }

    if args.coefficients {
        print_coefficients(&config)?;
    }

    Ok(())
}

fn filter_file(input: &Path, output: &Path, config: &mut FilterConfig) -> anyhow::Result<()> {
    let (spec, mut samples) =
        read_wav(input).with_context(|| format!("Failed to read {}", input.display()))?;
    config.sample_rate = spec.sample_rate as f32;
    config.validate()?;

    log::info!(
        "{}: {} channel(s), {} Hz, {} samples",
        input.display(),
        spec.channels,
        spec.sample_rate,
        samples.len()
    );

    let input_rms = rms(&samples);
    filter_interleaved(config, spec.channels, &mut samples)?;
    let output_rms = rms(&samples);

    write_wav(output, spec.channels, spec.sample_rate, &samples)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {:.1} Hz (bw {:.1} Hz): {} -> {}",
        config.kind,
        config.frequency_hz,
        config.bandwidth_hz,
        input.display(),
        output.display()
    );
    println!(
        "RMS {:.1} dBFS -> {:.1} dBFS, peak {:.3}",
        amplitude_to_db(input_rms),
        amplitude_to_db(output_rms),
        peak(&samples)
    );
    Ok(())
}

fn print_coefficients(config: &FilterConfig) -> anyhow::Result<()> {
    let filter = config.build()?;
    let coeffs = filter.coefficients();

    println!("=== {} filter ===", filter.kind());
    println!("Sample rate: {} Hz", filter.sample_rate());
    println!("Center frequency: {} Hz", filter.frequency());
    println!(
        "Bandwidth: {} Hz (normalized {:.6})",
        filter.bandwidth(),
        filter.normalized_bandwidth()
    );
    println!("Feedforward (a): {:?}", coeffs.feedforward);
    println!("Feedback (b):    {:?}", coeffs.feedback);

    for (label, freq) in [
        ("center", filter.frequency()),
        ("4x center", filter.frequency() * 4.0),
    ] {
        let gain = filter.gain_at(freq) as f32;
        println!(
            "Gain at {} ({:.1} Hz): {:.4} ({:.1} dB)",
            label,
            freq,
            gain,
            amplitude_to_db(gain)
        );
    }
    Ok(())
}
