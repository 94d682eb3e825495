use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::signal_processing::IirFilter;

fn audio_error(e: hound::Error) -> FilterError {
    FilterError::AudioFile(e.to_string())
}

/// Read a WAV file as interleaved `f32` samples
///
/// Integer formats are scaled to the range [-1.0, 1.0).
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(WavSpec, Vec<f32>)> {
    let reader = WavReader::open(path.as_ref()).map_err(audio_error)?;
    let spec = reader.spec();
    let samples = read_samples(reader, &spec)?;
    Ok((spec, samples))
}

fn read_samples(mut reader: WavReader<BufReader<File>>, spec: &WavSpec) -> Result<Vec<f32>> {
    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(audio_error)?,
        SampleFormat::Int => {
            let max_val = 2_i64.pow(spec.bits_per_sample as u32 - 1) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(audio_error)?
        }
    };
    Ok(samples)
}

/// Write interleaved samples as a 32-bit float WAV file
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    channels: u16,
    sample_rate: u32,
    samples: &[f32],
) -> Result<()> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path.as_ref(), spec).map_err(audio_error)?;

    for &sample in samples {
        writer.write_sample(sample).map_err(audio_error)?;
    }

    writer.finalize().map_err(audio_error)?;
    Ok(())
}

/// Filter interleaved audio in place with one filter per channel
///
/// Each channel gets its own filter instance built from `config`, so the
/// channels never share sample history.
pub fn filter_interleaved(config: &FilterConfig, channels: u16, samples: &mut [f32]) -> Result<()> {
    if channels == 0 {
        return Err(FilterError::Config("channel count must be positive".to_string()));
    }

    let mut filters = (0..channels)
        .map(|_| config.build())
        .collect::<Result<Vec<IirFilter>>>()?;

    for frame in samples.chunks_mut(channels as usize) {
        for (sample, filter) in frame.iter_mut().zip(filters.iter_mut()) {
            *sample = filter.process(*sample);
        }
    }

    log::debug!(
        "Filtered {} frames across {} channel(s)",
        samples.len() / channels as usize,
        channels
    );
    Ok(())
}
