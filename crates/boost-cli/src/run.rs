//! File processing: WAV in, AudioBoost filter, float WAV out

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use boost_core::wav::{WavSink, WavSource};
use boost_core::{AudioSource, BoostParams, StreamInfo, AUDIO_BOOST};

/// Largest block pulled through the filter at once
pub const MAX_BLOCK_FRAMES: usize = 1 << 20;

/// How blocks are pulled through the filter
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub block_frames: usize,
    pub parallel: bool,
}

/// Result of a processed file
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub info: StreamInfo,
    pub frames: u64,
    /// Largest absolute output sample
    pub peak: f32,
    pub elapsed_secs: f64,
}

/// Run `input` through the filter and write the result to `output`
///
/// Configuration errors surface before the output file is created.
pub fn process_file(input: &Path, output: &Path, params: &BoostParams, options: &RunOptions) -> Result<Summary> {
    let started = Instant::now();

    let source = WavSource::open(input).with_context(|| format!("Failed to open input {:?}", input))?;
    let mut filter = AUDIO_BOOST
        .create(source, params)
        .with_context(|| format!("{}: invalid configuration for {:?}", AUDIO_BOOST.name, input))?
        .with_parallel(options.parallel);

    let info = *filter
        .stream_info()
        .context("Input stream lost its audio track")?;
    let mut sink = WavSink::create(output, &info)
        .with_context(|| format!("Failed to create output {:?}", output))?;

    let block_frames = options.block_frames.clamp(1, MAX_BLOCK_FRAMES);
    let block_samples = info
        .samples_for(block_frames)
        .context("Block size overflows the sample buffer")?;
    let mut buf = vec![0.0_f32; block_samples];
    log::debug!(
        "process_file: {} frames per block, parallel {}, normalization max {:.4}",
        block_frames,
        options.parallel,
        filter.engine().max_value()
    );
    let mut peak = 0.0_f32;

    loop {
        let frames = filter
            .read_frames(&mut buf, block_frames)
            .with_context(|| format!("Failed to read {:?}", input))?;
        if frames == 0 {
            break;
        }
        let block = &buf[..frames * info.channels as usize];
        peak = block.iter().fold(peak, |acc, s| acc.max(s.abs()));
        sink.write_frames(block)
            .with_context(|| format!("Failed to write {:?}", output))?;
    }

    let frames = sink
        .finalize()
        .with_context(|| format!("Failed to finalize {:?}", output))?;

    log::debug!("process_file: {} frames, peak {:.4}", frames, peak);

    Ok(Summary {
        info,
        frames,
        peak,
        elapsed_secs: started.elapsed().as_secs_f64(),
    })
}
