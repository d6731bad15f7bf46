//! WAV file source and sink
//!
//! Reads any WAV hound can open and reports its real sample format, so the
//! validator can reject integer files. Writing is always 32-bit float.

use std::fs::File;
use std::io::BufWriter;
use std::io::BufReader;
use std::path::Path;

use hound::{WavReader, WavSpec, WavWriter};

use crate::error::SourceResult;
use crate::source::{frame_capacity, AudioSource};
use crate::types::{Sample, SampleFormat, StreamInfo};

/// Map a hound spec to our stream description
pub fn stream_info_from_spec(spec: &WavSpec) -> StreamInfo {
    let sample_format = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Float, _) => SampleFormat::Float32,
        (hound::SampleFormat::Int, 0..=8) => SampleFormat::Int8,
        (hound::SampleFormat::Int, 9..=16) => SampleFormat::Int16,
        (hound::SampleFormat::Int, 17..=24) => SampleFormat::Int24,
        (hound::SampleFormat::Int, _) => SampleFormat::Int32,
    };
    StreamInfo::new(spec.sample_rate, spec.channels, sample_format)
}

/// A WAV file read frame by frame
pub struct WavSource {
    reader: WavReader<BufReader<File>>,
    info: StreamInfo,
}

impl WavSource {
    /// Open a WAV file
    pub fn open(path: &Path) -> SourceResult<Self> {
        let reader = WavReader::open(path)?;
        let info = stream_info_from_spec(&reader.spec());
        log::debug!(
            "WavSource: {:?} {} Hz, {} ch, {}, {} frames",
            path,
            info.sample_rate,
            info.channels,
            info.sample_format,
            reader.duration()
        );
        Ok(Self { reader, info })
    }
}

impl AudioSource for WavSource {
    fn stream_info(&self) -> Option<&StreamInfo> {
        Some(&self.info)
    }

    /// Only float files can be read; integer files fail with a hound
    /// format error. Build a filter first so the validator reports them.
    fn read_frames(&mut self, buf: &mut [Sample], max_frames: usize) -> SourceResult<usize> {
        let channels = self.info.channels as usize;
        let frames = frame_capacity(buf.len(), channels, max_frames)?;
        let wanted = frames * channels;

        let mut written = 0;
        for (slot, sample) in buf[..wanted].iter_mut().zip(self.reader.samples::<f32>()) {
            *slot = sample?;
            written += 1;
        }
        Ok(written / channels)
    }

    fn total_frames(&self) -> Option<u64> {
        Some(self.reader.duration() as u64)
    }
}

/// A 32-bit float WAV writer
pub struct WavSink {
    writer: WavWriter<BufWriter<File>>,
    channels: usize,
    frames_written: u64,
}

impl WavSink {
    /// Create a float WAV file matching `info`'s rate and channel count
    pub fn create(path: &Path, info: &StreamInfo) -> SourceResult<Self> {
        let spec = WavSpec {
            channels: info.channels,
            sample_rate: info.sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let writer = WavWriter::create(path, spec)?;
        Ok(Self {
            writer,
            channels: info.channels as usize,
            frames_written: 0,
        })
    }

    /// Append interleaved frames
    pub fn write_frames(&mut self, samples: &[Sample]) -> SourceResult<()> {
        for &sample in samples {
            self.writer.write_sample(sample)?;
        }
        self.frames_written += (samples.len() / self.channels.max(1)) as u64;
        Ok(())
    }

    /// Flush and patch the WAV header
    pub fn finalize(self) -> SourceResult<u64> {
        self.writer.finalize()?;
        Ok(self.frames_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoostParams;
    use crate::error::{ConfigError, SourceError};
    use crate::filter::AUDIO_BOOST;

    fn write_float_wav(path: &Path, channels: u16, samples: &[f32]) {
        let info = StreamInfo::float(44100, channels);
        let mut sink = WavSink::create(path, &info).unwrap();
        sink.write_frames(samples).unwrap();
        sink.finalize().unwrap();
    }

    #[test]
    fn test_float_wav_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.wav");
        let samples: Vec<f32> = (0..20).map(|i| i as f32 / 20.0).collect();
        write_float_wav(&path, 2, &samples);

        let mut source = WavSource::open(&path).unwrap();
        assert_eq!(source.stream_info(), Some(&StreamInfo::float(44100, 2)));
        assert_eq!(source.total_frames(), Some(10));

        let mut buf = [0.0_f32; 8];
        let mut read = Vec::new();
        loop {
            let frames = source.read_frames(&mut buf, 4).unwrap();
            if frames == 0 {
                break;
            }
            read.extend_from_slice(&buf[..frames * 2]);
        }
        assert_eq!(read, samples);
    }

    #[test]
    fn test_int_wav_is_rejected_by_filter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("int.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        writer.write_sample(1000_i16).unwrap();
        writer.finalize().unwrap();

        let source = WavSource::open(&path).unwrap();
        assert_eq!(source.stream_info().unwrap().sample_format, SampleFormat::Int16);

        let err = AUDIO_BOOST.create(source, &BoostParams::default()).err();
        assert_eq!(err, Some(ConfigError::UnsupportedFormat(SampleFormat::Int16)));
    }

    #[test]
    fn test_open_missing_file_fails() {
        let result = WavSource::open(Path::new("/nonexistent/audio.wav"));
        assert!(matches!(result, Err(SourceError::Wav(_))));
    }

    #[test]
    fn test_spec_mapping() {
        let mut spec = WavSpec {
            channels: 2,
            sample_rate: 96000,
            bits_per_sample: 24,
            sample_format: hound::SampleFormat::Int,
        };
        assert_eq!(stream_info_from_spec(&spec).sample_format, SampleFormat::Int24);
        spec.bits_per_sample = 8;
        assert_eq!(stream_info_from_spec(&spec).sample_format, SampleFormat::Int8);
        spec.bits_per_sample = 32;
        spec.sample_format = hound::SampleFormat::Float;
        let info = stream_info_from_spec(&spec);
        assert_eq!(info, StreamInfo::float(96000, 2));
    }
}
