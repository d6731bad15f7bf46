//! Pull-based audio sources
//!
//! A source hands out interleaved float frames on demand. Sources chain:
//! a [`BoostFilter`](crate::filter::BoostFilter) is itself a source that
//! pulls from its child.

use crate::error::{SourceError, SourceResult};
use crate::types::{Sample, StreamInfo};

/// Something that yields interleaved float frames
pub trait AudioSource: Send {
    /// Description of the audio track, `None` if the stream has no audio
    fn stream_info(&self) -> Option<&StreamInfo>;

    /// Fill `buf` with up to `max_frames` interleaved frames
    ///
    /// Writes at most `buf.len() / channels` frames. Returns the number of
    /// frames written; 0 means end of stream.
    fn read_frames(&mut self, buf: &mut [Sample], max_frames: usize) -> SourceResult<usize>;

    /// Total frame count if known up front
    fn total_frames(&self) -> Option<u64> {
        None
    }
}

/// Frames that fit in `buf_len` samples, capped at `max_frames`
///
/// Errors if `buf_len` cannot hold a single frame.
pub(crate) fn frame_capacity(buf_len: usize, channels: usize, max_frames: usize) -> SourceResult<usize> {
    if channels == 0 || buf_len < channels {
        return Err(SourceError::BufferTooSmall {
            len: buf_len,
            channels,
        });
    }
    Ok(max_frames.min(buf_len / channels))
}

/// An in-memory interleaved buffer played back as a source
#[derive(Debug, Clone)]
pub struct MemorySource {
    info: Option<StreamInfo>,
    samples: Vec<Sample>,
    position: usize,
}

impl MemorySource {
    /// Create a source over interleaved samples
    ///
    /// A trailing partial frame is never returned.
    pub fn new(info: StreamInfo, samples: Vec<Sample>) -> Self {
        Self {
            info: Some(info),
            samples,
            position: 0,
        }
    }

    /// A stream that carries no audio track
    pub fn without_audio() -> Self {
        Self {
            info: None,
            samples: Vec::new(),
            position: 0,
        }
    }

    /// Frames not yet read
    pub fn remaining_frames(&self) -> usize {
        match self.info {
            Some(info) if info.channels > 0 => {
                (self.samples.len() - self.position) / info.channels as usize
            }
            _ => 0,
        }
    }
}

impl AudioSource for MemorySource {
    fn stream_info(&self) -> Option<&StreamInfo> {
        self.info.as_ref()
    }

    fn read_frames(&mut self, buf: &mut [Sample], max_frames: usize) -> SourceResult<usize> {
        let Some(info) = self.info else {
            return Ok(0);
        };
        let channels = info.channels as usize;
        let frames = frame_capacity(buf.len(), channels, max_frames)?.min(self.remaining_frames());
        let len = frames * channels;

        buf[..len].copy_from_slice(&self.samples[self.position..self.position + len]);
        self.position += len;
        Ok(frames)
    }

    fn total_frames(&self) -> Option<u64> {
        self.info
            .filter(|info| info.channels > 0)
            .map(|info| (self.samples.len() / info.channels as usize) as u64)
    }
}
