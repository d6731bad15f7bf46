//! AudioBoost filter and factory
//!
//! [`BoostFilter`] wraps a child [`AudioSource`]: every block pulled from it
//! comes out of the child, runs through the engine, and is handed to the
//! caller. The filter is a source too, so filters chain.
//!
//! Hosts register the filter by calling [`AUDIO_BOOST`]'s
//! [`create`](PluginDescriptor::create) once per stream; nothing in the crate
//! keeps global registration state.

use crate::config::BoostParams;
use crate::engine::EngineConfig;
use crate::error::{ConfigResult, SourceResult};
use crate::source::AudioSource;
use crate::types::{Sample, StreamInfo};

/// Static description of the filter for host registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Function name the host exposes
    pub name: &'static str,
    /// Argument signature: clip, then optional boost/limit/curve/norm
    pub signature: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// The AudioBoost dynamic compressor
pub const AUDIO_BOOST: PluginDescriptor = PluginDescriptor {
    name: "AudioBoost",
    signature: "c[boost]f[limit]f[curve]i[norm]b",
    description: "AudioBoost dynamic compressor",
};

impl PluginDescriptor {
    /// Validate `child`'s stream and `params`, then build a filter over it
    pub fn create<S: AudioSource>(&self, child: S, params: &BoostParams) -> ConfigResult<BoostFilter<S>> {
        let engine = EngineConfig::configure(child.stream_info(), params)?;
        log::info!(
            "{}: curve {} boost {} limit {} normalize {}",
            self.name,
            engine.curve(),
            engine.boost(),
            engine.limit(),
            engine.normalize()
        );
        Ok(BoostFilter::new(child, engine))
    }
}

/// A source that boosts everything its child produces
pub struct BoostFilter<S> {
    child: S,
    engine: EngineConfig,
    parallel: bool,
}

impl<S: AudioSource> BoostFilter<S> {
    /// Wrap `child` with an already-configured engine
    pub fn new(child: S, engine: EngineConfig) -> Self {
        Self {
            child,
            engine,
            parallel: false,
        }
    }

    /// Process blocks on the rayon pool instead of the calling thread
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// The filter keeps no state between blocks, so hosts may call it from
    /// several threads on disjoint ranges.
    pub fn is_thread_safe(&self) -> bool {
        true
    }

    /// Unwrap the child source
    pub fn into_inner(self) -> S {
        self.child
    }
}

impl<S: AudioSource> AudioSource for BoostFilter<S> {
    fn stream_info(&self) -> Option<&StreamInfo> {
        self.child.stream_info()
    }

    fn read_frames(&mut self, buf: &mut [Sample], max_frames: usize) -> SourceResult<usize> {
        let frames = self.child.read_frames(buf, max_frames)?;
        let channels = self.child.stream_info().map_or(0, |info| info.channels as usize);

        if self.parallel {
            self.engine.transform_parallel(buf, frames, channels);
        } else {
            self.engine.transform(buf, frames, channels);
        }
        Ok(frames)
    }

    fn total_frames(&self) -> Option<u64> {
        self.child.total_frames()
    }
}
