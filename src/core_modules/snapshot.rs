// THEORY:
// The `Snapshot` module decides *when* the state of the output raster is persisted and
// leaves *how* to a `FrameSink`. The policy is a single rule: a frame is written when
// `step % interval == 0`. Step numbers are handed in by the sorting engine, which owns
// what a "step" means for each algorithm. The emitter names every frame
// `<prefix>_<step, nine digits>` so a run's frames sort lexically in playback order.
//
// There is no buffering. A qualifying step is written before the sort is allowed to
// continue, and a failed write stops the run.

pub mod snapshot {
    use crate::core_modules::error::error::SortError;
    use crate::core_modules::linear_raster::linear_raster::Raster;
    use log::debug;

    /// Persists one frame of a run under a deterministic name.
    pub trait FrameSink {
        fn write_frame(&mut self, name: &str, raster: &Raster) -> Result<(), SortError>;
    }

    impl<S: FrameSink + ?Sized> FrameSink for &mut S {
        fn write_frame(&mut self, name: &str, raster: &Raster) -> Result<(), SortError> {
            (**self).write_frame(name, raster)
        }
    }

    /// A sink that only remembers frame names. Used for dry runs.
    #[derive(Debug, Default, Clone)]
    pub struct FrameLog {
        pub names: Vec<String>,
    }

    impl FrameLog {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl FrameSink for FrameLog {
        fn write_frame(&mut self, name: &str, _raster: &Raster) -> Result<(), SortError> {
            self.names.push(name.to_string());
            Ok(())
        }
    }

    /// Step-counted frame emission for a single run.
    pub struct SnapshotEmitter<S: FrameSink> {
        prefix: String,
        interval: usize,
        frames_written: usize,
        sink: S,
    }

    impl<S: FrameSink> SnapshotEmitter<S> {
        /// `interval` must be at least 1.
        pub fn new(prefix: impl Into<String>, interval: usize, sink: S) -> Result<Self, SortError> {
            if interval == 0 {
                return Err(SortError::InvalidInterval { interval });
            }
            Ok(Self {
                prefix: prefix.into(),
                interval,
                frames_written: 0,
                sink,
            })
        }

        pub fn frame_name(prefix: &str, step: usize) -> String {
            format!("{prefix}_{step:09}")
        }

        /// Writes `raster` when `step` is a multiple of the interval.
        /// Returns whether a frame was written.
        pub fn observe(&mut self, step: usize, raster: &Raster) -> Result<bool, SortError> {
            if step % self.interval != 0 {
                return Ok(false);
            }
            let name = Self::frame_name(&self.prefix, step);
            debug!("Step {step:06} -> {name}");
            self.sink.write_frame(&name, raster)?;
            self.frames_written += 1;
            Ok(true)
        }

        pub fn frames_written(&self) -> usize {
            self.frames_written
        }

        pub fn prefix(&self) -> &str {
            &self.prefix
        }

        pub fn into_sink(self) -> S {
            self.sink
        }
    }
}
