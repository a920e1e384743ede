// THEORY:
// The `Sorter` module is the engine of the crate: four textbook sorts rewritten to
// work in place over a `LinearRaster` while mirroring every write into the output
// raster, so a frame taken at any moment shows the true intermediate state.
//
// All four sorts put the comparator-greatest pixel last: an element moves right past a
// neighbour exactly when the comparator says it is greater.
//
// What counts as one "step" differs per algorithm; it only controls how fine-grained
// the animation is:
// - Insertion: one swap.
// - Selection: one finished slot, whether or not it needed a swap.
// - Bubble:    one finished pass.
// - Merge:     one finished merge.
//
// Insertion, selection and bubble observe step 0 before touching anything, so the
// first frame is always the untouched image. Merge sort numbers its merges from 0, so
// its step 0 is the first completed merge.
//
// Merge sort ping-pongs between the working buffer and a single scratch copy made at
// the start of the run: each recursion level sorts its halves into one buffer and
// merges them into the other, and the top level merges into the working buffer.

pub mod sorter {
    use crate::core_modules::comparator::comparator::Comparator;
    use crate::core_modules::error::error::SortError;
    use crate::core_modules::linear_raster::linear_raster::{LinearRaster, Raster};
    use crate::core_modules::snapshot::snapshot::{FrameSink, SnapshotEmitter};
    use log::info;
    use std::fmt;
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Algorithm {
        Insertion,
        Selection,
        Bubble,
        Merge,
    }

    /// Summary of one finished (algorithm, comparator) run.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SortReport {
        pub algorithm: Algorithm,
        pub comparator: Comparator,
        /// Atomic steps taken, as defined per algorithm.
        pub steps: usize,
        /// Swaps for insertion, selection and bubble; element writes for merge.
        pub moves: usize,
        pub frames: usize,
    }

    #[derive(Debug, Clone)]
    pub struct SortOutcome {
        pub report: SortReport,
        /// The sorted buffer.
        pub buffer: LinearRaster,
    }

    impl Algorithm {
        /// Every algorithm, in the order the command line runs them.
        pub const ALL: [Algorithm; 4] = [
            Algorithm::Insertion,
            Algorithm::Selection,
            Algorithm::Bubble,
            Algorithm::Merge,
        ];

        pub fn name(&self) -> &'static str {
            match self {
                Algorithm::Insertion => "insertion",
                Algorithm::Selection => "selection",
                Algorithm::Bubble => "bubble",
                Algorithm::Merge => "merge",
            }
        }

        /// Frame prefix for a run of this algorithm under `comparator`.
        pub fn prefix(&self, comparator: Comparator) -> String {
            format!("{}_{}", self.name(), comparator.name())
        }

        /// Sorts a fresh copy of `source` to completion.
        ///
        /// `canvas` is reset to `source` first and then receives every write the sort
        /// makes; frames are taken from it every `interval` steps.
        pub fn run<S: FrameSink>(
            &self,
            source: &Raster,
            canvas: &mut Raster,
            comparator: Comparator,
            interval: usize,
            sink: S,
        ) -> Result<SortOutcome, SortError> {
            let emitter = SnapshotEmitter::new(self.prefix(comparator), interval, sink)?;
            canvas.clone_from(source);
            let mut buffer = LinearRaster::from_raster(source);

            info!(
                "Sorting {} pixels: {} with compare {}",
                buffer.len(),
                self.name(),
                comparator.name()
            );

            let mut run = SortRun {
                comparator,
                canvas,
                emitter,
                step: 0,
                moves: 0,
            };
            match self {
                Algorithm::Insertion => run.insertion(&mut buffer)?,
                Algorithm::Selection => run.selection(&mut buffer)?,
                Algorithm::Bubble => run.bubble(&mut buffer)?,
                Algorithm::Merge => run.merge(&mut buffer)?,
            }

            let report = SortReport {
                algorithm: *self,
                comparator,
                steps: run.step,
                moves: run.moves,
                frames: run.emitter.frames_written(),
            };
            info!(
                "Finished {}: {} steps, {} moves, {} frames",
                run.emitter.prefix(),
                report.steps,
                report.moves,
                report.frames
            );
            Ok(SortOutcome { report, buffer })
        }
    }

    /// State shared by every step of one run.
    struct SortRun<'a, S: FrameSink> {
        comparator: Comparator,
        canvas: &'a mut Raster,
        emitter: SnapshotEmitter<S>,
        step: usize,
        moves: usize,
    }

    impl<S: FrameSink> SortRun<'_, S> {
        fn greater(&self, buffer: &LinearRaster, a: usize, b: usize) -> bool {
            self.comparator.greater_than(&buffer[a], &buffer[b])
        }

        fn swap(&mut self, buffer: &mut LinearRaster, i: usize, j: usize) {
            buffer.swap(i, j, self.canvas);
            self.moves += 1;
        }

        fn observe_initial(&mut self) -> Result<(), SortError> {
            self.emitter.observe(0, self.canvas)?;
            Ok(())
        }

        /// Counts one finished step and offers it to the emitter.
        fn advance(&mut self) -> Result<(), SortError> {
            self.step += 1;
            self.emitter.observe(self.step, self.canvas)?;
            Ok(())
        }

        fn insertion(&mut self, buffer: &mut LinearRaster) -> Result<(), SortError> {
            self.observe_initial()?;
            for i in 0..buffer.len() {
                let mut j = i;
                while j > 0 && self.greater(buffer, j - 1, j) {
                    self.swap(buffer, j - 1, j);
                    self.advance()?;
                    j -= 1;
                }
            }
            Ok(())
        }

        fn selection(&mut self, buffer: &mut LinearRaster) -> Result<(), SortError> {
            self.observe_initial()?;
            for slot in (0..buffer.len()).rev() {
                let mut max = 0;
                for i in 1..=slot {
                    if self.greater(buffer, i, max) {
                        max = i;
                    }
                }
                if max != slot {
                    self.swap(buffer, max, slot);
                }
                self.advance()?;
            }
            Ok(())
        }

        fn bubble(&mut self, buffer: &mut LinearRaster) -> Result<(), SortError> {
            self.observe_initial()?;
            let mut n = buffer.len();
            while n > 0 {
                // Everything from the last swap onward is already in place.
                let mut last_swap = 0;
                for i in 1..n {
                    if self.greater(buffer, i - 1, i) {
                        self.swap(buffer, i - 1, i);
                        last_swap = i;
                    }
                }
                n = last_swap;
                self.advance()?;
            }
            Ok(())
        }

        fn merge(&mut self, buffer: &mut LinearRaster) -> Result<(), SortError> {
            let mut scratch = buffer.clone();
            let length = buffer.len();
            self.split_merge(&mut scratch, buffer, 0, length)
        }

        /// Sorts `[begin, end)` into `target`. Both buffers must hold the same
        /// elements in that range on entry.
        fn split_merge(
            &mut self,
            source: &mut LinearRaster,
            target: &mut LinearRaster,
            begin: usize,
            end: usize,
        ) -> Result<(), SortError> {
            if end - begin < 2 {
                return Ok(());
            }

            let middle = (begin + end) / 2;
            // Sort both halves into `source`, then merge them back into `target`.
            self.split_merge(target, source, begin, middle)?;
            self.split_merge(target, source, middle, end)?;

            let (mut left, mut right) = (begin, middle);
            for k in begin..end {
                let take_left = left < middle
                    && (right >= end || self.comparator.greater_than(&source[right], &source[left]));
                let next = if take_left {
                    left += 1;
                    source[left - 1]
                } else {
                    right += 1;
                    source[right - 1]
                };
                target.set(k, next, self.canvas);
                self.moves += 1;
            }

            self.emitter.observe(self.step, self.canvas)?;
            self.step += 1;
            Ok(())
        }
    }

    impl fmt::Display for Algorithm {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    impl FromStr for Algorithm {
        type Err = String;

        fn from_str(name: &str) -> Result<Self, Self::Err> {
            Algorithm::ALL
                .into_iter()
                .find(|algorithm| algorithm.name() == name)
                .ok_or_else(|| format!("unknown algorithm '{name}'"))
        }
    }
}
