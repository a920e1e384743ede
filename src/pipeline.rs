// THEORY:
// The `pipeline` module is the top-level API for the sorting visualizer. It takes a
// decoded source raster and a `SortConfig` naming which algorithms and comparators to
// run, and plays every (algorithm, comparator) pair to completion, one after the other.
//
// Each run gets its own copy of the pixels, and the shared output raster is reset from
// the source before it starts, so runs never see each other's results. Everything is
// sequential. A run finishes before the next one begins, and the first error stops the
// whole pipeline.

use crate::core_modules::comparator::comparator::Comparator;
use crate::core_modules::error::error::SortError;
use crate::core_modules::linear_raster::linear_raster::Raster;
use crate::core_modules::snapshot::snapshot::FrameSink;
use crate::core_modules::sorter::sorter::{Algorithm, SortReport};
use log::{info, warn};

pub const DEFAULT_FRAME_INTERVAL: usize = 100;

/// Which runs to perform and how often to take a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// A frame is written every `frame_interval` steps. Must be at least 1.
    pub frame_interval: usize,
    pub algorithms: Vec<Algorithm>,
    pub comparators: Vec<Comparator>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            frame_interval: DEFAULT_FRAME_INTERVAL,
            algorithms: Vec::new(),
            comparators: Vec::new(),
        }
    }
}

impl SortConfig {
    pub fn validate(&self) -> Result<(), SortError> {
        if self.frame_interval == 0 {
            return Err(SortError::InvalidInterval {
                interval: self.frame_interval,
            });
        }
        Ok(())
    }

    /// Every selected pair, algorithms outermost.
    pub fn runs(&self) -> Vec<(Algorithm, Comparator)> {
        self.algorithms
            .iter()
            .flat_map(|&algorithm| {
                self.comparators
                    .iter()
                    .map(move |&comparator| (algorithm, comparator))
            })
            .collect()
    }
}

pub struct SortPipeline {
    config: SortConfig,
}

impl SortPipeline {
    pub fn new(config: SortConfig) -> Result<Self, SortError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs every selected pair against `source`, writing frames to `sink`.
    pub fn run<S: FrameSink>(&self, source: &Raster, sink: &mut S) -> Result<Vec<SortReport>, SortError> {
        let runs = self.config.runs();
        if runs.is_empty() {
            warn!("No algorithm/comparator pair selected; nothing to sort");
            return Ok(Vec::new());
        }

        let mut canvas = source.clone();
        let mut reports = Vec::with_capacity(runs.len());
        for (algorithm, comparator) in runs {
            let outcome = algorithm.run(
                source,
                &mut canvas,
                comparator,
                self.config.frame_interval,
                &mut *sink,
            )?;
            reports.push(outcome.report);
        }

        let frames: usize = reports.iter().map(|report| report.frames).sum();
        info!("Completed {} runs, {} frames", reports.len(), frames);
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::snapshot::snapshot::FrameLog;
    use image::Rgba;

    fn noise(width: u32, height: u32) -> Raster {
        Raster::from_fn(width, height, |x, y| {
            let seed = (x * 31 + y * 17) as u16;
            Rgba([seed.wrapping_mul(977), seed.wrapping_mul(313), seed.wrapping_mul(59), u16::MAX])
        })
    }

    #[test]
    fn runs_are_ordered_algorithm_first() {
        let config = SortConfig {
            frame_interval: 10,
            algorithms: vec![Algorithm::Bubble, Algorithm::Merge],
            comparators: vec![Comparator::Hsv, Comparator::Simple],
        };
        assert_eq!(
            config.runs(),
            vec![
                (Algorithm::Bubble, Comparator::Hsv),
                (Algorithm::Bubble, Comparator::Simple),
                (Algorithm::Merge, Comparator::Hsv),
                (Algorithm::Merge, Comparator::Simple),
            ]
        );
    }

    #[test]
    fn zero_interval_is_rejected_up_front() {
        let config = SortConfig {
            frame_interval: 0,
            ..SortConfig::default()
        };
        assert!(matches!(
            SortPipeline::new(config),
            Err(SortError::InvalidInterval { interval: 0 })
        ));
    }

    #[test]
    fn empty_selection_runs_nothing() {
        let pipeline = SortPipeline::new(SortConfig::default()).unwrap();
        let mut log = FrameLog::new();
        let reports = pipeline.run(&noise(3, 3), &mut log).unwrap();
        assert!(reports.is_empty());
        assert!(log.names.is_empty());
    }

    #[test_log::test]
    fn every_pair_reports_and_emits_frames() {
        let config = SortConfig {
            frame_interval: 5,
            algorithms: Algorithm::ALL.to_vec(),
            comparators: Comparator::ALL.to_vec(),
        };
        let pipeline = SortPipeline::new(config).unwrap();
        let mut log = FrameLog::new();
        let reports = pipeline.run(&noise(4, 5), &mut log).unwrap();

        assert_eq!(reports.len(), 12);
        assert_eq!(log.names.len(), reports.iter().map(|r| r.frames).sum::<usize>());
        for report in &reports {
            let prefix = report.algorithm.prefix(report.comparator);
            assert!(log.names.contains(&format!("{prefix}_000000000")), "{prefix}");
        }
    }

    #[test]
    fn runs_do_not_leak_into_each_other() {
        let source = noise(3, 4);
        let config = SortConfig {
            frame_interval: 1,
            algorithms: vec![Algorithm::Insertion, Algorithm::Insertion],
            comparators: vec![Comparator::Simple],
        };
        let reports = SortPipeline::new(config)
            .unwrap()
            .run(&source, &mut FrameLog::new())
            .unwrap();
        // The second run starts from the unsorted source again.
        assert_eq!(reports[0], reports[1]);
        assert!(reports[0].moves > 0);
    }
}
