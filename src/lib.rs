// THEORY:
// This file is the main entry point for the `pixel_sort` library crate.
// It exposes the `SortPipeline` and its configuration as the high-level interface,
// and re-exports the core building blocks (pixels, comparators, the linear raster,
// the sorting engine and the snapshot emitter) for callers who want to drive a
// single run by hand.
//
// The binary in `main.rs` is only a thin command line layer over this API: it decodes
// the input image, builds a `SortConfig` and hands both to the pipeline.

pub mod core_modules;
pub mod pipeline;

pub use core_modules::comparator::comparator::Comparator;
pub use core_modules::error::error::SortError;
pub use core_modules::linear_raster::linear_raster::{LinearRaster, Raster};
pub use core_modules::pixel::pixel::Pixel;
pub use core_modules::snapshot::snapshot::{FrameLog, FrameSink, SnapshotEmitter};
pub use core_modules::sorter::sorter::{Algorithm, SortOutcome, SortReport};
pub use core_modules::utils::image_helper::image_helper::{PngFrameSink, load_raster};
pub use pipeline::{SortConfig, SortPipeline};
