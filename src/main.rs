// Command line runner: decodes one image and animates the selected sorts over it.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pixel_sort::pipeline::DEFAULT_FRAME_INTERVAL;
use pixel_sort::{
    Algorithm, Comparator, FrameLog, FrameSink, PngFrameSink, SortConfig, SortPipeline, load_raster,
};
use std::path::PathBuf;

/// Sorts the pixels of an image with classic algorithms and writes frames of the process.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input image
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// How often to output a frame, in algorithm steps
    #[arg(long, default_value_t = DEFAULT_FRAME_INTERVAL)]
    step: usize,

    /// Enable insertion sort
    #[arg(long)]
    insertion: bool,

    /// Enable selection sort
    #[arg(long)]
    selection: bool,

    /// Enable bubble sort
    #[arg(long)]
    bubble: bool,

    /// Enable merge sort
    #[arg(long)]
    merge: bool,

    /// Enable the stepped perceptual comparison
    #[arg(long)]
    stephsv: bool,

    /// Enable HSV comparison
    #[arg(long)]
    hsv: bool,

    /// Enable simple RGB comparison
    #[arg(long)]
    simple: bool,

    /// Directory frames are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Run every sort but only count frames instead of writing them
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn config(&self) -> SortConfig {
        let algorithms = [
            (self.insertion, Algorithm::Insertion),
            (self.selection, Algorithm::Selection),
            (self.bubble, Algorithm::Bubble),
            (self.merge, Algorithm::Merge),
        ];
        let comparators = [
            (self.stephsv, Comparator::Step),
            (self.hsv, Comparator::Hsv),
            (self.simple, Comparator::Simple),
        ];
        SortConfig {
            frame_interval: self.step,
            algorithms: algorithms
                .into_iter()
                .filter_map(|(enabled, algorithm)| enabled.then_some(algorithm))
                .collect(),
            comparators: comparators
                .into_iter()
                .filter_map(|(enabled, comparator)| enabled.then_some(comparator))
                .collect(),
        }
    }
}

fn run<S: FrameSink>(pipeline: &SortPipeline, args: &Args, sink: &mut S) -> Result<usize> {
    let source = load_raster(&args.file)
        .with_context(|| format!("failed to load input image {}", args.file.display()))?;
    let reports = pipeline.run(&source, sink).context("sort run aborted")?;
    Ok(reports.iter().map(|report| report.frames).sum())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let pipeline = SortPipeline::new(args.config()).context("invalid configuration")?;

    let frames = if args.dry_run {
        let mut log = FrameLog::new();
        run(&pipeline, &args, &mut log)?
    } else {
        let mut sink = PngFrameSink::new(&args.out_dir);
        run(&pipeline, &args, &mut sink)?
    };

    info!("Done: {frames} frames");
    Ok(())
}
