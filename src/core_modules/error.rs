// THEORY:
// Errors only ever come from the edges of the engine: a configuration the engine cannot
// run, an input image that cannot be decoded, or a frame that cannot be written. The
// sorts and comparators themselves cannot fail on an in-memory buffer. Nothing here is
// retried; every error travels up to the process boundary and ends the run.

pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub enum SortError {
        /// The frame interval must be at least 1.
        InvalidInterval { interval: usize },
        /// A pixel list does not fill a `width * height` raster.
        PixelCountMismatch { expected: usize, got: usize },
        /// Decoding the input or encoding a frame failed.
        Image(image::ImageError),
        /// Creating the output directory or a frame file failed.
        Io(std::io::Error),
    }

    impl fmt::Display for SortError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::InvalidInterval { interval } => {
                    write!(f, "frame interval must be at least 1, got {interval}")
                }
                Self::PixelCountMismatch { expected, got } => {
                    write!(f, "pixel buffer: expected {expected} pixels, got {got}")
                }
                Self::Image(err) => write!(f, "image error: {err}"),
                Self::Io(err) => write!(f, "i/o error: {err}"),
            }
        }
    }

    impl std::error::Error for SortError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Self::InvalidInterval { .. } | Self::PixelCountMismatch { .. } => None,
                Self::Image(err) => Some(err),
                Self::Io(err) => Some(err),
            }
        }
    }

    impl From<image::ImageError> for SortError {
        fn from(err: image::ImageError) -> Self {
            Self::Image(err)
        }
    }

    impl From<std::io::Error> for SortError {
        fn from(err: std::io::Error) -> Self {
            Self::Io(err)
        }
    }
}
