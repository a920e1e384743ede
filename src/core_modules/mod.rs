pub mod comparator;
pub mod error;
pub mod linear_raster;
pub mod pixel;
pub mod snapshot;
pub mod sorter;
pub mod utils;
