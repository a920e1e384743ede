// The edges of the engine: decoding the input image into a 16-bit raster and
// writing frames out as PNG files.

pub mod image_helper {
    use crate::core_modules::error::error::SortError;
    use crate::core_modules::linear_raster::linear_raster::Raster;
    use crate::core_modules::snapshot::snapshot::FrameSink;
    use image::codecs::png::{CompressionType, FilterType, PngEncoder};
    use log::info;
    use std::fs::File;
    use std::io::BufWriter;
    use std::path::{Path, PathBuf};

    /// Decodes any format `image` understands into 16-bit RGBA with color channels
    /// premultiplied by alpha. 8-bit sources are scaled by 257, so channels span 0..65535.
    pub fn load_raster(path: impl AsRef<Path>) -> Result<Raster, SortError> {
        let path = path.as_ref();
        let decoded = image::open(path)?;
        info!(
            "Loaded {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        let mut raster = decoded.to_rgba16();
        premultiply_alpha(&mut raster);
        Ok(raster)
    }

    /// Scales R, G and B by alpha in place; alpha itself is left as is.
    /// Opaque pixels are unchanged.
    pub fn premultiply_alpha(raster: &mut Raster) {
        const FULL: u32 = u16::MAX as u32;
        for pixel in raster.pixels_mut() {
            let alpha = pixel.0[3] as u32;
            if alpha == FULL {
                continue;
            }
            for channel in &mut pixel.0[..3] {
                *channel = (*channel as u32 * alpha / FULL) as u16;
            }
        }
    }

    pub fn save(path: impl AsRef<Path>, raster: &Raster) -> Result<(), SortError> {
        let output = BufWriter::new(File::create(path)?);
        let encoder = PngEncoder::new_with_quality(output, CompressionType::Fast, FilterType::Adaptive);
        raster.write_with_encoder(encoder)?;
        Ok(())
    }

    /// Writes every frame to `<directory>/<name>.png`.
    #[derive(Debug, Clone)]
    pub struct PngFrameSink {
        directory: PathBuf,
        created: bool,
    }

    impl PngFrameSink {
        pub fn new(directory: impl Into<PathBuf>) -> Self {
            Self {
                directory: directory.into(),
                created: false,
            }
        }

        pub fn path_for(&self, name: &str) -> PathBuf {
            self.directory.join(format!("{name}.png"))
        }
    }

    impl FrameSink for PngFrameSink {
        fn write_frame(&mut self, name: &str, raster: &Raster) -> Result<(), SortError> {
            if !self.created {
                std::fs::create_dir_all(&self.directory)?;
                self.created = true;
            }
            save(self.path_for(name), raster)
        }
    }
}
