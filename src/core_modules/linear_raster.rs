// THEORY:
// The `LinearRaster` is the working array every sort runs over. It flattens the 2-D
// image into a single `Vec<Pixel>` in column-major order: index `i` is the cell
// `(x, y) = (i / height, i % height)`. The mapping is load-bearing. The sorts only
// ever think in flat indices, but every write they make must land on the same cell of
// the output raster, otherwise the emitted frames would not show the real state of the
// sort. So the two mutating operations here, `swap` and `set`, take the output raster
// and mirror the write into it.
//
// The output raster is owned by the caller and handed down explicitly as `&mut Raster`;
// there is exactly one writer at a time.

pub mod linear_raster {
    use crate::core_modules::error::error::SortError;
    use crate::core_modules::pixel::pixel::{Coordinate, Pixel};
    use image::{ImageBuffer, Rgba};
    use std::ops::Index;

    /// The 16-bit RGBA grid frames are rendered from.
    pub type Raster = ImageBuffer<Rgba<u16>, Vec<u16>>;

    /// A column-major, flattened copy of a raster.
    #[derive(Debug, Clone, PartialEq)]
    pub struct LinearRaster {
        width: u32,
        height: u32,
        pixels: Vec<Pixel>,
    }

    impl LinearRaster {
        /// Copies `raster` into a fresh buffer, one `Pixel` per cell.
        pub fn from_raster(raster: &Raster) -> Self {
            let (width, height) = raster.dimensions();
            let length = width as usize * height as usize;
            let mut pixels = Vec::with_capacity(length);
            for index in 0..length {
                let (x, y) = to_xy(index, height);
                pixels.push(Pixel::from_rgba(raster.get_pixel(x, y), x, y));
            }
            Self {
                width,
                height,
                pixels,
            }
        }

        /// Wraps already-built pixels laid out in column-major order.
        pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, SortError> {
            let expected = width as usize * height as usize;
            if pixels.len() != expected {
                return Err(SortError::PixelCountMismatch {
                    expected,
                    got: pixels.len(),
                });
            }
            Ok(Self {
                width,
                height,
                pixels,
            })
        }

        pub fn width(&self) -> u32 {
            self.width
        }

        pub fn height(&self) -> u32 {
            self.height
        }

        pub fn len(&self) -> usize {
            self.pixels.len()
        }

        pub fn is_empty(&self) -> bool {
            self.pixels.is_empty()
        }

        pub fn pixels(&self) -> &[Pixel] {
            &self.pixels
        }

        /// Maps a flat index to its `(x, y)` cell.
        pub fn to_xy(&self, index: usize) -> (Coordinate, Coordinate) {
            to_xy(index, self.height)
        }

        /// Maps an `(x, y)` cell back to its flat index.
        pub fn to_index(&self, x: Coordinate, y: Coordinate) -> usize {
            to_index(x, y, self.height)
        }

        /// Swaps two elements and mirrors both cells into `raster`.
        pub fn swap(&mut self, i: usize, j: usize, raster: &mut Raster) {
            self.pixels.swap(i, j);
            self.mirror(i, raster);
            self.mirror(j, raster);
        }

        /// Overwrites one element and mirrors it into `raster`.
        pub fn set(&mut self, index: usize, pixel: Pixel, raster: &mut Raster) {
            self.pixels[index] = pixel;
            self.mirror(index, raster);
        }

        /// Renders the whole buffer into a new raster.
        pub fn to_raster(&self) -> Raster {
            let mut raster = Raster::new(self.width, self.height);
            for index in 0..self.pixels.len() {
                self.mirror(index, &mut raster);
            }
            raster
        }

        fn mirror(&self, index: usize, raster: &mut Raster) {
            let (x, y) = self.to_xy(index);
            raster.put_pixel(x, y, self.pixels[index].to_rgba());
        }
    }

    impl Index<usize> for LinearRaster {
        type Output = Pixel;

        fn index(&self, index: usize) -> &Pixel {
            &self.pixels[index]
        }
    }

    /// Column-major linearization: `x = i / height`, `y = i % height`.
    pub fn to_xy(index: usize, height: u32) -> (Coordinate, Coordinate) {
        let height = height as usize;
        ((index / height) as Coordinate, (index % height) as Coordinate)
    }

    /// Inverse of [`to_xy`].
    pub fn to_index(x: Coordinate, y: Coordinate, height: u32) -> usize {
        x as usize * height as usize + y as usize
    }
}

#[cfg(test)]
mod tests {
    use super::linear_raster::*;
    use crate::core_modules::error::error::SortError;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> Raster {
        Raster::from_fn(width, height, |x, y| {
            Rgba([x as u16 * 100, y as u16 * 100, 7, 123])
        })
    }

    #[test]
    fn index_round_trips_for_many_shapes() {
        for width in 1..=7u32 {
            for height in 1..=7u32 {
                for index in 0..(width * height) as usize {
                    let (x, y) = to_xy(index, height);
                    assert!(x < width && y < height);
                    assert_eq!(to_index(x, y, height), index);
                }
            }
        }
    }

    #[test]
    fn copy_is_column_major() {
        let linear = LinearRaster::from_raster(&gradient(3, 2));
        assert_eq!((linear.width(), linear.height()), (3, 2));
        assert_eq!(linear.len(), 6);
        for (index, pixel) in linear.pixels().iter().enumerate() {
            assert_eq!(linear.to_index(pixel.x, pixel.y), index);
        }
        let origins: Vec<(u32, u32)> = linear.pixels().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(origins, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
        assert_eq!(linear[3].red, 100);
        assert_eq!(linear[3].green, 100);
    }

    #[test]
    fn from_pixels_rejects_a_wrong_pixel_count() {
        let pixels = LinearRaster::from_raster(&gradient(2, 2)).pixels().to_vec();
        let result = LinearRaster::from_pixels(3, 2, pixels.clone());
        assert!(matches!(
            result,
            Err(SortError::PixelCountMismatch { expected: 6, got: 4 })
        ));

        let rebuilt = LinearRaster::from_pixels(2, 2, pixels).unwrap();
        assert_eq!(rebuilt.to_raster(), LinearRaster::from_raster(&gradient(2, 2)).to_raster());
    }

    #[test]
    fn swap_mirrors_both_cells() {
        let mut raster = gradient(2, 2);
        let mut linear = LinearRaster::from_raster(&raster);
        linear.swap(0, 3, &mut raster);

        assert_eq!(raster.get_pixel(0, 0), &Rgba([100, 100, 7, u16::MAX]));
        assert_eq!(raster.get_pixel(1, 1), &Rgba([0, 0, 7, u16::MAX]));
        // Untouched cells keep their source alpha.
        assert_eq!(raster.get_pixel(1, 0), &Rgba([100, 0, 7, 123]));
    }

    #[test]
    fn set_mirrors_one_cell() {
        let mut raster = gradient(2, 3);
        let mut linear = LinearRaster::from_raster(&raster);
        let moved = linear[0];
        linear.set(4, moved, &mut raster);
        let (x, y) = linear.to_xy(4);
        assert_eq!((x, y), (1, 1));
        assert_eq!(raster.get_pixel(x, y), &Rgba([0, 0, 7, u16::MAX]));
    }

    #[test]
    fn to_raster_renders_every_cell_opaque() {
        let source = gradient(4, 3);
        let rendered = LinearRaster::from_raster(&source).to_raster();
        for (x, y, pixel) in rendered.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            assert_eq!((r, g, b, a), (x as u16 * 100, y as u16 * 100, 7, u16::MAX));
        }
    }
}
