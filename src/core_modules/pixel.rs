// THEORY (Sortable Pixel):
// The `Pixel` module is the element type of every sort in this crate. It is a "dumb"
// data container for one raster cell: its raw channels, the coordinate it was read
// from, and the ordering metrics the comparators need. Those metrics are computed
// exactly once, in the constructor, and never again. A pixel is moved around the
// linear buffer by the sorting engine but its contents never change.
//
// What lives here:
// - Raw channels (R, G, B) in the decoded 16-bit range (0..65535). Alpha is not stored;
//   every pixel writes back fully opaque.
// - HSV: hue in degrees, saturation and value. The channels are divided by 255.0 even
//   though they are 16-bit, so `value` ranges over 0..257. This scaling is deliberate:
//   the width of the bands in the "step" ordering depends on it.
// - Perceptual luminance: sqrt(0.241 R + 0.691 G + 0.068 B) over the raw channels.
// - Perceptual buckets (hue, luminance, value) quantized to eighths. When the hue bucket
//   is odd, the luminance and value buckets are mirrored around 8, so brightness snakes
//   back and forth as the hue sweeps across buckets.
//
// Key principles:
// 1) Single-pixel scope: nothing here looks at another pixel. Comparisons live in
//    `comparator`.
// 2) Compute once: every derived field is filled in `Pixel::new` and is read-only.

pub mod pixel {
    use image::Rgba;

    pub type Channel = u16;
    pub type Hue = f64;
    pub type Saturation = f64;
    pub type Value = f64;
    pub type Luminance = f64;
    pub type Bucket = i64;
    pub type Coordinate = u32;

    /// Divisor applied to the raw channels before the HSV conversion.
    const HSV_CHANNEL_SCALE: f64 = 255.0;
    /// Number of buckets per unit of hue, luminance and value.
    const BUCKETS_PER_UNIT: f64 = 8.0;
    /// Odd hue buckets mirror the brightness buckets around this value.
    const BUCKET_MIRROR: Bucket = 8;

    const LUMINANCE_RED_WEIGHT: f64 = 0.241;
    const LUMINANCE_GREEN_WEIGHT: f64 = 0.691;
    const LUMINANCE_BLUE_WEIGHT: f64 = 0.068;

    /// A single raster cell with its precomputed ordering metrics.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Pixel {
        /// The red channel value (0-65535).
        pub red: Channel,
        /// The green channel value (0-65535).
        pub green: Channel,
        /// The blue channel value (0-65535).
        pub blue: Channel,
        /// Column this pixel was read from in the source raster.
        pub x: Coordinate,
        /// Row this pixel was read from in the source raster.
        pub y: Coordinate,
        hue: Hue,
        saturation: Saturation,
        value: Value,
        luminance: Luminance,
        hue_bucket: Bucket,
        luminance_bucket: Bucket,
        value_bucket: Bucket,
    }

    impl Pixel {
        /// Builds a pixel from raw channels and its originating coordinate.
        pub fn new(red: Channel, green: Channel, blue: Channel, x: Coordinate, y: Coordinate) -> Self {
            let (hue, saturation, value) = Self::hsv(red, green, blue);
            let luminance = Self::perceptual_luminance(red, green, blue);

            let hue_bucket = (hue * BUCKETS_PER_UNIT) as Bucket;
            let mut luminance_bucket = (luminance * BUCKETS_PER_UNIT) as Bucket;
            let mut value_bucket = (value * BUCKETS_PER_UNIT) as Bucket;

            // `%` keeps the sign of the dividend, so only positive odd buckets flip.
            if hue_bucket % 2 == 1 {
                luminance_bucket = BUCKET_MIRROR - luminance_bucket;
                value_bucket = BUCKET_MIRROR - value_bucket;
            }

            Pixel {
                red,
                green,
                blue,
                x,
                y,
                hue,
                saturation,
                value,
                luminance,
                hue_bucket,
                luminance_bucket,
                value_bucket,
            }
        }

        /// Builds a pixel from a decoded color; the source alpha is discarded.
        pub fn from_rgba(color: &Rgba<Channel>, x: Coordinate, y: Coordinate) -> Self {
            let [red, green, blue, _] = color.0;
            Self::new(red, green, blue, x, y)
        }

        /// The color written back into the output raster, always fully opaque.
        pub fn to_rgba(&self) -> Rgba<Channel> {
            Rgba([self.red, self.green, self.blue, Channel::MAX])
        }

        /// Standard max/min-channel HSV conversion over channels scaled by 1/255.
        fn hsv(red: Channel, green: Channel, blue: Channel) -> (Hue, Saturation, Value) {
            let red_scaled = red as f64 / HSV_CHANNEL_SCALE;
            let green_scaled = green as f64 / HSV_CHANNEL_SCALE;
            let blue_scaled = blue as f64 / HSV_CHANNEL_SCALE;

            let maximum_channel = red_scaled.max(green_scaled.max(blue_scaled));
            let minimum_channel = red_scaled.min(green_scaled.min(blue_scaled));
            let delta = maximum_channel - minimum_channel;

            let hue = if delta == 0.0 {
                0.0
            } else if maximum_channel == red_scaled {
                60.0 * (((green_scaled - blue_scaled) / delta) % 6.0)
            } else if maximum_channel == green_scaled {
                60.0 * ((blue_scaled - red_scaled) / delta + 2.0)
            } else {
                60.0 * ((red_scaled - green_scaled) / delta + 4.0)
            };

            let saturation = if maximum_channel == 0.0 {
                0.0
            } else {
                delta / maximum_channel
            };

            (hue, saturation, maximum_channel)
        }

        fn perceptual_luminance(red: Channel, green: Channel, blue: Channel) -> Luminance {
            (LUMINANCE_RED_WEIGHT * red as f64
                + LUMINANCE_GREEN_WEIGHT * green as f64
                + LUMINANCE_BLUE_WEIGHT * blue as f64)
                .sqrt()
        }

        /// Hue angle in degrees. Hues just below red are negative.
        pub fn hue(&self) -> Hue {
            self.hue
        }

        /// HSV saturation (0..1).
        pub fn saturation(&self) -> Saturation {
            self.saturation
        }

        /// HSV value: the largest channel divided by 255.
        pub fn value(&self) -> Value {
            self.value
        }

        /// Unbucketed perceptual luminance.
        pub fn luminance(&self) -> Luminance {
            self.luminance
        }

        pub fn hue_bucket(&self) -> Bucket {
            self.hue_bucket
        }

        pub fn luminance_bucket(&self) -> Bucket {
            self.luminance_bucket
        }

        pub fn value_bucket(&self) -> Bucket {
            self.value_bucket
        }
    }

    impl From<Pixel> for Rgba<Channel> {
        fn from(pixel: Pixel) -> Self {
            pixel.to_rgba()
        }
    }
}


// -----------------------------------------------------------------------------
// Glossary: Pixel Ordering Terms
//
// - Hue: Angle on the color wheel in degrees. Computed from whichever channel is the
//   largest; zero when all channels are equal.
//
// - Value (HSV): The largest channel. Here it is the raw channel divided by 255, so a
//   16-bit white has a value of 257.
//
// - Perceptual luminance: A square-root weighted sum of the raw channels, a cheap
//   approximation of how bright a color looks.
//
// - Perceptual bucket: A metric multiplied by 8 and truncated to an integer. Brightness
//   buckets are mirrored (8 - bucket) whenever the hue bucket is odd.
