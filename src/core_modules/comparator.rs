// THEORY:
// The `Comparator` module defines what "greater than" means between two pixels. Every
// sort in the engine is written against a single question, "does `a` sort after `b`?",
// and a comparator answers it. The set is closed: three named variants, each a pure
// cascade of tie-breaks that falls through to `false` when everything is equal.
//
// - Simple:   R, then G, then B.
// - Hsv:      hue, then saturation, then value.
// - Step:     raw hue first, then the hue *bucket* in the other direction, then the
//             mirrored luminance and value buckets. Mixing the raw hue with the bucketed
//             hue is not a strict ordering and can be non-transitive on some inputs. That
//             asymmetry is what produces the stepped banding in the animation, so it is
//             kept exactly as is.
//
// Comparators hold no state, so one value is shared across every pixel and every run.

pub mod comparator {
    use crate::core_modules::pixel::pixel::Pixel;
    use std::fmt;
    use std::str::FromStr;

    /// A named "a sorts after b" predicate over two pixels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Comparator {
        /// Lexicographic red, green, blue.
        Simple,
        /// Lexicographic hue, saturation, value.
        Hsv,
        /// Perceptual stepped ordering over hue and the mirrored brightness buckets.
        Step,
    }

    impl Comparator {
        /// Every comparator, in the order the command line runs them.
        pub const ALL: [Comparator; 3] = [Comparator::Step, Comparator::Hsv, Comparator::Simple];

        /// The label used in log lines and frame file names.
        pub fn name(&self) -> &'static str {
            match self {
                Comparator::Simple => "simple",
                Comparator::Hsv => "hsv",
                Comparator::Step => "step_hsv",
            }
        }

        /// Returns true when `a` sorts after `b`.
        #[inline]
        pub fn greater_than(&self, a: &Pixel, b: &Pixel) -> bool {
            match self {
                Comparator::Simple => simple_greater_than(a, b),
                Comparator::Hsv => hsv_greater_than(a, b),
                Comparator::Step => step_greater_than(a, b),
            }
        }
    }

    fn simple_greater_than(a: &Pixel, b: &Pixel) -> bool {
        if a.red != b.red {
            return a.red > b.red;
        }
        if a.green != b.green {
            return a.green > b.green;
        }
        a.blue > b.blue
    }

    fn hsv_greater_than(a: &Pixel, b: &Pixel) -> bool {
        if a.hue() > b.hue() {
            return true;
        } else if a.hue() < b.hue() {
            return false;
        }
        if a.saturation() > b.saturation() {
            return true;
        } else if a.saturation() < b.saturation() {
            return false;
        }
        a.value() > b.value()
    }

    fn step_greater_than(a: &Pixel, b: &Pixel) -> bool {
        if a.hue() > b.hue() {
            return true;
        }
        // Raw hue above, bucketed hue here.
        if a.hue_bucket() < b.hue_bucket() {
            return false;
        }
        if a.luminance_bucket() != b.luminance_bucket() {
            return a.luminance_bucket() > b.luminance_bucket();
        }
        a.value_bucket() > b.value_bucket()
    }

    impl fmt::Display for Comparator {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    impl FromStr for Comparator {
        type Err = String;

        fn from_str(name: &str) -> Result<Self, Self::Err> {
            Comparator::ALL
                .into_iter()
                .find(|comparator| comparator.name() == name)
                .ok_or_else(|| format!("unknown comparator '{name}'"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::comparator::*;
    use crate::core_modules::pixel::pixel::Pixel;

    fn rgb(red: u16, green: u16, blue: u16) -> Pixel {
        Pixel::new(red, green, blue, 0, 0)
    }

    #[test]
    fn simple_cascades_red_green_blue() {
        let cmp = Comparator::Simple;
        assert!(cmp.greater_than(&rgb(2, 0, 0), &rgb(1, 9, 9)));
        assert!(!cmp.greater_than(&rgb(1, 9, 9), &rgb(2, 0, 0)));
        assert!(cmp.greater_than(&rgb(1, 2, 0), &rgb(1, 1, 9)));
        assert!(cmp.greater_than(&rgb(1, 1, 2), &rgb(1, 1, 1)));
    }

    #[test]
    fn ties_are_not_greater() {
        let pixel = rgb(40, 50, 60);
        for comparator in Comparator::ALL {
            assert!(!comparator.greater_than(&pixel, &pixel), "{comparator}");
        }
    }

    #[test]
    fn hsv_orders_by_hue_first() {
        let cmp = Comparator::Hsv;
        let red = rgb(255, 0, 0);
        let green = rgb(0, 255, 0);
        let dim_green = rgb(0, 100, 0);
        assert!(cmp.greater_than(&green, &red));
        assert!(!cmp.greater_than(&red, &green));
        // Same hue and saturation: value decides.
        assert!(cmp.greater_than(&green, &dim_green));
    }

    #[test]
    fn hsv_uses_saturation_before_value() {
        let cmp = Comparator::Hsv;
        let vivid = rgb(255, 0, 0);
        let pale = rgb(255, 128, 128);
        // Both red-hued; the vivid one is more saturated.
        assert_eq!(vivid.hue(), pale.hue());
        assert!(cmp.greater_than(&vivid, &pale));
    }

    #[test]
    fn step_follows_mirrored_buckets_within_one_hue() {
        let cmp = Comparator::Step;

        // Even hue bucket: brighter sorts after dimmer.
        let dim_even = rgb(3000, 0, 0);
        let bright_even = rgb(6000, 0, 0);
        assert_eq!(dim_even.hue(), bright_even.hue());
        assert!(cmp.greater_than(&bright_even, &dim_even));
        assert!(!cmp.greater_than(&dim_even, &bright_even));

        // Odd hue bucket: the mirror makes dimmer sort after brighter.
        let dim_odd = rgb(3000, 10, 0);
        let bright_odd = rgb(6000, 20, 0);
        assert_eq!(dim_odd.hue(), bright_odd.hue());
        assert_eq!(dim_odd.hue_bucket() % 2, 1);
        assert!(cmp.greater_than(&dim_odd, &bright_odd));
        assert!(!cmp.greater_than(&bright_odd, &dim_odd));
    }

    #[test]
    fn step_raw_hue_wins_before_buckets() {
        let cmp = Comparator::Step;
        let red = rgb(255, 0, 0);
        let green = rgb(0, 255, 0);
        assert!(cmp.greater_than(&green, &red));
        assert!(!cmp.greater_than(&red, &green));
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for comparator in Comparator::ALL {
            assert_eq!(comparator.name().parse::<Comparator>(), Ok(comparator));
        }
        assert!("rainbow".parse::<Comparator>().is_err());
    }
}
