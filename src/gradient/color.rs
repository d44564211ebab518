use std::fmt;
use std::str::FromStr;

use super::GradientError;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` or `#RRGGBB` (either case).
    ///
    /// # Errors
    /// Returns [`GradientError::InvalidColor`] unless the input is exactly six
    /// hex digits after an optional leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, GradientError> {
        let invalid = || GradientError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').unwrap_or_else(|| s.trim());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Linearly interpolate `steps` colors from `start` to `end`, inclusive.
///
/// Each channel is `start + (end - start) * i / (steps - 1)` rounded to the
/// nearest integer, so the first color is exactly `start` and the last is
/// exactly `end`.
///
/// # Errors
/// Returns [`GradientError::TooFewSteps`] when `steps < 2`; a ramp needs
/// two endpoints.
///
/// # Example
///
/// ```
/// use linetint::gradient::{Rgb, interpolate_colors};
///
/// let black = Rgb::new(0, 0, 0);
/// let white = Rgb::new(255, 255, 255);
/// let ramp = interpolate_colors(black, white, 3).unwrap();
/// assert_eq!(ramp[1].to_hex(), "#808080");
/// ```
pub fn interpolate_colors(start: Rgb, end: Rgb, steps: usize) -> Result<Vec<Rgb>, GradientError> {
    if steps < 2 {
        return Err(GradientError::TooFewSteps { steps });
    }
    let last = steps - 1;
    let colors = (0..steps)
        .map(|i| {
            // Step counts are line counts; far below f64's exact integer range.
            #[allow(clippy::cast_precision_loss)]
            let ratio = i as f64 / last as f64;
            let [r, g, b] = lerp_channels(start.channels(), end.channels(), ratio);
            Rgb::new(r, g, b)
        })
        .collect();
    Ok(colors)
}

fn lerp_channels(start: [u8; 3], end: [u8; 3], ratio: f64) -> [u8; 3] {
    let mut out = [0u8; 3];
    for (slot, (s, e)) in out.iter_mut().zip(start.into_iter().zip(end)) {
        let s = f64::from(s);
        let e = f64::from(e);
        // Result lies between two u8 values, so it always fits.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            *slot = (s + (e - s) * ratio).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIGHT: Rgb = Rgb::new(0xff, 0xfb, 0xe5);
    const DARK: Rgb = Rgb::new(0xc9, 0x46, 0x4c);

    #[test]
    fn test_from_hex_accepts_leading_hash_and_mixed_case() {
        assert_eq!(Rgb::from_hex("#FFFBE5").unwrap(), LIGHT);
        assert_eq!(Rgb::from_hex("c9464C").unwrap(), DARK);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length_and_non_hex() {
        for bad in ["", "#fff", "#fffbe", "#fffbe5a", "#gggggg", "##fffbe5"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(GradientError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_is_lowercase_with_hash() {
        assert_eq!(LIGHT.to_string(), "#fffbe5");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn test_interpolate_hits_both_endpoints() {
        let ramp = interpolate_colors(LIGHT, DARK, 81).unwrap();
        assert_eq!(ramp.len(), 81);
        assert_eq!(ramp[0], LIGHT);
        assert_eq!(ramp[80], DARK);
    }

    #[test]
    fn test_interpolate_midpoint_rounds_halves_up() {
        // g: 251 + (70 - 251) / 2 = 160.5, b: 229 + (76 - 229) / 2 = 152.5
        let ramp = interpolate_colors(LIGHT, DARK, 81).unwrap();
        assert_eq!(ramp[40].to_hex(), "#e4a199");
    }

    #[test]
    fn test_interpolate_two_steps_is_just_the_endpoints() {
        assert_eq!(interpolate_colors(LIGHT, DARK, 2).unwrap(), vec![LIGHT, DARK]);
    }

    #[test]
    fn test_interpolate_rejects_fewer_than_two_steps() {
        assert_eq!(
            interpolate_colors(LIGHT, DARK, 1),
            Err(GradientError::TooFewSteps { steps: 1 })
        );
        assert_eq!(
            interpolate_colors(LIGHT, DARK, 0),
            Err(GradientError::TooFewSteps { steps: 0 })
        );
    }

    #[test]
    fn test_interpolate_channels_move_monotonically() {
        let ramp = interpolate_colors(LIGHT, DARK, 81).unwrap();
        for pair in ramp.windows(2) {
            assert!(pair[1].r <= pair[0].r);
            assert!(pair[1].g <= pair[0].g);
            assert!(pair[1].b <= pair[0].b);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_rgb() -> impl Strategy<Value = Rgb> {
            any::<[u8; 3]>().prop_map(|[r, g, b]| Rgb::new(r, g, b))
        }

        proptest! {
            #[test]
            fn endpoints_are_exact(start in any_rgb(), end in any_rgb(), steps in 2..500usize) {
                let ramp = interpolate_colors(start, end, steps).unwrap();
                prop_assert_eq!(ramp.len(), steps);
                prop_assert_eq!(ramp[0], start);
                prop_assert_eq!(ramp[steps - 1], end);
            }

            #[test]
            fn constant_ramp_stays_constant(color in any_rgb(), steps in 2..500usize) {
                let ramp = interpolate_colors(color, color, steps).unwrap();
                prop_assert!(ramp.iter().all(|c| *c == color));
            }

            #[test]
            fn hex_display_parses_back(color in any_rgb()) {
                prop_assert_eq!(Rgb::from_hex(&color.to_hex()).unwrap(), color);
            }
        }
    }
}
