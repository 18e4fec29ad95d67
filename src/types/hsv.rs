//! HSV conversion and adjustment.
//!
//! Hue is stored normalized to `[0, 1)` rather than degrees, matching the
//! convention used by the recolor pipeline.

use palette::{Hsv as PaletteHsv, IntoColor, Srgb};

use crate::types::Colour;

/// An HSV triple: hue in `[0, 1)` (cyclic), saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert an RGB colour to HSV. Alpha is ignored.
    pub fn from_colour(colour: Colour) -> Self {
        let rgb: Srgb<f32> = Srgb::new(
            colour.r as f32 / 255.0,
            colour.g as f32 / 255.0,
            colour.b as f32 / 255.0,
        );
        let hsv: PaletteHsv = rgb.into_color();

        Self {
            h: hsv.hue.into_positive_degrees() / 360.0,
            s: hsv.saturation,
            v: hsv.value,
        }
    }

    /// Convert back to an opaque RGB colour, rounding to the nearest
    /// channel value.
    pub fn to_colour(self) -> Colour {
        let hsv = PaletteHsv::new(self.h * 360.0, self.s, self.v);
        let rgb: Srgb<f32> = hsv.into_color();

        Colour::rgb(
            (rgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (rgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (rgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }
}

impl Colour {
    /// Scale saturation and value in HSV space, clamping each to `[0, 1]`.
    ///
    /// Alpha is carried through unchanged.
    pub fn adjust_hsv(self, saturation_factor: f32, brightness_factor: f32) -> Colour {
        let mut hsv = Hsv::from_colour(self);
        hsv.s = (hsv.s * saturation_factor).clamp(0.0, 1.0);
        hsv.v = (hsv.v * brightness_factor).clamp(0.0, 1.0);

        let mut out = hsv.to_colour();
        out.a = self.a;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Colour, b: Colour) {
        // 8-bit HSV round-trips are only exact to within one step per channel
        assert!(
            (a.r as i16 - b.r as i16).abs() <= 1
                && (a.g as i16 - b.g as i16).abs() <= 1
                && (a.b as i16 - b.b as i16).abs() <= 1,
            "{} not within ±1 of {}",
            a,
            b
        );
    }

    #[test]
    fn test_primary_hues() {
        let red = Hsv::from_colour(Colour::rgb(255, 0, 0));
        assert!(red.h.abs() < 1e-6);
        assert_eq!(red.s, 1.0);
        assert_eq!(red.v, 1.0);

        let green = Hsv::from_colour(Colour::rgb(0, 255, 0));
        assert!((green.h - 1.0 / 3.0).abs() < 1e-4);

        let blue = Hsv::from_colour(Colour::rgb(0, 0, 255));
        assert!((blue.h - 2.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_grey_has_no_saturation() {
        let grey = Hsv::from_colour(Colour::rgb(128, 128, 128));
        assert_eq!(grey.s, 0.0);
        assert!((grey.v - 128.0 / 255.0).abs() < 1e-4);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for c in [
            Colour::rgb(200, 100, 50),
            Colour::rgb(12, 240, 133),
            Colour::rgb(255, 69, 0),
            Colour::rgb(1, 2, 3),
        ] {
            assert_close(Hsv::from_colour(c).to_colour(), c);
        }
    }

    #[test]
    fn test_adjust_identity() {
        for c in [
            Colour::rgb(200, 100, 50),
            Colour::rgb(0, 0, 0),
            Colour::rgb(255, 255, 255),
        ] {
            assert_close(c.adjust_hsv(1.0, 1.0), c);
        }
    }

    #[test]
    fn test_adjust_desaturate_to_grey() {
        let c = Colour::rgb(200, 100, 50).adjust_hsv(0.0, 1.0);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn test_adjust_darken() {
        let c = Colour::rgb(200, 100, 50).adjust_hsv(1.0, 0.5);
        assert!(c.r < 200);
        assert_close(c, Colour::rgb(100, 50, 25));
    }

    #[test]
    fn test_adjust_clamps_saturation() {
        // Factor above 1.0 pushes saturation to the cap, not past it
        let c = Colour::rgb(255, 128, 128).adjust_hsv(10.0, 1.0);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 0);
    }

    #[test]
    fn test_adjust_preserves_alpha() {
        let c = Colour::new(200, 100, 50, 77).adjust_hsv(1.2, 0.9);
        assert_eq!(c.a, 77);
    }
}
