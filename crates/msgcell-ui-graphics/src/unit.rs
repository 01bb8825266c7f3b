//! Unit types: pixel scale and pixel alignment

use crate::Size;

/// Device pixels per layout unit. Sizes are aligned up to multiples of
/// `1 / scale` so that views never straddle a physical pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelScale(pub f32);

impl PixelScale {
    pub const ONE: PixelScale = PixelScale(1.0);

    /// Rounds `value` up to the nearest pixel boundary.
    pub fn ceil(&self, value: f32) -> f32 {
        if self.0 <= 0.0 || !self.0.is_finite() {
            return value.ceil();
        }
        // Tolerate float noise so that already-aligned values stay put.
        let scaled = value * self.0;
        let rounded = scaled.round();
        if (scaled - rounded).abs() < 1e-3 {
            rounded / self.0
        } else {
            scaled.ceil() / self.0
        }
    }

    /// Rounds `value` to the nearest pixel boundary.
    pub fn round(&self, value: f32) -> f32 {
        if self.0 <= 0.0 || !self.0.is_finite() {
            return value.round();
        }
        (value * self.0).round() / self.0
    }

    pub fn ceil_size(&self, size: Size) -> Size {
        Size::new(self.ceil(size.width), self.ceil(size.height))
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_aligns_to_device_pixels() {
        let scale = PixelScale(2.0);
        assert_eq!(scale.ceil(10.1), 10.5);
        assert_eq!(scale.ceil(10.5), 10.5);
        assert_eq!(scale.ceil(10.0), 10.0);

        let triple = PixelScale(3.0);
        assert_eq!(triple.ceil(1.0 / 3.0 + 1e-5), 1.0 / 3.0);
    }

    #[test]
    fn ceil_size_is_idempotent() {
        let scale = PixelScale(3.0);
        let once = scale.ceil_size(Size::new(12.07, 33.41));
        assert_eq!(scale.ceil_size(once), once);
        assert!(once.width >= 12.07 && once.height >= 33.41);
    }

    #[test]
    fn invalid_scale_falls_back_to_whole_points() {
        assert_eq!(PixelScale(0.0).ceil(4.2), 5.0);
        assert_eq!(PixelScale(f32::NAN).round(4.4), 4.0);
    }
}
