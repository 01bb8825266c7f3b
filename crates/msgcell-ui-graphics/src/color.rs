//! Color representation

/// Linear RGBA, each channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    // Neutral grays used for secondary glyphs such as the reply icon.
    pub const GRAY_25: Color = Color::from_rgb_u8(0xB9, 0xB9, 0xB9);
    pub const GRAY_45: Color = Color::from_rgb_u8(0x86, 0x86, 0x86);
    pub const GRAY_75: Color = Color::from_rgb_u8(0x3B, 0x3B, 0x3B);
}
