/// Horizontal reading direction of the hosting UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }

    /// Converts a physical horizontal delta into a leading-relative one (and
    /// back; the mapping is its own inverse).
    #[inline]
    pub fn correct(self, dx: f32) -> f32 {
        match self {
            LayoutDirection::Ltr => dx,
            LayoutDirection::Rtl => -dx,
        }
    }
}
