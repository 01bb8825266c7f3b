//! Directional corner sets and resolved corner radii.

/// Set of the four directional corners of a rectangle.
///
/// Leading/trailing follow the layout direction, so the same set renders
/// mirrored in right-to-left layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DirectionalCorners(u8);

impl DirectionalCorners {
    pub const NONE: Self = Self(0);
    pub const TOP_LEADING: Self = Self(1 << 0);
    pub const TOP_TRAILING: Self = Self(1 << 1);
    pub const BOTTOM_LEADING: Self = Self(1 << 2);
    pub const BOTTOM_TRAILING: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, corners: DirectionalCorners) {
        self.0 |= corners.0;
    }

    pub fn with(mut self, corners: DirectionalCorners) -> Self {
        self.insert(corners);
        self
    }

    pub fn union(self, other: DirectionalCorners) -> Self {
        Self(self.0 | other.0)
    }

    pub fn contains(&self, corners: DirectionalCorners) -> bool {
        (self.0 & corners.0) == corners.0
    }

    /// Resolves this set of *sharp* corners into concrete radii: sharp corners
    /// get `sharp_radius`, the rest get `rounded_radius`. `is_rtl` maps
    /// leading/trailing onto physical left/right.
    pub fn radii(&self, rounded_radius: f32, sharp_radius: f32, is_rtl: bool) -> CornerRadii {
        let pick = |corner: DirectionalCorners| {
            if self.contains(corner) {
                sharp_radius
            } else {
                rounded_radius
            }
        };
        let (top_left, top_right, bottom_left, bottom_right) = if is_rtl {
            (
                pick(Self::TOP_TRAILING),
                pick(Self::TOP_LEADING),
                pick(Self::BOTTOM_TRAILING),
                pick(Self::BOTTOM_LEADING),
            )
        } else {
            (
                pick(Self::TOP_LEADING),
                pick(Self::TOP_TRAILING),
                pick(Self::BOTTOM_LEADING),
                pick(Self::BOTTOM_TRAILING),
            )
        };
        CornerRadii {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }
}

impl std::ops::BitOr for DirectionalCorners {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Clamps every radius so that it fits into a `width` x `height` box.
    pub fn resolve(&self, width: f32, height: f32) -> CornerRadii {
        let max_width = (width / 2.0).max(0.0);
        let max_height = (height / 2.0).max(0.0);
        let clamp = |radius: f32| radius.clamp(0.0, max_width).min(max_height);
        CornerRadii {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_right: clamp(self.bottom_right),
            bottom_left: clamp(self.bottom_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_and_contains() {
        let corners = DirectionalCorners::TOP_LEADING | DirectionalCorners::BOTTOM_LEADING;
        assert!(corners.contains(DirectionalCorners::TOP_LEADING));
        assert!(!corners.contains(DirectionalCorners::TOP_TRAILING));
        assert!(!corners.contains(DirectionalCorners::ALL));
        assert!(DirectionalCorners::ALL.contains(corners));
        assert!(DirectionalCorners::NONE.is_empty());
    }

    #[test]
    fn radii_mirror_in_rtl() {
        let sharp = DirectionalCorners::TOP_LEADING;
        let ltr = sharp.radii(18.0, 4.0, false);
        assert_eq!(ltr.top_left, 4.0);
        assert_eq!(ltr.top_right, 18.0);

        let rtl = sharp.radii(18.0, 4.0, true);
        assert_eq!(rtl.top_left, 18.0);
        assert_eq!(rtl.top_right, 4.0);
    }

    #[test]
    fn resolve_clamps_to_half_extent() {
        let radii = CornerRadii::uniform(18.0).resolve(20.0, 100.0);
        assert_eq!(radii, CornerRadii::uniform(10.0));
    }
}
