//! Content and surface flags used to filter traces and describe what was hit.

use serde::{Deserialize, Serialize};

/// What kind of volume a brush or entity occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContentFlags(pub u32);

impl ContentFlags {
    pub const EMPTY: Self = Self(0);
    pub const SOLID: Self = Self(1 << 0);
    pub const WINDOW: Self = Self(1 << 1);
    pub const WATER: Self = Self(1 << 2);
    pub const PLAYER: Self = Self(1 << 3);
    pub const MONSTER: Self = Self(1 << 4);
    pub const DEAD_MONSTER: Self = Self(1 << 5);

    /// World geometry that blocks movement and the camera.
    pub const MASK_SOLID: Self = Self(Self::SOLID.0 | Self::WINDOW.0);

    /// Everything a bullet can hit.
    pub const MASK_SHOT: Self =
        Self(Self::SOLID.0 | Self::PLAYER.0 | Self::MONSTER.0 | Self::WINDOW.0 | Self::DEAD_MONSTER.0);

    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for ContentFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Properties of the surface a trace stopped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SurfaceFlags(pub u32);

impl SurfaceFlags {
    pub const NONE: Self = Self(0);
    pub const LIGHT: Self = Self(1 << 0);
    pub const SLICK: Self = Self(1 << 1);
    /// Open sky. A camera that can see it is outside the playable volume.
    pub const SKY: Self = Self(1 << 2);
    pub const WARP: Self = Self(1 << 3);
    pub const NO_DRAW: Self = Self(1 << 7);

    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for SurfaceFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks() {
        assert!(ContentFlags::MASK_SOLID.contains(ContentFlags::SOLID));
        assert!(!ContentFlags::MASK_SOLID.intersects(ContentFlags::PLAYER));
        assert!(ContentFlags::MASK_SHOT.contains(ContentFlags::PLAYER | ContentFlags::SOLID));
        assert!(!ContentFlags::MASK_SHOT.intersects(ContentFlags::WATER));
    }

    #[test]
    fn test_surface_flags() {
        let flags = SurfaceFlags::SKY | SurfaceFlags::NO_DRAW;
        assert!(flags.contains(SurfaceFlags::SKY));
        assert!(!SurfaceFlags::NONE.contains(SurfaceFlags::SKY));
    }
}
