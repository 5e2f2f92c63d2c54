use serde::{Deserialize, Serialize};

use crate::{constants::*, geometry::clamp_or_default};

// ============================================================================
// Camera Settings
// ============================================================================

// Effective camera parameters for one tick, every field already within its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub distance: f32,
    pub height: f32,
    pub lateral: f32,
    pub smoothing: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}

impl CameraSettings {
    // Unset values take their defaults, out-of-range values are clamped.
    #[must_use]
    pub fn resolve(distance: Option<f32>, height: Option<f32>, lateral: Option<f32>, smoothing: Option<f32>) -> Self {
        Self {
            distance: clamp_or_default(distance, CAMERA_DISTANCE_DEFAULT, CAMERA_DISTANCE_MIN, CAMERA_DISTANCE_MAX),
            height: clamp_or_default(height, CAMERA_HEIGHT_DEFAULT, CAMERA_HEIGHT_MIN, CAMERA_HEIGHT_MAX),
            lateral: clamp_or_default(lateral, CAMERA_LATERAL_DEFAULT, CAMERA_LATERAL_MIN, CAMERA_LATERAL_MAX),
            smoothing: clamp_or_default(
                smoothing,
                CAMERA_SMOOTHING_DEFAULT,
                CAMERA_SMOOTHING_MIN,
                CAMERA_SMOOTHING_MAX,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(settings: &CameraSettings) -> bool {
        (CAMERA_DISTANCE_MIN..=CAMERA_DISTANCE_MAX).contains(&settings.distance)
            && (CAMERA_HEIGHT_MIN..=CAMERA_HEIGHT_MAX).contains(&settings.height)
            && (CAMERA_LATERAL_MIN..=CAMERA_LATERAL_MAX).contains(&settings.lateral)
            && (CAMERA_SMOOTHING_MIN..=CAMERA_SMOOTHING_MAX).contains(&settings.smoothing)
    }

    #[test]
    fn test_defaults() {
        let settings = CameraSettings::default();
        assert_eq!(settings.distance, 64.0);
        assert_eq!(settings.height, 0.0);
        assert_eq!(settings.lateral, 0.0);
        assert_eq!(settings.smoothing, 0.5);
    }

    #[test]
    fn test_extremes_are_clamped() {
        let samples = [
            f32::NEG_INFINITY,
            -1.0e9,
            -513.0,
            -129.0,
            -65.0,
            -1.0,
            0.0,
            0.25,
            1.5,
            15.0,
            129.0,
            600.0,
            1.0e9,
            f32::INFINITY,
            f32::NAN,
        ];
        for &value in &samples {
            let settings = CameraSettings::resolve(Some(value), Some(value), Some(value), Some(value));
            assert!(in_range(&settings), "{value} produced {settings:?}");
        }
    }

    #[test]
    fn test_bounds() {
        let low = CameraSettings::resolve(Some(0.0), Some(-1000.0), Some(-1000.0), Some(-2.0));
        assert_eq!(low.distance, 16.0);
        assert_eq!(low.height, -64.0);
        assert_eq!(low.lateral, -128.0);
        assert_eq!(low.smoothing, 0.0);

        let high = CameraSettings::resolve(Some(9000.0), Some(1000.0), Some(1000.0), Some(2.0));
        assert_eq!(high.distance, 512.0);
        assert_eq!(high.height, 128.0);
        assert_eq!(high.lateral, 128.0);
        assert_eq!(high.smoothing, 1.0);
    }
}
