use bevy_math::Vec3;

// ============================================================================
// Angle Conventions
// ============================================================================

// Euler angles are stored in a Vec3 as (pitch, yaw, roll), in degrees.
// Z is up; yaw 0 faces +X and positive pitch looks down.
pub const PITCH: usize = 0;
pub const YAW: usize = 1;
pub const ROLL: usize = 2;

/// Orthonormal view basis derived from a set of Euler angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

// Convert (pitch, yaw, roll) degrees into forward/right/up vectors.
#[must_use]
pub fn angle_vectors(angles: Vec3) -> Basis {
    let (sp, cp) = angles.x.to_radians().sin_cos();
    let (sy, cy) = angles.y.to_radians().sin_cos();
    let (sr, cr) = angles.z.to_radians().sin_cos();

    Basis {
        forward: Vec3::new(cp * cy, cp * sy, -sp),
        right: Vec3::new((-sr * sp).mul_add(cy, cr * sy), (-sr * sp).mul_add(sy, -(cr * cy)), -sr * cp),
        up: Vec3::new((cr * sp).mul_add(cy, sr * sy), (cr * sp).mul_add(sy, -(sr * cy)), cr * cp),
    }
}

// ============================================================================
// Interpolation
// ============================================================================

#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (b - a).mul_add(t, a)
}

// Component-wise linear interpolation.
#[must_use]
pub fn lerp_vec(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

// Signed shortest difference from `from` to `to`, in (-180, 180].
#[must_use]
pub fn angle_delta(from: f32, to: f32) -> f32 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

// Interpolate each angle along the shortest arc so crossing 0/360 does not spin the long way.
#[must_use]
pub fn lerp_angles(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(
        angle_delta(a.x, b.x).mul_add(t, a.x),
        angle_delta(a.y, b.y).mul_add(t, a.y),
        angle_delta(a.z, b.z).mul_add(t, a.z),
    )
}

// ============================================================================
// Clamping
// ============================================================================

// Clamp an optional setting into range, falling back to `default` when unset or NaN.
#[must_use]
pub fn clamp_or_default(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    value.filter(|v| !v.is_nan()).unwrap_or(default).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_yaw_zero_faces_positive_x() {
        let basis = angle_vectors(Vec3::ZERO);
        assert!(approx(basis.forward, Vec3::X));
        assert!(approx(basis.right, Vec3::NEG_Y));
        assert!(approx(basis.up, Vec3::Z));
    }

    #[test]
    fn test_yaw_ninety_faces_positive_y() {
        let basis = angle_vectors(Vec3::new(0.0, 90.0, 0.0));
        assert!(approx(basis.forward, Vec3::Y));
        assert!(approx(basis.right, Vec3::X));
    }

    #[test]
    fn test_positive_pitch_looks_down() {
        let basis = angle_vectors(Vec3::new(30.0, 0.0, 0.0));
        assert!(basis.forward.z < 0.0);
        assert!((basis.forward.length() - 1.0).abs() < 1e-5);
        assert!(basis.forward.dot(basis.up).abs() < 1e-5);
    }

    #[test]
    fn test_angle_delta_wraps() {
        assert!((angle_delta(350.0, 10.0) - 20.0).abs() < 1e-4);
        assert!((angle_delta(10.0, 350.0) + 20.0).abs() < 1e-4);
        assert!((angle_delta(0.0, 180.0) - 180.0).abs() < 1e-4);
        assert!(angle_delta(-90.0, 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_lerp_angles_takes_short_arc() {
        let halfway = lerp_angles(Vec3::new(0.0, 350.0, 0.0), Vec3::new(0.0, 10.0, 0.0), 0.5);
        assert!(angle_delta(halfway.y, 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_lerp_vec_endpoints() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 8.0, 0.5);
        assert_eq!(lerp_vec(a, b, 0.0), a);
        assert!(approx(lerp_vec(a, b, 1.0), b));
        assert!(approx(lerp_vec(a, b, 0.5), Vec3::new(-1.5, 5.0, 1.75)));
    }

    #[test]
    fn test_clamp_or_default() {
        assert_eq!(clamp_or_default(None, 64.0, 16.0, 512.0), 64.0);
        assert_eq!(clamp_or_default(Some(f32::NAN), 64.0, 16.0, 512.0), 64.0);
        assert_eq!(clamp_or_default(Some(-5.0), 64.0, 16.0, 512.0), 16.0);
        assert_eq!(clamp_or_default(Some(f32::INFINITY), 64.0, 16.0, 512.0), 512.0);
    }
}
