use bevy_math::Vec3;

// ============================================================================
// Floating-Point Comparisons
// ============================================================================

// Small value for floating-point comparisons (near-zero checks, division guards).
pub const PHYSICS_EPSILON: f32 = 1e-6;

// ============================================================================
// Player
// ============================================================================

// Hull dimensions (world units)
pub const PLAYER_MINS: Vec3 = Vec3::new(-16.0, -16.0, -24.0);
pub const PLAYER_MAXS: Vec3 = Vec3::new(16.0, 16.0, 32.0);
pub const PLAYER_EYE_HEIGHT: f32 = 22.0;
pub const PLAYER_START_HEALTH: i32 = 100;

// Model index drawn for player bodies (render proxies use it as well)
pub const PLAYER_MODEL_INDEX: u16 = 255;

// ============================================================================
// Third-Person Camera Settings
// ============================================================================

// Distance behind the player
pub const CAMERA_DISTANCE_DEFAULT: f32 = 64.0;
pub const CAMERA_DISTANCE_MIN: f32 = 16.0;
pub const CAMERA_DISTANCE_MAX: f32 = 512.0;

// Vertical offset added after the distance is applied
pub const CAMERA_HEIGHT_DEFAULT: f32 = 0.0;
pub const CAMERA_HEIGHT_MIN: f32 = -64.0;
pub const CAMERA_HEIGHT_MAX: f32 = 128.0;

// Lateral (over the shoulder) offset along the right vector
pub const CAMERA_LATERAL_DEFAULT: f32 = 0.0;
pub const CAMERA_LATERAL_MIN: f32 = -128.0;
pub const CAMERA_LATERAL_MAX: f32 = 128.0;

// Interpolation weight per tick (1.0 snaps, 0.0 freezes)
pub const CAMERA_SMOOTHING_DEFAULT: f32 = 0.5;
pub const CAMERA_SMOOTHING_MIN: f32 = 0.0;
pub const CAMERA_SMOOTHING_MAX: f32 = 1.0;

// ============================================================================
// Camera Collision
// ============================================================================

// Obstructions closer than this collapse the camera onto the eye
pub const CAMERA_MIN_DISTANCE: f32 = 8.0;

// Distance the camera is pushed away from a hit surface
pub const CAMERA_PULLBACK: f32 = 8.0;

// Secondary trace from the camera back toward the eye
pub const SKY_PROBE_LENGTH: f32 = 64.0;
// Fraction of the camera-to-eye distance covered when sky is visible
pub const SKY_RETREAT_FRACTION: f32 = 0.6;

// Horizontal probes cast around the resolved camera position
pub const WALL_PROBE_COUNT: usize = 8;
pub const WALL_PROBE_LENGTH: f32 = 12.0;

// ============================================================================
// Aiming
// ============================================================================

// Range of the aim trace from the eye along the view direction
pub const AIM_TRACE_RANGE: f32 = 8192.0;
