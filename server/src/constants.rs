use bevy::math::Vec3;

// ============================================================================
// Server Constants
// ============================================================================

// Simulation ticks per second
pub const SERVER_LOOP_FREQUENCY: u64 = 40;

// Maximum live world entities (players, proxies, anything with a pose)
pub const MAX_ENTITIES: usize = 1024;

// First-person model shown for the default weapon
pub const BLASTER_VIEW_MODEL: u16 = 12;

// ============================================================================
// Arena Geometry (world units, Z up)
// ============================================================================

pub const ARENA_HALF_SIZE: f32 = 512.0;
pub const ARENA_WALL_THICKNESS: f32 = 16.0;
pub const ARENA_WALL_HEIGHT: f32 = 256.0;
pub const ARENA_SKY_THICKNESS: f32 = 16.0;
pub const ARENA_PILLAR_HALF_SIZE: f32 = 32.0;

// Player origins sit 24 units above the floor so the hull rests on it
pub const SPAWN_POINTS: [Vec3; 4] = [
    Vec3::new(-256.0, -256.0, 24.0),
    Vec3::new(256.0, -256.0, 24.0),
    Vec3::new(256.0, 256.0, 24.0),
    Vec3::new(-256.0, 256.0, 24.0),
];
