use bevy::math::Vec3;

use crate::constants::*;
use common::collision::{Brush, CollisionWorld};

// ============================================================================
// Arena Generation
// ============================================================================

// Walled square room with a sky ceiling and four pillars.
#[must_use]
pub fn generate_arena() -> CollisionWorld {
    let half = ARENA_HALF_SIZE;
    let outer = ARENA_HALF_SIZE + ARENA_WALL_THICKNESS;
    let top = ARENA_WALL_HEIGHT;

    let mut brushes = vec![
        // floor
        Brush::solid(Vec3::new(-outer, -outer, -ARENA_WALL_THICKNESS), Vec3::new(outer, outer, 0.0)),
        // walls: west, east, south, north
        Brush::solid(Vec3::new(-outer, -outer, 0.0), Vec3::new(-half, outer, top)),
        Brush::solid(Vec3::new(half, -outer, 0.0), Vec3::new(outer, outer, top)),
        Brush::solid(Vec3::new(-half, -outer, 0.0), Vec3::new(half, -half, top)),
        Brush::solid(Vec3::new(-half, half, 0.0), Vec3::new(half, outer, top)),
        // open sky over the whole room
        Brush::sky(Vec3::new(-outer, -outer, top), Vec3::new(outer, outer, top + ARENA_SKY_THICKNESS)),
    ];

    let p = ARENA_PILLAR_HALF_SIZE;
    for (x, y) in [(-128.0, 0.0), (128.0, 0.0), (0.0, -128.0), (0.0, 128.0)] {
        brushes.push(Brush::solid(Vec3::new(x - p, y - p, 0.0), Vec3::new(x + p, y + p, top * 0.5)));
    }

    CollisionWorld::new(brushes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::collision::{ContentFlags, SurfaceFlags, Trace};

    #[test]
    fn test_spawn_points_are_clear() {
        let arena = generate_arena();
        for spawn in SPAWN_POINTS {
            let trace = arena.trace_line(spawn, spawn + Vec3::Z * 64.0, None, ContentFlags::MASK_SOLID);
            assert!(!trace.hit_something(), "{spawn} is blocked");
        }
    }

    #[test]
    fn test_ceiling_is_sky() {
        let arena = generate_arena();
        let start = Vec3::new(-256.0, 256.0, 100.0);
        let trace = arena.trace_line(start, start + Vec3::Z * 1000.0, None, ContentFlags::MASK_SOLID);
        assert!(trace.hit_surface.contains(SurfaceFlags::SKY));
    }
}
