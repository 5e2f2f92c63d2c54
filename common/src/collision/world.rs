use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use std::collections::HashMap;

use super::{
    flags::{ContentFlags, SurfaceFlags},
    trace::{Trace, TraceResult},
};
use crate::constants::PHYSICS_EPSILON;

/// Result of a sweep collision test: surface normal and time of impact.
#[derive(Debug, Clone, Copy)]
pub struct Collision {
    pub normal: Vec3,
    pub t: f32,
}

// ============================================================================
// Geometry
// ============================================================================

/// Static axis-aligned world brush.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub mins: Vec3,
    pub maxs: Vec3,
    pub contents: ContentFlags,
    pub surface: SurfaceFlags,
}

impl Brush {
    #[must_use]
    pub const fn solid(mins: Vec3, maxs: Vec3) -> Self {
        Self {
            mins,
            maxs,
            contents: ContentFlags::SOLID,
            surface: SurfaceFlags::NONE,
        }
    }

    #[must_use]
    pub const fn sky(mins: Vec3, maxs: Vec3) -> Self {
        Self {
            mins,
            maxs,
            contents: ContentFlags::SOLID,
            surface: SurfaceFlags::SKY,
        }
    }
}

/// Entity committed to the spatial index, in absolute world bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkedEntity {
    pub absmin: Vec3,
    pub absmax: Vec3,
    pub contents: ContentFlags,
    /// Traces that ignore the owner also pass through this entity.
    pub owner: Option<Entity>,
}

// Swept point vs axis-aligned box; returns collision info if the entry lies within [0,1].
// A point that starts inside the box does not collide with it, so it can always move out.
#[must_use]
pub fn sweep_point_vs_box(start: Vec3, delta: Vec3, mins: Vec3, maxs: Vec3) -> Option<Collision> {
    let mut t_enter = 0.0_f32;
    let mut t_exit = 1.0_f32;
    let mut hit_normal = Vec3::ZERO;

    for axis in 0..3 {
        let dir = delta[axis];
        let origin = start[axis];

        if dir.abs() < PHYSICS_EPSILON {
            if origin < mins[axis] || origin > maxs[axis] {
                return None;
            }
            continue;
        }

        let t1 = (mins[axis] - origin) / dir;
        let t2 = (maxs[axis] - origin) / dir;
        let (t_near, t_far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        if t_near > t_enter {
            t_enter = t_near;
            hit_normal = Vec3::ZERO;
            hit_normal[axis] = if dir > 0.0 { -1.0 } else { 1.0 };
        }
        t_exit = t_exit.min(t_far);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 || t_enter > 1.0 || hit_normal == Vec3::ZERO {
        return None;
    }

    Some(Collision {
        normal: hit_normal,
        t: t_enter.clamp(0.0, 1.0),
    })
}

// ============================================================================
// Collision World
// ============================================================================

// Static brushes plus the spatial index of linked entities.
#[derive(Resource, Debug, Default)]
pub struct CollisionWorld {
    brushes: Vec<Brush>,
    entities: HashMap<Entity, LinkedEntity>,
}

impl CollisionWorld {
    #[must_use]
    pub fn new(brushes: Vec<Brush>) -> Self {
        Self {
            brushes,
            entities: HashMap::new(),
        }
    }

    pub fn add_brush(&mut self, brush: Brush) {
        self.brushes.push(brush);
    }

    #[must_use]
    pub fn brushes(&self) -> &[Brush] {
        &self.brushes
    }

    // Commit an entity's current bounds, replacing any earlier entry.
    pub fn link(&mut self, entity: Entity, linked: LinkedEntity) {
        self.entities.insert(entity, linked);
    }

    pub fn unlink(&mut self, entity: Entity) -> bool {
        self.entities.remove(&entity).is_some()
    }

    #[must_use]
    pub fn linked(&self, entity: Entity) -> Option<&LinkedEntity> {
        self.entities.get(&entity)
    }

    #[must_use]
    pub fn linked_count(&self) -> usize {
        self.entities.len()
    }

    fn skips(linked: &LinkedEntity, entity: Entity, ignore: Option<Entity>) -> bool {
        ignore.is_some_and(|ignored| ignored == entity || linked.owner == Some(ignored))
    }
}

impl Trace for CollisionWorld {
    fn trace_line(&self, start: Vec3, end: Vec3, ignore: Option<Entity>, mask: ContentFlags) -> TraceResult {
        let delta = end - start;
        let mut best = TraceResult::clear(end);

        for brush in self.brushes.iter().filter(|brush| brush.contents.intersects(mask)) {
            if let Some(collision) = sweep_point_vs_box(start, delta, brush.mins, brush.maxs)
                && collision.t < best.fraction
            {
                best = TraceResult {
                    fraction: collision.t,
                    end_position: start + delta * collision.t,
                    hit_normal: Some(collision.normal),
                    hit_surface: brush.surface,
                    hit_contents: brush.contents,
                    hit_entity: None,
                };
            }
        }

        for (&entity, linked) in &self.entities {
            if !linked.contents.intersects(mask) || Self::skips(linked, entity, ignore) {
                continue;
            }
            if let Some(collision) = sweep_point_vs_box(start, delta, linked.absmin, linked.absmax)
                && collision.t < best.fraction
            {
                best = TraceResult {
                    fraction: collision.t,
                    end_position: start + delta * collision.t,
                    hit_normal: Some(collision.normal),
                    hit_surface: SurfaceFlags::NONE,
                    hit_contents: linked.contents,
                    hit_entity: Some(entity),
                };
            }
        }

        best
    }
}
