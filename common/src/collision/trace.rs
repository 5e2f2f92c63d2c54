use bevy_ecs::prelude::Entity;
use bevy_math::Vec3;

use super::flags::{ContentFlags, SurfaceFlags};

/// Outcome of a line trace from a start point toward an end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceResult {
    /// 1.0 means the segment was clear, 0.0 means blocked at the start.
    pub fraction: f32,
    pub end_position: Vec3,
    /// Normal of the surface that stopped the trace, `None` when clear.
    pub hit_normal: Option<Vec3>,
    pub hit_surface: SurfaceFlags,
    pub hit_contents: ContentFlags,
    /// Entity that stopped the trace, `None` for world brushes or a clear trace.
    pub hit_entity: Option<Entity>,
}

impl TraceResult {
    #[must_use]
    pub const fn clear(end_position: Vec3) -> Self {
        Self {
            fraction: 1.0,
            end_position,
            hit_normal: None,
            hit_surface: SurfaceFlags::NONE,
            hit_contents: ContentFlags::EMPTY,
            hit_entity: None,
        }
    }

    #[must_use]
    pub const fn hit(fraction: f32, end_position: Vec3, normal: Vec3, surface: SurfaceFlags) -> Self {
        Self {
            fraction,
            end_position,
            hit_normal: Some(normal),
            hit_surface: surface,
            hit_contents: ContentFlags::SOLID,
            hit_entity: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn hit_something(&self) -> bool {
        self.fraction < 1.0
    }

    #[inline]
    #[must_use]
    pub fn normal_or_zero(&self) -> Vec3 {
        self.hit_normal.unwrap_or(Vec3::ZERO)
    }
}

// Blocking line-of-sight query against world geometry and linked entities.
pub trait Trace {
    fn trace_line(&self, start: Vec3, end: Vec3, ignore: Option<Entity>, mask: ContentFlags) -> TraceResult;
}
