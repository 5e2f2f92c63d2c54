use bevy_ecs::prelude::Entity;
use bevy_math::Vec3;

use crate::{
    collision::{ContentFlags, Trace},
    constants::{AIM_TRACE_RANGE, PHYSICS_EPSILON},
    geometry::angle_vectors,
};

// ============================================================================
// Aim Corrector
// ============================================================================

// Point the player is looking at: first shootable surface along the view, or the end of range.
#[must_use]
pub fn compute_aim_target<T: Trace + ?Sized>(tracer: &T, eye: Vec3, view_angles: Vec3, ignore: Option<Entity>) -> Vec3 {
    let forward = angle_vectors(view_angles).forward;
    tracer
        .trace_line(eye, eye + forward * AIM_TRACE_RANGE, ignore, ContentFlags::MASK_SHOT)
        .end_position
}

// Unit direction from the firing start to the aim target; keeps `direction` when the two coincide.
#[must_use]
pub fn corrected_aim_direction(start: Vec3, aim_target: Vec3, direction: Vec3) -> Vec3 {
    let to_target = aim_target - start;
    let length = to_target.length();
    if length <= PHYSICS_EPSILON {
        return direction;
    }
    to_target / length
}
