use bevy_ecs::prelude::Entity;
use bevy_math::Vec3;
use std::f32::consts::TAU;

use super::settings::CameraSettings;
use crate::{
    collision::{ContentFlags, SurfaceFlags, Trace},
    constants::*,
    geometry::angle_vectors,
};

// Ideal camera spot: behind the eye along the view, shifted sideways, then raised.
#[must_use]
pub fn desired_camera_position(eye: Vec3, view_angles: Vec3, settings: &CameraSettings) -> Vec3 {
    let basis = angle_vectors(view_angles);
    let mut desired = eye - basis.forward * settings.distance + basis.right * settings.lateral;
    desired.z += settings.height;
    desired
}

// ============================================================================
// Camera Collision Resolver
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Placement {
    Clear(Vec3),
    PulledBack(Vec3),
    Collapsed,
}

// Trace from the eye to `target`; keep it, pull back off the hit surface, or collapse
// onto the eye when the obstruction is too close.
fn occlude<T: Trace + ?Sized>(tracer: &T, eye: Vec3, target: Vec3, ignore: Option<Entity>) -> Placement {
    let trace = tracer.trace_line(eye, target, ignore, ContentFlags::MASK_SOLID);
    if !trace.hit_something() {
        return Placement::Clear(target);
    }

    if trace.end_position.distance(eye) < CAMERA_MIN_DISTANCE {
        return Placement::Collapsed;
    }

    Placement::PulledBack(trace.end_position + trace.normal_or_zero() * CAMERA_PULLBACK)
}

// True when a short trace from the camera back toward the eye lands on sky.
fn sees_sky<T: Trace + ?Sized>(tracer: &T, camera: Vec3, eye: Vec3, ignore: Option<Entity>) -> bool {
    let toward_eye = (eye - camera).normalize_or_zero();
    if toward_eye == Vec3::ZERO {
        return false;
    }

    let trace = tracer.trace_line(camera, camera + toward_eye * SKY_PROBE_LENGTH, ignore, ContentFlags::MASK_SOLID);
    trace.hit_something() && trace.hit_surface.contains(SurfaceFlags::SKY)
}

// Averaged push away from nearby walls found by horizontal probes around the camera.
fn wall_probe_correction<T: Trace + ?Sized>(tracer: &T, camera: Vec3, ignore: Option<Entity>) -> Vec3 {
    let (sum, hits) = (0..WALL_PROBE_COUNT)
        .filter_map(|i| {
            let angle = TAU * i as f32 / WALL_PROBE_COUNT as f32;
            let (sin, cos) = angle.sin_cos();
            let end = camera + Vec3::new(cos, sin, 0.0) * WALL_PROBE_LENGTH;
            let trace = tracer.trace_line(camera, end, ignore, ContentFlags::MASK_SOLID);
            trace
                .hit_something()
                .then(|| trace.normal_or_zero() * (1.0 - trace.fraction))
        })
        .fold((Vec3::ZERO, 0_u32), |(sum, hits), push| (sum + push, hits + 1));

    if hits == 0 {
        return Vec3::ZERO;
    }

    sum / hits as f32 * CAMERA_PULLBACK
}

/// Compute a camera position between `eye` and `desired` that does not rest inside solid
/// geometry.
///
/// Runs the primary occlusion trace, retreats toward the eye if the camera can see sky,
/// and finally nudges the camera away from walls found by [`WALL_PROBE_COUNT`] short
/// horizontal probes, unless that nudge would undo a sky retreat. When the obstruction is
/// closer than [`CAMERA_MIN_DISTANCE`], the camera collapses onto the eye and no further
/// adjustment is made.
///
/// `ignore` is the controlling entity; it and anything it owns are invisible to the traces.
#[must_use]
pub fn resolve_camera<T: Trace + ?Sized>(tracer: &T, eye: Vec3, desired: Vec3, ignore: Option<Entity>) -> Vec3 {
    let mut camera = match occlude(tracer, eye, desired, ignore) {
        Placement::Collapsed => return eye,
        Placement::Clear(position) | Placement::PulledBack(position) => position,
    };

    let mut before_retreat = None;
    if sees_sky(tracer, camera, eye, ignore) {
        before_retreat = Some(camera);
        let retreat = camera.lerp(eye, SKY_RETREAT_FRACTION);
        camera = match occlude(tracer, eye, retreat, ignore) {
            Placement::Collapsed => return eye,
            Placement::Clear(position) | Placement::PulledBack(position) => position,
        };
    }

    let nudged = camera + wall_probe_correction(tracer, camera, ignore);
    // A sky retreat must leave the camera closer to the eye than it started
    match before_retreat {
        Some(start) if nudged.distance(eye) >= start.distance(eye) => camera,
        _ => nudged,
    }
}
