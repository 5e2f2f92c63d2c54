use bevy::prelude::*;
use tracing::{debug, info, warn};

use super::proxy::{destroy_proxy, ensure_proxy, hide_controller, linked_proxy, register_entity, sync_proxy};
use crate::resources::CameraCvars;
use common::{
    camera::{compute_aim_target, corrected_aim_direction, desired_camera_position, resolve_camera},
    collision::CollisionWorld,
    components::{PersistedView, PlayerControl, Pose},
    geometry::{lerp_angles, lerp_vec},
};

// Outcome of one third-person tick for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraTick {
    // Mode off, or the player is missing, dead, or spectating; nothing was touched
    Inactive,
    Active,
    // Eligible, but the proxy could not be created; the player stays in first person
    Aborted,
}

fn third_person_enabled(world: &World) -> bool {
    world.get_resource::<CameraCvars>().is_some_and(|cvars| cvars.thirdperson)
}

#[must_use]
pub fn is_eligible(world: &World, player: Entity) -> bool {
    third_person_enabled(world)
        && world
            .get::<PlayerControl>(player)
            .is_some_and(|control| control.is_alive() && !control.spectator)
}

// ============================================================================
// Camera Positioner
// ============================================================================

/// Run one third-person tick for `player` if the mode is on and the player can use it.
///
/// Keeps the render proxy in sync, places the camera behind the eye without letting it
/// sink into geometry, smooths the stored view offset and angles toward the new values,
/// caches the aim target for weapon fire, and re-registers the controller. Ineligible
/// players are left untouched, including any proxy they still have.
pub fn activate_if_eligible(world: &mut World, player: Entity) -> CameraTick {
    if !is_eligible(world, player) {
        return CameraTick::Inactive;
    }

    if let Err(e) = ensure_proxy(world, player) {
        warn!("third-person tick aborted for {}: {}", player, e);
        return CameraTick::Aborted;
    }
    sync_proxy(world, player);
    hide_controller(world, player);

    let settings = world.resource::<CameraCvars>().settings();
    let (Some(pose), Some(control)) = (world.get::<Pose>(player).copied(), world.get::<PlayerControl>(player).copied())
    else {
        return CameraTick::Aborted;
    };

    let eye = pose.origin + Vec3::Z * control.eye_height;
    let desired = desired_camera_position(eye, control.view_angles, &settings);

    let collision = world.resource::<CollisionWorld>();
    let camera = resolve_camera(collision, eye, desired, Some(player));
    let aim_target = compute_aim_target(collision, eye, control.view_angles, Some(player));

    let target_offset = camera - pose.origin;
    let previous = world.get::<PersistedView>(player).copied().unwrap_or_default();
    let view = PersistedView {
        view_offset: lerp_vec(previous.view_offset, target_offset, settings.smoothing),
        view_angles: lerp_angles(previous.view_angles, control.view_angles, settings.smoothing),
        aim_target,
    };
    world.entity_mut(player).insert(view);

    register_entity(world, player);

    debug!(
        "{} camera at {} (desired {}), offset {}, aim {}",
        player, camera, desired, view.view_offset, aim_target
    );
    CameraTick::Active
}

// ============================================================================
// Teardown and Toggle
// ============================================================================

// Drop the proxy, restore the controller's visibility and weapon, and reset the view state.
pub fn teardown(world: &mut World, player: Entity) {
    destroy_proxy(world, player);
    if let Some(mut view) = world.get_mut::<PersistedView>(player) {
        view.clear();
    }
}

/// Flip the global third-person setting on behalf of `player`.
///
/// Disabling also tears down the issuing player's third-person state right away; other
/// players are torn down by the end-of-frame pass. Returns the new setting, or `None`
/// when `player` is not a player.
pub fn toggle_command(world: &mut World, player: Entity) -> Option<bool> {
    world.get::<PlayerControl>(player)?;

    let enabled = {
        let mut cvars = world.resource_mut::<CameraCvars>();
        cvars.thirdperson = !cvars.thirdperson;
        cvars.thirdperson
    };

    if !enabled {
        teardown(world, player);
    }

    info!("third-person view {} by {}", if enabled { "enabled" } else { "disabled" }, player);
    Some(enabled)
}

// ============================================================================
// Aim Correction
// ============================================================================

// Point `direction` from `start` at the cached aim target while `player` is in third person.
// Players without a live proxy (aborted tick, spectating, dead) fire along their own view.
pub fn correct_aim_direction(world: &World, player: Entity, start: Vec3, direction: &mut Vec3) {
    if !is_eligible(world, player) || linked_proxy(world, player).is_none() {
        return;
    }
    let Some(view) = world.get::<PersistedView>(player) else {
        return;
    };
    *direction = corrected_aim_direction(start, view.aim_target, *direction);
}
