use bevy::prelude::*;
use tracing::{debug, info};

use crate::{error::CameraError, resources::EntityBudget};
use common::{
    collision::{CollisionWorld, ContentFlags, LinkedEntity},
    components::*,
    constants::PLAYER_MODEL_INDEX,
    markers::ProxyMarker,
};

// ============================================================================
// Spatial Registration
// ============================================================================

// Commit an entity's current pose and hull to the collision world so traces see it.
// Non-solid entities are removed from the index instead.
pub fn register_entity(world: &mut World, entity: Entity) {
    let (Some(pose), Some(bounds)) = (world.get::<Pose>(entity).copied(), world.get::<BoundingBox>(entity).copied())
    else {
        return;
    };
    let solid = world.get::<Solid>(entity).copied().unwrap_or_default();
    let contents = world.get::<Contents>(entity).map_or(ContentFlags::SOLID, |contents| contents.0);
    let owner = world.get::<RenderProxy>(entity).map(|proxy| proxy.owner);

    let mut collision = world.resource_mut::<CollisionWorld>();
    if solid == Solid::Not {
        collision.unlink(entity);
        return;
    }

    collision.link(
        entity,
        LinkedEntity {
            absmin: pose.origin + bounds.mins,
            absmax: pose.origin + bounds.maxs,
            contents,
            owner,
        },
    );
}

// ============================================================================
// Render Proxy Manager
// ============================================================================

// Proxies stand upright and face where the player looks horizontally.
const fn proxy_angles(view_angles: Vec3) -> Vec3 {
    Vec3::new(0.0, view_angles.y, 0.0)
}

const fn proxy_appearance(appearance: Appearance) -> Appearance {
    Appearance {
        model_index: PLAYER_MODEL_INDEX,
        ..appearance
    }
}

// Live proxy currently linked to `player`, if any.
#[must_use]
pub fn linked_proxy(world: &World, player: Entity) -> Option<Entity> {
    world
        .get::<ProxyLink>(player)
        .and_then(|link| link.0)
        .filter(|&proxy| world.get::<RenderProxy>(proxy).is_some_and(|p| p.owner == player))
}

fn live_entity_count(world: &mut World) -> usize {
    world.query::<&Pose>().iter(world).count()
}

/// Return the player's render proxy, spawning and registering it if there is none.
///
/// The proxy copies the controller's hull and pose, collides as a bounding box, never
/// moves on its own, and keeps a back reference to the controller. Calling this again
/// while the proxy is alive returns the same entity.
pub fn ensure_proxy(world: &mut World, player: Entity) -> Result<Entity, CameraError> {
    if let Some(proxy) = linked_proxy(world, player) {
        return Ok(proxy);
    }

    let (Some(pose), Some(bounds), Some(appearance), Some(control)) = (
        world.get::<Pose>(player).copied(),
        world.get::<BoundingBox>(player).copied(),
        world.get::<Appearance>(player).copied(),
        world.get::<PlayerControl>(player).copied(),
    ) else {
        return Err(CameraError::NotAPlayer(player));
    };

    let budget = world.get_resource::<EntityBudget>().copied().unwrap_or_default();
    if live_entity_count(world) >= budget.max_entities {
        return Err(CameraError::EntityBudgetExhausted(budget.max_entities));
    }

    let proxy = world
        .spawn((
            ProxyMarker,
            RenderProxy { owner: player },
            Pose {
                origin: pose.origin,
                angles: proxy_angles(control.view_angles),
            },
            bounds,
            Solid::BBox,
            MoveType::None,
            Contents(ContentFlags::PLAYER),
            proxy_appearance(appearance),
        ))
        .id();

    if let Some(mut link) = world.get_mut::<ProxyLink>(player) {
        link.0 = Some(proxy);
    } else {
        world.entity_mut(player).insert(ProxyLink(Some(proxy)));
    }

    register_entity(world, proxy);
    info!("spawned render proxy {} for {}", proxy, player);
    Ok(proxy)
}

// Mirror the controller onto its proxy and re-register it. Returns false when there is no proxy.
pub fn sync_proxy(world: &mut World, player: Entity) -> bool {
    let Some(proxy) = linked_proxy(world, player) else {
        return false;
    };

    let (Some(pose), Some(appearance), Some(control)) = (
        world.get::<Pose>(player).copied(),
        world.get::<Appearance>(player).copied(),
        world.get::<PlayerControl>(player).copied(),
    ) else {
        return false;
    };

    let mut proxy_entity = world.entity_mut(proxy);
    if let Some(mut proxy_pose) = proxy_entity.get_mut::<Pose>() {
        proxy_pose.origin = pose.origin;
        proxy_pose.angles = proxy_angles(control.view_angles);
    }
    if let Some(mut proxy_look) = proxy_entity.get_mut::<Appearance>() {
        *proxy_look = proxy_appearance(appearance);
    }

    register_entity(world, proxy);
    true
}

// Remove the proxy (if any) and make the controller fully visible again.
pub fn destroy_proxy(world: &mut World, player: Entity) -> bool {
    let proxy = world.get_mut::<ProxyLink>(player).and_then(|mut link| link.0.take());

    let destroyed = match proxy {
        Some(proxy) => {
            world.resource_mut::<CollisionWorld>().unlink(proxy);
            world.despawn(proxy);
            info!("removed render proxy {} for {}", proxy, player);
            true
        }
        None => false,
    };

    show_controller(world, player);
    destroyed
}

// ============================================================================
// Controller Visibility
// ============================================================================

// Hide the controller from other clients and drop its first-person weapon model.
pub fn hide_controller(world: &mut World, player: Entity) {
    if let Some(mut visibility) = world.get_mut::<NetVisibility>(player) {
        visibility.hidden_from_clients = true;
    }
    if let Some(mut weapon) = world.get_mut::<WeaponView>(player) {
        weapon.gun_index = 0;
    }
}

// Undo `hide_controller`; the weapon model only comes back for a living, armed player.
pub fn show_controller(world: &mut World, player: Entity) {
    let alive = world.get::<PlayerControl>(player).is_some_and(PlayerControl::is_alive);

    if let Some(mut visibility) = world.get_mut::<NetVisibility>(player) {
        visibility.hidden_from_clients = false;
    }
    if let Some(mut weapon) = world.get_mut::<WeaponView>(player)
        && alive
        && let Some(model) = weapon.weapon_model
    {
        weapon.gun_index = model;
        debug!("restored weapon view model {} for {}", model, player);
    }
}
