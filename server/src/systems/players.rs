use bevy::prelude::*;
use tracing::info;

use super::{camera::teardown, proxy::register_entity};
use crate::{constants::BLASTER_VIEW_MODEL, map::generate_arena, resources::PlayerMap};
use common::{
    collision::{CollisionWorld, ContentFlags},
    components::*,
    constants::PLAYER_MODEL_INDEX,
    markers::PlayerMarker,
};

// ============================================================================
// Player Sessions
// ============================================================================

// Spawn a controller at `origin` with zeroed view state and register it with the world.
pub fn connect_player(world: &mut World, id: PlayerId, origin: Vec3) -> Entity {
    let entity = world
        .spawn((
            PlayerMarker,
            id,
            Pose { origin, angles: Vec3::ZERO },
            PlayerControl::default(),
            PersistedView::default(),
            BoundingBox::player(),
            Solid::BBox,
            MoveType::Walk,
            Contents(ContentFlags::PLAYER),
            Appearance {
                model_index: PLAYER_MODEL_INDEX,
                ..default()
            },
            NetVisibility::default(),
            WeaponView {
                weapon_model: Some(BLASTER_VIEW_MODEL),
                gun_index: BLASTER_VIEW_MODEL,
            },
            ProxyLink::default(),
        ))
        .id();

    register_entity(world, entity);
    world.resource_mut::<PlayerMap>().0.insert(id, entity);
    info!("{:?} connected as {}", id, entity);
    entity
}

// Tear down third-person state, remove the controller from the world, and forget the id.
pub fn disconnect_player(world: &mut World, id: PlayerId) -> bool {
    let Some(entity) = world.resource_mut::<PlayerMap>().0.remove(&id) else {
        return false;
    };

    teardown(world, entity);
    world.resource_mut::<CollisionWorld>().unlink(entity);
    world.despawn(entity);
    info!("{:?} disconnected", id);
    true
}

// Drop every render proxy, rebuild the level geometry, and re-link the remaining players.
pub fn reset_level(world: &mut World) {
    let players: Vec<Entity> = world.resource::<PlayerMap>().0.values().copied().collect();

    for &player in &players {
        teardown(world, player);
    }

    world.insert_resource(generate_arena());
    for &player in &players {
        register_entity(world, player);
    }
    info!("level reset, {} players kept", players.len());
}
