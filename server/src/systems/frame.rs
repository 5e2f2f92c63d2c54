use bevy::prelude::*;

use super::{
    camera::{CameraTick, activate_if_eligible, teardown},
    proxy::linked_proxy,
};
use crate::resources::CameraCvars;
use common::{
    components::{PersistedView, PlayerControl},
    markers::PlayerMarker,
};

// ============================================================================
// End-of-Frame Player System
// ============================================================================

// Per-player end of frame: run the third-person camera where it applies, clean up
// proxies once the mode is switched off, and clear the view state of dead players.
pub fn player_end_frame_system(world: &mut World) {
    let players: Vec<Entity> = world
        .query_filtered::<Entity, With<PlayerMarker>>()
        .iter(world)
        .collect();
    let enabled = world.resource::<CameraCvars>().thirdperson;

    for player in players {
        if world.get::<PlayerControl>(player).is_some_and(|control| !control.is_alive())
            && let Some(mut view) = world.get_mut::<PersistedView>(player)
        {
            view.clear();
        }

        match activate_if_eligible(world, player) {
            CameraTick::Active => {}
            CameraTick::Inactive | CameraTick::Aborted => {
                if !enabled && linked_proxy(world, player).is_some() {
                    teardown(world, player);
                }
            }
        }
    }
}
