use bevy::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{
    camera::{correct_aim_direction, toggle_command},
    players::{connect_player, disconnect_player, reset_level},
    proxy::linked_proxy,
};
use crate::{
    console::ConsoleCommand,
    constants::SPAWN_POINTS,
    error::CommandError,
    io::ConsoleToServer,
    resources::{CameraCvars, FromConsoleChannel, PlayerMap},
};
use common::{
    components::{NetVisibility, PersistedView, PlayerControl, PlayerId, Pose},
    geometry::angle_vectors,
};

// Weapon muzzle relative to the eye: forward, right, up
const MUZZLE_OFFSET: Vec3 = Vec3::new(8.0, 8.0, -8.0);

#[derive(Serialize)]
struct PlayerStatus {
    id: PlayerId,
    pose: Pose,
    view: PersistedView,
    health: i32,
    proxy: bool,
    hidden: bool,
}

fn player_entity(world: &World, id: PlayerId) -> Result<Entity, CommandError> {
    world
        .resource::<PlayerMap>()
        .0
        .get(&id)
        .copied()
        .ok_or(CommandError::NoSuchPlayer(id))
}

fn player_status(world: &World, id: PlayerId, entity: Entity) -> Option<PlayerStatus> {
    Some(PlayerStatus {
        id,
        pose: *world.get::<Pose>(entity)?,
        view: *world.get::<PersistedView>(entity)?,
        health: world.get::<PlayerControl>(entity)?.health,
        proxy: linked_proxy(world, entity).is_some(),
        hidden: world.get::<NetVisibility>(entity)?.hidden_from_clients,
    })
}

// ============================================================================
// Command Execution
// ============================================================================

pub fn execute_command(world: &mut World, command: ConsoleCommand) -> Result<(), CommandError> {
    match command {
        ConsoleCommand::Thirdperson(id) => {
            let entity = player_entity(world, id)?;
            toggle_command(world, entity);
        }
        ConsoleCommand::Set { name, value } => {
            world.resource_mut::<CameraCvars>().set(&name, &value)?;
            info!("{} = {}", name, value);
        }
        ConsoleCommand::Unset(name) => {
            world.resource_mut::<CameraCvars>().unset(&name)?;
            info!("{} reset to default", name);
        }
        ConsoleCommand::Connect => {
            let players = world.resource::<PlayerMap>();
            let id = players.next_id();
            let origin = SPAWN_POINTS[players.0.len() % SPAWN_POINTS.len()];
            connect_player(world, id, origin);
        }
        ConsoleCommand::Disconnect(id) => {
            if !disconnect_player(world, id) {
                return Err(CommandError::NoSuchPlayer(id));
            }
        }
        ConsoleCommand::Kill(id) => {
            let entity = player_entity(world, id)?;
            if let Some(mut control) = world.get_mut::<PlayerControl>(entity) {
                control.health = 0;
            }
            info!("{:?} killed", id);
        }
        ConsoleCommand::Look { id, pitch, yaw } => {
            let entity = player_entity(world, id)?;
            if let Some(mut control) = world.get_mut::<PlayerControl>(entity) {
                control.view_angles = Vec3::new(pitch, yaw, 0.0);
            }
        }
        ConsoleCommand::MoveTo { id, origin } => {
            let entity = player_entity(world, id)?;
            if let Some(mut pose) = world.get_mut::<Pose>(entity) {
                pose.origin = origin;
            }
        }
        ConsoleCommand::Fire(id) => {
            let entity = player_entity(world, id)?;
            let (Some(pose), Some(control)) =
                (world.get::<Pose>(entity).copied(), world.get::<PlayerControl>(entity).copied())
            else {
                return Err(CommandError::NoSuchPlayer(id));
            };
            let basis = angle_vectors(control.view_angles);
            let eye = pose.origin + Vec3::Z * control.eye_height;
            let start = eye + basis.forward * MUZZLE_OFFSET.x + basis.right * MUZZLE_OFFSET.y + basis.up * MUZZLE_OFFSET.z;
            let mut direction = basis.forward;
            correct_aim_direction(world, entity, start, &mut direction);
            info!("{:?} fires from {} along {} (view forward {})", id, start, direction, basis.forward);
        }
        ConsoleCommand::Reset => reset_level(world),
        ConsoleCommand::Status => {
            let mut players: Vec<(PlayerId, Entity)> =
                world.resource::<PlayerMap>().0.iter().map(|(&id, &entity)| (id, entity)).collect();
            players.sort_unstable_by_key(|(id, _)| *id);

            let statuses: Vec<PlayerStatus> = players
                .into_iter()
                .filter_map(|(id, entity)| player_status(world, id, entity))
                .collect();
            match serde_json::to_string(&statuses) {
                Ok(json) => info!("status: {}", json),
                Err(e) => warn!("failed to serialize status: {}", e),
            }
        }
    }

    Ok(())
}

// ============================================================================
// Console Command System
// ============================================================================

// Drain console input and apply each command before the players' frame runs.
pub fn console_command_system(world: &mut World) {
    let mut lines = Vec::new();
    if let Some(mut channel) = world.get_resource_mut::<FromConsoleChannel>() {
        while let Ok(message) = channel.try_recv() {
            match message {
                ConsoleToServer::Line(line) => lines.push(line),
                ConsoleToServer::Closed => debug!("console closed"),
            }
        }
    }

    for line in lines.iter().filter(|line| !line.trim().is_empty()) {
        if let Err(e) = line
            .parse::<ConsoleCommand>()
            .and_then(|command| execute_command(world, command))
        {
            warn!("{}: {}", line.trim(), e);
        }
    }
}
