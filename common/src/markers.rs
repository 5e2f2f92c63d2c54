use bevy_ecs::prelude::*;

// Marker components to disambiguate entity archetypes.
#[derive(Component, Debug, Default)]
pub struct PlayerMarker;

// Visual stand-in spawned for a third-person player.
#[derive(Component, Debug, Default)]
pub struct ProxyMarker;
