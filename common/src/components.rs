#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::{
    collision::ContentFlags,
    constants::{PLAYER_EYE_HEIGHT, PLAYER_MAXS, PLAYER_MINS, PLAYER_START_HEALTH},
};

// ============================================================================
// World Entity Components
// ============================================================================

// World position and orientation (pitch, yaw, roll in degrees).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub origin: Vec3,
    pub angles: Vec3,
}

// Collision hull relative to the entity origin.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub mins: Vec3,
    pub maxs: Vec3,
}

impl BoundingBox {
    #[must_use]
    pub const fn player() -> Self {
        Self {
            mins: PLAYER_MINS,
            maxs: PLAYER_MAXS,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solid {
    #[default]
    Not,
    BBox,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveType {
    // Never moves on its own; someone else sets its pose
    #[default]
    None,
    Walk,
}

// What the entity counts as when traces filter by mask.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contents(pub ContentFlags);

// Visual and animation state mirrored by render proxies.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Appearance {
    pub model_index: u16,
    pub frame: u32,
    pub skin: u32,
    pub effects: u32,
}

// ============================================================================
// Player Components
// ============================================================================

// Movement-owned control state. The camera only reads it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerControl {
    pub view_angles: Vec3,
    pub velocity: Vec3,
    pub eye_height: f32,
    pub health: i32,
    pub spectator: bool,
}

impl Default for PlayerControl {
    fn default() -> Self {
        Self {
            view_angles: Vec3::ZERO,
            velocity: Vec3::ZERO,
            eye_height: PLAYER_EYE_HEIGHT,
            health: PLAYER_START_HEALTH,
            spectator: false,
        }
    }
}

impl PlayerControl {
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Camera state carried between ticks; written only by the third-person positioner.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedView {
    /// Smoothed camera offset relative to the player origin.
    pub view_offset: Vec3,
    /// Smoothed view angles.
    pub view_angles: Vec3,
    /// World point the last aim trace stopped at.
    pub aim_target: Vec3,
}

impl PersistedView {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// Whether remote clients are sent this entity at all.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetVisibility {
    pub hidden_from_clients: bool,
}

// First-person weapon model shown on the owner's screen; gun_index 0 hides it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeaponView {
    pub weapon_model: Option<u16>,
    pub gun_index: u16,
}

// Owning link from a controller to its render proxy.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProxyLink(pub Option<Entity>);

// Back reference from a proxy to the controller it stands in for. Non-owning.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderProxy {
    pub owner: Entity,
}

// Player ID component - identifies which player an entity represents
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);
