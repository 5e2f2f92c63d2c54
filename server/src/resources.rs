use bevy::prelude::*;
use std::collections::HashMap;
use tokio::sync::mpsc::{UnboundedReceiver, error::TryRecvError};

use crate::{constants::MAX_ENTITIES, error::CvarError, io::ConsoleToServer};
use common::{camera::CameraSettings, components::PlayerId};

// ============================================================================
// Bevy Resources
// ============================================================================

// Map of all connected players (server-side source of truth)
#[derive(Resource, Default)]
pub struct PlayerMap(pub HashMap<PlayerId, Entity>);

impl PlayerMap {
    #[must_use]
    pub fn next_id(&self) -> PlayerId {
        PlayerId(self.0.keys().map(|id| id.0).max().map_or(1, |max| max + 1))
    }
}

// Cap on live world entities; spawning past it is refused.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityBudget {
    pub max_entities: usize,
}

impl Default for EntityBudget {
    fn default() -> Self {
        Self {
            max_entities: MAX_ENTITIES,
        }
    }
}

// ============================================================================
// Camera Configuration Variables
// ============================================================================

// Named camera settings, changed between ticks by console commands.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct CameraCvars {
    pub thirdperson: bool,
    pub distance: Option<f32>,
    pub height: Option<f32>,
    pub side: Option<f32>,
    pub smooth: Option<f32>,
}

impl CameraCvars {
    pub const NAMES: [&'static str; 5] = ["sv_thirdperson", "tp_distance", "tp_height", "tp_side", "tp_smooth"];

    fn slot(&mut self, name: &str) -> Result<&mut Option<f32>, CvarError> {
        match name {
            "tp_distance" => Ok(&mut self.distance),
            "tp_height" => Ok(&mut self.height),
            "tp_side" => Ok(&mut self.side),
            "tp_smooth" => Ok(&mut self.smooth),
            _ => Err(CvarError::Unknown(name.to_string())),
        }
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), CvarError> {
        let parsed: f32 = value.trim().parse().map_err(|_| CvarError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;

        if name == "sv_thirdperson" {
            self.thirdperson = parsed != 0.0;
            return Ok(());
        }

        *self.slot(name)? = Some(parsed);
        Ok(())
    }

    pub fn unset(&mut self, name: &str) -> Result<(), CvarError> {
        if name == "sv_thirdperson" {
            self.thirdperson = false;
            return Ok(());
        }

        *self.slot(name)? = None;
        Ok(())
    }

    // Settings for this tick, clamped with defaults applied.
    #[must_use]
    pub fn settings(&self) -> CameraSettings {
        CameraSettings::resolve(self.distance, self.height, self.side, self.smooth)
    }
}

// ============================================================================
// Console Channel
// ============================================================================

// Resource wrapper for the channel from the console I/O task.
#[derive(Resource)]
pub struct FromConsoleChannel(UnboundedReceiver<ConsoleToServer>);

impl FromConsoleChannel {
    #[must_use]
    pub const fn new(receiver: UnboundedReceiver<ConsoleToServer>) -> Self {
        Self(receiver)
    }

    pub fn try_recv(&mut self) -> Result<ConsoleToServer, TryRecvError> {
        self.0.try_recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cvars_set_and_unset() {
        let mut cvars = CameraCvars::default();
        cvars.set("tp_distance", "128").expect("valid");
        cvars.set("tp_smooth", " 0.25 ").expect("valid");
        cvars.set("sv_thirdperson", "1").expect("valid");
        assert!(cvars.thirdperson);
        assert_eq!(cvars.settings().distance, 128.0);
        assert_eq!(cvars.settings().smoothing, 0.25);

        cvars.unset("tp_distance").expect("known");
        assert_eq!(cvars.settings().distance, 64.0);
        cvars.set("sv_thirdperson", "0").expect("valid");
        assert!(!cvars.thirdperson);
    }

    #[test]
    fn test_cvars_clamp_through_settings() {
        let mut cvars = CameraCvars::default();
        cvars.set("tp_distance", "-50").expect("valid");
        cvars.set("tp_side", "4000").expect("valid");
        let settings = cvars.settings();
        assert_eq!(settings.distance, 16.0);
        assert_eq!(settings.lateral, 128.0);
    }

    #[test]
    fn test_cvars_errors() {
        let mut cvars = CameraCvars::default();
        assert_eq!(cvars.set("tp_zoom", "1"), Err(CvarError::Unknown("tp_zoom".to_string())));
        assert!(matches!(cvars.set("tp_height", "high"), Err(CvarError::InvalidValue { .. })));
        assert_eq!(cvars, CameraCvars::default());
    }

    #[test]
    fn test_next_player_id() {
        let mut players = PlayerMap::default();
        assert_eq!(players.next_id(), PlayerId(1));
        players.0.insert(PlayerId(4), Entity::PLACEHOLDER);
        assert_eq!(players.next_id(), PlayerId(5));
    }
}
