use bevy::prelude::Entity;
use thiserror::Error;

use common::components::PlayerId;

// ============================================================================
// Errors
// ============================================================================

// Reasons a third-person tick cannot complete for a player.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    #[error("entity budget of {0} exhausted, render proxy not spawned")]
    EntityBudgetExhausted(usize),
    #[error("{0} is missing player components")]
    NotAPlayer(Entity),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CvarError {
    #[error("unknown cvar \"{0}\"")]
    Unknown(String),
    #[error("invalid value \"{value}\" for {name}")]
    InvalidValue { name: String, value: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command \"{0}\"")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("no player with id {0:?}")]
    NoSuchPlayer(PlayerId),
    #[error(transparent)]
    Cvar(#[from] CvarError),
}
