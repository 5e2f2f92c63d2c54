use bevy::math::Vec3;
use std::str::FromStr;

use crate::{error::CommandError, resources::CameraCvars};
use common::components::PlayerId;

// ============================================================================
// Console Commands
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Thirdperson(PlayerId),
    Set { name: String, value: String },
    Unset(String),
    Connect,
    Disconnect(PlayerId),
    Kill(PlayerId),
    Look { id: PlayerId, pitch: f32, yaw: f32 },
    MoveTo { id: PlayerId, origin: Vec3 },
    Fire(PlayerId),
    Reset,
    Status,
}

fn player_id(arg: Option<&str>, usage: &'static str) -> Result<PlayerId, CommandError> {
    arg.and_then(|s| s.parse().ok()).map(PlayerId).ok_or(CommandError::Usage(usage))
}

fn number(arg: Option<&str>, usage: &'static str) -> Result<f32, CommandError> {
    arg.and_then(|s| s.parse().ok()).ok_or(CommandError::Usage(usage))
}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match verb {
            "thirdperson" => Self::Thirdperson(player_id(words.next(), "thirdperson <id>")?),
            "set" => {
                let (Some(name), Some(value)) = (words.next(), words.next()) else {
                    return Err(CommandError::Usage("set <cvar> <value>"));
                };
                Self::Set {
                    name: name.to_string(),
                    value: value.to_string(),
                }
            }
            "unset" => Self::Unset(words.next().ok_or(CommandError::Usage("unset <cvar>"))?.to_string()),
            "connect" => Self::Connect,
            "disconnect" => Self::Disconnect(player_id(words.next(), "disconnect <id>")?),
            "kill" => Self::Kill(player_id(words.next(), "kill <id>")?),
            "look" => {
                const USAGE: &str = "look <id> <pitch> <yaw>";
                Self::Look {
                    id: player_id(words.next(), USAGE)?,
                    pitch: number(words.next(), USAGE)?,
                    yaw: number(words.next(), USAGE)?,
                }
            }
            "moveto" => {
                const USAGE: &str = "moveto <id> <x> <y> <z>";
                let id = player_id(words.next(), USAGE)?;
                let x = number(words.next(), USAGE)?;
                let y = number(words.next(), USAGE)?;
                let z = number(words.next(), USAGE)?;
                Self::MoveTo {
                    id,
                    origin: Vec3::new(x, y, z),
                }
            }
            "fire" => Self::Fire(player_id(words.next(), "fire <id>")?),
            "reset" => Self::Reset,
            "status" => Self::Status,
            // bare "<cvar> <value>" like a classic console
            name if CameraCvars::NAMES.contains(&name) => {
                let value = words.next().ok_or(CommandError::Usage("<cvar> <value>"))?;
                Self::Set {
                    name: name.to_string(),
                    value: value.to_string(),
                }
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("thirdperson 3".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Thirdperson(PlayerId(3))));
        assert_eq!(
            "tp_distance 96".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::Set {
                name: "tp_distance".to_string(),
                value: "96".to_string()
            })
        );
        assert_eq!(
            "  look 1 -10 270 ".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::Look {
                id: PlayerId(1),
                pitch: -10.0,
                yaw: 270.0
            })
        );
        assert_eq!(
            "moveto 2 1 2 3".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::MoveTo {
                id: PlayerId(2),
                origin: Vec3::new(1.0, 2.0, 3.0)
            })
        );
        assert_eq!("status".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Status));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ConsoleCommand>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<ConsoleCommand>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert!(matches!(
            "thirdperson me".parse::<ConsoleCommand>(),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!("look 1 10".parse::<ConsoleCommand>(), Err(CommandError::Usage(_))));
    }
}
