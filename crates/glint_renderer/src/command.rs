//! Discrete observer input, one per tick.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The single "currently held" input sampled each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Command {
    TurnLeft,
    TurnRight,
    LookUp,
    LookDown,
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    #[default]
    None,
}

impl Command {
    pub const ALL: [Command; 11] = [
        Command::TurnLeft,
        Command::TurnRight,
        Command::LookUp,
        Command::LookDown,
        Command::Forward,
        Command::Back,
        Command::StrafeLeft,
        Command::StrafeRight,
        Command::Ascend,
        Command::Descend,
        Command::None,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::TurnLeft => "turn-left",
            Command::TurnRight => "turn-right",
            Command::LookUp => "look-up",
            Command::LookDown => "look-down",
            Command::Forward => "forward",
            Command::Back => "back",
            Command::StrafeLeft => "strafe-left",
            Command::StrafeRight => "strafe-right",
            Command::Ascend => "ascend",
            Command::Descend => "descend",
            Command::None => "none",
        }
    }

    /// Whether the command changes the pose (and so invalidates the samples).
    pub fn moves(self) -> bool {
        self != Command::None
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown command '{0}'")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Command::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseCommandError(name.to_string()))
    }
}
