//! Entity slot definitions.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the fixed entity slots of a BIDS filename, in filename order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Subject,
    Session,
    Task,
    Acquisition,
    Run,
    Processing,
    Recording,
}

impl Entity {
    /// All slots in the order they appear in a filename.
    pub const ALL: [Entity; 7] = [
        Entity::Subject,
        Entity::Session,
        Entity::Task,
        Entity::Acquisition,
        Entity::Run,
        Entity::Processing,
        Entity::Recording,
    ];

    /// Key written in front of the value, e.g. `sub` in `sub-01`.
    pub fn key(&self) -> &'static str {
        match self {
            Entity::Subject => "sub",
            Entity::Session => "ses",
            Entity::Task => "task",
            Entity::Acquisition => "acq",
            Entity::Run => "run",
            Entity::Processing => "proc",
            Entity::Recording => "recording",
        }
    }

    /// Long name of the slot, as used in error messages and JSON input.
    pub fn name(&self) -> &'static str {
        match self {
            Entity::Subject => "subject",
            Entity::Session => "session",
            Entity::Task => "task",
            Entity::Acquisition => "acquisition",
            Entity::Run => "run",
            Entity::Processing => "processing",
            Entity::Recording => "recording",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Entity {
    type Err = Error;

    /// Accepts either the long name (`subject`) or the filename key (`sub`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Entity::ALL
            .into_iter()
            .find(|entity| entity.name() == s || entity.key() == s)
            .ok_or_else(|| Error::UnknownEntity(s.to_string()))
    }
}
