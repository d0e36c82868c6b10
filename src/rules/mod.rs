mod creatures;
mod life;

pub use creatures::{CreatureCell, CreatureStatus, Creatures};
pub use life::{GameOfLife, LifeCell};

use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Closed set of rules the engine knows about.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Algorithm {
    GameOfLife,
    #[default]
    Creatures,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::GameOfLife, Algorithm::Creatures];

    pub fn name(self) -> &'static str {
        match self {
            Self::GameOfLife => "game_of_life",
            Self::Creatures => "creatures",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
