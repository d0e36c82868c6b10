#![warn(clippy::all)]

mod error;
mod field;
mod grid;
mod options;
mod render;
mod rules;
mod simulation;
mod utils;

pub use error::{Error, Result};
pub use field::{Cell, Field, Population};
pub use grid::{coords, index, Grid};
pub use options::{
    global_options, OptionKind, OptionSpec, OptionValue, OptionValues, OptionsSchema,
    ALIVE_CHANCE, CELL_SIZE, FOOD_CHANCE, TICK_INTERVAL, WRAP_AROUND,
};
pub use render::{draw_list, Color, PixelRect, RenderCell, RenderSpace};
pub use rules::{Algorithm, CreatureCell, CreatureStatus, Creatures, GameOfLife, LifeCell};
pub use simulation::{Simulation, Stat};
pub use utils::{AxisResolver, Config, NiceInt, Rule, TickLimiter, Topology, MOORE_OFFSETS};
