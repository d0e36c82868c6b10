use crate::{
    Algorithm, CreatureCell, CreatureStatus, Creatures, GameOfLife, Grid, LifeCell,
    OptionValues, OptionsSchema, RenderCell, Result, Rule,
};
use rand::Rng;
use std::fmt;

/// State of a single cell, tagged with the rule it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    GameOfLife(LifeCell),
    Creature(CreatureCell),
}

impl Cell {
    pub fn alive(&self) -> bool {
        match self {
            Self::GameOfLife(c) => c.alive,
            Self::Creature(c) => c.alive,
        }
    }
}

/// Cell counts of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Population {
    pub alive: usize,
    pub creatures: usize,
    pub food: usize,
}

/// A grid together with the rule that evolves it.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    GameOfLife(Grid<LifeCell>),
    Creatures(Grid<CreatureCell>),
}

impl Field {
    /// Option schema of the given algorithm.
    pub fn options(algorithm: Algorithm) -> OptionsSchema {
        match algorithm {
            Algorithm::GameOfLife => GameOfLife.options(),
            Algorithm::Creatures => Creatures.options(),
        }
    }

    /// Random field for the given algorithm.
    pub fn init<R: Rng + ?Sized>(
        algorithm: Algorithm,
        width: usize,
        height: usize,
        options: &OptionValues,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(match algorithm {
            Algorithm::GameOfLife => {
                Self::GameOfLife(GameOfLife.init_grid(width, height, options, rng)?)
            }
            Algorithm::Creatures => {
                Self::Creatures(Creatures.init_grid(width, height, options, rng)?)
            }
        })
    }

    /// Next generation; `self` is left as it was.
    pub fn step(&self, options: &OptionValues) -> Result<Self> {
        Ok(match self {
            Self::GameOfLife(grid) => Self::GameOfLife(GameOfLife.step_grid(grid, options)?),
            Self::Creatures(grid) => Self::Creatures(Creatures.step_grid(grid, options)?),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::GameOfLife(_) => Algorithm::GameOfLife,
            Self::Creatures(_) => Algorithm::Creatures,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Self::GameOfLife(grid) => grid.width(),
            Self::Creatures(grid) => grid.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::GameOfLife(grid) => grid.height(),
            Self::Creatures(grid) => grid.height(),
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        match self {
            Self::GameOfLife(grid) => grid.get(x, y).copied().map(Cell::GameOfLife),
            Self::Creatures(grid) => grid.get(x, y).copied().map(Cell::Creature),
        }
    }

    /// Per-cell drawing information in row-major order.
    pub fn render_cells(&self) -> Box<dyn Iterator<Item = RenderCell> + '_> {
        match self {
            Self::GameOfLife(grid) => Box::new(
                grid.iter()
                    .map(|(x, y, &cell)| RenderCell::new(x, y, Cell::GameOfLife(cell))),
            ),
            Self::Creatures(grid) => Box::new(
                grid.iter()
                    .map(|(x, y, &cell)| RenderCell::new(x, y, Cell::Creature(cell))),
            ),
        }
    }

    pub fn population(&self) -> Population {
        match self {
            Self::GameOfLife(grid) => Population {
                alive: grid.cells().iter().filter(|c| c.alive).count(),
                ..Population::default()
            },
            Self::Creatures(grid) => grid.cells().iter().fold(Population::default(), |mut p, c| {
                p.alive += c.alive as usize;
                match c.status {
                    CreatureStatus::Creature => p.creatures += 1,
                    CreatureStatus::Food => p.food += 1,
                    CreatureStatus::Null => {}
                }
                p
            }),
        }
    }
}

impl From<Grid<LifeCell>> for Field {
    fn from(grid: Grid<LifeCell>) -> Self {
        Self::GameOfLife(grid)
    }
}

impl From<Grid<CreatureCell>> for Field {
    fn from(grid: Grid<CreatureCell>) -> Self {
        Self::Creatures(grid)
    }
}

/// One text line per row.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width();
        for cell in self.render_cells() {
            let c = match cell.status {
                Some(CreatureStatus::Creature) => '@',
                Some(CreatureStatus::Food) => '*',
                Some(CreatureStatus::Null) => '.',
                None if cell.alive => '#',
                None => '.',
            };
            write!(f, "{}", c)?;
            if cell.x + 1 == w {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
