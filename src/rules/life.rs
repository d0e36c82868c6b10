use crate::{
    Algorithm, Grid, OptionSpec, OptionValues, OptionsSchema, Result, Rule, ALIVE_CHANCE,
    WRAP_AROUND,
};
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LifeCell {
    pub alive: bool,
}

impl LifeCell {
    pub const DEAD: Self = Self { alive: false };
    pub const ALIVE: Self = Self { alive: true };
}

/// Conway's Game of Life (B3/S23).
#[derive(Clone, Copy, Debug, Default)]
pub struct GameOfLife;

impl Rule for GameOfLife {
    type Cell = LifeCell;

    fn algorithm(&self) -> Algorithm {
        Algorithm::GameOfLife
    }

    fn options(&self) -> OptionsSchema {
        OptionsSchema::new()
            .with(WRAP_AROUND, OptionSpec::boolean(true))
            .with(ALIVE_CHANCE, OptionSpec::number(0.1).with_range(0.1, 1.))
    }

    /// Every cell is alive with probability `alive_chance`.
    fn init_grid<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        options: &OptionValues,
        rng: &mut R,
    ) -> Result<Grid<LifeCell>> {
        let alive_chance = options.number(ALIVE_CHANCE)?;
        Grid::from_fn(width, height, |_, _| LifeCell {
            alive: rng.gen::<f64>() < alive_chance,
        })
    }

    fn step_cell(&self, cell: &LifeCell, neighbors: &[&LifeCell]) -> LifeCell {
        let alive = neighbors.iter().filter(|n| n.alive).count();
        LifeCell {
            alive: if cell.alive {
                alive == 2 || alive == 3
            } else {
                alive == 3
            },
        }
    }
}
