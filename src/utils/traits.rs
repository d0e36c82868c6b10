use crate::{Algorithm, Grid, OptionValues, OptionsSchema, Result, Topology, WRAP_AROUND};
use rand::Rng;

/// Transition rule of a cellular automaton.
///
/// Both operations are pure: they allocate a new grid and never mutate their input.
pub trait Rule {
    /// Cell state this rule operates on.
    type Cell: Clone + PartialEq + std::fmt::Debug;

    fn algorithm(&self) -> Algorithm;

    /// Parameters a configuration UI should offer for this rule.
    fn options(&self) -> OptionsSchema;

    /// Create a field with random cells.
    ///
    /// `rng` - source of the independent per-cell draws
    fn init_grid<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        options: &OptionValues,
        rng: &mut R,
    ) -> Result<Grid<Self::Cell>>;

    /// Next state of `cell` given its present neighbors.
    fn step_cell(&self, cell: &Self::Cell, neighbors: &[&Self::Cell]) -> Self::Cell;

    /// Compute the next generation of the whole field.
    ///
    /// Reads `wrap_around` from `options`.
    fn step_grid(
        &self,
        grid: &Grid<Self::Cell>,
        options: &OptionValues,
    ) -> Result<Grid<Self::Cell>> {
        let topology = Topology::from_wrap_around(options.boolean(WRAP_AROUND)?);
        Ok(grid.step_with(topology, |cell, neighbors| self.step_cell(cell, neighbors)))
    }
}
