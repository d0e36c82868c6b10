use crate::{
    Algorithm, Grid, OptionSpec, OptionValues, OptionsSchema, Result, Rule, ALIVE_CHANCE,
    FOOD_CHANCE, WRAP_AROUND,
};
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreatureStatus {
    #[default]
    Null,
    Food,
    Creature,
}

/// Cell of the predator/prey automaton.
///
/// `status == Null` iff the cell is dead, and a dead cell has zero energy.
/// Use the constructors to keep it that way.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CreatureCell {
    pub alive: bool,
    pub status: CreatureStatus,
    pub energy: f64,
}

impl CreatureCell {
    pub fn empty() -> Self {
        Self {
            alive: false,
            status: CreatureStatus::Null,
            energy: 0.,
        }
    }

    pub fn food(energy: f64) -> Self {
        Self {
            alive: true,
            status: CreatureStatus::Food,
            energy,
        }
    }

    pub fn creature(energy: f64) -> Self {
        Self {
            alive: true,
            status: CreatureStatus::Creature,
            energy,
        }
    }

    pub fn is_food(&self) -> bool {
        self.status == CreatureStatus::Food
    }

    pub fn is_creature(&self) -> bool {
        self.status == CreatureStatus::Creature
    }
}

/// Creatures eat neighboring food, starve when alone and suffocate when crowded.
/// Food decays slowly and spreads into empty cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct Creatures;

impl Creatures {
    /// Chance of a cell starting as a creature.
    pub const CREATURE_CHANCE: f64 = 0.1;
    pub const CREATURE_ENERGY: f64 = 6.;
    pub const FOOD_ENERGY: f64 = 10.;
    /// Energy lost by creatures and food every generation.
    pub const DECAY: f64 = 0.1;
    /// Creature neighbor count from which creatures pay for crowding.
    pub const CROWD: usize = 4;
}

impl Rule for Creatures {
    type Cell = CreatureCell;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Creatures
    }

    fn options(&self) -> OptionsSchema {
        OptionsSchema::new()
            .with(WRAP_AROUND, OptionSpec::boolean(true))
            .with(
                ALIVE_CHANCE,
                OptionSpec::number(0.1).with_range(0.1, 1.).with_step(0.01),
            )
            .with(
                FOOD_CHANCE,
                OptionSpec::number(0.1).with_range(0.1, 1.).with_step(0.01),
            )
    }

    /// Each cell first rolls for a creature (fixed chance), then for food
    /// (`food_chance`); otherwise it starts empty.
    ///
    /// `alive_chance` must be present but does not affect the creature roll.
    fn init_grid<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        options: &OptionValues,
        rng: &mut R,
    ) -> Result<Grid<CreatureCell>> {
        options.number(ALIVE_CHANCE)?;
        let food_chance = options.number(FOOD_CHANCE)?;
        Grid::from_fn(width, height, |_, _| {
            if rng.gen::<f64>() < Self::CREATURE_CHANCE {
                CreatureCell::creature(Self::CREATURE_ENERGY)
            } else if rng.gen::<f64>() < food_chance {
                CreatureCell::food(Self::FOOD_ENERGY)
            } else {
                CreatureCell::empty()
            }
        })
    }

    fn step_cell(&self, cell: &CreatureCell, neighbors: &[&CreatureCell]) -> CreatureCell {
        let food = neighbors.iter().filter(|n| n.is_food()).count();
        let creatures = neighbors.iter().filter(|n| n.is_creature()).count();

        match cell.status {
            CreatureStatus::Creature => {
                let mut energy = cell.energy - Self::DECAY;
                energy += food as f64;
                if creatures >= Self::CROWD {
                    energy -= creatures as f64 * Self::DECAY;
                }
                if energy > 0. && (2..Self::CROWD).contains(&creatures) {
                    return CreatureCell::creature(energy);
                }
            }
            CreatureStatus::Food => {
                let energy = cell.energy - Self::DECAY;
                if energy > 0. && creatures == 0 && food < 9 {
                    return CreatureCell::food(energy);
                }
                if food == 3 {
                    return CreatureCell::food(Self::FOOD_ENERGY);
                }
            }
            CreatureStatus::Null => {
                if creatures >= 2 && food >= 1 {
                    return CreatureCell::creature(Self::CREATURE_ENERGY);
                }
                if food == 3 {
                    return CreatureCell::food(Self::FOOD_ENERGY);
                }
            }
        }
        CreatureCell::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(cell: CreatureCell, neighbors: &[CreatureCell]) -> CreatureCell {
        let refs: Vec<&CreatureCell> = neighbors.iter().collect();
        Creatures.step_cell(&cell, &refs)
    }

    fn n(food: usize, creatures: usize) -> Vec<CreatureCell> {
        let mut v = vec![CreatureCell::food(10.); food];
        v.extend(vec![CreatureCell::creature(6.); creatures]);
        v.resize(8, CreatureCell::empty());
        v
    }

    #[test]
    fn creature_survives_with_company_and_eats() {
        let next = step(CreatureCell::creature(1.), &n(2, 3));
        assert!(next.is_creature());
        assert!((next.energy - 2.9).abs() < 1e-9);
    }

    #[test]
    fn creature_dies_alone_or_crowded() {
        assert_eq!(step(CreatureCell::creature(6.), &n(0, 1)), CreatureCell::empty());
        assert_eq!(step(CreatureCell::creature(6.), &n(4, 4)), CreatureCell::empty());
    }

    #[test]
    fn creature_starves() {
        assert_eq!(step(CreatureCell::creature(0.1), &n(0, 2)), CreatureCell::empty());
    }

    #[test]
    fn food_decays_and_is_eaten() {
        let next = step(CreatureCell::food(10.), &n(2, 0));
        assert!(next.is_food());
        assert!((next.energy - 9.9).abs() < 1e-9);
        assert_eq!(step(CreatureCell::food(10.), &n(0, 1)), CreatureCell::empty());
    }

    #[test]
    fn exhausted_food_regrows_among_three() {
        assert_eq!(step(CreatureCell::food(0.05), &n(3, 0)), CreatureCell::food(10.));
        assert_eq!(step(CreatureCell::food(10.), &n(3, 2)), CreatureCell::food(10.));
        assert_eq!(step(CreatureCell::food(0.05), &n(2, 0)), CreatureCell::empty());
    }

    #[test]
    fn births() {
        assert_eq!(step(CreatureCell::empty(), &n(1, 2)), CreatureCell::creature(6.));
        assert_eq!(step(CreatureCell::empty(), &n(3, 0)), CreatureCell::food(10.));
        assert_eq!(step(CreatureCell::empty(), &n(3, 1)), CreatureCell::food(10.));
        assert_eq!(step(CreatureCell::empty(), &n(4, 0)), CreatureCell::empty());
        assert_eq!(step(CreatureCell::empty(), &n(0, 3)), CreatureCell::empty());
    }
}
