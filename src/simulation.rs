use crate::{Algorithm, Config, Field, NiceInt, OptionValues, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::{collections::VecDeque, time::Duration};

/// Named value shown next to the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub name: &'static str,
    pub value: String,
}

/// Host-side state of a running automaton: the current field plus everything
/// the host keeps between generations.
pub struct Simulation {
    field: Field,
    options: OptionValues,
    rng: ChaCha8Rng,
    generation: u64,
    tick_rates: VecDeque<f64>,
}

impl Simulation {
    /// Random field of the given algorithm.
    ///
    /// `overrides` - values replacing the rule's option defaults
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn new(
        algorithm: Algorithm,
        width: usize,
        height: usize,
        overrides: &OptionValues,
        seed: Option<u64>,
    ) -> Result<Self> {
        let options = Field::options(algorithm).resolve(overrides)?;
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let field = Field::init(algorithm, width, height, &options, &mut rng)?;
        log::debug!("initialized {} field {}x{}", algorithm, width, height);
        Ok(Self {
            field,
            options,
            rng,
            generation: 1,
            tick_rates: VecDeque::with_capacity(Config::TICK_WINDOW),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.algorithm,
            config.width,
            config.height,
            &config.options,
            config.seed,
        )
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn algorithm(&self) -> Algorithm {
        self.field.algorithm()
    }

    pub fn options(&self) -> &OptionValues {
        &self.options
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation.
    ///
    /// On error the current field and generation are kept.
    pub fn step(&mut self) -> Result<()> {
        let next = self.field.step(&self.options)?;
        self.field = next;
        self.generation += 1;
        log::debug!("generation {}", self.generation);
        if self.field.population().alive == 0 {
            log::warn!("field is empty at generation {}", self.generation);
        }
        Ok(())
    }

    pub fn step_n(&mut self, n: u64) -> Result<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    /// Fresh random field of a new size; the generation counter restarts.
    pub fn reset(&mut self, width: usize, height: usize) -> Result<()> {
        let field = Field::init(self.algorithm(), width, height, &self.options, &mut self.rng)?;
        log::info!("reset to {} field {}x{}", self.algorithm(), width, height);
        self.field = field;
        self.generation = 1;
        self.tick_rates.clear();
        Ok(())
    }

    /// Switch rules. Options go back to the new rule's defaults.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<()> {
        let options = Field::options(algorithm).defaults();
        let field = Field::init(
            algorithm,
            self.field.width(),
            self.field.height(),
            &options,
            &mut self.rng,
        )?;
        log::info!("switched to {}", algorithm);
        self.field = field;
        self.options = options;
        self.generation = 1;
        self.tick_rates.clear();
        Ok(())
    }

    /// Replace option values; the change applies from the next step.
    pub fn set_options(&mut self, overrides: &OptionValues) -> Result<()> {
        self.options = Field::options(self.algorithm()).resolve(overrides)?;
        Ok(())
    }

    /// Remember how long the last tick took.
    pub fn record_tick(&mut self, duration: Duration) {
        let secs = duration.as_secs_f64();
        if secs <= 0. {
            return;
        }
        if self.tick_rates.len() >= Config::TICK_WINDOW {
            self.tick_rates.pop_front();
        }
        self.tick_rates.push_back(1. / secs);
    }

    /// Mean ticks per second over the last recorded ticks.
    pub fn tick_rate(&self) -> f64 {
        if self.tick_rates.is_empty() {
            return 0.;
        }
        self.tick_rates.iter().sum::<f64>() / self.tick_rates.len() as f64
    }

    pub fn stats(&self) -> Vec<Stat> {
        let population = self.field.population();
        let mut stats = vec![
            Stat {
                name: "Generation",
                value: NiceInt::from(self.generation).to_string(),
            },
            Stat {
                name: "Size",
                value: format!("{} X {}", self.field.width(), self.field.height()),
            },
            Stat {
                name: "Framerate",
                value: format!("{}", self.tick_rate().ceil()),
            },
            Stat {
                name: "Population",
                value: NiceInt::from_usize(population.alive).to_string(),
            },
        ];
        if self.algorithm() == Algorithm::Creatures {
            stats.push(Stat {
                name: "Creatures",
                value: NiceInt::from_usize(population.creatures).to_string(),
            });
            stats.push(Stat {
                name: "Food",
                value: NiceInt::from_usize(population.food).to_string(),
            });
        }
        stats
    }
}
