use crate::{global_options, Algorithm, OptionValue, OptionValues, TickLimiter, CELL_SIZE};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Run configuration of the host loop, usually read from a YAML file.
///
/// ```yaml
/// algorithm: creatures
/// width: 120
/// height: 80
/// generations: 500
/// seed: 42
/// options:
///   wrap_around: false
///   food_chance: 0.2
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub algorithm: Algorithm,
    pub width: usize,
    pub height: usize,
    pub generations: u64,
    /// Random seed (if `None`, then random seed is generated).
    pub seed: Option<u64>,
    /// Pixels per cell side, for renderers.
    pub cell_size: u32,
    /// Milliseconds between generations when animating.
    pub tick_interval: f64,
    /// Overrides of the rule's option defaults.
    pub options: OptionValues,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            generations: Self::DEFAULT_GENERATIONS,
            seed: None,
            cell_size: Self::DEFAULT_CELL_SIZE,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            options: OptionValues::new(),
        }
    }
}

impl Config {
    pub const DEFAULT_WIDTH: usize = 100;
    pub const DEFAULT_HEIGHT: usize = 100;
    pub const DEFAULT_GENERATIONS: u64 = 100;
    pub const DEFAULT_CELL_SIZE: u32 = 10;
    pub const DEFAULT_TICK_INTERVAL: f64 = (1000 / 30) as f64;

    /// Number of tick samples averaged into the reported tick rate.
    pub const TICK_WINDOW: usize = 10;

    pub fn from_yaml_str(data: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(data)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config = Self::from_yaml_str(&data)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        config
            .checked()
            .with_context(|| format!("invalid config {}", path.display()))
    }

    /// Rejects a `tick_interval` that is not a valid duration and clamps
    /// `cell_size` to the bounds declared by [`global_options`].
    pub fn checked(mut self) -> anyhow::Result<Self> {
        TickLimiter::from_millis(self.tick_interval)
            .with_context(|| format!("tick_interval {} is out of range", self.tick_interval))?;
        if let Some(spec) = global_options().get(CELL_SIZE) {
            let value = OptionValue::Number(self.cell_size as f64);
            if let OptionValue::Number(x) = spec.clamp(value) {
                let clamped = x as u32;
                if clamped != self.cell_size {
                    log::warn!("cell_size clamped from {} to {}", self.cell_size, clamped);
                    self.cell_size = clamped;
                }
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ALIVE_CHANCE, WRAP_AROUND};

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_interval, 33.);
    }

    #[test]
    fn parses_options() {
        let config = Config::from_yaml_str(
            "algorithm: game_of_life\nwidth: 3\nseed: 7\noptions:\n  wrap_around: false\n  alive_chance: 0.5\n",
        )
        .unwrap();
        assert_eq!(config.algorithm, Algorithm::GameOfLife);
        assert_eq!(config.width, 3);
        assert_eq!(config.height, Config::DEFAULT_HEIGHT);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.options.boolean(WRAP_AROUND), Ok(false));
        assert_eq!(config.options.number(ALIVE_CHANCE), Ok(0.5));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::from_yaml_str("colour: red").is_err());
    }

    #[test]
    fn infinite_tick_interval_is_rejected() {
        let config = Config::from_yaml_str("tick_interval: .inf").unwrap();
        assert!(config.checked().is_err());
        let config = Config::from_yaml_str("tick_interval: 1.0e300").unwrap();
        assert!(config.checked().is_err());
    }

    #[test]
    fn cell_size_is_clamped() {
        let config = Config::from_yaml_str("cell_size: 50").unwrap();
        assert_eq!(config.checked().unwrap().cell_size, 20);
        let config = Config::from_yaml_str("cell_size: 0").unwrap();
        assert_eq!(config.checked().unwrap().cell_size, 2);
        let config = Config::default().checked().unwrap();
        assert_eq!(config, Config::default());
    }
}
