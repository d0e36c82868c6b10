#![warn(clippy::all)]

use anyhow::{Context, Result};
use automata::{
    draw_list, global_options, Algorithm, Config, Field, RenderSpace, Simulation, TickLimiter,
    WRAP_AROUND,
};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(name = "automata")]
#[command(version)]
#[command(about = "Headless host loop for the Game of Life and Creatures automata")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a simulation for a number of generations
    Run {
        /// YAML run configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,

        #[arg(long)]
        width: Option<usize>,

        #[arg(long)]
        height: Option<usize>,

        #[arg(short, long)]
        generations: Option<u64>,

        #[arg(short, long)]
        seed: Option<u64>,

        /// Treat cells past the edges as missing instead of wrapping around
        #[arg(long)]
        no_wrap: bool,

        /// Print every generation as text
        #[arg(short, long)]
        print: bool,

        /// Keep generations `tick_interval` milliseconds apart
        #[arg(long)]
        animate: bool,
    },
    /// Print the options a configuration UI should offer
    Options {
        #[arg(short, long, value_enum, default_value_t = Algorithm::default())]
        algorithm: Algorithm,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            config,
            algorithm,
            width,
            height,
            generations,
            seed,
            no_wrap,
            print,
            animate,
        } => {
            let mut config = match config {
                Some(path) => Config::load(path)?,
                None => Config::default().checked()?,
            };
            if let Some(a) = algorithm {
                config.algorithm = a;
            }
            if let Some(w) = width {
                config.width = w;
            }
            if let Some(h) = height {
                config.height = h;
            }
            if let Some(g) = generations {
                config.generations = g;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if no_wrap {
                config.options.set(WRAP_AROUND, false.into());
            }
            clamp_options(&mut config);
            run(&config, print, animate)
        }
        Command::Options { algorithm } => {
            let schema = Field::options(algorithm).merged(&global_options());
            print!("{}", serde_yaml::to_string(&schema)?);
            Ok(())
        }
    }
}

/// Numbers outside the declared bounds are clamped before they reach the engine.
fn clamp_options(config: &mut Config) {
    let schema = Field::options(config.algorithm);
    let values: Vec<_> = config
        .options
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();
    for (name, value) in values {
        if let Some(spec) = schema.get(&name) {
            let clamped = spec.clamp(value.clone());
            if clamped != value {
                log::warn!("option {} clamped from {:?} to {:?}", name, value, clamped);
                config.options.set(&name, clamped);
            }
        }
    }
}

fn run(config: &Config, print: bool, animate: bool) -> Result<()> {
    let mut sim = Simulation::from_config(config).context("cannot start simulation")?;
    log::info!(
        "{} field {}x{}, {} generations",
        config.algorithm,
        config.width,
        config.height,
        config.generations
    );

    let report_every = (config.generations / 10).max(1);
    let mut limiter = TickLimiter::from_millis(config.tick_interval)
        .with_context(|| format!("tick_interval {} is out of range", config.tick_interval))?;
    let space = RenderSpace::new(
        (config.width as u64 * config.cell_size as u64) as f64,
        (config.height as u64 * config.cell_size as u64) as f64,
        config.cell_size,
    );
    let timer = Instant::now();
    for i in 0..config.generations {
        if print {
            println!("{}", sim.field());
            log::debug!(
                "{} rects on {}x{} px",
                draw_list(sim.field().render_cells(), &space, config.cell_size).len(),
                space.width,
                space.height
            );
        }

        let tick = Instant::now();
        sim.step()
            .with_context(|| format!("step failed at generation {}", sim.generation()))?;
        let duration = if animate {
            limiter.delay()
        } else {
            tick.elapsed()
        };
        sim.record_tick(duration);

        if (i + 1) % report_every == 0 {
            log::info!(
                "generation {}: {} alive",
                sim.generation(),
                sim.field().population().alive
            );
        }
    }
    if print {
        println!("{}", sim.field());
    }

    log::info!("finished in {:.2}s", timer.elapsed().as_secs_f64());
    for stat in sim.stats() {
        println!("{}: {}", stat.name, stat.value);
    }
    Ok(())
}
