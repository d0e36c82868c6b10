mod config;
mod format_int;
mod tick_limit;
mod topology;
mod traits;

pub use config::Config;
pub use format_int::NiceInt;
pub use tick_limit::TickLimiter;
pub use topology::{AxisResolver, Topology, MOORE_OFFSETS};
pub use traits::Rule;
