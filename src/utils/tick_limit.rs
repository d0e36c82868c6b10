use std::{
    thread::sleep,
    time::{Duration, Instant, TryFromFloatSecsError},
};

/// Paces the host loop so that generations are at least `interval` apart.
pub struct TickLimiter {
    interval: Duration,
    tick_timer: Instant,
}

impl TickLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            tick_timer: Instant::now(),
        }
    }

    /// Fails if `millis` does not fit into a [`Duration`].
    pub fn from_millis(millis: f64) -> Result<Self, TryFromFloatSecsError> {
        Duration::try_from_secs_f64(millis.max(0.) / 1000.).map(Self::new)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleeps out the rest of the current tick.
    ///
    /// Returns the full duration of the tick that just ended.
    pub fn delay(&mut self) -> Duration {
        let before_wait = self.tick_timer.elapsed();
        if self.interval > before_wait {
            sleep(self.interval - before_wait);
        }
        let tick = self.tick_timer.elapsed();
        self.tick_timer = Instant::now();
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::TickLimiter;
    use std::time::Duration;

    #[test]
    fn waits_at_least_the_interval() {
        let mut limiter = TickLimiter::from_millis(5.).unwrap();
        assert_eq!(limiter.interval(), Duration::from_millis(5));
        assert!(limiter.delay() >= Duration::from_millis(5));
    }

    #[test]
    fn negative_interval_does_not_wait() {
        let mut limiter = TickLimiter::from_millis(-10.).unwrap();
        assert_eq!(limiter.interval(), Duration::ZERO);
        limiter.delay();
    }

    #[test]
    fn huge_interval_is_an_error() {
        assert!(TickLimiter::from_millis(f64::INFINITY).is_err());
        assert!(TickLimiter::from_millis(1.0e300).is_err());
        assert!(TickLimiter::from_millis(f64::NAN).is_ok());
    }
}
