use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::config::{
    Config, DEFAULT_INTERVAL_MAX, DEFAULT_INTERVAL_MIN, INTERVAL_MAX, INTERVAL_MIN,
};

/// Picks the delay before the next focus check, uniformly from `[min, max]`.
pub struct IntervalGenerator<R = StdRng> {
    min: u64,
    max: u64,
    rng: R,
}

impl IntervalGenerator<StdRng> {
    pub fn from_config(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> IntervalGenerator<R> {
    pub fn with_rng(config: &Config, rng: R) -> Self {
        let min = config.get_secs(INTERVAL_MIN, DEFAULT_INTERVAL_MIN);
        let mut max = config.get_secs(INTERVAL_MAX, DEFAULT_INTERVAL_MAX);

        // An inverted range has no valid sample; pin it to min.
        if max < min {
            warn!(min, max, "{INTERVAL_MAX} is below {INTERVAL_MIN}, every interval will be {min}s");
            max = min;
        }

        Self { min, max, rng }
    }

    pub fn bounds(&self) -> (u64, u64) {
        (self.min, self.max)
    }

    pub fn interval_seconds(&mut self) -> u64 {
        debug!("Interval range: {} to {} seconds", self.min, self.max);
        let seconds = self.rng.random_range(self.min..=self.max);
        debug!("Next prompt in {seconds} seconds");
        seconds
    }
}
