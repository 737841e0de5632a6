//! Lap time logging
use super::{LogError, StatsLogger};

/// Per-step information carrying lap timing.
pub trait LapCounter {
    /// Number of laps completed so far.
    fn lap_count(&self) -> u64;
    /// Duration of the most recently completed lap.
    fn last_lap_time(&self) -> f64;
}

/// Logs lap times whenever the lap counter changes.
///
/// On a new lap with a positive duration, logs `time/lap_time` along with
/// `time/first_lap_time` for lap 1 or `time/second_lap_time` for any other lap,
/// then flushes the logger.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LapTimeLogger<L> {
    logger: L,
    last_lap_count: u64,
}

impl<L: StatsLogger> LapTimeLogger<L> {
    pub const fn new(logger: L) -> Self {
        Self {
            logger,
            last_lap_count: 0,
        }
    }

    /// The lap counter value of the last recorded lap.
    pub const fn last_lap_count(&self) -> u64 {
        self.last_lap_count
    }

    pub const fn logger(&self) -> &L {
        &self.logger
    }

    #[allow(clippy::missing_const_for_fn)] // false positive; destructor of L
    pub fn into_inner(self) -> L {
        self.logger
    }

    /// Observe the info from one environment step.
    ///
    /// # Args
    /// * `info` - Step info with the current lap counter and last lap time.
    /// * `global_step` - Step count associated with any logged values.
    ///
    /// # Returns
    /// Whether a new lap was recorded.
    pub fn observe<I: LapCounter + ?Sized>(
        &mut self,
        info: &I,
        global_step: u64,
    ) -> Result<bool, LogError> {
        let lap_count = info.lap_count();
        let lap_time = info.last_lap_time();
        // NaN durations are not positive
        if lap_count == self.last_lap_count || lap_time.is_nan() || lap_time <= 0.0 {
            return Ok(false);
        }
        self.logger.log_scalar("time/lap_time", lap_time, global_step)?;
        let name = if lap_count == 1 {
            "time/first_lap_time"
        } else {
            "time/second_lap_time"
        };
        self.logger.log_scalar(name, lap_time, global_step)?;
        self.logger.flush()?;
        // Only a fully written lap counts as recorded
        self.last_lap_count = lap_count;
        Ok(true)
    }
}
