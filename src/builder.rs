use crate::error::Error;
use crate::machine_id;
use crate::snowdrift::{
    ClockRegressionPolicy, Internals, SharedSnowdrift, Snowdrift, TimeUnit,
};
use chrono::prelude::*;
use rand::{rngs::OsRng, Rng};
use std::sync::{Arc, Mutex};

/// A builder for building the [`Snowdrift`] generator.
///
/// [`Snowdrift`]: struct.Snowdrift.html
pub struct Builder {
    start_time: Option<DateTime<Utc>>,
    machine_id: Option<u64>,
    sequence_bits: u8,
    machine_id_bits: u8,
    time_unit: TimeUnit,
    clock_policy: ClockRegressionPolicy,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    /// Construct a new builder for the build of [`Snowdrift`].
    ///
    /// The defaults are second granularity, 22 sequence bits, 10 machine ID
    /// bits, a start time of 2018-01-01T00:00:00Z and the
    /// [`ClockRegressionPolicy::Tolerate`] policy. The timestamp occupies
    /// the remaining 32 high bits.
    ///
    /// [`Snowdrift`]: struct.Snowdrift.html
    pub fn new() -> Self {
        Self {
            start_time: None,
            machine_id: None,
            sequence_bits: 22,
            machine_id_bits: 10,
            time_unit: TimeUnit::Seconds,
            clock_policy: ClockRegressionPolicy::Tolerate,
        }
    }

    /// Set the start time, the instant timestamps are counted from.
    /// If the time is set later than the current time, `finalize` will fail.
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the machine ID.
    /// When no machine ID is set, `finalize` derives one from the host's
    /// network interfaces.
    pub fn machine_id(mut self, machine_id: u64) -> Self {
        self.machine_id = Some(machine_id);
        self
    }

    /// Set the bit length of the sequence number section.
    pub fn sequence_bits(mut self, sequence_bits: u8) -> Self {
        self.sequence_bits = sequence_bits;
        self
    }

    /// Set the bit length of the machine ID section.
    pub fn machine_id_bits(mut self, machine_id_bits: u8) -> Self {
        self.machine_id_bits = machine_id_bits;
        self
    }

    /// Set the granularity of the timestamp section.
    pub fn time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.time_unit = time_unit;
        self
    }

    /// Set how `next_id` reacts when the clock moves backwards.
    pub fn clock_regression_policy(mut self, policy: ClockRegressionPolicy) -> Self {
        self.clock_policy = policy;
        self
    }

    /// Finish building and create a Snowdrift instance.
    /// This method will return an error if validation of the configuration
    /// fails.
    pub fn finalize(self) -> Result<Snowdrift, Error> {
        if self.sequence_bits as u32 + self.machine_id_bits as u32 >= 64 {
            return Err(Error::InvalidBitLength(
                self.sequence_bits,
                self.machine_id_bits,
            ));
        }

        let start_time = if let Some(start_time) = self.start_time {
            if start_time > Utc::now() {
                return Err(Error::StartTimeAheadOfCurrentTime(start_time));
            }
            self.time_unit.ticks(start_time)
        } else {
            // Default start time
            self.time_unit
                .ticks(Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap())
        };

        let max_sequence = (1u64 << self.sequence_bits) - 1;
        let max_machine_id = (1u64 << self.machine_id_bits) - 1;

        let machine_id = match self.machine_id {
            Some(machine_id) => {
                if machine_id > max_machine_id {
                    return Err(Error::InvalidMachineId(machine_id, max_machine_id));
                }
                machine_id
            }
            None => machine_id::derive(max_machine_id),
        };

        let shared = Arc::new(SharedSnowdrift {
            start_time,
            time_unit: self.time_unit,
            machine_id,
            sequence_bits: self.sequence_bits,
            machine_id_bits: self.machine_id_bits,
            max_sequence,
            max_machine_id,
            clock_policy: self.clock_policy,
            internals: Mutex::new(Internals {
                last_time: 0,
                // Seeded from OS entropy so a restart hitting the same
                // time unit does not restart the counter at the same
                // value.
                sequence: OsRng.gen::<u64>() & max_sequence,
            }),
        });
        Ok(Snowdrift::new_inner(shared))
    }
}
