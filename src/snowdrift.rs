use crate::builder::Builder;
use crate::error::Error;
use chrono::prelude::*;
use std::{
    hint::spin_loop,
    sync::{Arc, Mutex, PoisonError},
};

/// Granularity of the timestamp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Whole seconds since the start time.
    Seconds,
    /// Whole milliseconds since the start time.
    Milliseconds,
}

impl TimeUnit {
    /// Convert an instant to a tick count in this unit.
    pub(crate) fn ticks(self, time: DateTime<Utc>) -> i64 {
        match self {
            TimeUnit::Seconds => time.timestamp(),
            TimeUnit::Milliseconds => time.timestamp_millis(),
        }
    }
}

/// What `next_id` does when the clock reports a time earlier than the one
/// used for the previously issued ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockRegressionPolicy {
    /// Refuse to issue an ID and return [`Error::ClockMovedBackward`].
    Reject,
    /// Issue an ID stamped with the current (earlier) time. A regression
    /// spanning more than one time unit can then revisit a
    /// `(timestamp, sequence)` pair that was already handed out, so
    /// uniqueness holds only for regressions shorter than the sequence
    /// rollover window.
    Tolerate,
}

/// Internals of Snowdrift.
/// This struct is not exposed to the public.
#[derive(Debug)]
pub(crate) struct Internals {
    pub(crate) last_time: i64,
    pub(crate) sequence: u64,
}

/// SharedSnowdrift is shared between Snowdrift handles.
/// This struct is not exposed to the public.
pub(crate) struct SharedSnowdrift {
    pub(crate) start_time: i64,
    pub(crate) time_unit: TimeUnit,
    pub(crate) machine_id: u64,
    pub(crate) sequence_bits: u8,
    pub(crate) machine_id_bits: u8,
    pub(crate) max_sequence: u64,
    pub(crate) max_machine_id: u64,
    pub(crate) clock_policy: ClockRegressionPolicy,
    pub(crate) internals: Mutex<Internals>,
}

/// Snowdrift is a distributed unique ID generator.
/// It is thread-safe and can be cloned to be used in multiple threads.
///
/// An ID packs three fields, high bits first: elapsed time units since the
/// start time, a per-unit sequence counter, and the machine ID. With the
/// default layout (seconds, 22 sequence bits, 10 machine bits) the
/// timestamp field holds 32 bits of whole seconds since 2018-01-01, which
/// does not run out until the 2150s.
pub struct Snowdrift(pub(crate) Arc<SharedSnowdrift>);

impl Snowdrift {
    /// Create a new Snowdrift with the default configuration and a machine
    /// ID derived from the host's network interfaces.
    /// For custom configuration see [`builder`].
    ///
    /// [`builder`]: struct.Snowdrift.html#method.builder
    pub fn new() -> Result<Self, Error> {
        Builder::new().finalize()
    }

    /// Create a new Snowdrift with the default configuration and an
    /// explicit machine ID.
    ///
    /// Returns [`Error::InvalidMachineId`] if `machine_id` does not fit in
    /// the configured machine ID bits.
    pub fn with_machine_id(machine_id: u64) -> Result<Self, Error> {
        Builder::new().machine_id(machine_id).finalize()
    }

    /// Create a new [`Builder`] to construct a Snowdrift.
    ///
    /// [`Builder`]: struct.Builder.html
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Create a new Snowdrift with the given SharedSnowdrift.
    pub(crate) fn new_inner(shared: Arc<SharedSnowdrift>) -> Self {
        Self(shared)
    }

    /// The machine ID this generator stamps into every ID, whether it was
    /// passed in explicitly or derived from the host.
    pub fn machine_id(&self) -> u64 {
        self.0.machine_id
    }

    /// Generate the next unique ID.
    ///
    /// The whole read-modify-write of the counter pair runs under one lock;
    /// `last_time` and `sequence` must move together or two callers could
    /// compose the same ID. When the sequence space of the current time
    /// unit is exhausted the call spins on the clock until the next unit,
    /// so it blocks for at most one unit of real time.
    ///
    /// Fails with [`Error::ClockMovedBackward`] only under
    /// [`ClockRegressionPolicy::Reject`].
    pub fn next_id(&self) -> Result<u64, Error> {
        let shared = &self.0;
        // Nothing in this critical section can panic, so a poisoned lock
        // still guards a consistent counter pair.
        let mut internals = shared
            .internals
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut now = self.elapsed_time();
        if now < internals.last_time {
            match shared.clock_policy {
                ClockRegressionPolicy::Reject => {
                    return Err(Error::ClockMovedBackward {
                        last: internals.last_time,
                        now,
                    });
                }
                ClockRegressionPolicy::Tolerate => internals.last_time = now,
            }
        }

        // The counter rolls on across time units instead of resetting to
        // zero, so a restart or a short clock regression lands on a
        // different sequence value with high probability.
        internals.sequence = (internals.sequence + 1) & shared.max_sequence;
        if internals.sequence == 0 && now == internals.last_time {
            // Sequence space for this unit is used up. Spin until the
            // clock reaches the next unit, at most one unit of real time.
            while now <= internals.last_time {
                spin_loop();
                now = self.elapsed_time();
            }
        }
        internals.last_time = now;

        Ok((now as u64) << (shared.sequence_bits + shared.machine_id_bits)
            | internals.sequence << shared.machine_id_bits
            | shared.machine_id)
    }

    /// Break an ID produced by this generator back into its parts.
    pub fn decompose(&self, id: u64) -> DecomposedId {
        let shared = &self.0;
        DecomposedId {
            id,
            timestamp: id >> (shared.sequence_bits + shared.machine_id_bits),
            sequence: (id >> shared.machine_id_bits) & shared.max_sequence,
            machine_id: id & shared.max_machine_id,
        }
    }

    /// Current tick count relative to the start time.
    fn elapsed_time(&self) -> i64 {
        self.0.time_unit.ticks(Utc::now()) - self.0.start_time
    }
}

/// Returns a new `Snowdrift` referencing the same state as `self`.
/// This is used for concurrent use.
impl Clone for Snowdrift {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

/// The parts of a Snowdrift ID.
///
/// `timestamp` is in the generator's time unit, counted from its start
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecomposedId {
    pub id: u64,
    pub timestamp: u64,
    pub sequence: u64,
    pub machine_id: u64,
}
