//! A distributed, time-ordered unique ID generator based on [Twitter's Snowflake].
//!
//! Each generated ID is a 64-bit integer packing, from high bits to low,
//! the elapsed time units since a fixed start time, a per-unit sequence
//! counter and a machine ID. IDs are roughly increasing over time and need
//! no coordination between instances: as long as concurrently running
//! generators are constructed with distinct machine IDs, their IDs never
//! collide.
//!
//! The default layout matches the second-granularity scheme this crate
//! grew out of: 32 bits of whole seconds since 2018-01-01T00:00:00Z, a
//! 22-bit sequence and a 10-bit machine ID. 32 bits of seconds last ~136
//! years from the start time. Granularity, bit widths, start time and the
//! clock-regression policy are all configurable through the builder.
//!
//! ## Quickstart
//!
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! snowdrift = "0.1"
//! ```
//!
//! Use the library like this:
//!
//! ```
//! use snowdrift::Snowdrift;
//!
//! let sd = Snowdrift::with_machine_id(1).unwrap();
//! let next_id = sd.next_id().unwrap();
//! println!("{}", next_id);
//! ```
//!
//! `Snowdrift::new()` derives the machine ID from the host's network
//! interfaces instead, falling back to OS entropy when none can be read.
//!
//! ## Custom configuration
//!
//! ```
//! use snowdrift::{ClockRegressionPolicy, Snowdrift, TimeUnit};
//!
//! let sd = Snowdrift::builder()
//!     .machine_id(42)
//!     .time_unit(TimeUnit::Milliseconds)
//!     .sequence_bits(12)
//!     .machine_id_bits(10)
//!     .clock_regression_policy(ClockRegressionPolicy::Reject)
//!     .finalize()
//!     .unwrap();
//! let next_id = sd.next_id().unwrap();
//! println!("{}", next_id);
//! ```
//!
//! When sizing a custom layout, pick widths whose timestamp section
//! (`64 - sequence_bits - machine_id_bits` bits of the chosen unit) covers
//! the intended deployment lifetime.
//!
//! ## Concurrent use
//!
//! Snowdrift is thread-safe. `clone` it before moving to another thread:
//! ```
//! use snowdrift::Snowdrift;
//! use std::thread;
//!
//! let sd = Snowdrift::with_machine_id(1).unwrap();
//!
//! let mut children = Vec::new();
//! for _ in 0..10 {
//!     let thread_sd = sd.clone();
//!     children.push(thread::spawn(move || {
//!         println!("{}", thread_sd.next_id().unwrap());
//!     }));
//! }
//!
//! for child in children {
//!     child.join().unwrap();
//! }
//! ```
//!
//! ## Clock regressions
//!
//! With [`ClockRegressionPolicy::Reject`] a call made while the clock
//! reads earlier than the previously issued ID fails with
//! [`Error::ClockMovedBackward`]. The default
//! [`ClockRegressionPolicy::Tolerate`] keeps issuing IDs stamped with the
//! current time; the rolling, entropy-seeded sequence counter makes a
//! repeat of an already-issued `(timestamp, sequence)` pair unlikely but
//! not impossible when the regression spans more than one time unit.
//!
//! [Twitter's Snowflake]: https://blog.twitter.com/2010/announcing-snowflake
#![doc(html_root_url = "https://docs.rs/snowdrift/*")]

mod builder;
mod error;
mod machine_id;
mod snowdrift;

pub use crate::snowdrift::*;
pub use builder::*;
pub use error::*;
