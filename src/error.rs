// Copyright 2024 the snowdrift developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("machine_id {0} is out of range, max is {1}")]
    InvalidMachineId(u64, u64),
    #[error(
        "invalid bit length configuration: sequence({0}) + machine({1}) must be less than 64"
    )]
    InvalidBitLength(u8, u8),
    #[error("start_time `{0}` is ahead of current time")]
    StartTimeAheadOfCurrentTime(DateTime<Utc>),
    #[error("clock moved backwards: last issued time unit {last}, current {now}")]
    ClockMovedBackward { last: i64, now: i64 },
}
