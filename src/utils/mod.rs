//! Project-specific utilities live here.

use time::OffsetDateTime;
use uuid::{Timestamp, Uuid};

/// Formats a shared log prefix for project logs.
pub fn log_prefix(module: &str) -> String {
    format!("shelf::{module}")
}

/// A fresh, time-ordered id for records synthesized on the fallback path.
pub fn fresh_id() -> String {
    Uuid::new_v7(Timestamp::now(uuid::NoContext)).to_string()
}

pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
