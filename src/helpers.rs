use chrono::{NaiveDateTime, Utc};

/// Current UTC time without offset, the format every timestamp column uses.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
