//! Lifecycle instants shared by domain aggregates.

use chrono::{DateTime, Utc};

/// Read access to an aggregate's lifecycle instants.
pub trait Timestamped {
    /// Instant the aggregate was first constructed.
    fn created_at(&self) -> DateTime<Utc>;

    /// Instant of the most recent controlled mutation.
    fn updated_at(&self) -> DateTime<Utc>;
}
