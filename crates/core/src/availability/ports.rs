//! Port interfaces for technician availability

use async_trait::async_trait;
use salonlite_domain::{NewScheduleOverride, Result, ScheduleOverride};

/// Append-only store of availability overrides
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Every override on record, all technicians
    async fn list_overrides(&self) -> Result<Vec<ScheduleOverride>>;

    /// Append one override. Existing ranges are never modified.
    async fn append_override(&self, entry: &NewScheduleOverride) -> Result<()>;
}
