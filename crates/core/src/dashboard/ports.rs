//! Port interfaces for dashboard aggregates

use async_trait::async_trait;
use chrono::NaiveDate;
use salonlite_domain::{DashboardSummary, Result};

#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Aggregates over the inclusive day range
    async fn summary(&self, start: NaiveDate, end: NaiveDate) -> Result<DashboardSummary>;
}
