//! Dashboard service and view state

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use salonlite_domain::Result;

use super::ports::DashboardSource;
use super::range::{DateRange, RangePreset};
use super::summary::DashboardDisplay;
use crate::freshness::{ApplyOutcome, LoadState, RequestGeneration, RequestTicket};

#[derive(Debug, Default)]
pub struct DashboardView {
    preset: RangePreset,
    range: Option<DateRange>,
    generation: RequestGeneration,
    state: LoadState<DashboardDisplay>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preset(&self) -> RangePreset {
        self.preset
    }

    pub fn range(&self) -> Option<DateRange> {
        self.range
    }

    pub fn display(&self) -> Option<&DashboardDisplay> {
        self.state.ready()
    }

    pub fn state(&self) -> &LoadState<DashboardDisplay> {
        &self.state
    }

    pub fn begin_load(&mut self, preset: RangePreset, today: NaiveDate) -> (RequestTicket, DateRange) {
        let range = preset.range(today);
        self.preset = preset;
        self.range = Some(range);
        self.state = LoadState::Loading;
        (self.generation.issue(), range)
    }

    pub fn apply(&mut self, ticket: RequestTicket, result: Result<DashboardDisplay>) -> ApplyOutcome {
        if !self.generation.is_current(ticket) {
            tracing::debug!(preset = %self.preset, "dropping stale dashboard response");
            return ApplyOutcome::Stale;
        }
        self.state = match result {
            Ok(display) => LoadState::Ready(display),
            Err(err) => {
                tracing::warn!(preset = %self.preset, error = %err, "dashboard fetch failed");
                LoadState::Failed(err.to_string())
            }
        };
        ApplyOutcome::Applied
    }
}

pub struct DashboardService {
    source: Arc<dyn DashboardSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self { source }
    }

    pub async fn load(&self, range: DateRange) -> Result<DashboardDisplay> {
        let summary = self.source.summary(range.start, range.end).await?;
        Ok(DashboardDisplay::from_summary(&summary))
    }

    /// Switch `view` to `preset` and load it.
    pub async fn refresh(
        &self,
        view: &Mutex<DashboardView>,
        preset: RangePreset,
        today: NaiveDate,
    ) -> ApplyOutcome {
        let (ticket, range) = view.lock().begin_load(preset, today);
        let result = self.load(range).await;
        view.lock().apply(ticket, result)
    }
}
