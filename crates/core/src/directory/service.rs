//! Directory service - customers, technicians and the saved-service catalog

use std::sync::Arc;

use chrono::NaiveDate;
use salonlite_domain::{
    Customer, CustomerDraft, CustomerId, NewScheduleOverride, Result, SavedService,
    SavedServiceDraft, SavedServiceId, TechId, Technician, TechnicianDraft,
};

use super::history::HistoryView;
use super::ports::{CustomerRepository, SavedServiceRepository, TechnicianRepository};
use crate::availability::ports::ScheduleRepository;

pub struct DirectoryService {
    technicians: Arc<dyn TechnicianRepository>,
    customers: Arc<dyn CustomerRepository>,
    catalog: Arc<dyn SavedServiceRepository>,
    schedules: Arc<dyn ScheduleRepository>,
}

impl DirectoryService {
    pub fn new(
        technicians: Arc<dyn TechnicianRepository>,
        customers: Arc<dyn CustomerRepository>,
        catalog: Arc<dyn SavedServiceRepository>,
        schedules: Arc<dyn ScheduleRepository>,
    ) -> Self {
        Self { technicians, customers, catalog, schedules }
    }

    pub async fn technicians(&self) -> Result<Vec<Technician>> {
        self.technicians.list_technicians().await
    }

    pub async fn customers(&self) -> Result<Vec<Customer>> {
        self.customers.list_customers().await
    }

    pub async fn saved_services(&self) -> Result<Vec<SavedService>> {
        self.catalog.list_saved_services().await
    }

    /// Create a technician; with `open_schedule` every date is opened for
    /// the new id straight away.
    ///
    /// A failed open-all is logged and does not undo the creation.
    pub async fn create_technician(
        &self,
        draft: &TechnicianDraft,
        open_schedule: bool,
    ) -> Result<Technician> {
        let created = self.technicians.create_technician(draft).await?;
        tracing::info!(tech_id = created.id, open_schedule, "technician created");

        if open_schedule {
            let entry = NewScheduleOverride::all_dates(created.id, true);
            if let Err(err) = self.schedules.append_override(&entry).await {
                tracing::warn!(tech_id = created.id, error = %err, "opening new technician's schedule failed");
            }
        }
        Ok(created)
    }

    pub async fn update_technician(
        &self,
        id: TechId,
        draft: &TechnicianDraft,
    ) -> Result<Technician> {
        let updated = self.technicians.update_technician(id, draft).await?;
        tracing::info!(tech_id = id, "technician updated");
        Ok(updated)
    }

    /// Appointments `id` has worked, split around `today`.
    pub async fn technician_history(&self, id: TechId, today: NaiveDate) -> Result<HistoryView> {
        let appointments = self.technicians.service_history(id).await?;
        Ok(HistoryView::new(appointments, today))
    }

    pub async fn save_customer(
        &self,
        existing: Option<CustomerId>,
        draft: &CustomerDraft,
    ) -> Result<Customer> {
        let saved = match existing {
            Some(id) => self.customers.update_customer(id, draft).await?,
            None => self.customers.create_customer(draft).await?,
        };
        tracing::info!(customer_id = saved.id, created = existing.is_none(), "customer saved");
        Ok(saved)
    }

    pub async fn save_saved_service(
        &self,
        existing: Option<SavedServiceId>,
        draft: &SavedServiceDraft,
    ) -> Result<SavedService> {
        let saved = match existing {
            Some(id) => self.catalog.update_saved_service(id, draft).await?,
            None => self.catalog.create_saved_service(draft).await?,
        };
        tracing::info!(service_id = saved.id, code = %saved.code, "saved service stored");
        Ok(saved)
    }
}
