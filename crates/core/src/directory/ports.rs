//! Port interfaces for customer, technician and catalog records

use async_trait::async_trait;
use chrono::NaiveDate;
use salonlite_domain::{
    Appointment, Customer, CustomerDraft, CustomerId, Result, SavedService, SavedServiceDraft,
    SavedServiceId, TechId, Technician, TechnicianDraft,
};

#[async_trait]
pub trait TechnicianRepository: Send + Sync {
    async fn list_technicians(&self) -> Result<Vec<Technician>>;

    /// Technicians scheduled to work on `date`
    async fn technicians_on(&self, date: NaiveDate) -> Result<Vec<Technician>>;

    async fn create_technician(&self, draft: &TechnicianDraft) -> Result<Technician>;

    async fn update_technician(&self, id: TechId, draft: &TechnicianDraft) -> Result<Technician>;

    /// Every appointment with a service performed by `id`
    async fn service_history(&self, id: TechId) -> Result<Vec<Appointment>>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    async fn create_customer(&self, draft: &CustomerDraft) -> Result<Customer>;

    async fn update_customer(&self, id: CustomerId, draft: &CustomerDraft) -> Result<Customer>;
}

#[async_trait]
pub trait SavedServiceRepository: Send + Sync {
    async fn list_saved_services(&self) -> Result<Vec<SavedService>>;

    async fn create_saved_service(&self, draft: &SavedServiceDraft) -> Result<SavedService>;

    async fn update_saved_service(
        &self,
        id: SavedServiceId,
        draft: &SavedServiceDraft,
    ) -> Result<SavedService>;
}
