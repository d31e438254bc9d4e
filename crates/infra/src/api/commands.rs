//! Core port implementations over the REST API
//!
//! One adapter type serves every repository port so that a single session
//! (cookies plus CSRF token) backs all calls.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use salonlite_core::{
    AppointmentRepository, CustomerRepository, DashboardSource, SavedServiceRepository,
    ScheduleRepository, SessionGateway, TechnicianRepository,
};
use salonlite_domain::{
    Appointment, AppointmentDraft, AppointmentId, Credentials, Customer, CustomerDraft,
    CustomerId, DashboardSummary, NewScheduleOverride, Result, SalonError, SavedService,
    SavedServiceDraft, SavedServiceId, ScheduleOverride, SessionStatus, TechId, Technician,
    TechnicianDraft,
};
use tracing::{debug, instrument};

use super::client::ApiClient;
use super::endpoints;
use super::errors::ApiErrorCategory;

fn day(date: NaiveDate) -> [(&'static str, String); 1] {
    [(endpoints::DATE_PARAM, date.format("%Y-%m-%d").to_string())]
}

/// API commands for salon operations
#[derive(Clone)]
pub struct SalonApi {
    client: Arc<ApiClient>,
}

impl SalonApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl SessionGateway for SalonApi {
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    async fn login(&self, credentials: &Credentials) -> Result<()> {
        match self.client.post_unit(endpoints::LOGIN, Some(credentials)).await {
            Ok(()) => Ok(()),
            Err(err) if err.status() == Some(404) => {
                Err(SalonError::Auth("Invalid username or password".into()))
            }
            Err(err) if err.category() == ApiErrorCategory::Authentication => {
                Err(SalonError::Auth("Invalid username or password".into()))
            }
            Err(err) => Err(err.into()),
        }
    }

    #[instrument(skip(self))]
    async fn session_status(&self) -> Result<SessionStatus> {
        let status: SessionStatus = self.client.get(endpoints::SESSION_STATUS, &[]).await?;
        self.client.session().set_token(status.csrf_token.clone());
        debug!(has_token = status.csrf_token.is_some(), "session status refreshed");
        Ok(status)
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> Result<()> {
        let result = self.client.post_unit::<()>(endpoints::LOGOUT, None).await;
        self.client.session().clear();
        result.map_err(SalonError::from)
    }
}

#[async_trait]
impl TechnicianRepository for SalonApi {
    async fn list_technicians(&self) -> Result<Vec<Technician>> {
        Ok(self.client.get(endpoints::TECHNICIANS, &[]).await?)
    }

    async fn technicians_on(&self, date: NaiveDate) -> Result<Vec<Technician>> {
        Ok(self.client.get(endpoints::TECHNICIANS, &day(date)).await?)
    }

    async fn create_technician(&self, draft: &TechnicianDraft) -> Result<Technician> {
        Ok(self.client.post(endpoints::TECHNICIANS, draft).await?)
    }

    async fn update_technician(&self, id: TechId, draft: &TechnicianDraft) -> Result<Technician> {
        Ok(self.client.put(&endpoints::technician(id), draft).await?)
    }

    async fn service_history(&self, id: TechId) -> Result<Vec<Appointment>> {
        Ok(self.client.get(&endpoints::service_history(id), &[]).await?)
    }
}

#[async_trait]
impl ScheduleRepository for SalonApi {
    async fn list_overrides(&self) -> Result<Vec<ScheduleOverride>> {
        Ok(self.client.get(endpoints::SCHEDULES, &[]).await?)
    }

    async fn append_override(&self, entry: &NewScheduleOverride) -> Result<()> {
        let path = endpoints::technician_schedules(entry.tech_id);
        Ok(self.client.post_unit(&path, Some(entry)).await?)
    }
}

#[async_trait]
impl AppointmentRepository for SalonApi {
    async fn appointments_on(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        Ok(self.client.get(endpoints::APPOINTMENTS, &day(date)).await?)
    }

    async fn create_appointment(&self, draft: &AppointmentDraft) -> Result<Appointment> {
        Ok(self.client.post(endpoints::APPOINTMENTS, draft).await?)
    }

    async fn update_appointment(
        &self,
        id: AppointmentId,
        draft: &AppointmentDraft,
    ) -> Result<Appointment> {
        Ok(self.client.put(&endpoints::appointment(id), draft).await?)
    }
}

#[async_trait]
impl CustomerRepository for SalonApi {
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.client.get(endpoints::CUSTOMERS, &[]).await?)
    }

    async fn create_customer(&self, draft: &CustomerDraft) -> Result<Customer> {
        Ok(self.client.post(endpoints::CUSTOMERS, draft).await?)
    }

    async fn update_customer(&self, id: CustomerId, draft: &CustomerDraft) -> Result<Customer> {
        Ok(self.client.put(&endpoints::customer(id), draft).await?)
    }
}

#[async_trait]
impl SavedServiceRepository for SalonApi {
    async fn list_saved_services(&self) -> Result<Vec<SavedService>> {
        Ok(self.client.get(endpoints::SAVED_SERVICES, &[]).await?)
    }

    async fn create_saved_service(&self, draft: &SavedServiceDraft) -> Result<SavedService> {
        Ok(self.client.post(endpoints::SAVED_SERVICES, draft).await?)
    }

    async fn update_saved_service(
        &self,
        id: SavedServiceId,
        draft: &SavedServiceDraft,
    ) -> Result<SavedService> {
        Ok(self.client.put(&endpoints::saved_service(id), draft).await?)
    }
}

#[async_trait]
impl DashboardSource for SalonApi {
    async fn summary(&self, start: NaiveDate, end: NaiveDate) -> Result<DashboardSummary> {
        let query = [
            ("StartDate", start.format("%Y-%m-%d").to_string()),
            ("EndDate", end.format("%Y-%m-%d").to_string()),
        ];
        Ok(self.client.get(endpoints::DASHBOARD, &query).await?)
    }
}
