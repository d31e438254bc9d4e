//! In-memory implementations of the core ports

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use parking_lot::Mutex;
use salonlite_core::{
    AppointmentRepository, CustomerRepository, DashboardSource, SavedServiceRepository,
    ScheduleRepository, SessionGateway, TechnicianRepository,
};
use salonlite_domain::{
    Appointment, AppointmentDraft, AppointmentId, Credentials, CsrfToken, Customer, CustomerDraft,
    CustomerId, DashboardSummary, NewScheduleOverride, Result as DomainResult, SalonError,
    SavedService, SavedServiceDraft, SavedServiceId, ScheduleOverride, SessionStatus, TechId,
    Technician, TechnicianDraft,
};

fn rejected() -> SalonError {
    SalonError::Rejected { status: 500, message: "write refused".into() }
}

/// Append-only override store stamping each entry one second after the last.
pub struct InMemorySchedules {
    entries: Mutex<Vec<ScheduleOverride>>,
    clock: Mutex<DateTime<Utc>>,
    fail_writes: AtomicBool,
}

impl InMemorySchedules {
    pub fn new(entries: Vec<ScheduleOverride>) -> Self {
        let start = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default();
        Self { entries: Mutex::new(entries), clock: Mutex::new(start), fail_writes: AtomicBool::new(false) }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn entries(&self) -> Vec<ScheduleOverride> {
        self.entries.lock().clone()
    }
}

#[async_trait]
impl ScheduleRepository for InMemorySchedules {
    async fn list_overrides(&self) -> DomainResult<Vec<ScheduleOverride>> {
        Ok(self.entries())
    }

    async fn append_override(&self, entry: &NewScheduleOverride) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(rejected());
        }
        let created_at = {
            let mut clock = self.clock.lock();
            *clock += Duration::seconds(1);
            *clock
        };
        self.entries.lock().push(ScheduleOverride {
            tech_id: entry.tech_id,
            from: entry.from,
            to: entry.to,
            available: entry.available,
            created_at,
        });
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTechnicians {
    technicians: Mutex<Vec<Technician>>,
    history: Mutex<HashMap<TechId, Vec<Appointment>>>,
    next_id: AtomicI64,
    fail_reads: AtomicBool,
}

impl InMemoryTechnicians {
    pub fn new(technicians: Vec<Technician>) -> Self {
        let next = technicians.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { technicians: Mutex::new(technicians), next_id: AtomicI64::new(next), ..Default::default() }
    }

    pub fn with_history(self, tech_id: TechId, appointments: Vec<Appointment>) -> Self {
        self.history.lock().insert(tech_id, appointments);
        self
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl TechnicianRepository for InMemoryTechnicians {
    async fn list_technicians(&self) -> DomainResult<Vec<Technician>> {
        Ok(self.technicians.lock().clone())
    }

    async fn technicians_on(&self, _date: NaiveDate) -> DomainResult<Vec<Technician>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(SalonError::Network("connection reset".into()));
        }
        Ok(self.technicians.lock().clone())
    }

    async fn create_technician(&self, draft: &TechnicianDraft) -> DomainResult<Technician> {
        let created = Technician {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: draft.name.clone(),
            email: Some(draft.email.clone()),
            phone: Some(draft.phone.clone()),
            info: Some(draft.info.clone()),
            address: Some(draft.address.clone()),
        };
        self.technicians.lock().push(created.clone());
        Ok(created)
    }

    async fn update_technician(&self, id: TechId, draft: &TechnicianDraft) -> DomainResult<Technician> {
        let mut technicians = self.technicians.lock();
        let existing = technicians
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| SalonError::NotFound(format!("technician {id}")))?;
        existing.name = draft.name.clone();
        existing.email = Some(draft.email.clone());
        Ok(existing.clone())
    }

    async fn service_history(&self, id: TechId) -> DomainResult<Vec<Appointment>> {
        Ok(self.history.lock().get(&id).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct InMemoryAppointments {
    appointments: Mutex<Vec<Appointment>>,
    next_id: AtomicI64,
}

impl InMemoryAppointments {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        let next = appointments.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self { appointments: Mutex::new(appointments), next_id: AtomicI64::new(next) }
    }

    pub fn all(&self) -> Vec<Appointment> {
        self.appointments.lock().clone()
    }

    fn record(id: AppointmentId, draft: &AppointmentDraft) -> Appointment {
        Appointment {
            id,
            date: draft.date,
            status: draft.status,
            total: draft.total.parse().ok(),
            payment_type: Some(draft.payment_type),
            customer_ref: None,
            customer: None,
            services: draft.services.clone(),
        }
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointments {
    async fn appointments_on(&self, date: NaiveDate) -> DomainResult<Vec<Appointment>> {
        Ok(self.appointments.lock().iter().filter(|a| a.date == date).cloned().collect())
    }

    async fn create_appointment(&self, draft: &AppointmentDraft) -> DomainResult<Appointment> {
        let created = Self::record(self.next_id.fetch_add(1, Ordering::SeqCst), draft);
        self.appointments.lock().push(created.clone());
        Ok(created)
    }

    async fn update_appointment(
        &self,
        id: AppointmentId,
        draft: &AppointmentDraft,
    ) -> DomainResult<Appointment> {
        let mut appointments = self.appointments.lock();
        let slot = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| SalonError::NotFound(format!("appointment {id}")))?;
        *slot = Self::record(id, draft);
        Ok(slot.clone())
    }
}

#[derive(Default)]
pub struct InMemoryCustomers {
    customers: Mutex<Vec<Customer>>,
}

impl InMemoryCustomers {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers: Mutex::new(customers) }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn list_customers(&self) -> DomainResult<Vec<Customer>> {
        Ok(self.customers.lock().clone())
    }

    async fn create_customer(&self, draft: &CustomerDraft) -> DomainResult<Customer> {
        let mut customers = self.customers.lock();
        let created = Customer {
            id: customers.len() as CustomerId + 1,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: Some(draft.email.clone()),
            phone: Some(draft.phone.clone()),
            address: None,
            info: None,
        };
        customers.push(created.clone());
        Ok(created)
    }

    async fn update_customer(&self, id: CustomerId, draft: &CustomerDraft) -> DomainResult<Customer> {
        let mut customers = self.customers.lock();
        let existing = customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| SalonError::NotFound(format!("customer {id}")))?;
        existing.first_name = draft.first_name.clone();
        existing.last_name = draft.last_name.clone();
        Ok(existing.clone())
    }
}

#[derive(Default)]
pub struct InMemoryCatalog {
    services: Mutex<Vec<SavedService>>,
}

impl InMemoryCatalog {
    pub fn new(services: Vec<SavedService>) -> Self {
        Self { services: Mutex::new(services) }
    }

    fn record(id: SavedServiceId, draft: &SavedServiceDraft) -> SavedService {
        SavedService {
            id,
            code: draft.code.clone(),
            name: draft.name.clone(),
            price: draft.price,
            duration_minutes: draft.duration_minutes,
            description: Some(draft.description.clone()),
        }
    }
}

#[async_trait]
impl SavedServiceRepository for InMemoryCatalog {
    async fn list_saved_services(&self) -> DomainResult<Vec<SavedService>> {
        Ok(self.services.lock().clone())
    }

    async fn create_saved_service(&self, draft: &SavedServiceDraft) -> DomainResult<SavedService> {
        let mut services = self.services.lock();
        let created = Self::record(services.len() as SavedServiceId + 1, draft);
        services.push(created.clone());
        Ok(created)
    }

    async fn update_saved_service(
        &self,
        id: SavedServiceId,
        draft: &SavedServiceDraft,
    ) -> DomainResult<SavedService> {
        let mut services = self.services.lock();
        let slot = services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SalonError::NotFound(format!("saved service {id}")))?;
        *slot = Self::record(id, draft);
        Ok(slot.clone())
    }
}

/// Returns the same summary for any range and remembers the last one asked for.
#[derive(Default)]
pub struct FixedDashboard {
    pub summary: DashboardSummary,
    pub last_range: Mutex<Option<(NaiveDate, NaiveDate)>>,
}

#[async_trait]
impl DashboardSource for FixedDashboard {
    async fn summary(&self, start: NaiveDate, end: NaiveDate) -> DomainResult<DashboardSummary> {
        *self.last_range.lock() = Some((start, end));
        Ok(self.summary.clone())
    }
}

/// Accepts one username/password pair.
pub struct FakeSessionGateway {
    username: String,
    password: String,
    token: Mutex<Option<CsrfToken>>,
}

impl FakeSessionGateway {
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: username.into(), password: password.into(), token: Mutex::new(None) }
    }
}

#[async_trait]
impl SessionGateway for FakeSessionGateway {
    async fn login(&self, credentials: &Credentials) -> DomainResult<()> {
        if credentials.username != self.username || credentials.password != self.password {
            return Err(SalonError::Auth("invalid credentials".into()));
        }
        *self.token.lock() = Some(CsrfToken::new("csrf-test-token"));
        Ok(())
    }

    async fn session_status(&self) -> DomainResult<SessionStatus> {
        Ok(SessionStatus { csrf_token: self.token.lock().clone() })
    }

    async fn logout(&self) -> DomainResult<()> {
        *self.token.lock() = None;
        Ok(())
    }
}
