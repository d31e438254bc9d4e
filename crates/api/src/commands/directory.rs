//! Customer, technician and saved-service commands

use chrono::NaiveDate;
use salonlite_core::forms::{CustomerForm, SavedServiceForm, TechnicianForm};
use salonlite_core::{DirectoryView, HistoryView};
use salonlite_domain::{Customer, CustomerId, Result, SavedService, TechId, Technician};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_logged, validation_failed};

pub async fn list_customers(ctx: &AppContext, query: &str) -> Result<DirectoryView<Customer>> {
    execute_logged("directory::list_customers", || async {
        let mut view = DirectoryView::new(ctx.directory.customers().await?);
        view.set_query(query);
        Ok(view)
    })
    .await
}

pub async fn list_technicians(ctx: &AppContext, query: &str) -> Result<DirectoryView<Technician>> {
    execute_logged("directory::list_technicians", || async {
        let mut view = DirectoryView::new(ctx.directory.technicians().await?);
        view.set_query(query);
        Ok(view)
    })
    .await
}

pub async fn list_saved_services(
    ctx: &AppContext,
    query: &str,
) -> Result<DirectoryView<SavedService>> {
    execute_logged("directory::list_saved_services", || async {
        let mut view = DirectoryView::new(ctx.directory.saved_services().await?);
        view.set_query(query);
        Ok(view)
    })
    .await
}

pub async fn technician_history(
    ctx: &AppContext,
    tech_id: TechId,
    today: NaiveDate,
) -> Result<HistoryView> {
    execute_logged("directory::technician_history", || {
        ctx.directory.technician_history(tech_id, today)
    })
    .await
}

/// Create (`existing == None`) or update a customer.
pub async fn save_customer(
    ctx: &AppContext,
    existing: Option<CustomerId>,
    form: &CustomerForm,
) -> Result<Customer> {
    execute_logged("directory::save_customer", || async {
        let draft = form.validate().map_err(validation_failed)?;
        ctx.directory.save_customer(existing, &draft).await
    })
    .await
}

/// Create (`existing == None`) or update a technician. New technicians get
/// every date opened when the form asks for it.
pub async fn save_technician(
    ctx: &AppContext,
    existing: Option<TechId>,
    form: &TechnicianForm,
) -> Result<Technician> {
    execute_logged("directory::save_technician", || async {
        let draft = form.validate().map_err(validation_failed)?;
        match existing {
            Some(id) => ctx.directory.update_technician(id, &draft).await,
            None => ctx.directory.create_technician(&draft, form.open_schedule).await,
        }
    })
    .await
}

/// Validate against the current catalog (codes must stay unique) and save.
pub async fn save_saved_service(ctx: &AppContext, form: &SavedServiceForm) -> Result<SavedService> {
    execute_logged("directory::save_saved_service", || async {
        let catalog = ctx.directory.saved_services().await?;
        let draft = form.validate(&catalog).map_err(validation_failed)?;
        ctx.directory.save_saved_service(form.editing(), &draft).await
    })
    .await
}
