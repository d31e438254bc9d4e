//! Application context - dependency injection container

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use salonlite_core::{
    BoardGeometry, BoardService, BoardView, DashboardService, DashboardView, DirectoryService,
    ScheduleService, SessionService,
};
use salonlite_domain::{Config, Result};
use salonlite_infra::{config, ApiClient, ApiClientConfig, SalonApi};

/// Application context - holds all services and per-screen view state
pub struct AppContext {
    pub config: Config,
    /// Shared adapter; every service below talks through the same session.
    pub api: SalonApi,

    // Core services
    pub session: Arc<SessionService>,
    pub board: Arc<BoardService>,
    pub schedules: Arc<ScheduleService>,
    pub directory: Arc<DirectoryService>,
    pub dashboard: Arc<DashboardService>,

    // View state
    pub board_view: Mutex<BoardView>,
    pub dashboard_view: Mutex<DashboardView>,
}

impl AppContext {
    /// Build the context from the environment / config file.
    pub fn new() -> Result<Self> {
        let config = config::load()?;
        Self::new_with_config(config)
    }

    /// Build the context from an explicit configuration.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let client_config = ApiClientConfig::from_config(&config.api)?;
        let client = ApiClient::new(client_config)?;
        let api = SalonApi::new(Arc::new(client));
        let port = Arc::new(api.clone());

        let session = Arc::new(SessionService::new(port.clone()));
        let board = Arc::new(BoardService::new(port.clone(), port.clone()));
        let schedules = Arc::new(ScheduleService::new(port.clone()));
        let directory = Arc::new(DirectoryService::new(
            port.clone(),
            port.clone(),
            port.clone(),
            port.clone(),
        ));
        let dashboard = Arc::new(DashboardService::new(port));

        tracing::info!(base_url = %api.client().base_url(), "application context ready");

        Ok(Self {
            config,
            api,
            session,
            board,
            schedules,
            directory,
            dashboard,
            board_view: Mutex::new(BoardView::new(today())),
            dashboard_view: Mutex::new(DashboardView::new()),
        })
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.config.board.into()
    }
}

/// Local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
