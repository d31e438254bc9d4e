//! Customer, technician and saved-service listings

pub mod history;
pub mod ports;
pub mod search;
pub mod service;

pub use history::{HistoryTab, HistoryView};
pub use search::{filter, DirectoryView, Searchable};
pub use service::DirectoryService;
