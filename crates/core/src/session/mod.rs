//! Backend session handling

pub mod ports;
pub mod service;

pub use ports::SessionGateway;
pub use service::SessionService;
