//! Customer registry domain service.

mod service;

pub use service::CustomerRegistryService;
