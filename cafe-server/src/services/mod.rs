//! Services - long-lived application services and the HTTP app assembly

pub mod app;
pub mod catalog_service;

pub use catalog_service::CatalogService;
