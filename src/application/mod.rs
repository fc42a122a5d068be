// Application layer - catalog store and derivation services
pub mod axis_service;
pub mod catalog_store;
pub mod dashboard_service;
pub mod distribution_service;
pub mod output_service;
pub mod series_service;
