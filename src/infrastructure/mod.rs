// Infrastructure layer - configuration and catalog snapshot loading
pub mod catalog_loader;
pub mod config;
