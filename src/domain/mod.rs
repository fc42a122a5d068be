// Domain layer - catalog entities and chart-ready views
pub mod catalog;
pub mod charts;
pub mod dashboard;
pub mod error;
