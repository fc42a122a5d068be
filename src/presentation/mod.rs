// Presentation layer - HTTP surface for the rendering collaborator
pub mod app_state;
pub mod handlers;
