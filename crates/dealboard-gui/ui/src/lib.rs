pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod graphql;
