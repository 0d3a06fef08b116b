//! Board/pipeline selection logic for the dealboard toolbar.
//!
//! Everything here is browser-free: the URL query string, the durable
//! key-value store and the three board queries come in as explicit
//! inputs (or trait objects), and every write goes back out through a
//! return value or a trait call. The `dealboard_gui_ui` crate wires
//! these pieces to `web_sys` and the GraphQL endpoint.

pub mod filters;
pub mod query_params;
pub mod reconcile;
pub mod router;
pub mod selection;
