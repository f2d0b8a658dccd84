//! HTTP 接入层

pub mod routes;

pub use routes::{build_router, serve, AppState};
