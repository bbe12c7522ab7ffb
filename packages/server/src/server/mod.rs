// HTTP server setup (Axum + server-rendered HTML)
pub mod app;
pub mod routes;

pub use app::*;
