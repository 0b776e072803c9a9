//! Local HTTP server module
//!
//! Exposes the aggregate statistics over HTTP on 127.0.0.1:{port}.

mod config;
mod handlers;
mod server;

pub use config::{ServerConfig, DEFAULT_DATABASE_FILENAME, DEFAULT_PORT};
pub use handlers::outcome_response;
pub use server::{ReportServer, ServerHandle};
