//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod middleware;
pub mod routes;

pub mod builder;
mod handlers;
pub mod server;
pub mod state;
pub mod types;


pub use builder::{ServerBuilder, run_server};
pub use server::HttpServer;
pub use state::AppState;
