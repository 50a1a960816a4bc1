//! Error handling for dashboard access control

mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{AccessError, Result};
