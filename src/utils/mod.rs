//! Utility modules for the gateway
//!
//! - **error**: Error type and result alias
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{GatewayError, Result};
