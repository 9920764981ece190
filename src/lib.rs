//! # authgate-rs
//!
//! Startup validation for the identity providers of an authentication gateway.
//!
//! Before the gateway serves traffic, the configured providers are checked for
//! structural problems (missing ids, duplicate ids, missing client ids),
//! list-level conflicts, and provider-type preconditions such as Google
//! credential files or the Entra ID federated token file. Every problem is
//! reported in one pass as a human readable message.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use authgate_rs::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     for problem in config.problems() {
//!         eprintln!("{}", problem);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use config::models::{
    AuthenticationConfig, AuthenticationMethod, GatewayConfig, GoogleConfig,
    MicrosoftEntraIdConfig, ProviderConfig,
};
pub use config::validation::{
    Probe, ProviderRules, StaticProbe, SystemProbe, Validate, ValidationContext,
    validate_providers,
};
pub use utils::error::{GatewayError, Result};
