//! Common test utilities for authgate-rs
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::ProviderFactory;
//!
//! let provider = ProviderFactory::google("corp");
//! ```

pub mod fixtures;

pub use fixtures::{ConfigFactory, CredentialFile, ProviderFactory};
