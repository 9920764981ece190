//! Configuration data models
//!
//! This module defines the configuration structures consumed by validation.

pub mod gateway;
pub mod provider;

pub use gateway::*;
pub use provider::*;
