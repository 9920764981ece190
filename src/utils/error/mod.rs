//! Error handling utilities
//!
//! This module provides the error type shared by configuration loading and validation.

pub mod error;

pub use error::*;
