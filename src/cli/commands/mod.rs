//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod browse;
pub mod fetch;
pub mod init;
pub mod validate;
