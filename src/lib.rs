//! Bookshelf Application Library
//!
//! This library provides the catalog module and registration helpers for the
//! bookshelf service.

pub mod modules;

/// Re-export commonly used types
pub use modules::*;
