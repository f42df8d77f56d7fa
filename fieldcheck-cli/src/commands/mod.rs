//! Command implementations.

pub mod flags;
pub mod request;
