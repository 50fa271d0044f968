//! Command implementations.

pub mod check;
pub mod get;
pub mod notify;
