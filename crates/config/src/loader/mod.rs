//! Configuration loading: environment, local vars file, secret backend.

mod builder;
mod env;
mod error;
mod local;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
