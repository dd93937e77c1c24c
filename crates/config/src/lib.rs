//! Configuration management for the Hudu API client.
//!
//! This crate resolves the API key, instance domain and API version from
//! explicit values, a `.env` file and the process environment, and derives
//! the base URL every request is built from.

pub mod constants;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::Config;
