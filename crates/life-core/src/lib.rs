//! Shared types for the Life simulation: cell states, configuration, the
//! error taxonomy, and seed-file parsing.

pub mod config;
pub mod error;
pub mod seed;
pub mod types;

pub use config::*;
pub use error::{Error, Result};
pub use seed::Seed;
pub use types::*;
