pub mod config;
pub mod error;

pub use config::{Config, ServerConfig, SolanaConfig};
pub use error::{Error, Result};
