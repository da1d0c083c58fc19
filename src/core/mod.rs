pub mod config;
pub mod error;

pub use config::ResolverConfig;
pub use error::{EngineError, Result};
