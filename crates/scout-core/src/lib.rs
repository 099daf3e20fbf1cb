pub mod config;
pub mod error;
pub mod types;

pub use config::{ChatConfig, ScoutConfig};
pub use error::{Result, ScoutError};
pub use types::*;
