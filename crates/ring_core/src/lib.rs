pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::ScenarioConfig;
pub use constants::*;
pub use error::{Result, ScenarioError};
pub use types::*;
