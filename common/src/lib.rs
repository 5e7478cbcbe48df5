pub mod config;
pub mod identifiers;
pub mod logger;

pub use config::{ConfigManager, Validate};
pub use identifiers::*;
