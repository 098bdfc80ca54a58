//! Common utilities and types for tagtrans

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{Result, TagTransError};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
