//! Utility modules for filesim

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
