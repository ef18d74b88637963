//! Configuration module for the household ledger
//!
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
