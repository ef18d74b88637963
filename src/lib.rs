//! Household ledger
//!
//! Records household income and expenses, keeps one spending limit per
//! month, and derives a month-by-month overview in which each month's
//! available balance carries into the next. Upcoming transactions get a
//! reminder on their due date.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, path management and logging setup
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, month anchors, cards)
//! - `storage`: JSON file storage layer
//! - `notify`: Notification center abstraction and backends
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `household` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use household_ledger::config::{paths::LedgerPaths, settings::Settings};
//! use household_ledger::services::OverviewService;
//! use household_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let cards = OverviewService::new(&storage, &settings)
//!     .load_monthly_cards(&chrono::Local::now().date_naive())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
