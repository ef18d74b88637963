//! Notification service abstraction
//!
//! Reminders are handed to a `NotificationCenter`, which owns them from then
//! on: it keeps them pending, delivers them when their trigger passes, and
//! drops them on cancellation. Submitting a request whose id is already
//! pending replaces the earlier request.
//!
//! Two centers ship with the crate:
//!
//! - `InMemoryNotificationCenter`: process-local, used by tests and embedders
//! - `FileNotificationCenter`: keeps pending reminders in `reminders.json`
//!   for the `household` binary

mod file;
mod memory;

pub use file::FileNotificationCenter;
pub use memory::InMemoryNotificationCenter;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::TransactionId;

const TRANSACTION_PREFIX: &str = "transaction_";

/// Identifier of a pending reminder
///
/// Derived from the transaction id alone, so scheduling the same transaction
/// twice targets the same reminder and cancellation needs nothing but the id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(String);

impl ReminderId {
    pub fn for_transaction(id: TransactionId) -> Self {
        Self(format!("{}{}", TRANSACTION_PREFIX, id))
    }

    /// Recover the transaction id, if this id follows the transaction scheme
    pub fn transaction_id(&self) -> Option<TransactionId> {
        self.0
            .strip_prefix(TRANSACTION_PREFIX)
            .and_then(|rest| rest.parse().ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar trigger: a local date and time of day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderTrigger {
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    pub repeats: bool,
}

impl ReminderTrigger {
    /// One-shot trigger on `date` at `hour:minute`
    pub fn once(date: NaiveDate, hour: u32, minute: u32) -> Self {
        Self {
            date,
            hour,
            minute,
            repeats: false,
        }
    }

    /// Local time the reminder fires; `None` for an impossible time of day
    pub fn fire_at(&self) -> Option<NaiveDateTime> {
        self.date.and_hms_opt(self.hour, self.minute, 0)
    }
}

/// Text shown when a reminder fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderContent {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub sound: bool,
}

/// A reminder as submitted to a notification center
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRequest {
    pub id: ReminderId,
    pub trigger: ReminderTrigger,
    pub content: ReminderContent,
}

/// Failures reported by a notification center
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    #[error("notification permission denied")]
    PermissionDenied,
    #[error("notification service error: {0}")]
    Service(String),
}

/// The platform notification service
pub trait NotificationCenter {
    /// Queue a request, replacing any pending request with the same id
    fn submit(&self, request: ReminderRequest) -> Result<(), SchedulingError>;

    /// Drop pending requests; unknown ids are ignored
    fn cancel_pending(&self, ids: &[ReminderId]) -> Result<(), SchedulingError>;

    /// Requests not yet delivered, ordered by id
    fn pending(&self) -> Result<Vec<ReminderRequest>, SchedulingError>;
}
