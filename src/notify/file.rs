//! Notification center persisted to a JSON file
//!
//! The `household` binary has no system notification daemon to talk to, so
//! pending reminders live in `reminders.json` and are delivered by
//! `household reminders due`, which takes every reminder whose trigger time
//! has passed.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use super::{NotificationCenter, ReminderId, ReminderRequest, SchedulingError};
use crate::error::LedgerResult;
use crate::storage::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ReminderData {
    #[serde(default)]
    pending: Vec<ReminderRequest>,
}

/// Pending reminders kept on disk
pub struct FileNotificationCenter {
    path: PathBuf,
    enabled: bool,
    unavailable: Option<String>,
    pending: RwLock<BTreeMap<ReminderId, ReminderRequest>>,
}

fn poisoned(e: impl std::fmt::Display) -> SchedulingError {
    SchedulingError::Service(format!("reminder state poisoned: {}", e))
}

impl FileNotificationCenter {
    /// Open the center, loading any reminders already pending
    ///
    /// With `enabled == false` new submissions fail with `PermissionDenied`;
    /// cancellation and delivery keep working.
    pub fn open(path: PathBuf, enabled: bool) -> LedgerResult<Self> {
        let data: ReminderData = read_json(&path)?;
        let pending = data
            .pending
            .into_iter()
            .map(|request| (request.id.clone(), request))
            .collect();

        Ok(Self {
            path,
            enabled,
            unavailable: None,
            pending: RwLock::new(pending),
        })
    }

    /// A center that rejects every call with `SchedulingError::Service`
    ///
    /// Nothing is read from or written to `path`.
    pub fn unavailable(path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            path,
            enabled: false,
            unavailable: Some(reason.into()),
            pending: RwLock::new(BTreeMap::new()),
        }
    }

    /// Open the center, or fall back to an unavailable one if the store
    /// cannot be loaded
    pub fn open_or_unavailable(path: PathBuf, enabled: bool) -> Self {
        match Self::open(path.clone(), enabled) {
            Ok(center) => center,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "reminder store unavailable");
                Self::unavailable(path, e.to_string())
            }
        }
    }

    fn check_available(&self) -> Result<(), SchedulingError> {
        match &self.unavailable {
            Some(reason) => Err(SchedulingError::Service(reason.clone())),
            None => Ok(()),
        }
    }

    fn persist(&self, pending: &BTreeMap<ReminderId, ReminderRequest>) -> Result<(), SchedulingError> {
        let data = ReminderData {
            pending: pending.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &data).map_err(|e| SchedulingError::Service(e.to_string()))
    }

    /// Deliver every reminder due at or before `now`
    ///
    /// Delivered reminders leave the pending set; this is the only way a
    /// reminder becomes fired.
    pub fn take_due(&self, now: NaiveDateTime) -> Result<Vec<ReminderRequest>, SchedulingError> {
        self.check_available()?;
        let mut pending = self.pending.write().map_err(poisoned)?;

        let due_ids: Vec<ReminderId> = pending
            .values()
            .filter(|r| r.trigger.fire_at().is_some_and(|at| at <= now))
            .map(|r| r.id.clone())
            .collect();
        if due_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut remaining = pending.clone();
        let due: Vec<ReminderRequest> = due_ids
            .iter()
            .filter_map(|id| remaining.remove(id))
            .collect();

        self.persist(&remaining)?;
        *pending = remaining;
        debug!(count = due.len(), "delivered due reminders");
        Ok(due)
    }
}

impl NotificationCenter for FileNotificationCenter {
    fn submit(&self, request: ReminderRequest) -> Result<(), SchedulingError> {
        self.check_available()?;
        if !self.enabled {
            return Err(SchedulingError::PermissionDenied);
        }
        let mut pending = self.pending.write().map_err(poisoned)?;
        let mut updated = pending.clone();
        updated.insert(request.id.clone(), request);
        self.persist(&updated)?;
        *pending = updated;
        Ok(())
    }

    fn cancel_pending(&self, ids: &[ReminderId]) -> Result<(), SchedulingError> {
        self.check_available()?;
        let mut pending = self.pending.write().map_err(poisoned)?;
        if !ids.iter().any(|id| pending.contains_key(id)) {
            return Ok(());
        }
        let mut updated = pending.clone();
        for id in ids {
            updated.remove(id);
        }
        self.persist(&updated)?;
        *pending = updated;
        Ok(())
    }

    fn pending(&self) -> Result<Vec<ReminderRequest>, SchedulingError> {
        self.check_available()?;
        let pending = self.pending.read().map_err(poisoned)?;
        Ok(pending.values().cloned().collect())
    }
}
