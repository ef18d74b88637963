//! Process-local notification center

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{NotificationCenter, ReminderId, ReminderRequest, SchedulingError};

/// Keeps pending reminders in memory
///
/// Build it with [`InMemoryNotificationCenter::denied`] to mimic a user who
/// refused notification permission: every submission then fails.
#[derive(Debug, Default)]
pub struct InMemoryNotificationCenter {
    pending: Mutex<BTreeMap<ReminderId, ReminderRequest>>,
    denied: bool,
    submissions: AtomicUsize,
}

fn poisoned(e: impl std::fmt::Display) -> SchedulingError {
    SchedulingError::Service(format!("notification state poisoned: {}", e))
}

impl InMemoryNotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A center that rejects every submission with `PermissionDenied`
    pub fn denied() -> Self {
        Self {
            denied: true,
            ..Self::default()
        }
    }

    /// Accepted submissions so far, replacements included
    pub fn submission_count(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    pub fn is_pending(&self, id: &ReminderId) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.contains_key(id))
            .unwrap_or(false)
    }
}

impl NotificationCenter for InMemoryNotificationCenter {
    fn submit(&self, request: ReminderRequest) -> Result<(), SchedulingError> {
        if self.denied {
            return Err(SchedulingError::PermissionDenied);
        }
        let mut pending = self.pending.lock().map_err(poisoned)?;
        pending.insert(request.id.clone(), request);
        self.submissions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn cancel_pending(&self, ids: &[ReminderId]) -> Result<(), SchedulingError> {
        let mut pending = self.pending.lock().map_err(poisoned)?;
        for id in ids {
            pending.remove(id);
        }
        Ok(())
    }

    fn pending(&self) -> Result<Vec<ReminderRequest>, SchedulingError> {
        let pending = self.pending.lock().map_err(poisoned)?;
        Ok(pending.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use crate::notify::{ReminderContent, ReminderTrigger};
    use chrono::NaiveDate;

    fn request(id: u64, title: &str) -> ReminderRequest {
        ReminderRequest {
            id: ReminderId::for_transaction(TransactionId::new(id)),
            trigger: ReminderTrigger::once(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(), 8, 0),
            content: ReminderContent {
                title: title.into(),
                body: String::new(),
                sound: true,
            },
        }
    }

    #[test]
    fn test_same_id_replaces() {
        let center = InMemoryNotificationCenter::new();
        center.submit(request(1, "first")).unwrap();
        center.submit(request(1, "second")).unwrap();

        let pending = center.pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].content.title, "second");
        assert_eq!(center.submission_count(), 2);
    }

    #[test]
    fn test_cancel_ignores_unknown_ids() {
        let center = InMemoryNotificationCenter::new();
        center.submit(request(1, "keep")).unwrap();
        center.submit(request(2, "drop")).unwrap();

        center
            .cancel_pending(&[
                ReminderId::for_transaction(TransactionId::new(2)),
                ReminderId::for_transaction(TransactionId::new(99)),
            ])
            .unwrap();

        assert!(center.is_pending(&ReminderId::for_transaction(TransactionId::new(1))));
        assert!(!center.is_pending(&ReminderId::for_transaction(TransactionId::new(2))));
    }

    #[test]
    fn test_denied_center_rejects() {
        let center = InMemoryNotificationCenter::denied();
        assert_eq!(
            center.submit(request(1, "x")),
            Err(SchedulingError::PermissionDenied)
        );
        assert!(center.pending().unwrap().is_empty());
        assert_eq!(center.submission_count(), 0);
    }
}
