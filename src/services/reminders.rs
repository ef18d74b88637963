//! Reminder scheduling for upcoming transactions
//!
//! Every transaction dated today or later gets one reminder on its date at the
//! configured time of day. Scheduling is best-effort: failures reported by the
//! notification center are logged and counted, never returned.

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::models::{Transaction, TransactionId, TransactionType};
use crate::notify::{
    NotificationCenter, ReminderContent, ReminderId, ReminderRequest, ReminderTrigger,
};

/// What happened to a single transaction during scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Scheduled,
    SkippedPast,
    Failed,
}

/// Totals from a `schedule_all` pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub scheduled: usize,
    pub skipped_past: usize,
    pub failed: usize,
}

impl ScheduleSummary {
    fn record(&mut self, outcome: ScheduleOutcome) {
        match outcome {
            ScheduleOutcome::Scheduled => self.scheduled += 1,
            ScheduleOutcome::SkippedPast => self.skipped_past += 1,
            ScheduleOutcome::Failed => self.failed += 1,
        }
    }
}

/// Builds reminder requests and hands them to a notification center
pub struct ReminderScheduler<'a> {
    center: &'a dyn NotificationCenter,
    hour: u32,
    minute: u32,
    currency_symbol: String,
}

impl<'a> ReminderScheduler<'a> {
    pub fn new(center: &'a dyn NotificationCenter, settings: &Settings) -> Self {
        Self {
            center,
            hour: settings.reminder_hour,
            minute: settings.reminder_minute,
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    /// The request that would be submitted for `txn`
    pub fn request_for(&self, txn: &Transaction) -> ReminderRequest {
        let amount = txn.amount.format_with_symbol(&self.currency_symbol);
        let (title, body) = match txn.transaction_type {
            TransactionType::Income => (
                "Upcoming income".to_string(),
                format!("You will receive {} today: {}", amount, txn.title),
            ),
            TransactionType::Expense => (
                "Upcoming expense".to_string(),
                format!("You have {} to pay today: {}", amount, txn.title),
            ),
        };

        ReminderRequest {
            id: ReminderId::for_transaction(txn.id),
            trigger: ReminderTrigger::once(txn.date.date(), self.hour, self.minute),
            content: ReminderContent {
                title,
                body,
                sound: true,
            },
        }
    }

    /// Schedule one transaction unless it is dated before `now`
    pub fn schedule(&self, txn: &Transaction, now: NaiveDateTime) -> ScheduleOutcome {
        if txn.date < now {
            return ScheduleOutcome::SkippedPast;
        }

        let request = self.request_for(txn);
        let reminder_id = request.id.clone();
        match self.center.submit(request) {
            Ok(()) => {
                info!(reminder = %reminder_id, date = %txn.date.date(), "scheduled reminder");
                ScheduleOutcome::Scheduled
            }
            Err(e) => {
                warn!(reminder = %reminder_id, error = %e, "failed to schedule reminder");
                ScheduleOutcome::Failed
            }
        }
    }

    /// Reconcile reminders with the given transactions
    ///
    /// Resubmitting an already pending reminder replaces it, so running this
    /// on every startup is safe.
    pub fn schedule_all(&self, transactions: &[Transaction], now: NaiveDateTime) -> ScheduleSummary {
        let mut summary = ScheduleSummary::default();
        for txn in transactions {
            summary.record(self.schedule(txn, now));
        }
        summary
    }

    /// Drop the pending reminder for `id`, if any
    pub fn cancel(&self, id: TransactionId) {
        let reminder_id = ReminderId::for_transaction(id);
        if let Err(e) = self.center.cancel_pending(std::slice::from_ref(&reminder_id)) {
            warn!(reminder = %reminder_id, error = %e, "failed to cancel reminder");
        }
    }
}
