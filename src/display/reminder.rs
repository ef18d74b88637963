//! Pending reminder formatting

use crate::notify::ReminderRequest;

/// Format pending reminders, one per line
pub fn format_reminder_list(reminders: &[ReminderRequest]) -> String {
    if reminders.is_empty() {
        return "No pending reminders.\n".to_string();
    }

    let mut output = String::new();
    for reminder in reminders {
        let fires = reminder
            .trigger
            .fire_at()
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "(invalid time)".to_string());
        output.push_str(&format!(
            "{:20} {}  {}: {}\n",
            reminder.id, fires, reminder.content.title, reminder.content.body
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use crate::notify::{ReminderContent, ReminderId, ReminderTrigger};
    use chrono::NaiveDate;

    #[test]
    fn test_format_reminder_list() {
        let reminder = ReminderRequest {
            id: ReminderId::for_transaction(TransactionId::new(9)),
            trigger: ReminderTrigger::once(NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(), 8, 0),
            content: ReminderContent {
                title: "Upcoming expense".into(),
                body: "You have $10.00 to pay today: Gym".into(),
                sound: true,
            },
        };

        let formatted = format_reminder_list(&[reminder]);
        assert!(formatted.starts_with("transaction_9"));
        assert!(formatted.contains("2025-05-02 08:00"));
        assert!(formatted.contains("Gym"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_reminder_list(&[]), "No pending reminders.\n");
    }
}
