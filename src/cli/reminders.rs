//! Reminder CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::reminder::format_reminder_list;
use crate::error::{LedgerError, LedgerResult};
use crate::notify::{FileNotificationCenter, NotificationCenter, SchedulingError};
use crate::services::ReminderScheduler;
use crate::storage::Storage;

/// Reminder subcommands
#[derive(Subcommand)]
pub enum ReminderCommands {
    /// Schedule reminders for every upcoming transaction
    Sync,
    /// Show pending reminders
    List,
    /// Deliver reminders that are due now
    Due,
}

fn center_error(e: SchedulingError) -> LedgerError {
    LedgerError::Storage(format!("Reminder store unavailable: {}", e))
}

/// Handle a reminder command
pub fn handle_reminder_command(
    storage: &Storage,
    settings: &Settings,
    center: &FileNotificationCenter,
    cmd: ReminderCommands,
) -> LedgerResult<()> {
    let now = Local::now().naive_local();

    match cmd {
        ReminderCommands::Sync => {
            let scheduler = ReminderScheduler::new(center, settings);
            let transactions = storage.transactions.get_all()?;
            let summary = scheduler.schedule_all(&transactions, now);

            println!(
                "Scheduled {} reminder(s), skipped {} past transaction(s)",
                summary.scheduled, summary.skipped_past
            );
            if summary.failed > 0 {
                println!(
                    "{} reminder(s) could not be scheduled (notifications enabled: {})",
                    summary.failed, settings.notifications_enabled
                );
            }
        }

        ReminderCommands::List => {
            let pending = center.pending().map_err(center_error)?;
            print!("{}", format_reminder_list(&pending));
        }

        ReminderCommands::Due => {
            let due = center.take_due(now).map_err(center_error)?;
            if due.is_empty() {
                println!("Nothing due.");
            }
            for reminder in due {
                println!("{}", reminder.content.title);
                println!("  {}", reminder.content.body);
            }
        }
    }

    Ok(())
}
