//! Overview CLI command
//!
//! Prints the month-by-month cards around a reference month.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::settings::Settings;
use crate::display::card::format_card_table;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{MonthAnchor, MonthWindow};
use crate::services::OverviewService;
use crate::storage::Storage;

use super::transaction::parse_month_arg;

/// Overview options
#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// First month offset relative to the reference month (default from settings)
    #[arg(long, allow_hyphen_values = true)]
    pub from: Option<i32>,

    /// Last month offset relative to the reference month (default from settings)
    #[arg(long, allow_hyphen_values = true)]
    pub to: Option<i32>,

    /// Reference month (YYYY-MM), defaults to the current month
    #[arg(long)]
    pub reference: Option<String>,
}

impl OverviewArgs {
    /// The window to use, falling back to the configured bounds
    pub fn window(&self, settings: &Settings) -> LedgerResult<MonthWindow> {
        let start = self.from.unwrap_or(settings.window.start);
        let end = self.to.unwrap_or(settings.window.end);
        MonthWindow::new(start, end).ok_or_else(|| {
            LedgerError::Validation(format!(
                "Overview window start ({}) must not be after its end ({})",
                start, end
            ))
        })
    }

    /// First day of the reference month
    pub fn reference_date(&self) -> LedgerResult<NaiveDate> {
        let month = match &self.reference {
            Some(text) => parse_month_arg(text)?,
            None => MonthAnchor::of(&Local::now().date_naive()),
        };
        NaiveDate::from_ymd_opt(month.year(), month.month(), 1).ok_or_else(|| {
            LedgerError::Validation(format!("Month {} is out of range", month))
        })
    }
}

/// Handle the overview command
pub fn handle_overview_command(
    storage: &Storage,
    settings: &Settings,
    args: OverviewArgs,
) -> LedgerResult<()> {
    let window = args.window(settings)?;
    let reference = args.reference_date()?;

    let cards = OverviewService::new(storage, settings)
        .window(window)
        .load_monthly_cards(&reference)?;

    print!(
        "{}",
        format_card_table(&cards, &settings.currency_symbol, MonthAnchor::of(&reference))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_falls_back_to_settings() {
        let args = OverviewArgs {
            from: Some(-1),
            to: None,
            reference: None,
        };
        let window = args.window(&Settings::default()).unwrap();
        assert_eq!(window.start, -1);
        assert_eq!(window.end, 24);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let args = OverviewArgs {
            from: Some(3),
            to: Some(1),
            reference: None,
        };
        assert!(args.window(&Settings::default()).unwrap_err().is_validation());
    }

    #[test]
    fn test_reference_date_is_first_of_month() {
        let args = OverviewArgs {
            from: None,
            to: None,
            reference: Some("2025-02".into()),
        };
        assert_eq!(
            args.reference_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
    }
}
