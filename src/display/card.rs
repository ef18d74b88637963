//! Monthly overview formatting
//!
//! Renders the card sequence as a table with a usage bar per month.

use crate::models::{Money, MonthAnchor, MonthBudgetCard};

const BAR_WIDTH: usize = 10;

/// Bar showing how much of a limit has been used
///
/// Blank when the month has no limit or nothing was spent; full when spending
/// reached or passed the limit.
pub fn format_usage_bar(used: Money, limit: Option<Money>, width: usize) -> String {
    let limit = match limit {
        Some(limit) if limit.minor_units() > 0 && used.minor_units() > 0 => limit,
        Some(limit) if limit.is_zero() && used.minor_units() > 0 => return "█".repeat(width),
        _ => return " ".repeat(width),
    };

    let ratio = used.minor_units() as f64 / limit.minor_units() as f64;
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One table row; `current` marks the reference month
pub fn format_card_row(card: &MonthBudgetCard, symbol: &str, current: bool) -> String {
    let marker = if current { ">" } else { " " };
    let limit = card
        .budget_limit
        .map(|l| l.format_with_symbol(symbol))
        .unwrap_or_else(|| "-".to_string());
    let flag = if card.is_over_budget() { " !" } else { "" };

    format!(
        "{} {:16} {:>12} {:>12} {} {:>14}{}",
        marker,
        card.label,
        card.used_value.format_with_symbol(symbol),
        limit,
        format_usage_bar(card.used_value, card.budget_limit, BAR_WIDTH),
        card.available_value.format_with_symbol(symbol),
        flag
    )
}

/// Format the overview table
pub fn format_card_table(cards: &[MonthBudgetCard], symbol: &str, reference: MonthAnchor) -> String {
    if cards.is_empty() {
        return "No months in the overview window.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:16} {:>12} {:>12} {:10} {:>14}\n",
        "Month", "Used", "Budget", "", "Available"
    ));
    output.push_str(&"─".repeat(70));
    output.push('\n');

    for card in cards {
        output.push_str(&format_card_row(card, symbol, card.date == reference));
        output.push('\n');
    }

    output
}
