//! Formatted terminal output.
//!
//! Formatting is kept in one place so:
//! - the calendar/model code stays clean and testable
//! - output changes are localized
//!
//! Labels use the stamp's local wall-clock time; on a fall-back day the same
//! label legitimately appears twice, for two distinct real instants.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::domain::{PriceSeries, PriceTable};

/// Local-time label convention shared by all output forms.
const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn stamp_label(stamp: &DateTime<Tz>) -> String {
    stamp.format(STAMP_FORMAT).to_string()
}

/// One `label: price` line per point.
pub fn format_series(series: &PriceSeries) -> String {
    let mut out = String::new();
    for point in &series.points {
        out.push_str(&format!("{}: {:.2}\n", stamp_label(&point.stamp), point.price));
    }
    out
}

/// Fixed-width table with one column per commodity.
pub fn format_table(table: &PriceTable) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<16}", "timestamp"));
    for column in &table.columns {
        out.push_str(&format!(" {:>10}", column.commodity.as_str()));
    }
    out.push('\n');

    for (row, stamp) in table.stamps.iter().enumerate() {
        out.push_str(&format!("{:<16}", stamp_label(stamp)));
        for column in &table.columns {
            out.push_str(&format!(" {:>10.2}", column.prices[row]));
        }
        out.push('\n');
    }

    out
}

/// Plain price list for the uniform random generator.
pub fn format_prices(prices: &[f64]) -> String {
    let parts: Vec<String> = prices.iter().map(|p| format!("{p:.2}")).collect();
    format!("[{}]", parts.join(", "))
}
