use chrono::NaiveDate;

/// Renders a resolved date as the text the widget displays. Implementations
/// must round-trip through the phrase parser at day granularity.
pub trait DateFormatter {
    fn format(&self, date: NaiveDate) -> String;
}

/// Canonical display form used across the dashboard, e.g. "March 03, 2024".
#[derive(Debug, Clone, Copy, Default)]
pub struct LongDateFormatter;

impl DateFormatter for LongDateFormatter {
    fn format(&self, date: NaiveDate) -> String {
        date.format("%B %d, %Y").to_string()
    }
}
