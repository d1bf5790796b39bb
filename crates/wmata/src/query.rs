//! Query parameter building

use chrono::{Local, NaiveDate};

/// Date format expected by the bus schedule endpoints
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered query parameters for a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create an empty parameter list
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    #[must_use]
    pub(crate) fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    /// Append a boolean flag in the upstream `"true"`/`"false"` encoding
    #[must_use]
    pub(crate) fn with_flag(self, name: &'static str, value: bool) -> Self {
        self.with(name, bool_str(value))
    }

    /// Append a date, defaulting to today
    #[must_use]
    pub(crate) fn with_date(self, name: &'static str, date: Option<NaiveDate>) -> Self {
        self.with(name, format_date(date))
    }

    /// Look up the value of a parameter
    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Parameters as a slice, ready for `reqwest::RequestBuilder::query`
    #[must_use]
    pub(crate) fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

/// Convert bool to "true"/"false" str for query params
pub(crate) const fn bool_str(val: bool) -> &'static str {
    if val { "true" } else { "false" }
}

/// Format a date as `YYYY-MM-DD`, using today's local date when absent
#[must_use]
pub(crate) fn format_date(date: Option<NaiveDate>) -> String {
    date.unwrap_or_else(|| Local::now().date_naive())
        .format(DATE_FORMAT)
        .to_string()
}
