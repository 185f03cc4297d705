//! Engine types
//!
//! Counters kept by the table controller.

/// Statistics for a controller session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Page fetches issued for navigation
    pub pages_fetched: usize,
    /// Fetches that failed
    pub fetch_failures: usize,
    /// Alerts raised
    pub alerts: usize,
}

impl TableStats {
    /// Count a page fetch
    pub fn add_fetch(&mut self) {
        self.pages_fetched += 1;
    }

    /// Count a failed fetch
    pub fn add_failure(&mut self) {
        self.fetch_failures += 1;
    }

    /// Count an alert
    pub fn add_alert(&mut self) {
        self.alerts += 1;
    }
}
