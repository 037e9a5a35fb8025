use serde::Serialize;
use std::path::PathBuf;

use crate::columns::REQUIRED_COLUMNS;

/// One row of the cleaned output. Every field was non-null in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CleanedRecord {
    #[serde(rename = "Air Carrier Delay")]
    pub air_carrier_delay: f64,
    #[serde(rename = "Aircraft Arriving Late")]
    pub aircraft_arriving_late: f64,
    #[serde(rename = "National Aviation System Delay")]
    pub national_aviation_system_delay: f64,
    #[serde(rename = "Security Delay")]
    pub security_delay: f64,
}

impl CleanedRecord {
    /// Column names in serialization order.
    pub const HEADERS: [&'static str; 4] = REQUIRED_COLUMNS;

    pub fn values(&self) -> [f64; 4] {
        [
            self.air_carrier_delay,
            self.aircraft_arriving_late,
            self.national_aviation_system_delay,
            self.security_delay,
        ]
    }
}

/// Counts and paths for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub detected_columns: usize,
    pub stored_columns: usize,
    pub stored_rows: usize,
    pub kept_rows: usize,
    pub output: PathBuf,
}

impl RunSummary {
    pub fn dropped_rows(&self) -> usize {
        self.stored_rows.saturating_sub(self.kept_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_follow_header_order() {
        let record = CleanedRecord {
            air_carrier_delay: 1.0,
            aircraft_arriving_late: 2.0,
            national_aviation_system_delay: 3.0,
            security_delay: 4.0,
        };
        assert_eq!(record.values(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(CleanedRecord::HEADERS[3], "Security Delay");
    }

    #[test]
    fn test_dropped_rows() {
        let summary = RunSummary {
            stored_rows: 13,
            kept_rows: 11,
            ..Default::default()
        };
        assert_eq!(summary.dropped_rows(), 2);
    }
}
