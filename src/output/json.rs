//! JSON rendering for one-shot CLI output

use crate::flight_data::FlightRecord;

/// Pretty-printed JSON array keyed by the dataset's column names
pub fn to_json(records: &[FlightRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
