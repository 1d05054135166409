//! Plain-text rendering of flight records

use crate::flight_data::FlightRecord;
use std::io::{self, Write};

/// Render one record as a single line
///
/// Delayed flights (see `FlightRecord::is_delayed`) carry their delay.
pub fn format_flight(record: &FlightRecord) -> String {
    let base = format!(
        "{}. {} -> {} by {}",
        record.id, record.origin_airport, record.destination_airport, record.airline
    );
    if record.is_delayed() {
        format!("{base}, Delay: {} Minutes", record.delay_minutes())
    } else {
        base
    }
}

/// Write the result count followed by one line per record
pub fn write_results<W: Write>(records: &[FlightRecord], out: &mut W) -> io::Result<()> {
    writeln!(out, "Got {} results.", records.len())?;
    for record in records {
        writeln!(out, "{}", format_flight(record))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: i64, delay: Option<i64>) -> FlightRecord {
        FlightRecord {
            id,
            origin_airport: "SFO".to_string(),
            destination_airport: "SEA".to_string(),
            airline: "Alaska Airlines Inc.".to_string(),
            delay,
        }
    }

    #[test]
    fn test_format_on_time_flight() {
        assert_eq!(
            format_flight(&flight(3, Some(5))),
            "3. SFO -> SEA by Alaska Airlines Inc."
        );
    }

    #[test]
    fn test_format_delayed_flight() {
        assert_eq!(
            format_flight(&flight(4, Some(20))),
            "4. SFO -> SEA by Alaska Airlines Inc., Delay: 20 Minutes"
        );
    }

    #[test]
    fn test_format_null_delay_as_on_time() {
        assert_eq!(
            format_flight(&flight(5, None)),
            "5. SFO -> SEA by Alaska Airlines Inc."
        );
    }

    #[test]
    fn test_write_results_empty() {
        let mut out = Vec::new();
        write_results(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Got 0 results.\n");
    }

    #[test]
    fn test_write_results_lists_every_record() {
        let mut out = Vec::new();
        write_results(&[flight(1, Some(0)), flight(2, Some(45))], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Got 2 results.\n\
             1. SFO -> SEA by Alaska Airlines Inc.\n\
             2. SFO -> SEA by Alaska Airlines Inc., Delay: 45 Minutes\n"
        );
    }
}
