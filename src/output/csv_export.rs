//! CSV export of flight records

use crate::flight_data::FlightRecord;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Column header of every exported file
pub const CSV_HEADER: [&str; 5] = [
    "ID",
    "ORIGIN_AIRPORT",
    "DESTINATION_AIRPORT",
    "AIRLINE",
    "DELAY",
];

/// Write header and records as CSV to any writer
///
/// A NULL delay becomes an empty field.
pub fn write_csv<W: Write>(records: &[FlightRecord], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for record in records {
        let delay = record.delay.map(|d| d.to_string()).unwrap_or_default();
        writer.write_record([
            record.id.to_string().as_str(),
            record.origin_airport.as_str(),
            record.destination_airport.as_str(),
            record.airline.as_str(),
            delay.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the records to it
pub fn export_to_file<P: AsRef<Path>>(records: &[FlightRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(records, file).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Exported {} flights to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv_header_and_rows() {
        let records = vec![
            FlightRecord {
                id: 10,
                origin_airport: "ORD".to_string(),
                destination_airport: "DFW".to_string(),
                airline: "American Airlines Inc.".to_string(),
                delay: Some(33),
            },
            FlightRecord {
                id: 11,
                origin_airport: "ORD".to_string(),
                destination_airport: "MSP".to_string(),
                airline: "Delta Air Lines, Inc.".to_string(),
                delay: None,
            },
        ];

        let mut buf = Vec::new();
        write_csv(&records, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "ID,ORIGIN_AIRPORT,DESTINATION_AIRPORT,AIRLINE,DELAY\n\
             10,ORD,DFW,American Airlines Inc.,33\n\
             11,ORD,MSP,\"Delta Air Lines, Inc.\",\n"
        );
    }

    #[test]
    fn test_write_csv_header_only_when_empty() {
        let mut buf = Vec::new();
        write_csv(&[], &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "ID,ORIGIN_AIRPORT,DESTINATION_AIRPORT,AIRLINE,DELAY\n"
        );
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("out.csv");
        assert!(export_to_file(&[], &path).is_err());
    }
}
