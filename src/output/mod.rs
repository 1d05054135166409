//! Result rendering: text lines, CSV export, JSON

pub mod csv_export;
pub mod json;
pub mod text;

pub use csv_export::{export_to_file, write_csv, CSV_HEADER};
pub use json::to_json;
pub use text::{format_flight, write_results};
