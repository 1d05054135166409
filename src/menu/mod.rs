//! Interactive menu
//!
//! Linear loop: show menu → read choice → collect and validate input →
//! query → print results → optionally export.
//!
//! ## Architecture
//!
//! - `input.rs` — Prompting and per-option input validation
//! - `session.rs` — Session, the loop over a FlightDb and an input/output pair

pub mod input;
pub mod session;

pub use input::{parse_flight_id, Prompter};
pub use session::Session;

use std::io::{self, Write};

/// Menu errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for menu operations
pub type Result<T> = std::result::Result<T, Error>;

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    FlightById,
    FlightsByDate,
    DelayedByAirline,
    DelayedByAirport,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::FlightById,
        MenuOption::FlightsByDate,
        MenuOption::DelayedByAirline,
        MenuOption::DelayedByAirport,
        MenuOption::Exit,
    ];

    /// Number the user types to pick this entry
    pub fn number(self) -> i64 {
        match self {
            MenuOption::FlightById => 1,
            MenuOption::FlightsByDate => 2,
            MenuOption::DelayedByAirline => 3,
            MenuOption::DelayedByAirport => 4,
            MenuOption::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::FlightById => "Show flight by ID",
            MenuOption::FlightsByDate => "Show flights by date",
            MenuOption::DelayedByAirline => "Delayed flights by airline",
            MenuOption::DelayedByAirport => "Delayed flights by origin airport",
            MenuOption::Exit => "Exit",
        }
    }

    /// Parse a typed choice; None for anything that is not a listed number
    pub fn from_choice(input: &str) -> Option<Self> {
        let number: i64 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|option| option.number() == number)
    }
}

/// Print the menu header and one line per entry
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Menu:")?;
    for option in MenuOption::ALL {
        writeln!(out, "{}. {}", option.number(), option.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice_valid() {
        assert_eq!(MenuOption::from_choice("1"), Some(MenuOption::FlightById));
        assert_eq!(MenuOption::from_choice(" 4 "), Some(MenuOption::DelayedByAirport));
        assert_eq!(MenuOption::from_choice("5"), Some(MenuOption::Exit));
    }

    #[test]
    fn test_from_choice_invalid() {
        assert_eq!(MenuOption::from_choice("0"), None);
        assert_eq!(MenuOption::from_choice("6"), None);
        assert_eq!(MenuOption::from_choice("one"), None);
        assert_eq!(MenuOption::from_choice(""), None);
    }

    #[test]
    fn test_write_menu() {
        let mut out = Vec::new();
        write_menu(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Menu:\n\
             1. Show flight by ID\n\
             2. Show flights by date\n\
             3. Delayed flights by airline\n\
             4. Delayed flights by origin airport\n\
             5. Exit\n"
        );
    }
}
