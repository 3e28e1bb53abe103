//! Cell reference parsing and formatting.
//!
//! Converts between spreadsheet-style cell references (e.g., "A1", "C12")
//! and zero-indexed column/row coordinates. Only single-letter uppercase
//! columns are part of the reference grammar; anything else fails to parse
//! and the caller treats the token as unresolved.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from spreadsheet notation (e.g., "A1", "C12").
    /// Returns None if the input is outside the grammar.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        Self::parse_a1(name)
    }

    fn parse_a1(name: &str) -> Option<CellRef> {
        let re = Regex::new(r"^(?<letter>[A-Z])(?<digits>[0-9]+)$").unwrap();
        let caps = re.captures(name)?;

        let col = (caps["letter"].as_bytes()[0] - b'A') as usize;
        // External numbering is 1-based; "A0" has no zero-based row.
        let row = caps["digits"].parse::<usize>().ok()?.checked_sub(1)?;

        Some(CellRef::new(col, row))
    }

    /// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_a1(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;

    #[test]
    fn test_parse_simple() {
        let cell = CellRef::from_str("A1").unwrap();
        assert_eq!(cell.col, 0);
        assert_eq!(cell.row, 0);

        let cell = CellRef::from_str("C12").unwrap();
        assert_eq!(cell.col, 2);
        assert_eq!(cell.row, 11);
    }

    #[test]
    fn test_parse_last_column() {
        let cell = CellRef::from_str("Z99").unwrap();
        assert_eq!(cell.col, 25);
        assert_eq!(cell.row, 98);
    }

    #[test]
    fn test_parse_lowercase_rejected() {
        assert!(CellRef::from_str("a1").is_none());
    }

    #[test]
    fn test_parse_multi_letter_rejected() {
        assert!(CellRef::from_str("AA1").is_none());
    }

    #[test]
    fn test_parse_row_zero_rejected() {
        assert!(CellRef::from_str("A0").is_none());
    }

    #[test]
    fn test_parse_malformed_rejected() {
        assert!(CellRef::from_str("").is_none());
        assert!(CellRef::from_str("A").is_none());
        assert!(CellRef::from_str("1A").is_none());
        assert!(CellRef::from_str("A1B").is_none());
        assert!(CellRef::from_str("$A$1").is_none());
    }

    #[test]
    fn test_parse_huge_row_rejected() {
        let huge = format!("A1{}", "0".repeat(40));
        assert!(CellRef::from_str(&huge).is_none());
    }

    #[test]
    fn test_display_round_trip() {
        let cell = CellRef::from_str("B3").unwrap();
        assert_eq!(cell.to_string(), "B3");
    }
}
