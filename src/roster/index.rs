//! # Display Positions and Selectors
//!
//! Users see records numbered from 1 in stored order, and name a record either
//! by that number or by its id:
//!
//! ```text
//! roster view 2          # second stored record
//! roster delete AB1234   # the record with id AB1234, wherever it sits
//! ```
//!
//! A display position is always the record's place in the *stored* sequence,
//! also when a listing is filtered or sorted, so the number shown next to a
//! record is the number that addresses it. Positions shift after a delete;
//! ids are the stable way to refer to a record across commands.

use crate::model::Record;
use crate::validation::validate_id;
use std::fmt;
use std::str::FromStr;

/// A user input naming one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordSelector {
    /// Record id, e.g. `AB1234`.
    Id(String),
    /// One-based display position.
    Position(usize),
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSelector::Id(id) => write!(f, "{}", id),
            RecordSelector::Position(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for RecordSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Positions start at 1".to_string());
            }
            return Ok(RecordSelector::Position(n));
        }
        // Ids are uppercase; accept lowercase input for convenience.
        let upper = s.to_uppercase();
        if validate_id(&upper) {
            return Ok(RecordSelector::Id(upper));
        }
        Err(format!("Invalid selector: {} (use an id like AB1234 or a position like 3)", s))
    }
}

/// A record snapshot together with its one-based display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub position: usize,
    pub record: Record,
}

impl DisplayRecord {
    /// Builds the entry for zero-based store position `pos`.
    pub fn at(pos: usize, record: Record) -> Self {
        Self {
            position: pos + 1,
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positions_and_ids() {
        assert_eq!("3".parse::<RecordSelector>(), Ok(RecordSelector::Position(3)));
        assert_eq!(
            "AB1234".parse::<RecordSelector>(),
            Ok(RecordSelector::Id("AB1234".into()))
        );
        assert_eq!(
            " ab1234 ".parse::<RecordSelector>(),
            Ok(RecordSelector::Id("AB1234".into()))
        );
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!("0".parse::<RecordSelector>().is_err());
        assert!("-1".parse::<RecordSelector>().is_err());
        assert!("invalid".parse::<RecordSelector>().is_err());
        assert!("AB12".parse::<RecordSelector>().is_err());
    }

    #[test]
    fn display_roundtrips() {
        for input in ["7", "CD5678"] {
            let sel: RecordSelector = input.parse().unwrap();
            assert_eq!(sel.to_string(), input);
        }
    }

    #[test]
    fn display_positions_count_from_one() {
        let shown = DisplayRecord::at(1, Record::new("CD5678", "B", "R", "D"));
        assert_eq!(shown.position, 2);
        assert_eq!(shown.record.id, "CD5678");
    }
}
