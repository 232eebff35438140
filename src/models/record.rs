//! Match history records, raw and cleaned.

use std::collections::BTreeSet;

/// Column holding the civilization id.
pub const CIV_COLUMN: &str = "civ";

/// Column holding the ladder id.
pub const LEADERBOARD_COLUMN: &str = "leaderboard_id";

/// Column holding the win flag.
pub const WON_COLUMN: &str = "won";

/// Columns the aggregator needs whenever any rows exist.
pub const REQUIRED_COLUMNS: [&str; 3] = [CIV_COLUMN, LEADERBOARD_COLUMN, WON_COLUMN];

/// One row as read from an input file. Cells are kept as text; a cell that is
/// empty, cut off by a short row, or whose column is absent from the file is
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMatchRecord {
    pub civ: Option<String>,
    pub leaderboard_id: Option<String>,
    pub won: Option<String>,
}

impl RawMatchRecord {
    pub fn new(civ: &str, leaderboard_id: &str, won: &str) -> Self {
        Self {
            civ: Some(civ.to_string()),
            leaderboard_id: Some(leaderboard_id.to_string()),
            won: Some(won.to_string()),
        }
    }
}

/// All rows from every loaded file plus the union of their headers.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub columns: BTreeSet<String>,
    pub records: Vec<RawMatchRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record set whose columns are exactly the required ones.
    pub fn from_records(records: Vec<RawMatchRecord>) -> Self {
        Self {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            records,
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    /// Append another set, merging its columns into this one.
    pub fn extend(&mut self, other: RecordSet) {
        self.columns.extend(other.columns);
        self.records.extend(other.records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A record whose numeric fields parsed and whose win flag is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub civ: i64,
    pub leaderboard_id: i64,
    pub won: bool,
}

impl MatchRecord {
    /// Coerce a raw row. Returns `None` when `civ` or `leaderboard_id` is
    /// missing or not an integer; a missing `won` reads as a loss.
    pub fn from_raw(raw: &RawMatchRecord) -> Option<Self> {
        let civ = parse_integer(raw.civ.as_deref()?)?;
        let leaderboard_id = parse_integer(raw.leaderboard_id.as_deref()?)?;
        Some(Self {
            civ,
            leaderboard_id,
            won: parse_won(raw.won.as_deref()),
        })
    }
}

/// Parse an integer cell. Integral float spellings such as `"3.0"` are
/// accepted; fractional or non-finite values are not.
pub fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }

    let f = value.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// A win is recorded only as the literal `t`, case-insensitive.
pub fn parse_won(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.to_lowercase() == "t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("3"), Some(3));
        assert_eq!(parse_integer(" 15 "), Some(15));
        assert_eq!(parse_integer("-2"), Some(-2));
        assert_eq!(parse_integer("3.0"), Some(3));
        assert_eq!(parse_integer("1e1"), Some(10));
    }

    #[test]
    fn test_parse_integer_rejects() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("   "), None);
        assert_eq!(parse_integer("x"), None);
        assert_eq!(parse_integer("3.5"), None);
        assert_eq!(parse_integer("NaN"), None);
        assert_eq!(parse_integer("inf"), None);
    }

    #[test]
    fn test_parse_won() {
        assert!(parse_won(Some("t")));
        assert!(parse_won(Some("T")));
        assert!(!parse_won(Some("f")));
        assert!(!parse_won(Some("true")));
        assert!(!parse_won(Some(" t")));
        assert!(!parse_won(Some("")));
        assert!(!parse_won(None));
    }

    #[test]
    fn test_from_raw_ok() {
        let raw = RawMatchRecord::new("15", "3", "t");
        let clean = MatchRecord::from_raw(&raw).unwrap();
        assert_eq!(
            clean,
            MatchRecord {
                civ: 15,
                leaderboard_id: 3,
                won: true
            }
        );
    }

    #[test]
    fn test_from_raw_excludes_bad_numbers() {
        assert!(MatchRecord::from_raw(&RawMatchRecord::new("x", "3", "t")).is_none());
        assert!(MatchRecord::from_raw(&RawMatchRecord::new("1", "abc", "t")).is_none());
        assert!(MatchRecord::from_raw(&RawMatchRecord::new("", "3", "t")).is_none());
    }

    #[test]
    fn test_from_raw_missing_fields() {
        let raw = RawMatchRecord {
            civ: None,
            leaderboard_id: Some("3".to_string()),
            won: Some("t".to_string()),
        };
        assert!(MatchRecord::from_raw(&raw).is_none());

        let raw = RawMatchRecord {
            civ: Some("1".to_string()),
            leaderboard_id: Some("3".to_string()),
            won: None,
        };
        let clean = MatchRecord::from_raw(&raw).unwrap();
        assert!(!clean.won);
    }

    #[test]
    fn test_record_set_extend_merges_columns() {
        let mut a = RecordSet::from_records(vec![RawMatchRecord::new("1", "3", "t")]);
        let mut b = RecordSet::new();
        b.columns.insert("profile_id".to_string());
        b.records.push(RawMatchRecord::default());

        a.extend(b);
        assert_eq!(a.len(), 2);
        assert!(a.has_column("profile_id"));
        assert!(a.has_column(WON_COLUMN));
    }
}
