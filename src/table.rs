//! In-memory tables passed between pipeline stages.

use calamine::Data;
use rusqlite::ToSql;
use rusqlite::types::{Null, ToSqlOutput};

/// Sheet contents below the header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub header: Vec<String>,
    /// Each row is padded to `header.len()`.
    pub rows: Vec<Vec<Data>>,
}

/// Transposed sheet: former columns are rows, labelled by `index`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReshapedTable {
    pub index: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

impl ReshapedTable {
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Outcome of coercing one cell to a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseResult {
    Numeric(f64),
    Missing,
}

impl ParseResult {
    pub fn is_missing(&self) -> bool {
        matches!(self, ParseResult::Missing)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            ParseResult::Numeric(v) => Some(*v),
            ParseResult::Missing => None,
        }
    }

    fn finite(v: f64) -> Self {
        if v.is_finite() {
            ParseResult::Numeric(v)
        } else {
            ParseResult::Missing
        }
    }
}

impl From<&Data> for ParseResult {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Float(v) => ParseResult::finite(*v),
            Data::Int(v) => ParseResult::Numeric(*v as f64),
            Data::Bool(b) => ParseResult::Numeric(if *b { 1.0 } else { 0.0 }),
            Data::String(s) => s
                .trim()
                .parse::<f64>()
                .map(ParseResult::finite)
                .unwrap_or(ParseResult::Missing),
            _ => ParseResult::Missing,
        }
    }
}

impl ToSql for ParseResult {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            ParseResult::Numeric(v) => ToSqlOutput::from(*v),
            ParseResult::Missing => ToSqlOutput::from(Null),
        })
    }
}

/// Reshaped table after column drops and numeric coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<ParseResult>>,
}

impl ProjectedTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn missing_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_missing()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_cells() {
        assert_eq!(ParseResult::from(&Data::Float(12.5)), ParseResult::Numeric(12.5));
        assert_eq!(ParseResult::from(&Data::Int(7)), ParseResult::Numeric(7.0));
        assert_eq!(ParseResult::from(&Data::Bool(true)), ParseResult::Numeric(1.0));
    }

    #[test]
    fn test_numeric_text_is_parsed() {
        let cell = Data::String(" 4.25 ".to_string());
        assert_eq!(ParseResult::from(&cell), ParseResult::Numeric(4.25));
    }

    #[test]
    fn test_unparsable_text_is_missing() {
        for text in ["N/A", "", "n.a.", "nan", "inf", "12%"] {
            let cell = Data::String(text.to_string());
            assert_eq!(ParseResult::from(&cell), ParseResult::Missing, "{text:?}");
        }
    }

    #[test]
    fn test_empty_cell_is_missing_not_zero() {
        let parsed = ParseResult::from(&Data::Empty);
        assert!(parsed.is_missing());
        assert_eq!(parsed.value(), None);
        assert_ne!(parsed, ParseResult::Numeric(0.0));
    }

    #[test]
    fn test_missing_cells_count() {
        let table = ProjectedTable {
            columns: vec!["a".into(), "b".into()],
            rows: vec![
                vec![ParseResult::Numeric(1.0), ParseResult::Missing],
                vec![ParseResult::Missing, ParseResult::Missing],
            ],
        };
        assert_eq!(table.missing_cells(), 3);
        assert!(table.has_column("b"));
        assert!(!table.has_column("c"));
    }
}
