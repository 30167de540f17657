//! # Publish-Year Filter
//!
//! Structured form of the free-text publish-year constraint accepted by the
//! search endpoint (`">1990"`, `"<=2005"`, `"1999"`, `"1990-2000"`,
//! `"Range1990-2000"`).

pub mod errors;
pub mod parser;

use serde::{Deserialize, Serialize};

pub use errors::{ParseError, ParseResult};
pub use parser::parse_year_filter;

/// Comparison operators usable in a year filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearOp {
    /// Equals
    #[serde(rename = "eq")]
    Eq,

    /// Greater than
    #[serde(rename = "gt")]
    Gt,

    /// Greater than or equal
    #[serde(rename = "gte")]
    Gte,

    /// Less than
    #[serde(rename = "lt")]
    Lt,

    /// Less than or equal
    #[serde(rename = "lte")]
    Lte,
}

impl YearOp {
    /// Get the textual form used in filter expressions
    pub fn as_str(&self) -> &'static str {
        match self {
            YearOp::Eq => "=",
            YearOp::Gt => ">",
            YearOp::Gte => ">=",
            YearOp::Lt => "<",
            YearOp::Lte => "<=",
        }
    }
}

/// A parsed publish-year filter
///
/// `Range` bounds are kept in textual order. A reversed range (`lower > upper`)
/// is passed through as given and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearFilter {
    /// Single-bound comparison, e.g. `>1990` or a bare `1999` (equality)
    Comparison { op: YearOp, bound: u32 },

    /// Inclusive range, e.g. `1990-2000`
    Range { lower: u32, upper: u32 },
}

impl YearFilter {
    /// Create an equality filter
    pub fn eq(bound: u32) -> Self {
        YearFilter::Comparison {
            op: YearOp::Eq,
            bound,
        }
    }

    /// Create an inclusive range filter
    pub fn range(lower: u32, upper: u32) -> Self {
        YearFilter::Range { lower, upper }
    }

    /// Check if a publish year satisfies this filter
    pub fn matches(&self, year: u32) -> bool {
        match *self {
            YearFilter::Comparison { op, bound } => match op {
                YearOp::Eq => year == bound,
                YearOp::Gt => year > bound,
                YearOp::Gte => year >= bound,
                YearOp::Lt => year < bound,
                YearOp::Lte => year <= bound,
            },
            YearFilter::Range { lower, upper } => lower <= year && year <= upper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_matches() {
        let gt = YearFilter::Comparison {
            op: YearOp::Gt,
            bound: 1970,
        };
        assert!(gt.matches(1971));
        assert!(!gt.matches(1970));

        let lte = YearFilter::Comparison {
            op: YearOp::Lte,
            bound: 2005,
        };
        assert!(lte.matches(2005));
        assert!(lte.matches(1900));
        assert!(!lte.matches(2006));

        assert!(YearFilter::eq(1999).matches(1999));
        assert!(!YearFilter::eq(1999).matches(1998));
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = YearFilter::range(1990, 2000);
        assert!(range.matches(1990));
        assert!(range.matches(1995));
        assert!(range.matches(2000));
        assert!(!range.matches(1989));
        assert!(!range.matches(2001));
    }

    #[test]
    fn test_reversed_range_matches_nothing() {
        let range = YearFilter::range(2000, 1990);
        assert!(!range.matches(1990));
        assert!(!range.matches(1995));
        assert!(!range.matches(2000));
    }
}
