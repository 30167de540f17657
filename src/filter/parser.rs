//! # Year-Filter Parser
//!
//! Explicit tokenizer and parser for the free-text publish-year constraint.
//!
//! Grammar (whitespace between tokens is ignored):
//!
//! ```text
//! expr := op int            comparison, e.g. ">=1990"
//!       | "Range" int "-" int   range, e.g. "Range1990-2000"
//!       | int "-" int       range, e.g. "1990-2000"
//!       | int               equality, e.g. "1999"
//! op   := ">=" | "<=" | ">" | "<" | "="
//! ```
//!
//! Anything else is rejected with a [`ParseError`] rather than producing a
//! filter with undefined bounds.

use super::errors::{ParseError, ParseResult};
use super::{YearFilter, YearOp};

/// The literal operator word the client emits for range searches
const RANGE_KEYWORD: &str = "Range";

/// Tokens recognized in a year-filter expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Op(YearOp),
    RangeWord,
    Int(u32),
    Dash,
}

/// Parse a free-text publish-year filter.
///
/// Returns `Ok(None)` for empty or whitespace-only input (the caller must
/// skip the year predicate entirely), `Ok(Some(filter))` for a well-formed
/// expression, and an error for anything else.
pub fn parse_year_filter(input: &str) -> ParseResult<Option<YearFilter>> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let tokens = tokenize(input)?;

    let filter = match tokens.as_slice() {
        [Token::Op(op), Token::Int(bound)] => YearFilter::Comparison {
            op: *op,
            bound: *bound,
        },
        [Token::RangeWord, Token::Int(lower), Token::Dash, Token::Int(upper)] => {
            // Bounds are taken in textual order; a reversed range is passed
            // through and matches nothing.
            YearFilter::Range {
                lower: *lower,
                upper: *upper,
            }
        }
        [Token::Int(lower), Token::Dash, Token::Int(upper)] => YearFilter::Range {
            lower: *lower,
            upper: *upper,
        },
        [Token::Int(bound)] => YearFilter::Comparison {
            op: YearOp::Eq,
            bound: *bound,
        },
        _ => return Err(ParseError::UnrecognizedFilter(input.to_string())),
    };

    Ok(Some(filter))
}

/// Split an expression into tokens, skipping whitespace
fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '>' => {
                chars.next();
                if chars.peek() == Some(&'=') {
                    chars.next();
                    tokens.push(Token::Op(YearOp::Gte));
                } else {
                    tokens.push(Token::Op(YearOp::Gt));
                }
            }
            '<' => {
                chars.next();
                if chars.peek() == Some(&'=') {
                    chars.next();
                    tokens.push(Token::Op(YearOp::Lte));
                } else {
                    tokens.push(Token::Op(YearOp::Lt));
                }
            }
            '=' => {
                chars.next();
                tokens.push(Token::Op(YearOp::Eq));
            }
            '-' => {
                chars.next();
                tokens.push(Token::Dash);
            }
            c if c.is_ascii_digit() => {
                let mut digits = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() {
                        digits.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: u32 = digits
                    .parse()
                    .map_err(|_| ParseError::YearOutOfRange(digits.clone()))?;
                tokens.push(Token::Int(value));
            }
            c if c.is_alphabetic() => {
                let mut word = String::new();
                while let Some(&a) = chars.peek() {
                    if a.is_alphabetic() {
                        word.push(a);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if word == RANGE_KEYWORD {
                    tokens.push(Token::RangeWord);
                } else {
                    return Err(ParseError::UnrecognizedFilter(input.to_string()));
                }
            }
            _ => return Err(ParseError::UnrecognizedFilter(input.to_string())),
        }
    }

    Ok(tokens)
}
