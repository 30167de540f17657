//! # Filter Composer
//!
//! Structured form state compiled into the exact textual filter the server's
//! year-expression parser accepts, plus the combined `&`-joined query string.

use chrono::{Datelike, Local};
use serde_json::{json, Value};
use url::form_urlencoded;

use crate::catalog::Book;

/// Year operator selection, in the order offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearOperator {
    Range,
    Equal,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl YearOperator {
    /// All selectable operators, `Range` first (the default)
    pub const ALL: [YearOperator; 6] = [
        YearOperator::Range,
        YearOperator::Equal,
        YearOperator::GreaterThan,
        YearOperator::GreaterThanOrEqual,
        YearOperator::LessThan,
        YearOperator::LessThanOrEqual,
    ];

    /// Textual form, matching what the server-side parser expects
    pub fn as_str(&self) -> &'static str {
        match self {
            YearOperator::Range => "Range",
            YearOperator::Equal => "=",
            YearOperator::GreaterThan => ">",
            YearOperator::GreaterThanOrEqual => ">=",
            YearOperator::LessThan => "<",
            YearOperator::LessThanOrEqual => "<=",
        }
    }
}

impl std::str::FromStr for YearOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Range" | "range" => Ok(YearOperator::Range),
            "=" | "eq" => Ok(YearOperator::Equal),
            ">" | "gt" => Ok(YearOperator::GreaterThan),
            ">=" | "gte" => Ok(YearOperator::GreaterThanOrEqual),
            "<" | "lt" => Ok(YearOperator::LessThan),
            "<=" | "lte" => Ok(YearOperator::LessThanOrEqual),
            other => Err(format!("unknown year operator: {:?}", other)),
        }
    }
}

/// The current calendar year, used as the default upper bound
pub fn current_year() -> u32 {
    u32::try_from(Local::now().year()).unwrap_or(0)
}

/// Form state for searching and editing
///
/// One form backs all modes: in search mode the year fields compose a filter
/// expression; in add/edit mode `year_start` is the record's publish year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    pub title: String,
    pub author: String,
    pub description: String,
    pub operator: YearOperator,
    pub year_start: u32,
    pub year_end: u32,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            description: String::new(),
            operator: YearOperator::Range,
            year_start: 0,
            year_end: current_year(),
        }
    }
}

impl FilterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single year-filter string in the format the server parser accepts
    pub fn year_expression(&self) -> String {
        match self.operator {
            YearOperator::Range => format!("Range{}-{}", self.year_start, self.year_end),
            op => format!("{}{}", op.as_str(), self.year_start),
        }
    }

    /// The combined query string: title/author/publish_year/description terms
    /// joined URL-parameter style, percent-encoded
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("title", self.title.trim())
            .append_pair("author", self.author.trim())
            .append_pair("publish_year", &self.year_expression())
            .append_pair("description", self.description.trim())
            .finish()
    }

    /// JSON body for create/update submissions
    pub fn book_payload(&self) -> Value {
        json!({
            "title": self.title,
            "author": self.author,
            "publish_year": self.year_start,
            "description": self.description,
        })
    }

    /// Seed the form from a selected record (one-way: editing the form does
    /// not touch the record until an explicit submission)
    pub fn seed_from(&mut self, book: &Book) {
        self.title = book.title.clone();
        self.author = book.author.clone();
        self.description = book.description.clone().unwrap_or_default();
        self.year_start = book.publish_year;
    }

    /// Clear the text fields; year bounds keep their values
    pub fn clear(&mut self) {
        self.title.clear();
        self.author.clear();
        self.description.clear();
    }

    /// Add/edit submissions require a non-empty title and author
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }
}
