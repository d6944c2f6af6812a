//! Parser for the line-oriented problem format.
//!
//! Each non-blank line describes one problem:
//!
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3)
//! ```
//!
//! The capacity precedes a single `:`; items follow as whitespace-separated
//! `(index,weight,€cost)` tuples.

use std::io::{self, BufRead};

use packer_core::{Item, ItemError, ProblemInstance};
use thiserror::Error;

use crate::CliError;

const CURRENCY: char = '€';

/// Reasons a line fails to parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The line does not contain exactly one `:`.
    #[error("expected exactly one ':' between capacity and items")]
    MissingSeparator,
    /// The capacity is not a non-negative integer.
    #[error("invalid capacity {text:?}")]
    InvalidCapacity {
        /// Text found before the separator.
        text: String,
    },
    /// Nothing follows the separator.
    #[error("no items after ':'")]
    NoItems,
    /// An item token is not wrapped in parentheses.
    #[error("item {token:?} is missing a parenthesis")]
    MissingParenthesis {
        /// Offending token.
        token: String,
    },
    /// An item token has no currency symbol.
    #[error("item {token:?} is missing the '€' currency symbol")]
    MissingCurrency {
        /// Offending token.
        token: String,
    },
    /// An item token does not hold exactly three fields.
    #[error("item {token:?} has {found} fields; expected index, weight and cost")]
    FieldCount {
        /// Offending token.
        token: String,
        /// Number of comma-separated fields found.
        found: usize,
    },
    /// The index field is not a non-negative integer.
    #[error("invalid item index {text:?}")]
    InvalidIndex {
        /// Offending field.
        text: String,
    },
    /// The weight field is not a number.
    #[error("invalid item weight {text:?}")]
    InvalidWeight {
        /// Offending field.
        text: String,
    },
    /// The cost field is not a number.
    #[error("invalid item cost {text:?}")]
    InvalidCost {
        /// Offending field.
        text: String,
    },
    /// The fields parsed but do not form a valid item.
    #[error(transparent)]
    InvalidItem(#[from] ItemError),
}

/// Parse one line into a [`ProblemInstance`].
///
/// # Examples
///
/// ```
/// use packer_cli::parse::parse_line;
///
/// let instance = parse_line("8 : (1,15.3,€34)")?;
/// assert_eq!(instance.capacity(), 8);
/// assert_eq!(instance.len(), 1);
/// # Ok::<(), packer_cli::parse::ParseError>(())
/// ```
pub fn parse_line(line: &str) -> Result<ProblemInstance, ParseError> {
    let (capacity_text, items_text) = line.split_once(':').ok_or(ParseError::MissingSeparator)?;
    if items_text.contains(':') {
        return Err(ParseError::MissingSeparator);
    }
    let capacity = parse_capacity(capacity_text.trim())?;
    let items = parse_items(items_text.trim())?;
    Ok(ProblemInstance::new(capacity, items))
}

/// A 1-based line number paired with the outcome of parsing that line.
pub type ParsedLine = (usize, Result<ProblemInstance, ParseError>);

/// Parse every non-blank line of `reader`.
///
/// Stops at the first failure, which carries its 1-based line number.
pub fn parse_batch<R: BufRead>(reader: R) -> Result<Vec<ProblemInstance>, CliError> {
    parsed_lines(reader)
        .map(|entry| {
            let (line, parsed) = entry.map_err(CliError::ReadInput)?;
            parsed.map_err(|source| CliError::Parse { line, source })
        })
        .collect()
}

/// Parse each non-blank line of `reader` independently.
///
/// Parse failures are yielded per line so the caller decides whether to
/// carry on; read failures surface as `Err`.
pub fn parsed_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<ParsedLine>> {
    numbered_lines(reader).map(|entry| entry.map(|(line, text)| (line, parse_line(&text))))
}

fn numbered_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<(usize, String)>> {
    (1_usize..)
        .zip(reader.lines())
        .filter_map(|(number, entry)| match entry {
            Ok(text) if text.trim().is_empty() => None,
            Ok(text) => Some(Ok((number, text))),
            Err(err) => Some(Err(err)),
        })
}

fn parse_capacity(text: &str) -> Result<u32, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidCapacity {
        text: text.to_owned(),
    })
}

fn parse_items(text: &str) -> Result<Vec<Item>, ParseError> {
    if text.is_empty() {
        return Err(ParseError::NoItems);
    }
    text.split_whitespace().map(parse_item).collect()
}

fn parse_item(token: &str) -> Result<Item, ParseError> {
    let inner = token
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ParseError::MissingParenthesis {
            token: token.to_owned(),
        })?;
    if !inner.contains(CURRENCY) {
        return Err(ParseError::MissingCurrency {
            token: token.to_owned(),
        });
    }
    let fields: String = inner
        .chars()
        .filter(|&ch| !matches!(ch, '(' | ')' | CURRENCY))
        .collect();
    let parts: Vec<&str> = fields.split(',').collect();
    let [index_text, weight_text, cost_text] = parts.as_slice() else {
        return Err(ParseError::FieldCount {
            token: token.to_owned(),
            found: parts.len(),
        });
    };
    let index = index_text
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidIndex {
            text: (*index_text).to_owned(),
        })?;
    let weight = weight_text
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidWeight {
            text: (*weight_text).to_owned(),
        })?;
    let cost = cost_text
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidCost {
            text: (*cost_text).to_owned(),
        })?;
    Item::new(index, weight, cost).map_err(ParseError::from)
}
