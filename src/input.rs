//! Conversion of raw form text into numeric inputs.
//!
//! A blank field means "absent", lists are separated by a single character
//! (comma by default) and blank list entries are skipped. Failures here are
//! [`ParseError`]s, kept apart from the arithmetic [`InvalidInput`](crate::circuits::InvalidInput).

use thiserror::Error;

use crate::math::Scalar;

/// Raised when form text cannot be turned into a usable number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required field was blank.
    #[error("{field} is required")]
    Missing {
        /// Field label.
        field: String,
    },
    /// The text is not a decimal number.
    #[error("{field}: could not convert {text:?} to a number")]
    NotANumber {
        /// Field label.
        field: String,
        /// Offending text, trimmed.
        text: String,
    },
    /// The text parsed to an infinity or NaN.
    #[error("{field}: {text:?} is not a finite number")]
    NotFinite {
        /// Field label.
        field: String,
        /// Offending text, trimmed.
        text: String,
    },
}

/// Result alias for input parsing.
pub type ParseResult<T> = Result<T, ParseError>;

fn parse_number(field: &str, text: &str) -> ParseResult<Scalar> {
    let value: Scalar = text.parse().map_err(|_| ParseError::NotANumber {
        field: field.to_owned(),
        text: text.to_owned(),
    })?;
    if !value.is_finite() {
        return Err(ParseError::NotFinite {
            field: field.to_owned(),
            text: text.to_owned(),
        });
    }
    Ok(value)
}

/// Parses an optional field: blank text yields `None`.
pub fn parse_optional(field: &str, text: &str) -> ParseResult<Option<Scalar>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    parse_number(field, text).map(Some)
}

/// Parses a field that must hold a number.
pub fn parse_required(field: &str, text: &str) -> ParseResult<Scalar> {
    parse_optional(field, text)?.ok_or_else(|| ParseError::Missing {
        field: field.to_owned(),
    })
}

/// Parses a `separator`-delimited list, skipping blank entries.
pub fn parse_list(field: &str, text: &str, separator: char) -> ParseResult<Vec<Scalar>> {
    text.split(separator)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_number(field, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_is_absent() {
        assert_eq!(parse_optional("Voltage", ""), Ok(None));
        assert_eq!(parse_optional("Voltage", "   "), Ok(None));
        assert_eq!(parse_optional("Voltage", " 12.5 "), Ok(Some(12.5)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_optional("Current", "abc"),
            Err(ParseError::NotANumber {
                field: "Current".into(),
                text: "abc".into()
            })
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            parse_optional("Current", "inf"),
            Err(ParseError::NotFinite { .. })
        ));
        assert!(matches!(
            parse_required("Value", "NaN"),
            Err(ParseError::NotFinite { .. })
        ));
    }

    #[test]
    fn required_field_must_be_filled() {
        assert_eq!(
            parse_required("Value", " "),
            Err(ParseError::Missing {
                field: "Value".into()
            })
        );
        assert_eq!(parse_required("Value", "1e3"), Ok(1000.0));
    }

    #[test]
    fn list_skips_blank_entries() {
        assert_eq!(
            parse_list("Resistors", "1, 2,,3 ", ','),
            Ok(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(parse_list("Resistors", "", ','), Ok(vec![]));
        assert_eq!(parse_list("Resistors", "4;5", ';'), Ok(vec![4.0, 5.0]));
    }

    #[test]
    fn list_reports_first_bad_entry() {
        assert_eq!(
            parse_list("Inductors", "1, x, y", ','),
            Err(ParseError::NotANumber {
                field: "Inductors".into(),
                text: "x".into()
            })
        );
    }
}
