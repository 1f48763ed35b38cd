//! Quantity string parsing - parse strings like "120km", "16 kn" or ".5'"
//!
//! One algorithm serves every dimension; only the unit table differs.

use crate::{Dimension, ParseError, Quantity, Unit};

/// Parse a string holding one number and one unit abbreviation
///
/// Supported formats:
/// - Separated: "16 kn", "32 inch", "23.6\tmph" (any Unicode whitespace)
/// - Joined: "120km", "-10.4m", ".5'", "120km/h"
/// - Unit first: "kn 16"
///
/// Unit abbreviations are matched exactly, including case.
pub fn parse_quantity<D: Dimension>(input: &str) -> Result<Quantity<D>, ParseError> {
    let (number, symbol) = split_tokens(input)?;

    let value: f64 = number.parse().map_err(|source| ParseError::InvalidNumber {
        token: number.to_string(),
        source,
    })?;

    let unit = Unit::<D>::lookup(symbol)
        .ok_or_else(|| ParseError::UnknownUnit(symbol.to_string()))?;

    let quantity = Quantity::from_unit(value, unit);
    tracing::trace!(
        input,
        value = quantity.canonical(),
        unit = unit.symbol(),
        dimension = D::NAME,
        "parsed quantity"
    );
    Ok(quantity)
}

/// Split input into (numeric token, unit token)
fn split_tokens(input: &str) -> Result<(&str, &str), ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    match tokens[..] {
        [joined] => split_joined(joined).ok_or_else(|| ParseError::Malformed(input.to_string())),
        [first, second] => {
            // The unit may come first; keep the given order unless only the
            // second token is a number
            if first.parse::<f64>().is_err() && second.parse::<f64>().is_ok() {
                Ok((second, first))
            } else {
                Ok((first, second))
            }
        }
        _ => Err(ParseError::Malformed(input.to_string())),
    }
}

/// Split a token with no whitespace, such as "120km"
///
/// The numeric part is what remains after dropping trailing unit
/// characters; the unit part is what remains after dropping leading
/// numeric characters. The two parts may overlap on odd input, which then
/// fails when the number or unit is checked.
fn split_joined(token: &str) -> Option<(&str, &str)> {
    let number = token.trim_end_matches(is_unit_char);
    let symbol = token.trim_start_matches(is_number_char);

    if number.is_empty() || symbol.is_empty() {
        return None;
    }
    Some((number, symbol))
}

fn is_unit_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '\'' | '"' | '/')
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '.')
}
