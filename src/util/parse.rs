//! Numeric input parsing.

use crate::error::{PlotError, Result};

/// Parse whitespace- or comma-separated real numbers.
pub fn parse_numbers(input: &str) -> Result<Vec<f64>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| PlotError::invalid_input(format!("'{}' is not a number", part)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mixed_separators() {
        assert_eq!(parse_numbers("1, 2 -3.5,4e2").unwrap(), vec![1.0, 2.0, -3.5, 400.0]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(parse_numbers("   ").unwrap().is_empty());
    }

    #[test]
    fn rejects_words() {
        assert!(matches!(parse_numbers("1 two 3"), Err(PlotError::InvalidInput(_))));
    }
}
