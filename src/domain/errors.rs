//! Generation failure taxonomy
//!
//! All variants are unrecoverable within a single generation request and
//! propagate to the HTTP boundary; no partial party is ever returned.

use thiserror::Error;

use crate::domain::value_objects::DiceParseError;

/// Failure raised while composing a party
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A dice expression failed to parse; the expressions are fixed in
    /// code, so this indicates a programming error
    #[error(transparent)]
    InvalidExpression(#[from] DiceParseError),

    /// A roll fell outside every range in a table, meaning the reference
    /// data does not cover the indexing die's domain
    #[error("Roll {roll} matched no range in table '{table}'")]
    TableLookupMiss { table: &'static str, roll: i32 },

    /// A key produced by one table has no entry in a dependent table, or
    /// the entry it points at is empty
    #[error("Table '{table}' has no usable entry for key '{key}'")]
    MissingReferenceEntry { table: &'static str, key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_miss_display_names_table_and_roll() {
        let err = GenerationError::TableLookupMiss {
            table: "alignments",
            roll: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("alignments"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_invalid_expression_wraps_parse_error() {
        let parse_err = DiceParseError::Empty;
        let err = GenerationError::from(parse_err.clone());
        assert_eq!(err.to_string(), parse_err.to_string());
    }
}
