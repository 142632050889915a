//! Error types shared by ingestion, induction and export.

use thiserror::Error;

/// Everything that can go wrong while loading data, inducing a tree or exporting it.
#[derive(Debug, Error)]
pub enum InductionError {
    #[error("The dataset is empty.")]
    EmptyDataset,

    #[error("Row {row} has {found} fields, expected {expected}.")]
    MalformedInput {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Attribute index {attribute} is out of range for {count} attributes.")]
    AttributeOutOfRange { attribute: usize, count: usize },

    #[error("Value '{value}' was never seen for attribute a{position}.", position = .attribute + 1)]
    UnknownValue { attribute: usize, value: String },

    #[error("Row has {found} attribute values, expected {expected}.")]
    RowLength { expected: usize, found: usize },

    #[error("Tree wasn't built yet.")]
    NotFitted,

    #[error("Predictions and labels are of different sizes.")]
    LengthMismatch,

    #[error("External tool `{tool}` unavailable: {reason}")]
    ExternalToolUnavailable { tool: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type for induction operations
pub type Result<T> = std::result::Result<T, InductionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InductionError::EmptyDataset;
        assert!(format!("{}", err).contains("empty"));

        let err = InductionError::MalformedInput {
            row: 3,
            expected: 7,
            found: 6,
        };
        let message = format!("{}", err);
        assert!(message.contains("Row 3"));
        assert!(message.contains("expected 7"));

        let err = InductionError::UnknownValue {
            attribute: 0,
            value: "vhigh".to_string(),
        };
        let message = format!("{}", err);
        assert!(message.contains("a1"));
        assert!(message.contains("vhigh"));

        let err = InductionError::ExternalToolUnavailable {
            tool: "dot".to_string(),
            reason: "not found".to_string(),
        };
        assert!(format!("{}", err).contains("`dot`"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: InductionError = io.into();
        assert!(matches!(err, InductionError::Io(_)));
    }
}
