use super::dataset::Dataset;
use crate::error::Result;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

/// Reads comma-delimited categorical rows from `file_path`.
///
/// Every line is one row, the last field is the decision label and all fields
/// stay categorical tokens, kept verbatim. There is no header row, no quoting
/// and no whitespace trimming.
pub fn read_file_categorical<P: AsRef<Path>>(file_path: P) -> Result<Dataset> {
    let reader = builder().from_path(file_path)?;
    collect_rows(reader)
}

/// Same as [`read_file_categorical`], reading from any byte source.
pub fn read_categorical<R: Read>(source: R) -> Result<Dataset> {
    let reader = builder().from_reader(source);
    collect_rows(reader)
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .quoting(false)
        .flexible(true);
    builder
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset> {
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }
    Dataset::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InductionError;

    #[test]
    fn test_read_categorical() {
        let source = "vhigh,2,unacc\nlow,4,acc\r\nlow,2,unacc\n";
        let dataset = read_categorical(source.as_bytes()).unwrap();
        assert_eq!(dataset.nrows(), 3);
        assert_eq!(dataset.nattributes(), 2);
        assert_eq!(dataset.attribute_tokens(1), vec!["low", "4"]);
        assert_eq!(dataset.decision(1), "acc");
        assert_eq!(dataset.labels().tokens(), ["unacc", "acc"]);
    }

    #[test]
    fn test_read_categorical_keeps_surrounding_whitespace() {
        let dataset = read_categorical("a, x ,yes\na,x,no\n".as_bytes()).unwrap();
        let values = dataset.attribute_values(1).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.tokens(), [" x ", "x"]);
        assert_ne!(dataset.attribute_tokens(0), dataset.attribute_tokens(1));
        assert_eq!(dataset.labels().tokens(), ["yes", "no"]);
    }

    #[test]
    fn test_read_categorical_keeps_quotes_as_tokens() {
        let dataset = read_categorical("\"a,b\n".as_bytes()).unwrap();
        assert_eq!(dataset.attribute_tokens(0), vec!["\"a"]);
        assert_eq!(dataset.decision(0), "b");
    }

    #[test]
    fn test_read_categorical_inconsistent_fields() {
        let result = read_categorical("a,x,yes\nb,no\n".as_bytes());
        assert!(matches!(
            result,
            Err(InductionError::MalformedInput {
                row: 2,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_read_categorical_empty() {
        let result = read_categorical("".as_bytes());
        assert!(matches!(result, Err(InductionError::EmptyDataset)));
    }

    #[test]
    fn test_read_file_missing() {
        let result = read_file_categorical("definitely/not/here.data");
        assert!(result.is_err());
    }
}
