use crate::error::{InductionError, Result};
use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

/// Interned tokens of one categorical column.
///
/// Codes are handed out in first-seen order, so iterating a vocabulary walks the
/// values in the order they first appear in the data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    codes: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the code of `token`, assigning the next free one if it is new.
    pub fn intern(&mut self, token: &str) -> usize {
        if let Some(&code) = self.codes.get(token) {
            return code;
        }
        let code = self.tokens.len();
        self.tokens.push(token.to_string());
        self.codes.insert(token.to_string(), code);
        code
    }

    pub fn code(&self, token: &str) -> Option<usize> {
        self.codes.get(token).copied()
    }

    pub fn token(&self, code: usize) -> Option<&str> {
        self.tokens.get(code).map(String::as_str)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A table of categorical rows, each labelled with a decision.
///
/// Tokens are interned per column: `x[(row, attribute)]` is the code of the
/// attribute value in `attribute_values[attribute]` and `y[row]` is the code of
/// the decision in `labels`. Rows are never copied once loaded; induction refers
/// to them by index.
pub struct Dataset {
    pub x: DMatrix<usize>,
    pub y: DVector<usize>,
    attribute_values: Vec<Vocabulary>,
    labels: Vocabulary,
}

impl Debug for Dataset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset {{\n    x: [\n")?;

        for i in 0..self.x.nrows() {
            write!(f, "        [")?;
            for j in 0..self.x.ncols() {
                write!(f, "{}, ", self.value(j, self.x[(i, j)]))?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ],\n    y: [")?;
        for i in 0..self.y.len() {
            write!(f, "{}, ", self.decision(i))?;
        }
        write!(f, "]\n}}")
    }
}

impl Dataset {
    /// Builds a dataset from raw rows whose last field is the decision label.
    ///
    /// # Errors
    ///
    /// Returns [`InductionError::EmptyDataset`] when there are no rows and
    /// [`InductionError::MalformedInput`] when a row has no fields or a field count
    /// different from the first row.
    pub fn from_rows<R, S>(rows: R) -> Result<Self>
    where
        R: IntoIterator,
        R::Item: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut expected = None;
        let mut attribute_values: Vec<Vocabulary> = Vec::new();
        let mut labels = Vocabulary::new();
        let mut codes = Vec::new();
        let mut decisions = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let width = *expected.get_or_insert(row.len());
            if row.is_empty() || row.len() != width {
                return Err(InductionError::MalformedInput {
                    row: index + 1,
                    expected: width.max(1),
                    found: row.len(),
                });
            }
            if index == 0 {
                attribute_values = vec![Vocabulary::new(); width - 1];
            }

            let (label, values) = row.split_last().ok_or(InductionError::MalformedInput {
                row: index + 1,
                expected: width,
                found: 0,
            })?;
            for (vocabulary, value) in attribute_values.iter_mut().zip(values) {
                codes.push(vocabulary.intern(value.as_ref()));
            }
            decisions.push(labels.intern(label.as_ref()));
        }

        if decisions.is_empty() {
            return Err(InductionError::EmptyDataset);
        }

        let x = DMatrix::from_row_slice(decisions.len(), attribute_values.len(), &codes);
        let y = DVector::from_vec(decisions);
        Ok(Self {
            x,
            y,
            attribute_values,
            labels,
        })
    }

    pub fn into_parts(&self) -> (&DMatrix<usize>, &DVector<usize>) {
        (&self.x, &self.y)
    }

    pub fn is_not_empty(&self) -> bool {
        !self.y.is_empty()
    }

    pub fn nrows(&self) -> usize {
        self.y.len()
    }

    pub fn nattributes(&self) -> usize {
        self.x.ncols()
    }

    /// Vocabulary of the values attribute `attribute` takes across the dataset.
    pub fn attribute_values(&self, attribute: usize) -> Result<&Vocabulary> {
        self.attribute_values
            .get(attribute)
            .ok_or(InductionError::AttributeOutOfRange {
                attribute,
                count: self.nattributes(),
            })
    }

    /// Number of distinct values `attribute` takes across the dataset.
    pub fn cardinality(&self, attribute: usize) -> usize {
        self.attribute_values[attribute].len()
    }

    pub fn labels(&self) -> &Vocabulary {
        &self.labels
    }

    /// Token of value `code` of attribute `attribute`.
    ///
    /// Both indices come from this dataset, so an unknown pair is a caller bug.
    pub fn value(&self, attribute: usize, code: usize) -> &str {
        &self.attribute_values[attribute].tokens[code]
    }

    pub fn label(&self, code: usize) -> &str {
        &self.labels.tokens[code]
    }

    /// Decision token of row `row`.
    pub fn decision(&self, row: usize) -> &str {
        self.label(self.y[row])
    }

    /// Attribute tokens of row `row`, in attribute order.
    pub fn attribute_tokens(&self, row: usize) -> Vec<&str> {
        (0..self.nattributes())
            .map(|attribute| self.value(attribute, self.x[(row, attribute)]))
            .collect()
    }
}
