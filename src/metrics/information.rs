//! Entropy based split statistics over categorical data.
use crate::data::dataset::Dataset;
use crate::error::{InductionError, Result};
use nalgebra::{DMatrix, DVector};

/// Shannon entropy, in bits, of a distribution given as raw counts.
///
/// Zero counts are skipped. An empty support (total of zero) has entropy `0.0`.
pub fn entropy<I>(counts: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let counts = counts.into_iter().collect::<Vec<_>>();
    let total = counts.iter().sum::<usize>();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .into_iter()
        .filter(|&count| count > 0)
        .fold(0.0, |entropy, count| {
            let probability = count as f64 / total;
            entropy - probability * probability.log2()
        })
}

/// Frequency tables of a set of rows, and the split statistics derived from them.
///
/// Value and label axes are indexed by the dataset's codes and sized by the full
/// dataset's vocabularies, so tables of any subset line up with the global ones.
/// Values absent from the summarised rows simply count zero.
#[derive(Clone, Debug)]
pub struct FrequencyTables {
    rows: usize,
    value_occurrences: Vec<DVector<usize>>,
    decision_counts: DVector<usize>,
    attribute_decision_counts: Vec<DMatrix<usize>>,
}

impl FrequencyTables {
    /// Summarises every row of `dataset`.
    pub fn new(dataset: &Dataset) -> Self {
        let rows = (0..dataset.nrows()).collect::<Vec<_>>();
        Self::from_subset(dataset, &rows)
    }

    /// Summarises only the rows of `dataset` listed in `rows`.
    pub fn from_subset(dataset: &Dataset, rows: &[usize]) -> Self {
        let (x, y) = dataset.into_parts();
        let num_labels = dataset.labels().len();
        let cardinalities = (0..dataset.nattributes())
            .map(|attribute| dataset.cardinality(attribute))
            .collect::<Vec<_>>();

        let mut value_occurrences = cardinalities
            .iter()
            .map(|&cardinality| DVector::zeros(cardinality))
            .collect::<Vec<_>>();
        let mut attribute_decision_counts = cardinalities
            .iter()
            .map(|&cardinality| DMatrix::zeros(cardinality, num_labels))
            .collect::<Vec<_>>();
        let mut decision_counts = DVector::zeros(num_labels);

        for &row in rows {
            let label = y[row];
            decision_counts[label] += 1;
            for (attribute, (occurrences, by_label)) in value_occurrences
                .iter_mut()
                .zip(attribute_decision_counts.iter_mut())
                .enumerate()
            {
                let value = x[(row, attribute)];
                occurrences[value] += 1;
                by_label[(value, label)] += 1;
            }
        }

        Self {
            rows: rows.len(),
            value_occurrences,
            decision_counts,
            attribute_decision_counts,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.rows
    }

    pub fn nattributes(&self) -> usize {
        self.value_occurrences.len()
    }

    fn check(&self, attribute: usize) -> Result<()> {
        if attribute >= self.nattributes() {
            return Err(InductionError::AttributeOutOfRange {
                attribute,
                count: self.nattributes(),
            });
        }
        Ok(())
    }

    /// Number of distinct values `attribute` takes among the summarised rows.
    pub fn unique_value_count(&self, attribute: usize) -> Result<usize> {
        Ok(self
            .value_occurrences(attribute)?
            .iter()
            .filter(|&&count| count > 0)
            .count())
    }

    /// Row count per value code of `attribute`.
    pub fn value_occurrences(&self, attribute: usize) -> Result<&DVector<usize>> {
        self.check(attribute)?;
        Ok(&self.value_occurrences[attribute])
    }

    /// Row count per label code.
    pub fn decision_counts(&self) -> &DVector<usize> {
        &self.decision_counts
    }

    /// Row count per (value code, label code) of `attribute`.
    pub fn attribute_decision_counts(&self, attribute: usize) -> Result<&DMatrix<usize>> {
        self.check(attribute)?;
        Ok(&self.attribute_decision_counts[attribute])
    }

    pub fn dataset_entropy(&self) -> f64 {
        entropy(self.decision_counts.iter().copied())
    }

    /// Label entropy remaining after partitioning on `attribute`, weighted by
    /// partition size.
    pub fn conditional_entropy(&self, attribute: usize) -> Result<f64> {
        let by_label = self.attribute_decision_counts(attribute)?;
        if self.rows == 0 {
            return Ok(0.0);
        }
        let total = self.rows as f64;
        Ok(by_label
            .row_iter()
            .zip(self.value_occurrences[attribute].iter())
            .filter(|(_, &occurrences)| occurrences > 0)
            .map(|(labels, &occurrences)| {
                occurrences as f64 / total * entropy(labels.iter().copied())
            })
            .sum())
    }

    pub fn information_gain(&self, attribute: usize) -> Result<f64> {
        Ok(self.dataset_entropy() - self.conditional_entropy(attribute)?)
    }

    /// Entropy of the attribute's own value distribution.
    pub fn split_information(&self, attribute: usize) -> Result<f64> {
        Ok(entropy(self.value_occurrences(attribute)?.iter().copied()))
    }

    /// Information gain normalised by split information; `0.0` when the split
    /// information is zero (a single value among the summarised rows).
    pub fn gain_ratio(&self, attribute: usize) -> Result<f64> {
        let split_information = self.split_information(attribute)?;
        if split_information == 0.0 {
            return Ok(0.0);
        }
        Ok(self.information_gain(attribute)? / split_information)
    }

    /// Attribute with the highest gain ratio, first in index order on ties.
    pub fn best_attribute(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for attribute in 0..self.nattributes() {
            let Ok(ratio) = self.gain_ratio(attribute) else {
                continue;
            };
            if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
                best = Some((attribute, ratio));
            }
        }
        best
    }
}
