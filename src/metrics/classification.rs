use crate::error::{InductionError, Result};

pub trait ClassificationMetrics {
    /// Share of predictions equal to the true label.
    fn accuracy<T: PartialEq>(&self, y_true: &[T], y_pred: &[T]) -> Result<f64> {
        if y_true.len() != y_pred.len() {
            return Err(InductionError::LengthMismatch);
        }
        if y_true.is_empty() {
            return Err(InductionError::EmptyDataset);
        }
        let correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(truth, prediction)| truth == prediction)
            .count();

        Ok(correct as f64 / y_true.len() as f64)
    }
}
