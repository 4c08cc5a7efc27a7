use crate::error::{NnError, NnResult};
use crate::math::matrix::Matrix;

/// A labelled batch: features are (features × examples), labels are (1 × examples)
/// and hold only 0 or 1.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Matrix,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Matrix) -> NnResult<Dataset> {
        if features.cols == 0 || features.rows == 0 {
            return Err(NnError::EmptyBatch);
        }
        if labels.rows != 1 || labels.cols != features.cols {
            return Err(NnError::ShapeMismatch {
                op: "dataset",
                left: features.shape(),
                right: labels.shape(),
            });
        }
        if let Some((index, value)) = labels.values().enumerate().find(|&(_, y)| y != 0.0 && y != 1.0) {
            return Err(NnError::NonBinaryLabel { index, value });
        }
        Ok(Dataset { features, labels })
    }

    /// Builds a dataset from one feature vector per example.
    pub fn from_samples(samples: &[Vec<f64>], labels: &[f64]) -> NnResult<Dataset> {
        let by_example = Matrix::from_data(samples.to_vec())?;
        Dataset::new(by_example.transpose(), Matrix::row(labels.to_vec()))
    }

    pub fn num_examples(&self) -> usize {
        self.features.cols
    }

    pub fn num_features(&self) -> usize {
        self.features.rows
    }
}
