use crate::{
    error::{NnError, NnResult},
    math::matrix::Matrix,
    network::network::Network,
    train::dataset::Dataset,
};

/// Predicted classes (1 × examples) for `features`; p > 0.5 is class 1,
/// everything else, including exactly 0.5, is class 0.
pub fn predict(network: &Network, features: &Matrix) -> NnResult<Matrix> {
    network.predict(features)
}

/// Percentage of columns where `predictions` equals `labels`.
pub fn accuracy(predictions: &Matrix, labels: &Matrix) -> NnResult<f64> {
    if predictions.shape() != labels.shape() {
        return Err(NnError::ShapeMismatch {
            op: "accuracy",
            left: predictions.shape(),
            right: labels.shape(),
        });
    }
    let total = predictions.rows * predictions.cols;
    if total == 0 {
        return Err(NnError::EmptyBatch);
    }
    let correct = predictions.values().zip(labels.values()).filter(|(p, y)| p == y).count();
    Ok(100.0 * correct as f64 / total as f64)
}

/// Predicts on `dataset` and logs the accuracy. Returns (predictions, accuracy %).
pub fn evaluate(network: &Network, dataset: &Dataset) -> NnResult<(Matrix, f64)> {
    let predictions = predict(network, &dataset.features)?;
    let acc = accuracy(&predictions, &dataset.labels)?;
    log::info!("Accuracy: {acc:.2}% on {} example(s)", dataset.num_examples());
    Ok((predictions, acc))
}
