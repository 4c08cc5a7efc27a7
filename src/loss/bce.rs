use crate::error::{NnError, NnResult};
use crate::math::matrix::Matrix;

pub struct BceLoss;

/// Probabilities are clamped to [EPS, 1 - EPS] so saturated outputs never hit log(0).
/// A sigmoid output is exactly 0.0 or 1.0 once |z| is large (about 37 on the
/// positive side), so the clamp is reached in practice.
pub const EPS: f64 = 1e-12;

fn clamp(p: f64) -> f64 {
    p.clamp(EPS, 1.0 - EPS)
}

impl BceLoss {
    /// Mean binary cross-entropy over the example columns:
    /// -(1/m)·Σ(y·ln(a) + (1-y)·ln(1-a))
    ///
    /// `predicted` and `expected` are both 1×m.
    pub fn cost(predicted: &Matrix, expected: &Matrix) -> NnResult<f64> {
        check_shapes("bce_cost", predicted, expected)?;
        let m = predicted.cols as f64;
        let total: f64 = predicted.values().zip(expected.values())
            .map(|(p, y)| {
                let p = clamp(p);
                y * p.ln() + (1.0 - y) * (1.0 - p).ln()
            })
            .sum();
        Ok(-total / m)
    }

    /// dA of the output layer: -(y/a - (1-y)/(1-a)), per example.
    ///
    /// Not divided by m; `linear_backward` averages over the batch.
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> NnResult<Matrix> {
        check_shapes("bce_derivative", predicted, expected)?;
        let data = predicted.data.iter().zip(expected.data.iter())
            .map(|(p_row, y_row)| {
                p_row.iter().zip(y_row.iter())
                    .map(|(&p, &y)| {
                        let p = clamp(p);
                        -(y / p - (1.0 - y) / (1.0 - p))
                    })
                    .collect()
            })
            .collect();
        Matrix::from_data(data)
    }
}

fn check_shapes(op: &'static str, predicted: &Matrix, expected: &Matrix) -> NnResult<()> {
    if predicted.shape() != expected.shape() || predicted.rows != 1 {
        return Err(NnError::ShapeMismatch { op, left: predicted.shape(), right: expected.shape() });
    }
    if predicted.cols == 0 {
        return Err(NnError::EmptyBatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn cost_matches_hand_computation() {
        let al = Matrix::row(vec![0.8, 0.9, 0.4]);
        let y = Matrix::row(vec![1.0, 1.0, 0.0]);
        let expected = -((0.8f64).ln() + (0.9f64).ln() + (0.6f64).ln()) / 3.0;
        assert!(close(BceLoss::cost(&al, &y).unwrap(), expected, 1e-12));
    }

    #[test]
    fn uninformed_prediction_costs_ln_two() {
        let al = Matrix::row(vec![0.5; 4]);
        let y = Matrix::row(vec![1.0, 0.0, 1.0, 0.0]);
        assert!(close(BceLoss::cost(&al, &y).unwrap(), std::f64::consts::LN_2, 1e-12));
    }

    #[test]
    fn saturated_predictions_stay_finite() {
        let al = Matrix::row(vec![0.0, 1.0]);
        let y = Matrix::row(vec![1.0, 0.0]);
        let cost = BceLoss::cost(&al, &y).unwrap();
        assert!(cost.is_finite());
        assert!(cost > 20.0);
        assert!(BceLoss::derivative(&al, &y).unwrap().values().all(f64::is_finite));
    }

    #[test]
    fn saturated_sigmoid_output_is_clamped() {
        use crate::activation::activation::ActivationFunction;
        let al = ActivationFunction::Sigmoid.forward(&Matrix::row(vec![40.0, -800.0]));
        assert_eq!(al.data[0], vec![1.0, 0.0]);
        let y = Matrix::row(vec![0.0, 1.0]);
        let cost = BceLoss::cost(&al, &y).unwrap();
        assert!(close(cost, -(EPS.ln()), 1e-3), "cost {cost}");
    }

    #[test]
    fn derivative_matches_formula() {
        let al = Matrix::row(vec![0.25, 0.75]);
        let y = Matrix::row(vec![1.0, 0.0]);
        let da = BceLoss::derivative(&al, &y).unwrap();
        assert!(close(da.get(0, 0), -4.0, 1e-12));
        assert!(close(da.get(0, 1), 4.0, 1e-12));
    }

    #[test]
    fn rejects_mismatched_or_empty_batches() {
        let al = Matrix::row(vec![0.5, 0.5]);
        assert!(matches!(
            BceLoss::cost(&al, &Matrix::row(vec![1.0])),
            Err(NnError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            BceLoss::cost(&Matrix::zeros(1, 0), &Matrix::zeros(1, 0)),
            Err(NnError::EmptyBatch)
        ));
    }
}
