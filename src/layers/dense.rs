use crate::{
    activation::activation::ActivationFunction,
    error::NnResult,
    math::matrix::Matrix,
};

/// Values recorded by one layer's forward step and consumed by its backward step.
#[derive(Debug, Clone)]
pub struct LayerCache {
    /// Activation of the previous layer, i.e. this layer's input.
    pub a_prev: Matrix,
    /// Pre-activation `z = W·a_prev + b`.
    pub z: Matrix,
}

/// Gradients produced by one layer's backward step.
#[derive(Debug, Clone)]
pub struct LayerStep {
    pub da_prev: Matrix,
    pub dw: Matrix,
    pub db: Matrix,
}

/// `Z = W·A_prev + b`, with `b` broadcast over the example columns.
pub fn linear_forward(a_prev: &Matrix, weights: &Matrix, biases: &Matrix) -> NnResult<Matrix> {
    weights.dot(a_prev)?.add_column(biases)
}

pub fn linear_activation_forward(
    a_prev: &Matrix,
    weights: &Matrix,
    biases: &Matrix,
    activation: ActivationFunction,
) -> NnResult<(Matrix, LayerCache)> {
    let z = linear_forward(a_prev, weights, biases)?;
    let a = activation.forward(&z);
    Ok((a, LayerCache { a_prev: a_prev.clone(), z }))
}

/// Given dZ for this layer, returns (dA_prev, dW, db), all averaged over the batch.
pub fn linear_backward(dz: &Matrix, a_prev: &Matrix, weights: &Matrix) -> NnResult<LayerStep> {
    let m = a_prev.cols as f64;
    let dw = dz.dot(&a_prev.transpose())?.scale(1.0 / m);
    let db = dz.row_sums().scale(1.0 / m);
    let da_prev = weights.transpose().dot(dz)?;
    Ok(LayerStep { da_prev, dw, db })
}

pub fn linear_activation_backward(
    da: &Matrix,
    cache: &LayerCache,
    weights: &Matrix,
    activation: ActivationFunction,
) -> NnResult<LayerStep> {
    // Derivative is taken at the cached z, not at the activation.
    let dz = activation.backward(da, &cache.z)?;
    linear_backward(&dz, &cache.a_prev, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(data: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_data(data).unwrap()
    }

    #[test]
    fn linear_forward_applies_weights_and_bias() {
        let a_prev = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let w = m(vec![vec![1.0, -1.0]]);
        let b = m(vec![vec![0.5]]);
        let z = linear_forward(&a_prev, &w, &b).unwrap();
        assert_eq!(z.data, vec![vec![-1.5, -1.5]]);
    }

    #[test]
    fn forward_caches_input_and_pre_activation() {
        let a_prev = m(vec![vec![1.0], vec![-2.0]]);
        let w = m(vec![vec![1.0, 1.0], vec![2.0, 0.0]]);
        let b = Matrix::zeros(2, 1);
        let (a, cache) = linear_activation_forward(&a_prev, &w, &b, ActivationFunction::ReLU).unwrap();
        assert_eq!(cache.z.data, vec![vec![-1.0], vec![2.0]]);
        assert_eq!(cache.a_prev, a_prev);
        assert_eq!(a.data, vec![vec![0.0], vec![2.0]]);
    }

    #[test]
    fn backward_shapes_match_parameters() {
        let a_prev = Matrix::zeros(3, 5);
        let w = Matrix::zeros(2, 3);
        let dz = Matrix::zeros(2, 5);
        let step = linear_backward(&dz, &a_prev, &w).unwrap();
        assert_eq!(step.dw.shape(), (2, 3));
        assert_eq!(step.db.shape(), (2, 1));
        assert_eq!(step.da_prev.shape(), (3, 5));
    }

    #[test]
    fn backward_averages_over_examples() {
        let a_prev = m(vec![vec![1.0, 3.0]]);
        let w = m(vec![vec![2.0]]);
        let dz = m(vec![vec![1.0, 1.0]]);
        let step = linear_backward(&dz, &a_prev, &w).unwrap();
        assert_eq!(step.dw.data, vec![vec![2.0]]);
        assert_eq!(step.db.data, vec![vec![1.0]]);
        assert_eq!(step.da_prev.data, vec![vec![2.0, 2.0]]);
    }

    #[test]
    fn forward_rejects_wrong_input_height() {
        let a_prev = Matrix::zeros(4, 2);
        let w = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 1);
        assert!(linear_forward(&a_prev, &w, &b).is_err());
    }
}
