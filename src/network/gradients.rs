use crate::error::{NnError, NnResult};
use crate::math::matrix::Matrix;

/// dW and db for one computed layer, shaped like its weights and biases.
#[derive(Debug, Clone)]
pub struct LayerGradients {
    pub dw: Matrix,
    pub db: Matrix,
}

/// Gradients of the cost for every computed layer, layer 1 first.
#[derive(Debug, Clone)]
pub struct Gradients {
    layers: Vec<LayerGradients>,
}

impl Gradients {
    /// `layers` must be ordered from layer 1 to layer L-1.
    pub(crate) fn new(layers: Vec<LayerGradients>) -> Gradients {
        Gradients { layers }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Gradients of computed layer `l` (1-based).
    pub fn layer(&self, l: usize) -> NnResult<&LayerGradients> {
        let last = self.layers.len();
        if l == 0 || l > last {
            return Err(NnError::LayerOutOfRange { index: l, last });
        }
        Ok(&self.layers[l - 1])
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerGradients> {
        self.layers.iter()
    }

    /// Flattened in the same order as `Parameters::to_vector`.
    pub fn to_vector(&self) -> Vec<f64> {
        self.layers.iter()
            .flat_map(|g| g.dw.values().chain(g.db.values()))
            .collect()
    }
}
