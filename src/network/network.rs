use crate::{
    error::NnResult,
    layers::dense::{linear_activation_backward, linear_activation_forward},
    loss::bce::BceLoss,
    math::matrix::Matrix,
    network::cache::ForwardCache,
    network::gradients::{Gradients, LayerGradients},
    network::parameters::{Parameters, WeightInit},
    network::spec::NetworkSpec,
};

/// An architecture together with the parameters of its computed layers.
#[derive(Debug, Clone)]
pub struct Network {
    pub spec: NetworkSpec,
    pub parameters: Parameters,
}

impl Network {
    /// Validates `spec` and draws fresh parameters from `seed`.
    pub fn initialize(spec: NetworkSpec, init: WeightInit, seed: u64) -> NnResult<Network> {
        let parameters = Parameters::initialize(&spec, init, seed)?;
        Ok(Network { spec, parameters })
    }

    /// Wraps existing parameters after checking them against `spec`: one
    /// layer per computed layer, weights (size[l], size[l-1]), biases (size[l], 1).
    pub fn from_parameters(spec: NetworkSpec, parameters: Parameters) -> NnResult<Network> {
        spec.validate()?;
        parameters.check_against(&spec)?;
        Ok(Network { spec, parameters })
    }

    /// Runs `x` (features × examples) through every computed layer.
    /// Returns the output probabilities (1 × examples) and the per-layer cache.
    pub fn forward(&self, x: &Matrix) -> NnResult<(Matrix, ForwardCache)> {
        // `parameters` may have been replaced since construction.
        self.parameters.check_against(&self.spec)?;
        let mut cache = ForwardCache::with_capacity(self.parameters.len());
        let mut current = x.clone();
        for (params, layer) in self.parameters.iter().zip(self.spec.layers.iter().skip(1)) {
            let (a, layer_cache) = linear_activation_forward(
                &current,
                &params.weights,
                &params.biases,
                layer.activation,
            )?;
            cache.push(layer_cache);
            current = a;
        }
        Ok((current, cache))
    }

    /// Backpropagates the cross-entropy cost through the cached forward pass.
    ///
    /// Layers are visited strictly last to first: each layer's dA_prev is
    /// the next visited layer's dA.
    pub fn backward(&self, al: &Matrix, y: &Matrix, cache: &ForwardCache) -> NnResult<Gradients> {
        let mut da = BceLoss::derivative(al, y)?;
        let mut reversed = Vec::with_capacity(self.parameters.len());

        for l in (1..=self.parameters.len()).rev() {
            let params = self.parameters.layer(l)?;
            let step = linear_activation_backward(
                &da,
                cache.layer(l)?,
                &params.weights,
                self.spec.layers[l].activation,
            )?;
            reversed.push(LayerGradients { dw: step.dw, db: step.db });
            da = step.da_prev;
        }

        reversed.reverse();
        Ok(Gradients::new(reversed))
    }

    /// Output probabilities for `x`, without keeping the cache.
    pub fn probabilities(&self, x: &Matrix) -> NnResult<Matrix> {
        self.forward(x).map(|(al, _)| al)
    }

    /// Cost of the current parameters on a batch.
    pub fn cost(&self, x: &Matrix, y: &Matrix) -> NnResult<f64> {
        BceLoss::cost(&self.probabilities(x)?, y)
    }

    /// Class labels (0 or 1) per example. A probability of exactly 0.5 maps to 0.
    pub fn predict(&self, x: &Matrix) -> NnResult<Matrix> {
        Ok(self.probabilities(x)?.map(|p| if p > 0.5 { 1.0 } else { 0.0 }))
    }
}
