use crate::{
    error::{NnError, NnResult},
    network::gradients::Gradients,
    network::parameters::Parameters,
};

/// Vanilla gradient descent: `param -= learning_rate * grad`.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to every layer in place.
    pub fn step(&self, parameters: &mut Parameters, gradients: &Gradients) -> NnResult<()> {
        if parameters.len() != gradients.len() {
            return Err(NnError::ShapeMismatch {
                op: "sgd_step",
                left: (parameters.len(), 1),
                right: (gradients.len(), 1),
            });
        }
        for (params, grads) in parameters.iter_mut().zip(gradients.iter()) {
            params.weights.sub_scaled_assign(&grads.dw, self.learning_rate)?;
            params.biases.sub_scaled_assign(&grads.db, self.learning_rate)?;
        }
        Ok(())
    }
}
