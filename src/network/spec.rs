use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, NnResult};

/// One entry of the architecture: the number of units and the activation
/// applied after the layer's affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub activation: ActivationFunction,
}

impl LayerSpec {
    pub fn new(size: usize, activation: ActivationFunction) -> LayerSpec {
        LayerSpec { size, activation }
    }
}

/// Ordered description of a network, input layer first.
///
/// Index 0 is the input layer (activation `none`); indices `1..L-1` are the
/// computed layers, and the last one must be a single sigmoid unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    pub fn new(layers: Vec<LayerSpec>) -> NetworkSpec {
        NetworkSpec { layers }
    }

    /// Shorthand for `[(size, activation), ...]` lists.
    pub fn from_pairs(pairs: &[(usize, ActivationFunction)]) -> NetworkSpec {
        NetworkSpec {
            layers: pairs.iter().map(|&(size, activation)| LayerSpec { size, activation }).collect(),
        }
    }

    /// Parses a spec from JSON such as
    /// `{"layers": [{"size": 4, "activation": "none"}, {"size": 1, "activation": "sigmoid"}]}`
    /// and validates it.
    pub fn from_json(json: &str) -> NnResult<NetworkSpec> {
        let spec: NetworkSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Total number of layers including the input layer.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, |l| l.size)
    }

    pub fn validate(&self) -> NnResult<()> {
        if self.layers.len() < 2 {
            return Err(NnError::architecture(format!(
                "need at least an input layer and one computed layer, got {} layer(s)",
                self.layers.len()
            )));
        }
        if let Some(index) = self.layers.iter().position(|l| l.size == 0) {
            return Err(NnError::architecture(format!("layer {index} has zero units")));
        }
        if self.layers[0].activation != ActivationFunction::Identity {
            return Err(NnError::architecture(format!(
                "input layer must use activation none, got {}",
                self.layers[0].activation
            )));
        }
        for (index, layer) in self.layers.iter().enumerate().skip(1) {
            if layer.activation == ActivationFunction::Identity {
                return Err(NnError::architecture(format!(
                    "computed layer {index} needs relu or sigmoid, got none"
                )));
            }
        }
        let last = self.layers[self.layers.len() - 1];
        if last.activation != ActivationFunction::Sigmoid || last.size != 1 {
            return Err(NnError::architecture(format!(
                "output layer must be a single sigmoid unit, got {} x {}",
                last.size, last.activation
            )));
        }
        Ok(())
    }
}
