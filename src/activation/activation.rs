use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::fmt;
use std::str::FromStr;

use crate::error::{NnError, NnResult};
use crate::math::matrix::Matrix;

/// Nonlinearity applied after a layer's affine transform.
///
/// `Identity` is spelled `"none"` in configuration and is only valid on the
/// input layer, which computes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationFunction {
    #[serde(rename = "none")]
    Identity,
    #[serde(rename = "relu")]
    ReLU,
    Sigmoid,
}

impl ActivationFunction {
    /// Element-wise activation.
    ///
    /// In f64 the sigmoid rounds to exactly 1.0 once x exceeds about 36.7
    /// and underflows to 0.0 below about -745, so it is strictly inside (0, 1)
    /// only for moderate inputs. `BceLoss` clamps before taking logs.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Identity => x,
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }

    /// Derivative evaluated at the pre-activation `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Identity => 1.0,
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
        }
    }

    pub fn forward(&self, z: &Matrix) -> Matrix {
        z.map(|x| self.function(x))
    }

    /// Converts dA into dZ using the cached pre-activation `z`.
    pub fn backward(&self, da: &Matrix, z: &Matrix) -> NnResult<Matrix> {
        da.hadamard(&z.map(|x| self.derivative(x)))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Identity => "none",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::Sigmoid => "sigmoid",
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationFunction {
    type Err = NnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "identity" => Ok(ActivationFunction::Identity),
            "relu" => Ok(ActivationFunction::ReLU),
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            _ => Err(NnError::UnknownActivation { name: s.to_string() }),
        }
    }
}
