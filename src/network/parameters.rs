use rand::{rngs::StdRng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::error::{NnError, NnResult};
use crate::math::matrix::Matrix;
use crate::network::spec::NetworkSpec;

/// How the weight matrices are drawn at initialization. Biases always start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WeightInit {
    /// N(0, 1) scaled by `factor`; small values keep sigmoid units unsaturated.
    Scaled { factor: f64 },
    /// N(0, 1 / fan_in).
    Xavier,
    /// N(0, 2 / fan_in).
    He,
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::Scaled { factor: 0.01 }
    }
}

/// Weight matrix of shape (size[l], size[l-1]) and bias column of shape (size[l], 1).
#[derive(Debug, Clone, PartialEq)]
pub struct LayerParams {
    pub weights: Matrix,
    pub biases: Matrix,
}

/// Parameters of every computed layer. Layer numbers start at 1, matching
/// the architecture indices; the input layer has no parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    layers: Vec<LayerParams>,
}

impl Parameters {
    /// Draws fresh parameters for `spec`, deterministically from `seed`.
    pub fn initialize(spec: &NetworkSpec, init: WeightInit, seed: u64) -> NnResult<Parameters> {
        spec.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);

        let layers = spec.layers.windows(2)
            .map(|pair| {
                let (fan_in, size) = (pair[0].size, pair[1].size);
                let weights = match init {
                    WeightInit::Scaled { factor } => Matrix::random_normal(size, fan_in, factor, &mut rng),
                    WeightInit::Xavier => Matrix::xavier(size, fan_in, &mut rng),
                    WeightInit::He => Matrix::he(size, fan_in, &mut rng),
                };
                LayerParams { weights, biases: Matrix::zeros(size, 1) }
            })
            .collect::<Vec<_>>();

        log::debug!("initialized {} layer(s) with {:?} (seed {seed})", layers.len(), init);
        Ok(Parameters { layers })
    }

    /// Builds parameters from explicit per-layer values, layer 1 first.
    pub fn from_layers(layers: Vec<LayerParams>) -> Parameters {
        Parameters { layers }
    }

    /// Checks that there is one parameter layer per computed layer of `spec`
    /// and that every weight and bias has the shape that layer calls for.
    pub fn check_against(&self, spec: &NetworkSpec) -> NnResult<()> {
        let computed = spec.depth().saturating_sub(1);
        if self.layers.len() != computed {
            return Err(NnError::architecture(format!(
                "architecture has {computed} computed layer(s) but {} parameter layer(s) were given",
                self.layers.len()
            )));
        }
        for (pair, params) in spec.layers.windows(2).zip(self.layers.iter()) {
            let (fan_in, size) = (pair[0].size, pair[1].size);
            if params.weights.shape() != (size, fan_in) {
                return Err(NnError::ShapeMismatch {
                    op: "weights",
                    left: (size, fan_in),
                    right: params.weights.shape(),
                });
            }
            if params.biases.shape() != (size, 1) {
                return Err(NnError::ShapeMismatch {
                    op: "biases",
                    left: (size, 1),
                    right: params.biases.shape(),
                });
            }
        }
        Ok(())
    }

    /// Number of computed layers (L - 1).
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Parameters of computed layer `l`, where `1 <= l <= len()`.
    pub fn layer(&self, l: usize) -> NnResult<&LayerParams> {
        let index = self.position(l)?;
        Ok(&self.layers[index])
    }

    pub fn layer_mut(&mut self, l: usize) -> NnResult<&mut LayerParams> {
        let index = self.position(l)?;
        Ok(&mut self.layers[index])
    }

    fn position(&self, l: usize) -> NnResult<usize> {
        let last = self.layers.len();
        if l == 0 || l > last {
            return Err(NnError::LayerOutOfRange { index: l, last });
        }
        Ok(l - 1)
    }

    /// Iterates layers in forward order, layer 1 first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LayerParams> + ExactSizeIterator {
        self.layers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LayerParams> {
        self.layers.iter_mut()
    }

    /// Flattens every weight then bias, layer by layer, in row-major order.
    pub fn to_vector(&self) -> Vec<f64> {
        self.layers.iter()
            .flat_map(|p| p.weights.values().chain(p.biases.values()))
            .collect()
    }

    /// Inverse of `to_vector`, using `self` for the shapes.
    pub fn with_vector(&self, values: &[f64]) -> NnResult<Parameters> {
        let expected = self.to_vector().len();
        if values.len() != expected {
            return Err(NnError::ShapeMismatch {
                op: "with_vector",
                left: (expected, 1),
                right: (values.len(), 1),
            });
        }
        let mut out = self.clone();
        let mut source = values.iter().copied();
        for p in out.layers.iter_mut() {
            for x in p.weights.data.iter_mut().chain(p.biases.data.iter_mut()).flat_map(|r| r.iter_mut()) {
                // Length was checked above.
                *x = source.next().unwrap_or_default();
            }
        }
        Ok(out)
    }
}
