use serde::{Serialize, Deserialize};

use crate::error::NnResult;
use crate::network::parameters::WeightInit;

/// Hyperparameters for a `train_model` run.
///
/// # Fields
/// - `learning_rate`  — step size of the gradient-descent update
/// - `num_iterations` — exact number of full-batch iterations; there is no early stop
/// - `print_cost`     — log the cost every `print_every` iterations and on the last one
/// - `print_every`    — logging period in iterations
/// - `seed`           — seed for parameter initialization
/// - `weight_init`    — how weights are drawn
///
/// Any field missing from JSON falls back to `TrainConfig::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub num_iterations: usize,
    pub print_cost: bool,
    pub print_every: usize,
    pub seed: u64,
    pub weight_init: WeightInit,
}

impl TrainConfig {
    pub fn new(learning_rate: f64, num_iterations: usize) -> Self {
        TrainConfig {
            learning_rate,
            num_iterations,
            ..TrainConfig::default()
        }
    }

    pub fn from_json(json: &str) -> NnResult<TrainConfig> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.0075,
            num_iterations: 3000,
            print_cost: false,
            print_every: 100,
            seed: 1,
            weight_init: WeightInit::default(),
        }
    }
}
