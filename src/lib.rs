pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{NnError, NnResult};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use network::{LayerSpec, Network, NetworkSpec, Parameters, WeightInit};
pub use loss::bce::BceLoss;
pub use optim::sgd::Sgd;
pub use train::{accuracy, evaluate, gradient_check, predict, train_model, Dataset, TrainConfig, TrainOutcome};
