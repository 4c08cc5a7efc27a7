pub mod cache;
pub mod gradients;
pub mod network;
pub mod parameters;
pub mod spec;

pub use cache::ForwardCache;
pub use gradients::{Gradients, LayerGradients};
pub use network::Network;
pub use parameters::{LayerParams, Parameters, WeightInit};
pub use spec::{NetworkSpec, LayerSpec};
