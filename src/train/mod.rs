pub mod dataset;
pub mod evaluate;
pub mod grad_check;
pub mod train_config;
pub mod trainer;

pub use dataset::Dataset;
pub use evaluate::{accuracy, evaluate, predict};
pub use grad_check::{gradient_check, GradCheckReport};
pub use train_config::TrainConfig;
pub use trainer::{train_model, TrainOutcome};
