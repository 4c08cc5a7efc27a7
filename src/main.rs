// Small demo: trains the deep binary classifier on a toy batch and reports
// training accuracy. Control output with RUST_LOG (defaults to `info`).
use deep_nn::{evaluate, train_model, Dataset, NetworkSpec, NnResult, TrainConfig, WeightInit};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> NnResult<()> {
    use deep_nn::ActivationFunction::{Identity, ReLU, Sigmoid};

    let spec = NetworkSpec::from_pairs(&[(4, Identity), (5, ReLU), (4, ReLU), (3, ReLU), (1, Sigmoid)]);

    // Class 1 when the first two features sum to a positive value. Every
    // sample is paired with its mirror image so both classes are equally
    // common and predicting a single class scores 50%.
    let positives = [
        [1.2, 0.4, -0.3, 0.8],
        [0.9, 1.1, 0.5, -0.2],
        [2.0, -0.5, 1.0, 0.3],
        [0.3, 0.7, -1.1, -0.9],
        [1.4, 0.9, 0.0, 1.2],
    ];
    let mut samples = Vec::with_capacity(2 * positives.len());
    for p in positives {
        samples.push(p.to_vec());
        samples.push(p.iter().map(|v| -v).collect());
    }
    let labels: Vec<f64> = samples.iter()
        .map(|s| if s[0] + s[1] > 0.0 { 1.0 } else { 0.0 })
        .collect();
    let dataset = Dataset::from_samples(&samples, &labels)?;

    // 0.01-scaled weights leave four ReLU layers near zero; He keeps the
    // activations alive.
    let config = TrainConfig {
        learning_rate: 0.05,
        num_iterations: 2500,
        print_cost: true,
        weight_init: WeightInit::He,
        ..TrainConfig::default()
    };

    let outcome = train_model(&dataset, &spec, &config)?;
    let (predictions, _) = evaluate(&outcome.network, &dataset)?;
    let positive = predictions.values().filter(|&p| p == 1.0).count();
    log::info!("Predicted class 1 for {positive} of {} example(s)", dataset.num_examples());
    Ok(())
}
