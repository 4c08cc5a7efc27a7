use crate::{
    error::{NnError, NnResult},
    loss::bce::BceLoss,
    network::network::Network,
    network::spec::NetworkSpec,
    optim::sgd::Sgd,
    train::dataset::Dataset,
    train::train_config::TrainConfig,
};

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    /// The trained network; `network.parameters` holds the final weights.
    pub network: Network,
    /// Cost before each update, one entry per iteration.
    pub costs: Vec<f64>,
}

/// Trains a freshly initialized network on the full batch for exactly
/// `config.num_iterations` iterations of forward → cost → backward → update.
///
/// The cost is recorded for monitoring only. A non-finite cost aborts the run.
pub fn train_model(dataset: &Dataset, spec: &NetworkSpec, config: &TrainConfig) -> NnResult<TrainOutcome> {
    let mut network = Network::initialize(spec.clone(), config.weight_init, config.seed)?;
    if dataset.num_features() != spec.input_size() {
        return Err(NnError::ShapeMismatch {
            op: "train_model",
            left: (spec.input_size(), 1),
            right: dataset.features.shape(),
        });
    }
    let optimizer = Sgd::new(config.learning_rate);
    let mut costs = Vec::with_capacity(config.num_iterations);

    log::debug!(
        "training {} layer(s) on {} example(s) for {} iteration(s) at lr {}",
        network.parameters.len(),
        dataset.num_examples(),
        config.num_iterations,
        config.learning_rate
    );

    for iteration in 0..config.num_iterations {
        let (al, cache) = network.forward(&dataset.features)?;

        let cost = BceLoss::cost(&al, &dataset.labels)?;
        if !cost.is_finite() {
            return Err(NnError::NonFiniteCost { iteration, value: cost });
        }
        costs.push(cost);

        let gradients = network.backward(&al, &dataset.labels, &cache)?;
        optimizer.step(&mut network.parameters, &gradients)?;

        let periodic = config.print_every > 0 && iteration % config.print_every == 0;
        if config.print_cost && (periodic || iteration + 1 == config.num_iterations) {
            log::info!("Cost after iteration {iteration}: {cost:.6}");
        }
    }

    if let (Some(first), Some(last)) = (costs.first(), costs.last()) {
        log::debug!("training finished, cost {first:.6} -> {last:.6}");
    }

    Ok(TrainOutcome { network, costs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction::{Identity, ReLU, Sigmoid};
    use crate::network::parameters::WeightInit;

    fn separable() -> Dataset {
        Dataset::from_samples(
            &[
                vec![2.0, 1.0], vec![1.5, 2.0], vec![3.0, 0.5], vec![2.5, 2.5],
                vec![-2.0, -1.0], vec![-1.0, -2.5], vec![-3.0, -0.5], vec![-2.5, -2.0],
            ],
            &[1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        ).unwrap()
    }

    #[test]
    fn records_one_cost_per_iteration() {
        let spec = NetworkSpec::from_pairs(&[(2, Identity), (3, ReLU), (1, Sigmoid)]);
        let outcome = train_model(&separable(), &spec, &TrainConfig::new(0.01, 17)).unwrap();
        assert_eq!(outcome.costs.len(), 17);
        assert!(outcome.costs.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn zero_iterations_returns_initial_parameters() {
        let spec = NetworkSpec::from_pairs(&[(2, Identity), (3, ReLU), (1, Sigmoid)]);
        let config = TrainConfig::new(0.01, 0);
        let outcome = train_model(&separable(), &spec, &config).unwrap();
        let fresh = Network::initialize(spec, config.weight_init, config.seed).unwrap();
        assert!(outcome.costs.is_empty());
        assert_eq!(outcome.network.parameters, fresh.parameters);
    }

    #[test]
    fn cost_falls_on_separable_data() {
        let spec = NetworkSpec::from_pairs(&[(2, Identity), (4, ReLU), (1, Sigmoid)]);
        let config = TrainConfig {
            learning_rate: 0.1,
            num_iterations: 500,
            weight_init: WeightInit::Xavier,
            ..TrainConfig::default()
        };
        let outcome = train_model(&separable(), &spec, &config).unwrap();
        let (first, last) = (outcome.costs[0], outcome.costs[outcome.costs.len() - 1]);
        assert!(last < first, "cost went from {first} to {last}");
    }

    #[test]
    fn same_seed_gives_same_run() {
        let spec = NetworkSpec::from_pairs(&[(2, Identity), (3, Sigmoid), (1, Sigmoid)]);
        let config = TrainConfig::new(0.05, 50);
        let a = train_model(&separable(), &spec, &config).unwrap();
        let b = train_model(&separable(), &spec, &config).unwrap();
        assert_eq!(a.costs, b.costs);
        assert_eq!(a.network.parameters, b.network.parameters);
    }

    #[test]
    fn mismatched_feature_count_fails_before_training() {
        let spec = NetworkSpec::from_pairs(&[(3, Identity), (1, Sigmoid)]);
        let err = train_model(&separable(), &spec, &TrainConfig::new(0.1, 5)).unwrap_err();
        assert!(matches!(err, NnError::ShapeMismatch { .. }));
    }

    #[test]
    fn invalid_architecture_fails_before_training() {
        let spec = NetworkSpec::from_pairs(&[(2, Identity)]);
        let err = train_model(&separable(), &spec, &TrainConfig::new(0.1, 5)).unwrap_err();
        assert!(matches!(err, NnError::InvalidArchitecture { .. }));
    }
}
