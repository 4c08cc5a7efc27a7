use crate::{
    error::NnResult,
    network::network::Network,
    train::dataset::Dataset,
};

/// Outcome of comparing backprop gradients with finite differences.
#[derive(Debug, Clone, Copy)]
pub struct GradCheckReport {
    /// `||g - g_approx|| / (||g|| + ||g_approx||)`
    pub difference: f64,
    /// Largest absolute gap between any single analytic and numeric entry.
    pub max_abs_error: f64,
    /// Number of parameters compared.
    pub checked: usize,
}

fn norm(v: impl Iterator<Item = f64>) -> f64 {
    v.map(|x| x * x).sum::<f64>().sqrt()
}

/// Compares `Network::backward` against central differences
/// `(J(θ + ε) - J(θ - ε)) / 2ε` for every weight and bias.
///
/// ReLU kinks between θ - ε and θ + ε make the numeric estimate unreliable;
/// keep ε small.
pub fn gradient_check(network: &Network, dataset: &Dataset, epsilon: f64) -> NnResult<GradCheckReport> {
    let (al, cache) = network.forward(&dataset.features)?;
    let analytic = network.backward(&al, &dataset.labels, &cache)?.to_vector();

    let theta = network.parameters.to_vector();
    let mut probe = network.clone();
    let mut numeric = Vec::with_capacity(theta.len());
    let mut shifted = theta.clone();

    for i in 0..theta.len() {
        shifted[i] = theta[i] + epsilon;
        probe.parameters = network.parameters.with_vector(&shifted)?;
        let plus = probe.cost(&dataset.features, &dataset.labels)?;

        shifted[i] = theta[i] - epsilon;
        probe.parameters = network.parameters.with_vector(&shifted)?;
        let minus = probe.cost(&dataset.features, &dataset.labels)?;

        shifted[i] = theta[i];
        numeric.push((plus - minus) / (2.0 * epsilon));
    }

    let gap = norm(analytic.iter().zip(numeric.iter()).map(|(a, n)| a - n));
    let denom = norm(analytic.iter().copied()) + norm(numeric.iter().copied());
    let difference = if denom == 0.0 { 0.0 } else { gap / denom };
    let max_abs_error = analytic.iter().zip(numeric.iter())
        .map(|(a, n)| (a - n).abs())
        .fold(0.0, f64::max);

    log::debug!("gradient check over {} parameter(s): difference {difference:e}", theta.len());
    Ok(GradCheckReport { difference, max_abs_error, checked: theta.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction::{Identity, ReLU, Sigmoid};
    use crate::network::parameters::WeightInit;
    use crate::network::spec::NetworkSpec;

    fn batch() -> Dataset {
        Dataset::from_samples(
            &[
                vec![1.62, -0.61, -0.53],
                vec![-1.07, 0.87, -2.30],
                vec![1.74, -0.76, 0.32],
                vec![-0.25, 1.46, -2.06],
                vec![-0.32, -0.38, 1.13],
            ],
            &[1.0, 0.0, 1.0, 0.0, 1.0],
        ).unwrap()
    }

    #[test]
    fn backprop_matches_finite_differences_with_relu() {
        let spec = NetworkSpec::from_pairs(&[(3, Identity), (5, ReLU), (3, ReLU), (1, Sigmoid)]);
        let mut network = Network::initialize(spec, WeightInit::Xavier, 42).unwrap();
        // Positive biases keep units whose inputs are all zero off the ReLU kink.
        for l in 1..=network.parameters.len() {
            let p = network.parameters.layer_mut(l).unwrap();
            p.biases = p.biases.map(|_| 0.1);
        }
        let report = gradient_check(&network, &batch(), 1e-7).unwrap();
        assert_eq!(report.checked, network.parameters.to_vector().len());
        assert!(report.difference < 1e-5, "difference {}", report.difference);
    }

    #[test]
    fn backprop_matches_finite_differences_with_sigmoid() {
        let spec = NetworkSpec::from_pairs(&[(3, Identity), (4, Sigmoid), (1, Sigmoid)]);
        let network = Network::initialize(spec, WeightInit::He, 7).unwrap();
        let report = gradient_check(&network, &batch(), 1e-6).unwrap();
        assert!(report.difference < 1e-6, "difference {}", report.difference);
        assert!(report.max_abs_error < 1e-6);
    }
}
