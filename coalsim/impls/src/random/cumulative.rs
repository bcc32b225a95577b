use coalsim_core::cogs::RngCore;

/// A frozen discrete probability distribution over an arbitrary support,
/// sampled by binary search over its cumulative probabilities.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
pub struct CumulativeDistribution<V> {
    support: Vec<V>,
    cumulative: Vec<f64>,
}

impl<V> CumulativeDistribution<V> {
    /// Creates the distribution that samples each value of
    /// `weighted_support` proportionally to its weight. Zero-weight
    /// values are excluded from the support, so that binary search over
    /// the cumulative probabilities can never land on them.
    #[must_use]
    #[debug_requires(
        weighted_support.iter().all(|(_value, weight)| *weight >= 0.0_f64),
        "all weights are non-negative"
    )]
    #[debug_requires(
        weighted_support.iter().map(|(_value, weight)| *weight).sum::<f64>() > 0.0_f64,
        "the total weight is positive"
    )]
    pub fn new(weighted_support: Vec<(V, f64)>) -> Self {
        let total: f64 = weighted_support
            .iter()
            .map(|(_value, weight)| *weight)
            .sum();

        let mut support = Vec::with_capacity(weighted_support.len());
        let mut cumulative = Vec::with_capacity(weighted_support.len());

        let mut acc = 0.0_f64;

        for (value, weight) in weighted_support {
            if weight <= 0.0_f64 {
                continue;
            }

            acc += weight / total;

            support.push(value);
            cumulative.push(acc);
        }

        // rounding during accumulation must not leave the last bucket short
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0_f64;
        }

        Self {
            support,
            cumulative,
        }
    }

    #[must_use]
    pub fn support(&self) -> &[V] {
        &self.support
    }

    /// Samples one value of the support.
    pub fn sample<G: RngCore>(&self, rng: &mut G) -> &V {
        let cumulative_sample = rng.sample_uniform();

        let index = match self
            .cumulative
            .binary_search_by(|probability| probability.total_cmp(&cumulative_sample))
        {
            Ok(index) | Err(index) => index,
        };

        &self.support[index.min(self.support.len() - 1)]
    }
}
