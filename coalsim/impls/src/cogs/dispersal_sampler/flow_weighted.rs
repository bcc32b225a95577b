use coalsim_core::cogs::{DemographicHistory, DispersalSampler, Generation, Position, RngCore};
use coalsim_core::error::CoalescenceError;

use crate::random::{CumulativeDistribution, TransitionKernel};

/// Backward dispersal weighted by the demographic flows into a lineage's
/// current deme: a lineage resident in `deme` at `time` immigrated from
/// source `origin` with probability proportional to
/// `flow_at(time, origin, deme)`.
///
/// The distribution of each `(time, deme)` origin is built on its first
/// visit and cached in a [`TransitionKernel`] for the remainder of the
/// run.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Default)]
pub struct FlowWeightedDispersalSampler<P: Position> {
    kernel: TransitionKernel<(Generation, P), P>,
}

impl<P: Position> FlowWeightedDispersalSampler<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            kernel: TransitionKernel::new(),
        }
    }
}

impl<P: Position, H: DemographicHistory<P>> DispersalSampler<P, H>
    for FlowWeightedDispersalSampler<P>
{
    fn sample_dispersal_from_deme(
        &mut self,
        deme: &P,
        time: Generation,
        history: &H,
        rng: &mut impl RngCore,
    ) -> Result<P, CoalescenceError> {
        let origin = (time, deme.clone());

        if !self.kernel.has_distribution(&origin) {
            let weighted_sources: Vec<(P, f64)> = history
                .flows_into(time, deme)
                .into_iter()
                .filter(|(_source, count)| *count > 0)
                .map(|(source, count)| (source, f64::from(count)))
                .collect();

            if weighted_sources.is_empty() {
                // a deme holding lineages must have been immigrated into
                return Err(CoalescenceError::DemographyInconsistency {
                    deme: format!("{deme:?}"),
                    time,
                });
            }

            debug!(
                "Built the backward dispersal distribution of deme {:?} in generation {} over {} source(s).",
                deme,
                time,
                weighted_sources.len()
            );

            self.kernel
                .set(origin.clone(), CumulativeDistribution::new(weighted_sources));
        }

        Ok(self.kernel.draw(rng, &origin)?.clone())
    }
}
