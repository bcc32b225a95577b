use rand::{rngs::StdRng, Rng, SeedableRng};

use coalsim_core::cogs::RngCore;

/// The reproducibly seedable generator that backs a whole simulation
/// replicate: occupancy spectrum draws, shuffles and kernel draws all
/// funnel through one instance, so seeding it fully determines the run.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone)]
pub struct SeededStdRng(StdRng);

impl SeededStdRng {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RngCore for SeededStdRng {
    fn sample_uniform(&mut self) -> f64 {
        self.0.gen_range(0.0_f64..1.0_f64)
    }
}

impl core::fmt::Debug for SeededStdRng {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("SeededStdRng").finish_non_exhaustive()
    }
}
