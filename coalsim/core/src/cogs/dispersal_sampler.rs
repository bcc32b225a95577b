use crate::error::CoalescenceError;

use super::{DemographicHistory, Generation, Position, RngCore};

pub trait DispersalSampler<P: Position, H: DemographicHistory<P>> {
    /// Samples the deme from which a lineage resident in `deme` at `time`
    /// immigrated one generation earlier.
    ///
    /// # Errors
    ///
    /// `Err(DemographyInconsistency)` iff the history contradicts the
    /// presence of the lineage at `deme`, e.g. because it records no
    /// migration into `deme` at `time`.
    fn sample_dispersal_from_deme(
        &mut self,
        deme: &P,
        time: Generation,
        history: &H,
        rng: &mut impl RngCore,
    ) -> Result<P, CoalescenceError>;
}
