use crate::error::CoalescenceError;
use crate::forest::Forest;

use super::{DemographicHistory, Generation, Position};

pub trait CoalescencePolicy<P: Position, H: DemographicHistory<P>> {
    /// The number of distinct parents that the `children` lineages in
    /// `deme` may coalesce into over the step at `time`: `Some(k)` with
    /// `1 <= k <= children`, or `None` to let the simulation draw the
    /// number of ancestors from the random-partition law instead.
    ///
    /// # Errors
    ///
    /// `Err(DemographyInconsistency)` iff the history contradicts the
    /// presence of the `children` lineages at `deme`.
    fn target_ancestor_count(
        &self,
        deme: &P,
        time: Generation,
        children: usize,
        history: &H,
    ) -> Result<Option<usize>, CoalescenceError>;

    /// Whether the simulation may stop before reaching the configured
    /// origin time. The default rule stops once at most one tree is left,
    /// i.e. once the most recent common ancestor has been reached.
    #[must_use]
    fn has_terminated<T>(&self, forest: &Forest<P, T>, _time: Generation) -> bool {
        forest.num_trees() <= 1
    }
}
