use coalsim_core::cogs::{CoalescencePolicy, DemographicHistory, Generation, Position};
use coalsim_core::error::CoalescenceError;

/// The strictest coalescence policy: all lineages cohabiting a deme
/// coalesce into a single ancestor at every step.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleAncestorPolicy;

impl<P: Position, H: DemographicHistory<P>> CoalescencePolicy<P, H> for SingleAncestorPolicy {
    fn target_ancestor_count(
        &self,
        _deme: &P,
        _time: Generation,
        _children: usize,
        _history: &H,
    ) -> Result<Option<usize>, CoalescenceError> {
        Ok(Some(1))
    }
}
