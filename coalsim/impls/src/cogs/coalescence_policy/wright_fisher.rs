use coalsim_core::cogs::{CoalescencePolicy, DemographicHistory, Generation, Position};
use coalsim_core::error::CoalescenceError;

/// The Wright-Fisher-style coalescence policy: the lineages in a deme may
/// coalesce into at most as many distinct parents as the deme's recorded
/// population size one generation earlier.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Default, Clone, Copy)]
pub struct WrightFisherPolicy;

impl<P: Position, H: DemographicHistory<P>> CoalescencePolicy<P, H> for WrightFisherPolicy {
    fn target_ancestor_count(
        &self,
        deme: &P,
        time: Generation,
        children: usize,
        history: &H,
    ) -> Result<Option<usize>, CoalescenceError> {
        match history.size_at(deme, time) {
            Some(size) if size > 0 => {
                #[allow(clippy::cast_possible_truncation)]
                let size = size as usize;

                Ok(Some(children.min(size)))
            }
            // an unpopulated deme cannot hold lineages, let alone parents
            _ => Err(CoalescenceError::DemographyInconsistency {
                deme: format!("{deme:?}"),
                time,
            }),
        }
    }
}
