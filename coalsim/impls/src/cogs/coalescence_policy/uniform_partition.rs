use coalsim_core::cogs::{CoalescencePolicy, DemographicHistory, Generation, Position};
use coalsim_core::error::CoalescenceError;

/// Leaves the number of ancestors to the random-partition law of the
/// occupancy spectrum sampler instead of deriving it from the
/// demographic history.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformPartitionPolicy;

impl<P: Position, H: DemographicHistory<P>> CoalescencePolicy<P, H> for UniformPartitionPolicy {
    fn target_ancestor_count(
        &self,
        _deme: &P,
        _time: Generation,
        _children: usize,
        _history: &H,
    ) -> Result<Option<usize>, CoalescenceError> {
        Ok(None)
    }
}

#[cfg(test)]
mod test {
    use coalsim_core::cogs::CoalescencePolicy;

    use crate::cogs::demography::InMemoryDemographicHistory;

    use super::UniformPartitionPolicy;

    #[test]
    fn defers_to_the_partition_law() {
        let history: InMemoryDemographicHistory<char> = InMemoryDemographicHistory::new();

        assert_eq!(
            UniformPartitionPolicy.target_ancestor_count(&'a', 3, 7, &history),
            Ok(None)
        );
    }
}
