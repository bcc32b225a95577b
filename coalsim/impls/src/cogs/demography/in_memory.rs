use std::collections::BTreeMap;

use fnv::FnvHashMap;

use coalsim_core::cogs::{DemographicHistory, Generation, Position};

/// A demographic history accumulated in memory, the way a forward-time
/// demographic expansion records it: population sizes per deme and time,
/// and backward migration counts aggregated per `(time, origin,
/// destination)` triple.
///
/// The flows are keyed by destination so that the backward kernels can
/// enumerate the sources of a deme in one lookup; the per-destination
/// source maps are ordered so that the kernel support order is
/// reproducible.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
pub struct InMemoryDemographicHistory<P: Position> {
    sizes: FnvHashMap<P, FnvHashMap<Generation, u32>>,
    flows: FnvHashMap<P, FnvHashMap<Generation, BTreeMap<P, u32>>>,
}

impl<P: Position> Default for InMemoryDemographicHistory<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Position> InMemoryDemographicHistory<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sizes: FnvHashMap::default(),
            flows: FnvHashMap::default(),
        }
    }

    /// Records the population size of `deme` at `time`, overwriting any
    /// earlier record for the pair.
    pub fn record_size(&mut self, deme: P, time: Generation, size: u32) {
        self.sizes.entry(deme).or_default().insert(time, size);
    }

    /// Records `count` backward migration events from `origin` into
    /// `destination` over the step at `time`, aggregating with the flow
    /// already recorded for the same triple.
    pub fn record_flow(&mut self, time: Generation, origin: P, destination: P, count: u32) {
        *self
            .flows
            .entry(destination)
            .or_default()
            .entry(time)
            .or_default()
            .entry(origin)
            .or_insert(0_u32) += count;
    }
}

impl<P: Position> DemographicHistory<P> for InMemoryDemographicHistory<P> {
    fn size_at(&self, deme: &P, time: Generation) -> Option<u32> {
        self.sizes.get(deme).and_then(|sizes| sizes.get(&time)).copied()
    }

    fn flow_at(&self, time: Generation, origin: &P, destination: &P) -> u32 {
        self.flows
            .get(destination)
            .and_then(|flows| flows.get(&time))
            .and_then(|sources| sources.get(origin))
            .copied()
            .unwrap_or(0_u32)
    }

    fn flows_into(&self, time: Generation, destination: &P) -> Vec<(P, u32)> {
        self.flows
            .get(destination)
            .and_then(|flows| flows.get(&time))
            .map(|sources| {
                sources
                    .iter()
                    .filter(|(_origin, count)| **count > 0)
                    .map(|(origin, count)| (origin.clone(), *count))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use coalsim_core::cogs::DemographicHistory;

    use super::InMemoryDemographicHistory;

    #[test]
    fn repeated_flow_records_aggregate() {
        let mut history = InMemoryDemographicHistory::new();

        history.record_flow(3_u32, 'a', 'b', 2);
        history.record_flow(3, 'a', 'b', 5);
        history.record_flow(3, 'c', 'b', 1);
        history.record_flow(2, 'a', 'b', 9);

        assert_eq!(history.flow_at(3, &'a', &'b'), 7);
        assert_eq!(history.flow_at(3, &'c', &'b'), 1);
        assert_eq!(history.flow_at(2, &'a', &'b'), 9);

        // unrecorded triples read as zero
        assert_eq!(history.flow_at(3, &'b', &'a'), 0);
        assert_eq!(history.flow_at(1, &'a', &'b'), 0);

        // sources are enumerated in deme order
        assert_eq!(history.flows_into(3, &'b'), vec![('a', 7), ('c', 1)]);
        assert_eq!(history.flows_into(3, &'a'), vec![]);
    }

    #[test]
    fn sizes_are_overwritten_per_deme_and_time() {
        let mut history: InMemoryDemographicHistory<char> = InMemoryDemographicHistory::new();

        history.record_size('a', 1, 100);
        history.record_size('a', 1, 50);
        history.record_size('a', 2, 75);

        assert_eq!(history.size_at(&'a', 1), Some(50));
        assert_eq!(history.size_at(&'a', 2), Some(75));
        assert_eq!(history.size_at(&'a', 3), None);
        assert_eq!(history.size_at(&'b', 1), None);
    }
}
