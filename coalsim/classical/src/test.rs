use coalsim_core::cogs::Generation;
use coalsim_core::error::CoalescenceError;
use coalsim_core::landscape::Location;

use coalsim_impls::cogs::demography::InMemoryDemographicHistory;

use super::ClassicalCoalescence;

fn two_deme_history(
    sampling_time: Generation,
    size: u32,
) -> (InMemoryDemographicHistory<Location>, Location, Location) {
    let deme_a = Location::new(0, 0);
    let deme_b = Location::new(1, 0);

    let mut history = InMemoryDemographicHistory::new();

    for time in 0..=sampling_time {
        history.record_size(deme_a.clone(), time, size);
        history.record_size(deme_b.clone(), time, size);

        // mostly sedentary demes with a little symmetric migration
        history.record_flow(time, deme_a.clone(), deme_a.clone(), 8);
        history.record_flow(time, deme_b.clone(), deme_a.clone(), 2);
        history.record_flow(time, deme_b.clone(), deme_b.clone(), 8);
        history.record_flow(time, deme_a.clone(), deme_b.clone(), 2);
    }

    (history, deme_a, deme_b)
}

#[test]
fn children_are_conserved_across_the_simulation() {
    // population sizes below the sample counts force coalescence events
    let (history, deme_a, deme_b) = two_deme_history(10, 2);

    let forest = ClassicalCoalescence::simulate(
        history,
        [(deme_a.clone(), 4_usize), (deme_b.clone(), 4)],
        10,
        0,
        42,
        |_position| 1_u32,
        0_u32,
        |parent, child| parent + child,
    )
    .unwrap();

    assert!(forest.num_trees() >= 1);
    assert!(forest.num_trees() <= 8);

    // every leaf is accounted for under exactly one surviving root
    let total: u32 = forest
        .iter()
        .flat_map(|(_position, trees)| trees.iter())
        .sum();
    assert_eq!(total, 8);

    // lineages only ever occupy demes of the simulated landscape
    for position in forest.positions() {
        assert!(position == &deme_a || position == &deme_b);
    }
}

#[test]
fn identically_seeded_replicates_are_identical() {
    for seed in [0_u64, 42, 1_234_567] {
        let (history_a, deme_a, deme_b) = two_deme_history(20, 3);
        let (history_b, _, _) = two_deme_history(20, 3);

        let sample_counts = [(deme_a, 5_usize), (deme_b, 3)];

        let first = ClassicalCoalescence::simulate(
            history_a,
            sample_counts.clone(),
            20,
            0,
            seed,
            |position| vec![position.clone()],
            Vec::new(),
            |mut parent: Vec<Location>, mut child| {
                parent.append(&mut child);
                parent
            },
        )
        .unwrap();

        let second = ClassicalCoalescence::simulate(
            history_b,
            sample_counts,
            20,
            0,
            seed,
            |position| vec![position.clone()],
            Vec::new(),
            |mut parent: Vec<Location>, mut child| {
                parent.append(&mut child);
                parent
            },
        )
        .unwrap();

        assert_eq!(first, second, "replicates diverged for seed {seed}");
    }
}

#[test]
fn bottleneck_demes_coalesce_to_a_single_ancestor() {
    let deme_a = Location::new(0, 0);
    let deme_b = Location::new(1, 0);

    let mut history = InMemoryDemographicHistory::new();

    for time in 0..=5 {
        history.record_size(deme_a.clone(), time, 1);
        history.record_size(deme_b.clone(), time, 1);

        // every lineage traces back into deme a
        history.record_flow(time, deme_a.clone(), deme_a.clone(), 1);
        history.record_flow(time, deme_a.clone(), deme_b.clone(), 1);
    }

    let forest = ClassicalCoalescence::simulate(
        history,
        [(deme_a.clone(), 4_usize), (deme_b, 4)],
        5,
        0,
        7,
        |_position| 1_u32,
        0_u32,
        |parent, child| parent + child,
    )
    .unwrap();

    // full coalescence to the most recent common ancestor
    assert_eq!(forest.num_trees(), 1);
    assert_eq!(forest.trees_at(&deme_a), &[8_u32]);
}

#[test]
fn single_lineages_never_coalesce() {
    let (history, deme_a, deme_b) = two_deme_history(10, 20);

    let forest = ClassicalCoalescence::simulate(
        history,
        [(deme_a, 1_usize), (deme_b, 1)],
        10,
        0,
        9,
        |_position| 1_u32,
        0_u32,
        |parent, child| parent + child,
    )
    .unwrap();

    assert_eq!(forest.num_trees(), 2);
}

#[test]
fn partition_law_driven_coalescence_runs_to_the_origin() {
    use std::marker::PhantomData;

    use coalsim_core::forest::Forest;
    use coalsim_core::simulation::Simulation;

    use coalsim_impls::cogs::coalescence_policy::UniformPartitionPolicy;
    use coalsim_impls::cogs::dispersal_sampler::FlowWeightedDispersalSampler;
    use coalsim_impls::cogs::occupancy_spectrum_sampler::OnTheFlyOccupancySpectrumSampler;
    use coalsim_impls::cogs::rng::SeededStdRng;

    let (history, deme_a, deme_b) = two_deme_history(10, 5);

    let forest = Forest::from_leaf_counts(
        [(deme_a.clone(), 6_usize), (deme_b.clone(), 2)],
        |_position| 1_u32,
    );

    let simulation = Simulation::builder()
        .position(PhantomData::<Location>)
        .history(history)
        .occupancy_spectrum_sampler(OnTheFlyOccupancySpectrumSampler)
        .dispersal_sampler(FlowWeightedDispersalSampler::new())
        .coalescence_policy(UniformPartitionPolicy)
        .sampling_time(10)
        .origin_time(0)
        .build();

    let mut rng = SeededStdRng::from_seed(11);

    let forest = simulation
        .simulate(forest, 0_u32, |parent, child| parent + child, &mut rng)
        .unwrap();

    assert!(forest.num_trees() >= 1);
    assert!(forest.num_trees() <= 8);

    let total: u32 = forest
        .iter()
        .flat_map(|(_position, trees)| trees.iter())
        .sum();
    assert_eq!(total, 8);

    for position in forest.positions() {
        assert!(position == &deme_a || position == &deme_b);
    }
}

#[test]
fn contradictory_histories_fail_instead_of_clamping() {
    let deme_a = Location::new(0, 0);

    // lineages are sampled at a deme the history knows nothing about
    let history = InMemoryDemographicHistory::new();

    let error = ClassicalCoalescence::simulate(
        history,
        [(deme_a, 3_usize)],
        5,
        0,
        1,
        |_position| 1_u32,
        0_u32,
        |parent, child| parent + child,
    )
    .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<CoalescenceError>(),
        Some(CoalescenceError::DemographyInconsistency { .. })
    ));
}
