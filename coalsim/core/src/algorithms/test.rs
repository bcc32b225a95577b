use crate::cogs::RngCore;
use crate::occupancy_spectrum::OccupancySpectrum;

use super::{binary_merge, simultaneous_multiple_merge};

// A minimal splitmix-style generator so that the algorithm tests do not
//  depend on any external randomness source.
struct TestRng(u64);

impl RngCore for TestRng {
    fn sample_uniform(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005_u64)
            .wrapping_add(1_442_695_040_888_963_407_u64);

        #[allow(clippy::cast_precision_loss)]
        let sample = ((self.0 >> 11) as f64) / ((1_u64 << 53) as f64);
        sample
    }
}

#[test]
fn binary_merge_shortens_by_one() {
    let mut rng = TestRng(24);

    for n in 2_usize..=12 {
        let mut nodes: Vec<u32> = vec![1; n];

        let remaining = binary_merge(&mut nodes, 0_u32, |parent, child| parent + child, &mut rng);

        assert_eq!(remaining, n - 1, "binary merge of {n} nodes");

        let total: u32 = nodes[..remaining].iter().sum();
        assert_eq!(total as usize, n, "children are conserved for {n} nodes");
    }
}

#[test]
fn binary_merge_combines_exactly_two_children() {
    let mut rng = TestRng(42);

    let mut nodes = vec![1_u32, 1, 1, 1];

    let remaining = binary_merge(&mut nodes, 0_u32, |parent, child| parent + child, &mut rng);
    assert_eq!(remaining, 3);

    let mut active = nodes[..remaining].to_vec();
    active.sort_unstable();

    // two of the original leaves were combined, the other two untouched
    assert_eq!(active, vec![1, 1, 2]);
}

#[test]
fn multiple_merge_leaves_one_active_node_per_ancestor() {
    let mut rng = TestRng(9000);

    for labels in [
        &[0_u32, 0][..],
        &[0, 0, 1, 1][..],
        &[0, 1, 2, 3, 3][..],
        &[0, 0, 0, 0, 0, 0][..],
        &[0, 1, 1, 2, 2, 2, 3, 3, 3, 3][..],
    ] {
        let spectrum = OccupancySpectrum::from_labels(labels);

        let children = spectrum.number_of_children();
        let ancestors = spectrum.number_of_ancestors();

        let mut nodes: Vec<u32> = vec![1; children];

        let remaining = simultaneous_multiple_merge(
            &mut nodes,
            0_u32,
            &spectrum,
            |parent, child| parent + child,
            &mut rng,
        );

        assert_eq!(remaining, ancestors, "merge according to {labels:?}");

        // exactly children - ancestors nodes were consumed from the tail
        let total: u32 = nodes[..remaining].iter().sum();
        assert_eq!(
            total as usize, children,
            "children are conserved for {labels:?}"
        );
    }
}

#[test]
fn multiple_merge_respects_block_sizes() {
    let mut rng = TestRng(127);

    // one pair, one triple, two singletons
    let spectrum = OccupancySpectrum::from_labels(&[0, 0, 1, 1, 1, 2, 3]);

    let mut nodes = vec![1_u32; 7];

    let remaining = simultaneous_multiple_merge(
        &mut nodes,
        0_u32,
        &spectrum,
        |parent, child| parent + child,
        &mut rng,
    );
    assert_eq!(remaining, 4);

    let mut active = nodes[..remaining].to_vec();
    active.sort_unstable();

    assert_eq!(active, vec![1, 1, 2, 3]);
}

#[test]
fn multiple_merge_of_singletons_is_a_no_op() {
    let mut rng = TestRng(3);

    let spectrum = OccupancySpectrum::singletons(5);

    let mut nodes = vec![1_u32, 2, 3, 4, 5];

    let remaining = simultaneous_multiple_merge(
        &mut nodes,
        0_u32,
        &spectrum,
        |parent, child| parent + child,
        &mut rng,
    );
    assert_eq!(remaining, 5);

    let mut active = nodes;
    active.sort_unstable();

    // the nodes were shuffled but none of them coalesced
    assert_eq!(active, vec![1, 2, 3, 4, 5]);
}
