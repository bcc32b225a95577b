use core::mem;

use crate::cogs::{RngCore, RngSampler};
use crate::occupancy_spectrum::OccupancySpectrum;

/// Coalesces two randomly selected nodes of `nodes` into one parent.
///
/// The parent is grown by folding `init` and both children through
/// `merge`, which takes the partial parent and one child and returns the
/// extended parent. The buffer is shuffled first, so which physical slot
/// ends up holding the parent carries no meaning.
///
/// The storage is never reallocated: the new number of active nodes is
/// communicated through the returned length, and the slots beyond it are
/// left in an unspecified but valid state.
#[debug_requires(nodes.len() >= 2, "at least two nodes can coalesce")]
#[debug_ensures(ret == old(nodes.len()) - 1, "exactly one coalescence occurred")]
pub fn binary_merge<T: Clone, F: FnMut(T, T) -> T, G: RngCore>(
    nodes: &mut [T],
    init: T,
    mut merge: F,
    rng: &mut G,
) -> usize {
    rng.shuffle(nodes);

    let last = nodes.len() - 1;

    let child = mem::replace(&mut nodes[last], init.clone());
    let first = mem::replace(&mut nodes[0], init.clone());

    let partial = merge(init, first);
    nodes[0] = merge(partial, child);

    last
}

/// Coalesces the nodes of `nodes` according to the merge configuration
/// given by `spectrum`.
///
/// The buffer is shuffled, then every spectrum entry with block size
/// `j >= 2` produces its parents by folding `init`, one front slot and
/// `j - 1` slots peeled from the tail of the active range through
/// `merge`. Nodes in singleton blocks do not coalesce this round and
/// remain untouched inside the active range.
///
/// Like [`binary_merge`], the storage is never resized: exactly
/// `spectrum.number_of_ancestors()` nodes remain active in
/// `nodes[..ret]`, with `n - k` slots consumed from the tail.
#[debug_requires(
    spectrum.number_of_children() == nodes.len(),
    "spectrum describes a merge of all nodes"
)]
#[debug_ensures(
    ret == spectrum.number_of_ancestors(),
    "one active node remains per ancestor"
)]
pub fn simultaneous_multiple_merge<T: Clone, F: FnMut(T, T) -> T, G: RngCore>(
    nodes: &mut [T],
    init: T,
    spectrum: &OccupancySpectrum,
    mut merge: F,
    rng: &mut G,
) -> usize {
    rng.shuffle(nodes);

    let mut parent = 0_usize;
    let mut last = nodes.len();

    for (block_size, count) in spectrum.multi_mergers() {
        for _ in 0..count {
            let mut tree = merge(init.clone(), mem::replace(&mut nodes[parent], init.clone()));

            for _ in 1..block_size {
                last -= 1;

                tree = merge(tree, mem::replace(&mut nodes[last], init.clone()));
            }

            nodes[parent] = tree;
            parent += 1;
        }
    }

    last
}
