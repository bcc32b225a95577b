use core::fmt::Debug;
use core::hash::Hash;

/// Identifies a deme in the landscape. The simulation never inspects a
/// position beyond comparing, ordering, hashing and cloning it, so any
/// caller-chosen key type qualifies.
pub trait Position: Eq + Hash + Ord + Clone + Debug {}

impl<P: Eq + Hash + Ord + Clone + Debug> Position for P {}
