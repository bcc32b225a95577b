mod single_ancestor;
mod uniform_partition;
mod wright_fisher;

pub use single_ancestor::SingleAncestorPolicy;
pub use uniform_partition::UniformPartitionPolicy;
pub use wright_fisher::WrightFisherPolicy;
