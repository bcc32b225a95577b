mod cumulative;
mod transition_kernel;


pub use cumulative::CumulativeDistribution;
pub use transition_kernel::TransitionKernel;
