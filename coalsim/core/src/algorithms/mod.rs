mod merge;

#[cfg(test)]
mod test;

pub use merge::{binary_merge, simultaneous_multiple_merge};
