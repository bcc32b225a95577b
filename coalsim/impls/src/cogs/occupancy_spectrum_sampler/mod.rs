mod memoized;
mod on_the_fly;


pub use memoized::MemoizedOccupancySpectrumSampler;
pub use on_the_fly::OnTheFlyOccupancySpectrumSampler;

use coalsim_core::cogs::{RngCore, RngSampler};
use coalsim_core::error::OccupancySpectrumError;
use coalsim_core::occupancy_spectrum::OccupancySpectrum;

use crate::random::CumulativeDistribution;

/// The number-of-blocks law of a uniform random set partition of
/// `children` elements: `P(K = k) = S(children, k) / B(children)`, where
/// `S` are the Stirling numbers of the second kind and `B` the Bell
/// number.
///
/// The Stirling row is computed with the recurrence
/// `S(n, k) = k*S(n-1, k) + S(n-1, k-1)`. Only the ratios between the
/// weights matter, so the row is rescaled whenever it approaches the
/// `f64` range limit, which keeps the law finite for large `children`.
#[debug_requires(children > 0, "the partition is non-empty")]
fn number_of_blocks_distribution(children: usize) -> CumulativeDistribution<usize> {
    let mut row = vec![0.0_f64; children + 1];
    row[0] = 1.0_f64; // S(0, 0) = 1

    for _n in 1..=children {
        for k in (1..=children).rev() {
            #[allow(clippy::cast_precision_loss)]
            {
                row[k] = (k as f64) * row[k] + row[k - 1];
            }
        }
        row[0] = 0.0_f64; // S(n, 0) = 0 for n >= 1

        let max = row.iter().fold(0.0_f64, |max, weight| max.max(*weight));
        if max > 1e250_f64 {
            for weight in &mut row {
                *weight /= max;
            }
        }
    }

    CumulativeDistribution::new(row.into_iter().enumerate().skip(1).collect())
}

/// Labels each of the `children` uniformly among `labels` surrogate
/// restricted-growth labels and aggregates the resulting blocks into an
/// occupancy spectrum.
///
/// This label-based scheme is a known approximation: it does not realize
/// every block-size configuration with the exact uniform-random-partition
/// probability.
#[debug_requires(children > 0 && labels > 0, "children are labelled")]
fn sample_spectrum_with_labels(
    children: usize,
    labels: usize,
    rng: &mut impl RngCore,
) -> OccupancySpectrum {
    #[allow(clippy::cast_possible_truncation)]
    let assignment: Vec<u32> = (0..children)
        .map(|_child| rng.sample_index(labels) as u32)
        .collect();

    OccupancySpectrum::from_labels(&assignment)
}

/// Shared conditioned sampling path: validates the request, then draws
/// the surrogate label count uniformly in `[1, max_ancestors]`.
fn sample_conditioned_spectrum(
    children: usize,
    max_ancestors: usize,
    rng: &mut impl RngCore,
) -> Result<OccupancySpectrum, OccupancySpectrumError> {
    if children == 0 {
        return Err(OccupancySpectrumError::InvalidSize);
    }

    if max_ancestors == 0 || max_ancestors > children {
        return Err(OccupancySpectrumError::InvalidPartition {
            children,
            ancestors: max_ancestors,
        });
    }

    if max_ancestors == children {
        // the spectrum invariants only admit the all-singleton
        //  configuration, so no randomness needs to be consumed
        return Ok(OccupancySpectrum::singletons(children));
    }

    let labels = 1 + rng.sample_index(max_ancestors);

    Ok(sample_spectrum_with_labels(children, labels, rng))
}
