/// The merge configuration of one simultaneous multi-way coalescence:
/// entry `j` counts the ancestors formed from exactly `j` children.
///
/// For a merge of `n` children into `k` ancestors, every spectrum
/// satisfies `sum_j j*m_j == n` and `sum_j m_j == k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancySpectrum {
    // counts[j] = m_j; counts[0] is always zero and is only kept so that
    //  the spectrum can be indexed directly by block size
    counts: Vec<u32>,
    children: usize,
    ancestors: usize,
}

impl OccupancySpectrum {
    /// Builds the spectrum of the grouping described by `labels`, where
    /// children `i` and `j` share an ancestor iff `labels[i] == labels[j]`.
    ///
    /// The label values themselves carry no meaning beyond equality, so
    /// canonicalizing them in order of first appearance (the restricted-
    /// growth-string convention) leaves the spectrum unchanged.
    #[must_use]
    #[debug_requires(!labels.is_empty(), "at least one child is labelled")]
    #[debug_ensures(
        ret.number_of_children() == labels.len(),
        "every child is grouped under some ancestor"
    )]
    pub fn from_labels(labels: &[u32]) -> Self {
        let mut sorted_labels = labels.to_vec();
        sorted_labels.sort_unstable();

        let mut counts = vec![0_u32; labels.len() + 1];
        let mut ancestors = 0_usize;

        let mut block_size = 0_usize;
        let mut block_label = sorted_labels[0];

        for label in sorted_labels {
            if label == block_label {
                block_size += 1;
            } else {
                counts[block_size] += 1;
                ancestors += 1;

                block_label = label;
                block_size = 1;
            }
        }

        counts[block_size] += 1;
        ancestors += 1;

        Self {
            counts,
            children: labels.len(),
            ancestors,
        }
    }

    /// The degenerate spectrum in which none of the `children` coalesce.
    #[must_use]
    #[debug_requires(children > 0, "at least one child is grouped")]
    pub fn singletons(children: usize) -> Self {
        let mut counts = vec![0_u32; children + 1];

        #[allow(clippy::cast_possible_truncation)]
        {
            counts[1] = children as u32;
        }

        Self {
            counts,
            children,
            ancestors: children,
        }
    }

    #[must_use]
    pub fn number_of_children(&self) -> usize {
        self.children
    }

    #[must_use]
    pub fn number_of_ancestors(&self) -> usize {
        self.ancestors
    }

    /// The number of ancestors formed from exactly `size` children.
    #[must_use]
    pub fn count_of_size(&self, size: usize) -> u32 {
        self.counts.get(size).copied().unwrap_or(0_u32)
    }

    /// Iterates over the `(block size, count)` entries with `size >= 2`,
    /// i.e. over the groups in which coalescence actually occurs, in
    /// ascending block size order.
    pub fn multi_mergers(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .skip(2)
            .filter(|(_size, count)| **count > 0)
            .map(|(size, count)| (size, *count))
    }
}
