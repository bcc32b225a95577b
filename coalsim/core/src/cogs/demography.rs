use super::Position;

/// Discrete simulation time, counted in generations before the present.
pub type Generation = u32;

/// Read-only, time- and space-indexed access to the demographic history
/// that the coalescence process runs backward over.
///
/// The core only ever queries this contract; producing the history
/// (forward-time demographic expansion, raster-derived carrying
/// capacities, ...) is the business of an external collaborator.
pub trait DemographicHistory<P: Position> {
    /// Population size of `deme` at `time`, or `None` iff the history
    /// holds no record for this pair.
    #[must_use]
    fn size_at(&self, deme: &P, time: Generation) -> Option<u32>;

    /// Aggregated count of backward migration events from `origin` into
    /// `destination` over the step at `time`. Absent records read as zero.
    #[must_use]
    fn flow_at(&self, time: Generation, origin: &P, destination: &P) -> u32;

    /// All origins with positive flow into `destination` at `time`, in a
    /// deterministic order.
    #[must_use]
    fn flows_into(&self, time: Generation, destination: &P) -> Vec<(P, u32)>;
}
