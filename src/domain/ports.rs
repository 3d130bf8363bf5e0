/// Hands out tracking numbers for new items.
///
/// Every number returned must differ from every number previously returned by
/// the same source. `Sync` so a single source can back item creation anywhere
/// in the process.
pub trait TrackingSource: Send + Sync {
    fn next_tracking(&self) -> u64;
}

