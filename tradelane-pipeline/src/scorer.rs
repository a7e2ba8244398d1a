use async_trait::async_trait;

use crate::util;

/// Scorers assign or adjust ranking scores on candidates.
///
/// A scorer returns a parallel vector of scored candidates; the pipeline
/// then calls `update` per candidate so each scorer touches only the fields
/// it owns, letting scorers compose without clobbering each other.
#[async_trait]
pub trait Scorer<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    /// Decide if this scorer should run for the given query.
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    /// Score the candidate list. The returned vector must be index-aligned
    /// with the input slice.
    async fn score(&self, query: &Q, candidates: &[C]) -> Result<Vec<C>, String>;

    /// Copy this scorer's fields from the scored candidate onto the real one.
    fn update(&self, candidate: &mut C, scored: C);

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
