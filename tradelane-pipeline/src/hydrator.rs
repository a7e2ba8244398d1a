use async_trait::async_trait;

use crate::util;

/// Hydrators enrich candidates with derived or fetched context after
/// sourcing (for example, current vessel positions).
#[async_trait]
pub trait Hydrator<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    /// Decide if this hydrator should run for the given query.
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    /// Hydrate the candidate list. The returned vector must be
    /// index-aligned with the input slice.
    async fn hydrate(&self, query: &Q, candidates: &[C]) -> Result<Vec<C>, String>;

    /// Copy this hydrator's fields from the hydrated candidate onto the
    /// real one.
    fn update(&self, candidate: &mut C, hydrated: C);

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
