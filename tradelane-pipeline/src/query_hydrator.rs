use async_trait::async_trait;

use crate::util;

/// Query hydrators run before candidate fetching and normalize the query
/// object, filling defaults or clamping configuration into valid ranges.
#[async_trait]
pub trait QueryHydrator<Q>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
{
    /// Decide if this query hydrator should run for the given query.
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    /// Return a new query with this hydrator's fields normalized.
    async fn hydrate(&self, query: &Q) -> Result<Q, String>;

    /// Copy only the fields this hydrator is responsible for back onto the
    /// query.
    fn update(&self, query: &mut Q, hydrated: Q);

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
