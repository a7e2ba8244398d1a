use async_trait::async_trait;

use crate::filter::{Filter, FilterResult};
use crate::types::{DashboardQuery, ShipmentCandidate, StatusFilter};

/// Applies the query's status filter: only shipments whose status matches
/// the selected label pass through. `All` keeps everything and the stage
/// short-circuits via `enable`.
pub struct StatusGateFilter;

#[async_trait]
impl Filter<DashboardQuery, ShipmentCandidate> for StatusGateFilter {
    fn enable(&self, query: &DashboardQuery) -> bool {
        query.status_filter != StatusFilter::All
    }

    async fn filter(
        &self,
        query: &DashboardQuery,
        candidates: Vec<ShipmentCandidate>,
    ) -> Result<FilterResult<ShipmentCandidate>, String> {
        let (kept, removed): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|c| query.status_filter.matches(c.status));

        Ok(FilterResult { kept, removed })
    }
}
