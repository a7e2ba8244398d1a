use async_trait::async_trait;

use tradelane_core::thresholds::{
    MAX_CRITICAL_RISK_THRESHOLD, MAX_STOCKOUT_BUFFER_DAYS, MIN_CRITICAL_RISK_THRESHOLD,
    MIN_STOCKOUT_BUFFER_DAYS,
};

use crate::query_hydrator::QueryHydrator;
use crate::types::DashboardQuery;

/// Clamps the query's configuration into its documented ranges:
/// critical-risk threshold into [50, 90], stockout buffer into [3, 15] days.
/// Out-of-range values arrive from free-form CLI flags and form fields; the
/// evaluation stages may assume clamped values after this runs.
pub struct ClampConfigHydrator;

#[async_trait]
impl QueryHydrator<DashboardQuery> for ClampConfigHydrator {
    async fn hydrate(&self, query: &DashboardQuery) -> Result<DashboardQuery, String> {
        let threshold = query
            .critical_risk_threshold
            .clamp(MIN_CRITICAL_RISK_THRESHOLD, MAX_CRITICAL_RISK_THRESHOLD);
        let buffer = query
            .stockout_buffer_days
            .clamp(MIN_STOCKOUT_BUFFER_DAYS, MAX_STOCKOUT_BUFFER_DAYS);

        if threshold != query.critical_risk_threshold {
            log::warn!(
                "request_id={} critical risk threshold {} clamped to {}",
                query.request_id,
                query.critical_risk_threshold,
                threshold
            );
        }
        if buffer != query.stockout_buffer_days {
            log::warn!(
                "request_id={} stockout buffer {} clamped to {}",
                query.request_id,
                query.stockout_buffer_days,
                buffer
            );
        }

        Ok(DashboardQuery {
            critical_risk_threshold: threshold,
            stockout_buffer_days: buffer,
            ..query.clone()
        })
    }

    fn update(&self, query: &mut DashboardQuery, hydrated: DashboardQuery) {
        query.critical_risk_threshold = hydrated.critical_risk_threshold;
        query.stockout_buffer_days = hydrated.stockout_buffer_days;
    }
}
