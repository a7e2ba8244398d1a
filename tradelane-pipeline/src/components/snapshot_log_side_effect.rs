use async_trait::async_trait;
use std::sync::Arc;

use crate::side_effect::{SideEffect, SideEffectInput};
use crate::types::{DashboardQuery, ShipmentCandidate};

/// Records each completed snapshot so repeated dashboard refreshes can be
/// traced. In production this would also push the payload to a cache keyed
/// by configuration; for now it logs the event.
pub struct SnapshotLogSideEffect;

#[async_trait]
impl SideEffect<DashboardQuery, ShipmentCandidate> for SnapshotLogSideEffect {
    async fn run(
        &self,
        input: Arc<SideEffectInput<DashboardQuery, ShipmentCandidate>>,
    ) -> Result<(), String> {
        log::info!(
            "request_id={} snapshot ready with {} shipments (filter: {})",
            input.query.request_id,
            input.selected_candidates.len(),
            input.query.status_filter
        );
        Ok(())
    }
}
