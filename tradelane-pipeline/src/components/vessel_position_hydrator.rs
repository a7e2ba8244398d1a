use async_trait::async_trait;

use tradelane_core::vessel_position;

use crate::hydrator::Hydrator;
use crate::types::{DashboardQuery, ShipmentCandidate};

/// Hydrates candidates with their current vessel position for the map
/// layer: elapsed days against total transit, interpolated along the lane.
pub struct VesselPositionHydrator;

#[async_trait]
impl Hydrator<DashboardQuery, ShipmentCandidate> for VesselPositionHydrator {
    async fn hydrate(
        &self,
        _query: &DashboardQuery,
        candidates: &[ShipmentCandidate],
    ) -> Result<Vec<ShipmentCandidate>, String> {
        let hydrated = candidates
            .iter()
            .map(|c| ShipmentCandidate {
                position: Some(vessel_position(
                    c.origin.coordinates(),
                    c.destination.coordinates(),
                    c.days_elapsed,
                    c.total_transit_days,
                )),
                ..ShipmentCandidate::default()
            })
            .collect();
        Ok(hydrated)
    }

    fn update(&self, candidate: &mut ShipmentCandidate, hydrated: ShipmentCandidate) {
        candidate.position = hydrated.position;
    }
}
