use async_trait::async_trait;
use std::sync::Arc;

use crate::candidate_pipeline::CandidatePipeline;
use crate::components::clamp_config_hydrator::ClampConfigHydrator;
use crate::components::evaluated_shipment_source::EvaluatedShipmentSource;
use crate::components::lane_diversity_scorer::LaneDiversityScorer;
use crate::components::severity_scorer::SeverityScorer;
use crate::components::snapshot_log_side_effect::SnapshotLogSideEffect;
use crate::components::status_gate_filter::StatusGateFilter;
use crate::components::top_k_selector::TopKSelector;
use crate::components::vessel_position_hydrator::VesselPositionHydrator;
use crate::filter::Filter;
use crate::hydrator::Hydrator;
use crate::query_hydrator::QueryHydrator;
use crate::scorer::Scorer;
use crate::selector::Selector;
use crate::shipment_loader::ShipmentRecord;
use crate::side_effect::SideEffect;
use crate::source::Source;
use crate::types::{DashboardQuery, ShipmentCandidate};

/// The dashboard snapshot pipeline.
///
/// Pipeline flow:
/// 1. ClampConfigHydrator normalizes threshold/buffer configuration
/// 2. EvaluatedShipmentSource scores, classifies, and forecasts the fleet
/// 3. VesselPositionHydrator fills current positions for the map layer
/// 4. StatusGateFilter applies the dashboard's status filter
/// 5. SeverityScorer ranks by risk amplified by the stockout forecast
/// 6. LaneDiversityScorer spreads the selection across destinations
/// 7. TopKSelector picks the top N rows
/// 8. SnapshotLogSideEffect records the completed snapshot
pub struct DashboardSnapshotPipeline {
    query_hydrators: Vec<Box<dyn QueryHydrator<DashboardQuery>>>,
    sources: Vec<Box<dyn Source<DashboardQuery, ShipmentCandidate>>>,
    hydrators: Vec<Box<dyn Hydrator<DashboardQuery, ShipmentCandidate>>>,
    filters: Vec<Box<dyn Filter<DashboardQuery, ShipmentCandidate>>>,
    scorers: Vec<Box<dyn Scorer<DashboardQuery, ShipmentCandidate>>>,
    selector: TopKSelector,
    post_selection_hydrators: Vec<Box<dyn Hydrator<DashboardQuery, ShipmentCandidate>>>,
    post_selection_filters: Vec<Box<dyn Filter<DashboardQuery, ShipmentCandidate>>>,
    side_effects: Arc<Vec<Box<dyn SideEffect<DashboardQuery, ShipmentCandidate>>>>,
    result_size: usize,
}

impl DashboardSnapshotPipeline {
    /// Create a pipeline over a fleet of shipment records with the default
    /// result size.
    pub fn with_shipments(records: Vec<ShipmentRecord>) -> Self {
        Self::with_shipments_and_size(records, 10)
    }

    /// Create a pipeline over a fleet with a custom result size.
    pub fn with_shipments_and_size(records: Vec<ShipmentRecord>, result_size: usize) -> Self {
        let query_hydrators: Vec<Box<dyn QueryHydrator<DashboardQuery>>> =
            vec![Box::new(ClampConfigHydrator)];

        let sources: Vec<Box<dyn Source<DashboardQuery, ShipmentCandidate>>> =
            vec![Box::new(EvaluatedShipmentSource::new(records))];

        let hydrators: Vec<Box<dyn Hydrator<DashboardQuery, ShipmentCandidate>>> =
            vec![Box::new(VesselPositionHydrator)];

        let filters: Vec<Box<dyn Filter<DashboardQuery, ShipmentCandidate>>> =
            vec![Box::new(StatusGateFilter)];

        let scorers: Vec<Box<dyn Scorer<DashboardQuery, ShipmentCandidate>>> = vec![
            Box::new(SeverityScorer),
            Box::new(LaneDiversityScorer::default()),
        ];

        let selector = TopKSelector { k: result_size };

        let side_effects: Arc<Vec<Box<dyn SideEffect<DashboardQuery, ShipmentCandidate>>>> =
            Arc::new(vec![Box::new(SnapshotLogSideEffect)]);

        Self {
            query_hydrators,
            sources,
            hydrators,
            filters,
            scorers,
            selector,
            post_selection_hydrators: Vec::new(),
            post_selection_filters: Vec::new(),
            side_effects,
            result_size,
        }
    }
}

#[async_trait]
impl CandidatePipeline<DashboardQuery, ShipmentCandidate> for DashboardSnapshotPipeline {
    fn query_hydrators(&self) -> &[Box<dyn QueryHydrator<DashboardQuery>>] {
        &self.query_hydrators
    }

    fn sources(&self) -> &[Box<dyn Source<DashboardQuery, ShipmentCandidate>>] {
        &self.sources
    }

    fn hydrators(&self) -> &[Box<dyn Hydrator<DashboardQuery, ShipmentCandidate>>] {
        &self.hydrators
    }

    fn filters(&self) -> &[Box<dyn Filter<DashboardQuery, ShipmentCandidate>>] {
        &self.filters
    }

    fn scorers(&self) -> &[Box<dyn Scorer<DashboardQuery, ShipmentCandidate>>] {
        &self.scorers
    }

    fn selector(&self) -> &dyn Selector<DashboardQuery, ShipmentCandidate> {
        &self.selector
    }

    fn post_selection_hydrators(&self) -> &[Box<dyn Hydrator<DashboardQuery, ShipmentCandidate>>] {
        &self.post_selection_hydrators
    }

    fn post_selection_filters(&self) -> &[Box<dyn Filter<DashboardQuery, ShipmentCandidate>>] {
        &self.post_selection_filters
    }

    fn side_effects(&self) -> Arc<Vec<Box<dyn SideEffect<DashboardQuery, ShipmentCandidate>>>> {
        Arc::clone(&self.side_effects)
    }

    fn result_size(&self) -> usize {
        self.result_size
    }
}
