use async_trait::async_trait;

use tradelane_core::StockoutPrediction;

use crate::scorer::Scorer;
use crate::types::{DashboardQuery, ShipmentCandidate};

/// Stockout forecast multiplier on top of the raw risk score.
const IMMINENT_MULTIPLIER: f64 = 1.5;
const HIGH_RISK_MULTIPLIER: f64 = 1.2;
const NORMAL_MULTIPLIER: f64 = 1.0;

/// Ranks shipments by severity: the composite risk score amplified by the
/// stockout forecast, so a starving shipment outranks an equally risky one
/// with a comfortable inventory runway.
pub struct SeverityScorer;

#[async_trait]
impl Scorer<DashboardQuery, ShipmentCandidate> for SeverityScorer {
    async fn score(
        &self,
        _query: &DashboardQuery,
        candidates: &[ShipmentCandidate],
    ) -> Result<Vec<ShipmentCandidate>, String> {
        let scored = candidates
            .iter()
            .map(|c| {
                let multiplier = match c.stockout {
                    StockoutPrediction::Imminent => IMMINENT_MULTIPLIER,
                    StockoutPrediction::HighRisk => HIGH_RISK_MULTIPLIER,
                    StockoutPrediction::Normal => NORMAL_MULTIPLIER,
                };
                ShipmentCandidate {
                    severity_score: Some(c.risk_score * multiplier),
                    ..ShipmentCandidate::default()
                }
            })
            .collect();

        Ok(scored)
    }

    fn update(&self, candidate: &mut ShipmentCandidate, scored: ShipmentCandidate) {
        candidate.severity_score = scored.severity_score;
    }
}
