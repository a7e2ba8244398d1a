//! Fleet summary metrics.
//!
//! The headline figures of the dashboard's summary row, computed from the
//! evaluated fleet. The "above threshold" count uses the externally
//! configured critical-risk threshold, which is distinct from the fixed
//! cutoffs inside the status classifier.

use serde::Serialize;

use tradelane_core::ShipmentStatus;

use crate::types::ShipmentCandidate;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FleetMetrics {
    pub total_shipments: usize,
    /// Shipments classified CRITICAL.
    pub critical_count: usize,
    /// Shipments with a risk score strictly above the configured threshold.
    pub above_threshold_count: usize,
    pub avg_risk_score: f64,
    pub avg_delay_days: f64,
    pub avg_climate_risk: f64,
    pub avg_port_congestion: f64,
    pub avg_social_instability: f64,
}

impl FleetMetrics {
    /// Summarize an evaluated fleet. Total over an empty slice (all zeros).
    pub fn summarize(shipments: &[ShipmentCandidate], critical_risk_threshold: f64) -> Self {
        if shipments.is_empty() {
            return Self::default();
        }

        let n = shipments.len() as f64;
        let mut metrics = Self {
            total_shipments: shipments.len(),
            ..Self::default()
        };

        for shipment in shipments {
            if shipment.status == ShipmentStatus::Critical {
                metrics.critical_count += 1;
            }
            if shipment.risk_score > critical_risk_threshold {
                metrics.above_threshold_count += 1;
            }
            metrics.avg_risk_score += shipment.risk_score;
            metrics.avg_delay_days += f64::from(shipment.delay_days);
            metrics.avg_climate_risk += f64::from(shipment.climate_risk);
            metrics.avg_port_congestion += f64::from(shipment.port_congestion);
            metrics.avg_social_instability += f64::from(shipment.social_instability);
        }

        metrics.avg_risk_score /= n;
        metrics.avg_delay_days /= n;
        metrics.avg_climate_risk /= n;
        metrics.avg_port_congestion /= n;
        metrics.avg_social_instability /= n;
        metrics
    }
}
