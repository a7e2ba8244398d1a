use async_trait::async_trait;
use chrono::Duration;

use tradelane_core::evaluate;

use crate::shipment_loader::ShipmentRecord;
use crate::source::Source;
use crate::types::{DashboardQuery, ShipmentCandidate};

/// Source that evaluates raw shipment records into dashboard candidates.
///
/// Each record runs through the evaluation core once: composite risk score,
/// risk-induced delay, stockout runway, status, and forecast. The forecast
/// uses the query's configured buffer, so re-running the same records with a
/// different buffer refreshes only the forecast column. An invalid record
/// (zero consumption) fails the whole fetch with the offending shipment id.
pub struct EvaluatedShipmentSource {
    records: Vec<ShipmentRecord>,
}

impl EvaluatedShipmentSource {
    pub fn new(records: Vec<ShipmentRecord>) -> Self {
        Self { records }
    }

    fn evaluate_record(
        record: &ShipmentRecord,
        stockout_buffer_days: u32,
    ) -> Result<ShipmentCandidate, String> {
        let input = record.to_input();
        let result = evaluate(&input, stockout_buffer_days)
            .map_err(|e| format!("shipment {}: {}", record.shipment_id, e))?;

        let eta = record
            .departed
            .checked_add_signed(Duration::days(i64::from(result.total_transit_days)))
            .ok_or_else(|| format!("shipment {}: ETA out of calendar range", record.shipment_id))?;

        Ok(ShipmentCandidate {
            id: record.shipment_id.clone(),
            origin: record.origin_port(),
            destination: record.destination_port(),
            departed: record.departed,
            days_elapsed: record.days_elapsed,
            climate_risk: input.climate_risk,
            port_congestion: input.port_congestion,
            social_instability: input.social_instability,
            base_transit_days: record.base_transit_days,
            current_inventory: record.current_inventory,
            daily_consumption: record.daily_consumption,
            risk_score: result.risk_score,
            delay_days: result.delay_days,
            total_transit_days: result.total_transit_days,
            days_to_stockout: result.days_to_stockout,
            eta,
            status: result.status,
            stockout: result.stockout,
            position: None,
            severity_score: None,
        })
    }
}

#[async_trait]
impl Source<DashboardQuery, ShipmentCandidate> for EvaluatedShipmentSource {
    fn enable(&self, _query: &DashboardQuery) -> bool {
        !self.records.is_empty()
    }

    async fn get_candidates(
        &self,
        query: &DashboardQuery,
    ) -> Result<Vec<ShipmentCandidate>, String> {
        self.records
            .iter()
            .map(|record| Self::evaluate_record(record, query.stockout_buffer_days))
            .collect()
    }
}
