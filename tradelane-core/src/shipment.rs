//! Shipment input/result records and the one-pass evaluator.

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, DomainError};
use crate::risk::{composite_risk_score, risk_delay_days};
use crate::status::{classify_status, ShipmentStatus};
use crate::stockout::{days_to_stockout, predict_stockout, StockoutPrediction};

/// Raw shipment attributes, constructed by a generator or submitted by a
/// user form. Risk factors are expected in [0, 100]; callers clamp before
/// handing records in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentInput {
    pub climate_risk: u8,
    pub port_congestion: u8,
    pub social_instability: u8,
    pub base_transit_days: u32,
    pub current_inventory: u32,
    pub daily_consumption: u32,
}

impl ShipmentInput {
    /// Boundary validation. Fails fast on a zero consumption rate instead
    /// of letting it reach the runway division.
    pub fn validate(&self) -> CoreResult<()> {
        if self.daily_consumption == 0 {
            return Err(DomainError::NonPositiveConsumption);
        }
        Ok(())
    }
}

/// Derived shipment figures, computed once from a validated input.
///
/// Nothing here mutates after evaluation. Re-running `evaluate` with a
/// different stockout buffer refreshes only the forecast; the status
/// cutoffs are fixed constants and do not move with configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShipmentResult {
    pub risk_score: f64,
    pub delay_days: u32,
    pub total_transit_days: u32,
    pub days_to_stockout: f64,
    pub status: ShipmentStatus,
    pub stockout: StockoutPrediction,
}

/// Evaluate a shipment in one pass: score, delay, runway, status, forecast.
pub fn evaluate(input: &ShipmentInput, stockout_buffer_days: u32) -> CoreResult<ShipmentResult> {
    input.validate()?;

    let risk_score = composite_risk_score(
        input.climate_risk,
        input.port_congestion,
        input.social_instability,
    );
    let delay_days = risk_delay_days(risk_score);
    let total_transit_days = input.base_transit_days + delay_days;
    let runway = days_to_stockout(input.current_inventory, input.daily_consumption)?;
    let status = classify_status(risk_score, runway, total_transit_days);
    let stockout = predict_stockout(
        input.current_inventory,
        input.daily_consumption,
        total_transit_days,
        stockout_buffer_days,
    )?;

    Ok(ShipmentResult {
        risk_score,
        delay_days,
        total_transit_days,
        days_to_stockout: runway,
        status,
        stockout,
    })
}
