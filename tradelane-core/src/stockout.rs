//! Stockout forecasting.
//!
//! A second classification, independently parameterized from the categorical
//! status in `status.rs`. The two are allowed to disagree: a shipment can be
//! status NORMAL while forecast HIGH RISK when the configured buffer differs
//! from the fixed status cutoffs. That independence is intentional and must
//! not be collapsed into a single threshold.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, DomainError};

/// Outcome of the stockout forecast for a single shipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockoutPrediction {
    Imminent,
    HighRisk,
    Normal,
}

impl StockoutPrediction {
    /// Traffic-light indicator shown next to the forecast in tables.
    pub fn indicator(&self) -> &'static str {
        match self {
            StockoutPrediction::Imminent => "\u{1F534}",
            StockoutPrediction::HighRisk => "\u{1F7E1}",
            StockoutPrediction::Normal => "\u{1F7E2}",
        }
    }
}

impl fmt::Display for StockoutPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockoutPrediction::Imminent => write!(f, "IMMINENT STOCKOUT"),
            StockoutPrediction::HighRisk => write!(f, "HIGH RISK"),
            StockoutPrediction::Normal => write!(f, "NORMAL"),
        }
    }
}

/// Days until on-hand inventory reaches zero at the current burn rate.
///
/// Rejects a zero consumption rate instead of dividing through it; the
/// forecast is meaningless for a consumer that never consumes.
pub fn days_to_stockout(current_inventory: u32, daily_consumption: u32) -> CoreResult<f64> {
    if daily_consumption == 0 {
        return Err(DomainError::NonPositiveConsumption);
    }
    Ok(f64::from(current_inventory) / f64::from(daily_consumption))
}

/// Forecast whether inventory runs out before the shipment arrives.
///
/// `buffer_days` is the configured safety margin: a shipment arriving with
/// less margin than that is flagged HIGH RISK, and one arriving after the
/// projected stockout is IMMINENT. Both comparisons are strict, so a buffer
/// exactly equal to the configured margin is still NORMAL.
pub fn predict_stockout(
    current_inventory: u32,
    daily_consumption: u32,
    transit_days: u32,
    buffer_days: u32,
) -> CoreResult<StockoutPrediction> {
    let runway = days_to_stockout(current_inventory, daily_consumption)?;
    let buffer = runway - f64::from(transit_days);

    Ok(if buffer < 0.0 {
        StockoutPrediction::Imminent
    } else if buffer < f64::from(buffer_days) {
        StockoutPrediction::HighRisk
    } else {
        StockoutPrediction::Normal
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imminent_when_inventory_runs_out_before_arrival() {
        // runway 10, transit 15: buffer -5
        assert_eq!(
            predict_stockout(100, 10, 15, 5),
            Ok(StockoutPrediction::Imminent)
        );
    }

    #[test]
    fn buffer_equal_to_margin_is_normal() {
        // runway 20, transit 15: buffer exactly 5, strict comparison
        assert_eq!(
            predict_stockout(200, 10, 15, 5),
            Ok(StockoutPrediction::Normal)
        );
    }

    #[test]
    fn thin_buffer_is_high_risk() {
        // runway 18, transit 15: buffer 3, under the 5-day margin
        assert_eq!(
            predict_stockout(180, 10, 15, 5),
            Ok(StockoutPrediction::HighRisk)
        );
    }

    #[test]
    fn zero_buffer_is_high_risk_not_imminent() {
        // runway 15, transit 15: buffer exactly 0 is not negative
        assert_eq!(
            predict_stockout(150, 10, 15, 5),
            Ok(StockoutPrediction::HighRisk)
        );
    }

    #[test]
    fn zero_consumption_is_rejected() {
        assert_eq!(
            days_to_stockout(100, 0),
            Err(DomainError::NonPositiveConsumption)
        );
        assert_eq!(
            predict_stockout(100, 0, 15, 5),
            Err(DomainError::NonPositiveConsumption)
        );
    }

    #[test]
    fn indicators_follow_the_traffic_light() {
        assert_eq!(StockoutPrediction::Imminent.indicator(), "\u{1F534}");
        assert_eq!(StockoutPrediction::HighRisk.indicator(), "\u{1F7E1}");
        assert_eq!(StockoutPrediction::Normal.indicator(), "\u{1F7E2}");
    }
}
