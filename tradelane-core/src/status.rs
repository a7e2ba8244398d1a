//! Categorical shipment status classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::thresholds::{HIGH_RISK_SCORE, MEDIUM_RISK_SCORE};

/// The four-valued shipment status shown on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShipmentStatus {
    Critical,
    HighRisk,
    MediumRisk,
    Normal,
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipmentStatus::Critical => write!(f, "CRITICAL"),
            ShipmentStatus::HighRisk => write!(f, "HIGH RISK"),
            ShipmentStatus::MediumRisk => write!(f, "MEDIUM RISK"),
            ShipmentStatus::Normal => write!(f, "NORMAL"),
        }
    }
}

impl FromStr for ShipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(ShipmentStatus::Critical),
            "high" | "high-risk" | "high_risk" => Ok(ShipmentStatus::HighRisk),
            "medium" | "medium-risk" | "medium_risk" => Ok(ShipmentStatus::MediumRisk),
            "normal" => Ok(ShipmentStatus::Normal),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// Classify a shipment from its evaluated figures.
///
/// Decision table, evaluated top to bottom, first match wins. Inventory
/// exhaustion before arrival takes precedence over the raw risk score.
/// The score cutoffs are the fixed `HIGH_RISK_SCORE` / `MEDIUM_RISK_SCORE`
/// constants (strict comparisons), independent of the configurable
/// critical-risk threshold used for metric counts.
pub fn classify_status(
    risk_score: f64,
    days_to_stockout: f64,
    total_transit_days: u32,
) -> ShipmentStatus {
    if days_to_stockout < f64::from(total_transit_days) {
        ShipmentStatus::Critical
    } else if risk_score > HIGH_RISK_SCORE {
        ShipmentStatus::HighRisk
    } else if risk_score > MEDIUM_RISK_SCORE {
        ShipmentStatus::MediumRisk
    } else {
        ShipmentStatus::Normal
    }
}
