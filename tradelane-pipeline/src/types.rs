use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use tradelane_core::thresholds::{DEFAULT_CRITICAL_RISK_THRESHOLD, DEFAULT_STOCKOUT_BUFFER_DAYS};
use tradelane_core::{Coordinates, ShipmentStatus, StockoutPrediction};

use crate::candidate_pipeline::HasRequestId;
use crate::generator::Port;

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Filter applied to the dashboard's status column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    /// Show every shipment.
    All,
    /// Show only shipments with the given status.
    Only(ShipmentStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: ShipmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse::<ShipmentStatus>().map(StatusFilter::Only)
        }
    }
}

/// Query from the dashboard shell: the externally supplied configuration a
/// snapshot run uses, read-only to the evaluation core.
#[derive(Clone, Debug)]
pub struct DashboardQuery {
    pub request_id: String,
    /// Risk score above which a shipment counts toward the "high risk"
    /// metric tile. Valid range [50, 90]; clamped by the config hydrator.
    pub critical_risk_threshold: f64,
    /// Safety margin for the stockout forecast. Valid range [3, 15] days;
    /// clamped by the config hydrator.
    pub stockout_buffer_days: u32,
    pub status_filter: StatusFilter,
}

impl DashboardQuery {
    /// A query with default configuration and no status filtering.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            critical_risk_threshold: DEFAULT_CRITICAL_RISK_THRESHOLD,
            stockout_buffer_days: DEFAULT_STOCKOUT_BUFFER_DAYS,
            status_filter: StatusFilter::All,
        }
    }
}

impl HasRequestId for DashboardQuery {
    fn request_id(&self) -> &str {
        &self.request_id
    }
}

// ---------------------------------------------------------------------------
// Candidate types
// ---------------------------------------------------------------------------

/// A fully evaluated shipment flowing through the pipeline.
#[derive(Clone, Debug, Serialize)]
pub struct ShipmentCandidate {
    pub id: String,
    pub origin: Port,
    pub destination: Port,
    pub departed: NaiveDate,
    /// Days at sea as of the snapshot.
    pub days_elapsed: u32,

    // Raw attributes
    pub climate_risk: u8,
    pub port_congestion: u8,
    pub social_instability: u8,
    pub base_transit_days: u32,
    pub current_inventory: u32,
    pub daily_consumption: u32,

    // Evaluated figures
    pub risk_score: f64,
    pub delay_days: u32,
    pub total_transit_days: u32,
    pub days_to_stockout: f64,
    pub eta: NaiveDate,
    pub status: ShipmentStatus,
    pub stockout: StockoutPrediction,

    /// Current vessel position (populated by the position hydrator).
    pub position: Option<Coordinates>,
    /// Ranking score (populated by scorers).
    pub severity_score: Option<f64>,
}

impl Default for ShipmentCandidate {
    fn default() -> Self {
        Self {
            id: String::new(),
            origin: Port::default(),
            destination: Port::default(),
            departed: NaiveDate::default(),
            days_elapsed: 0,
            climate_risk: 0,
            port_congestion: 0,
            social_instability: 0,
            base_transit_days: 0,
            current_inventory: 0,
            daily_consumption: 1,
            risk_score: 0.0,
            delay_days: 0,
            total_transit_days: 0,
            days_to_stockout: 0.0,
            eta: NaiveDate::default(),
            status: ShipmentStatus::Normal,
            stockout: StockoutPrediction::Normal,
            position: None,
            severity_score: None,
        }
    }
}
