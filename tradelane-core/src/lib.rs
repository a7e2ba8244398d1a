//! Trade-lane risk evaluation core.
//!
//! Pure, stateless functions that turn raw shipment attributes (route risk
//! factors, inventory figures, voyage duration) into a composite risk score,
//! a risk-induced delay, a stockout forecast, and a categorical status.
//! There is no I/O, no shared state, and no async here, so every function is
//! total over validated inputs, so the same arguments always produce the
//! same result.

pub mod error;
pub mod geo;
pub mod risk;
pub mod shipment;
pub mod status;
pub mod stockout;
pub mod thresholds;

pub use error::{CoreResult, DomainError};
pub use geo::{vessel_position, Coordinates};
pub use risk::{composite_risk_score, risk_delay_days};
pub use shipment::{evaluate, ShipmentInput, ShipmentResult};
pub use status::{classify_status, ShipmentStatus};
pub use stockout::{days_to_stockout, predict_stockout, StockoutPrediction};
