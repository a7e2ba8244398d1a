pub mod clamp_config_hydrator;
pub mod evaluated_shipment_source;
pub mod lane_diversity_scorer;
pub mod severity_scorer;
pub mod snapshot_log_side_effect;
pub mod status_gate_filter;
pub mod top_k_selector;
pub mod vessel_position_hydrator;
