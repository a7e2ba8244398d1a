//! CSV shipment ingestion.
//!
//! Parses user-submitted shipment manifests into `ShipmentRecord` structs.
//! Expected CSV columns:
//!   shipment_id, origin_name, origin_lat, origin_lon, destination_name,
//!   destination_lat, destination_lon, departed, days_elapsed,
//!   base_transit_days, climate_risk, port_congestion, social_instability,
//!   current_inventory, daily_consumption

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;

use tradelane_core::ShipmentInput;

use crate::generator::Port;

/// One shipment as submitted by a generator or a CSV manifest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub shipment_id: String,
    pub origin_name: String,
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub destination_name: String,
    pub destination_lat: f64,
    pub destination_lon: f64,
    /// Departure date (ISO-8601 calendar date).
    pub departed: NaiveDate,
    pub days_elapsed: u32,
    pub base_transit_days: u32,
    pub climate_risk: u8,
    pub port_congestion: u8,
    pub social_instability: u8,
    pub current_inventory: u32,
    pub daily_consumption: u32,
}

impl ShipmentRecord {
    /// The evaluator input for this record. Risk factors are clamped to
    /// [0, 100] here; the core performs no clamping of its own.
    pub fn to_input(&self) -> ShipmentInput {
        ShipmentInput {
            climate_risk: self.climate_risk.min(100),
            port_congestion: self.port_congestion.min(100),
            social_instability: self.social_instability.min(100),
            base_transit_days: self.base_transit_days,
            current_inventory: self.current_inventory,
            daily_consumption: self.daily_consumption,
        }
    }

    pub fn origin_port(&self) -> Port {
        Port {
            name: self.origin_name.clone(),
            lat: self.origin_lat,
            lon: self.origin_lon,
        }
    }

    pub fn destination_port(&self) -> Port {
        Port {
            name: self.destination_name.clone(),
            lat: self.destination_lat,
            lon: self.destination_lon,
        }
    }
}

/// Load shipment records from a CSV reader.
pub fn load_shipments<R: Read>(reader: R) -> Result<Vec<ShipmentRecord>, String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (line_num, result) in csv_reader.deserialize().enumerate() {
        let record: ShipmentRecord = result
            .map_err(|e| format!("CSV parse error at line {}: {}", line_num + 2, e))?;
        records.push(record);
    }

    Ok(records)
}

/// Load shipment records from a CSV file path.
pub fn load_shipments_file(path: &str) -> Result<Vec<ShipmentRecord>, String> {
    let file =
        std::fs::File::open(path).map_err(|e| format!("Failed to open '{}': {}", path, e))?;
    load_shipments(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
shipment_id,origin_name,origin_lat,origin_lon,destination_name,destination_lat,destination_lon,departed,days_elapsed,base_transit_days,climate_risk,port_congestion,social_instability,current_inventory,daily_consumption
SHP-1000,\"Shanghai, China\",31.2304,121.4737,\"Balboa, Panama\",8.9517,-79.5671,2025-02-10,12,32,45,80,20,300,10
SHP-1001,Singapore,1.3521,103.8198,\"Puerto Caucedo, Dominican Republic\",18.4264,-69.6618,2025-02-20,3,28,10,15,5,450,12
SHP-1002,\"Busan, South Korea\",35.1796,129.0756,\"Col\u{f3}n, Panama\",9.3592,-79.9009,2025-01-30,25,40,90,95,70,90,15
";

    #[test]
    fn load_sample_csv() {
        let records = load_shipments(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].shipment_id, "SHP-1000");
        assert_eq!(records[0].origin_name, "Shanghai, China");
        assert!((records[0].origin_lat - 31.2304).abs() < 1e-9);
        assert_eq!(records[0].departed, NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
        assert_eq!(records[2].current_inventory, 90);
        assert_eq!(records[2].daily_consumption, 15);
    }

    #[test]
    fn bad_row_reports_line_number() {
        let csv_data = "\
shipment_id,origin_name,origin_lat,origin_lon,destination_name,destination_lat,destination_lon,departed,days_elapsed,base_transit_days,climate_risk,port_congestion,social_instability,current_inventory,daily_consumption
SHP-1000,Singapore,1.3521,103.8198,\"Balboa, Panama\",8.9517,-79.5671,not-a-date,3,28,10,15,5,450,12
";
        let err = load_shipments(csv_data.as_bytes()).unwrap_err();
        assert!(err.contains("line 2"), "error should name the line: {}", err);
    }

    #[test]
    fn to_input_clamps_risk_factors() {
        let mut record = load_shipments(SAMPLE_CSV.as_bytes()).unwrap().remove(0);
        record.climate_risk = 250;
        let input = record.to_input();
        assert_eq!(input.climate_risk, 100);
        assert_eq!(input.port_congestion, 80);
        assert_eq!(input.current_inventory, 300);
    }

    #[test]
    fn port_accessors_carry_coordinates() {
        let records = load_shipments(SAMPLE_CSV.as_bytes()).unwrap();
        let origin = records[1].origin_port();
        assert_eq!(origin.name, "Singapore");
        assert!((origin.coordinates().lon - 103.8198).abs() < 1e-9);
    }
}
