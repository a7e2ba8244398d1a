use std::env;
use std::process;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use tradelane_pipeline::candidate_pipeline::{CandidatePipeline, PipelineResult};
use tradelane_pipeline::generator::{SeededGenerator, ShipmentGenerator};
use tradelane_pipeline::metrics::FleetMetrics;
use tradelane_pipeline::pipelines::dashboard_snapshot::DashboardSnapshotPipeline;
use tradelane_pipeline::shipment_loader::load_shipments_file;
use tradelane_pipeline::types::{DashboardQuery, ShipmentCandidate, StatusFilter};

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DashboardJson {
    generated_at: String,
    config: ConfigJson,
    pipeline_ms: u128,
    summary: FleetMetrics,
    shipments: Vec<ShipmentJson>,
    routes: Vec<RouteJson>,
}

#[derive(Serialize)]
struct ConfigJson {
    critical_risk_threshold: f64,
    stockout_buffer_days: u32,
    status_filter: String,
    result_size: usize,
}

#[derive(Serialize)]
struct ShipmentJson {
    id: String,
    origin: String,
    destination: String,
    status: String,
    stockout: String,
    indicator: String,
    risk_score: f64,
    delay_days: u32,
    total_transit_days: u32,
    eta: String,
    current_inventory: u32,
    days_to_stockout: f64,
    severity_score: f64,
}

/// One map entry: the lane endpoints plus the interpolated vessel position,
/// color-keyed by status on the presentation side.
#[derive(Serialize)]
struct RouteJson {
    id: String,
    status: String,
    origin_lat: f64,
    origin_lon: f64,
    destination_lat: f64,
    destination_lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    vessel_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vessel_lon: Option<f64>,
}

fn shipment_json(candidate: &ShipmentCandidate) -> ShipmentJson {
    ShipmentJson {
        id: candidate.id.clone(),
        origin: candidate.origin.name.clone(),
        destination: candidate.destination.name.clone(),
        status: candidate.status.to_string(),
        stockout: candidate.stockout.to_string(),
        indicator: candidate.stockout.indicator().to_string(),
        risk_score: candidate.risk_score,
        delay_days: candidate.delay_days,
        total_transit_days: candidate.total_transit_days,
        eta: candidate.eta.to_string(),
        current_inventory: candidate.current_inventory,
        days_to_stockout: candidate.days_to_stockout,
        severity_score: candidate.severity_score.unwrap_or(0.0),
    }
}

fn route_json(candidate: &ShipmentCandidate) -> RouteJson {
    RouteJson {
        id: candidate.id.clone(),
        status: candidate.status.to_string(),
        origin_lat: candidate.origin.lat,
        origin_lon: candidate.origin.lon,
        destination_lat: candidate.destination.lat,
        destination_lon: candidate.destination.lon,
        vessel_lat: candidate.position.map(|p| p.lat),
        vessel_lon: candidate.position.map(|p| p.lon),
    }
}

fn build_json(
    result: &PipelineResult<DashboardQuery, ShipmentCandidate>,
    result_size: usize,
    pipeline_ms: u128,
) -> DashboardJson {
    let summary = FleetMetrics::summarize(
        &result.retrieved_candidates,
        result.query.critical_risk_threshold,
    );

    DashboardJson {
        generated_at: Utc::now().to_rfc3339(),
        config: ConfigJson {
            critical_risk_threshold: result.query.critical_risk_threshold,
            stockout_buffer_days: result.query.stockout_buffer_days,
            status_filter: result.query.status_filter.to_string(),
            result_size,
        },
        pipeline_ms,
        summary,
        shipments: result.selected_candidates.iter().map(shipment_json).collect(),
        routes: result.selected_candidates.iter().map(route_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

fn print_human(
    result: &PipelineResult<DashboardQuery, ShipmentCandidate>,
    fleet_size: usize,
    pipeline_ms: u128,
) {
    println!();
    println!("  \u{2554}{:\u{2550}<62}\u{2557}", "");
    println!("  \u{2551}        TRADELANE \u{2014} Supply Chain Resilience Snapshot          \u{2551}");
    println!("  \u{255a}{:\u{2550}<62}\u{255d}", "");
    println!();

    let summary = FleetMetrics::summarize(
        &result.retrieved_candidates,
        result.query.critical_risk_threshold,
    );

    println!(
        "  {} shipments tracked  \u{00b7}  {} critical  \u{00b7}  {} above risk {}",
        fleet_size,
        summary.critical_count,
        summary.above_threshold_count,
        result.query.critical_risk_threshold,
    );
    println!(
        "  avg risk {:.1}  \u{00b7}  avg delay {:.1} days  \u{00b7}  factors {:.0}/{:.0}/{:.0} (climate/congestion/instability)",
        summary.avg_risk_score,
        summary.avg_delay_days,
        summary.avg_climate_risk,
        summary.avg_port_congestion,
        summary.avg_social_instability,
    );
    println!();

    if result.selected_candidates.is_empty() {
        println!("  No shipments match the current filter.");
    } else {
        println!("  {:\u{2500}<64}", "");
        for (i, c) in result.selected_candidates.iter().enumerate() {
            println!(
                "  {} {}. {:9} {:12} risk {:5.1}  +{:2}d  ETA {}",
                c.stockout.indicator(),
                i + 1,
                c.id,
                format!("{}", c.status),
                c.risk_score,
                c.delay_days,
                c.eta,
            );
            println!(
                "       {} \u{2192} {}  \u{00b7}  inventory {} ({:.1} days at current burn)",
                c.origin.name, c.destination.name, c.current_inventory, c.days_to_stockout,
            );
            println!();
        }
        println!("  {:\u{2500}<64}", "");
    }

    println!();
    println!("  \u{23f1}  Snapshot ran in {}ms", pipeline_ms);
    println!();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn usage() -> ! {
    eprintln!("Usage: tradelane-server <shipments.csv> [options]");
    eprintln!("       tradelane-server --simulate N [--seed S] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --simulate N   Generate a synthetic fleet of N shipments");
    eprintln!("  --seed S       RNG seed for --simulate (default: 42)");
    eprintln!("  --threshold T  Critical risk threshold, 50-90 (default: 70)");
    eprintln!("  --buffer B     Stockout buffer days, 3-15 (default: 5)");
    eprintln!("  --status F     Status filter: all, critical, high, medium, normal");
    eprintln!("  --top N        Number of shipments to show (default: 10)");
    eprintln!("  --json         Output as JSON instead of formatted text");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  tradelane-server fixtures/sample_shipments.csv");
    eprintln!("  tradelane-server --simulate 50 --seed 7 --json");
    eprintln!("  tradelane-server fixtures/sample_shipments.csv --status critical --top 5");
    process::exit(1);
}

fn parse_flag_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let Some(raw) = args.get(i + 1) else {
        eprintln!("Error: {} requires a value", flag);
        process::exit(1);
    };
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Error: invalid value '{}' for {}", raw, flag);
        process::exit(1);
    })
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let mut csv_path: Option<String> = None;
    let mut simulate: Option<usize> = None;
    let mut seed: u64 = 42;
    let mut threshold: f64 = tradelane_core::thresholds::DEFAULT_CRITICAL_RISK_THRESHOLD;
    let mut buffer: u32 = tradelane_core::thresholds::DEFAULT_STOCKOUT_BUFFER_DAYS;
    let mut status_filter = StatusFilter::All;
    let mut top_k: usize = 10;
    let mut json_output = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--simulate" => {
                simulate = Some(parse_flag_value(&args, i, "--simulate"));
                i += 2;
            }
            "--seed" => {
                seed = parse_flag_value(&args, i, "--seed");
                i += 2;
            }
            "--threshold" => {
                threshold = parse_flag_value(&args, i, "--threshold");
                i += 2;
            }
            "--buffer" => {
                buffer = parse_flag_value(&args, i, "--buffer");
                i += 2;
            }
            "--status" => {
                status_filter = parse_flag_value(&args, i, "--status");
                i += 2;
            }
            "--top" => {
                top_k = parse_flag_value(&args, i, "--top");
                i += 2;
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            "--help" | "-h" => usage(),
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
            path => {
                if csv_path.is_some() {
                    eprintln!("Error: more than one CSV path given");
                    process::exit(1);
                }
                csv_path = Some(path.to_string());
                i += 1;
            }
        }
    }

    // Assemble the fleet: a CSV manifest or a seeded synthetic fleet.
    let records = match (csv_path, simulate) {
        (Some(_), Some(_)) => {
            eprintln!("Error: pass either a CSV path or --simulate, not both");
            process::exit(1);
        }
        (Some(path), None) => match load_shipments_file(&path) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Error loading CSV: {}", e);
                process::exit(1);
            }
        },
        (None, Some(count)) => {
            let today = Utc::now().date_naive();
            SeededGenerator::new(seed).generate(count, today)
        }
        (None, None) => usage(),
    };

    if records.is_empty() {
        eprintln!("Error: no shipment records to evaluate");
        process::exit(1);
    }
    let fleet_size = records.len();
    log::info!("evaluating a fleet of {} shipments", fleet_size);

    let pipeline_start = Instant::now();
    let pipeline = DashboardSnapshotPipeline::with_shipments_and_size(records, top_k);

    let mut query = DashboardQuery::new("snapshot-001");
    query.critical_risk_threshold = threshold;
    query.stockout_buffer_days = buffer;
    query.status_filter = status_filter;

    let result = pipeline.execute(query).await;
    let pipeline_ms = pipeline_start.elapsed().as_millis();

    if json_output {
        let dashboard = build_json(&result, top_k, pipeline_ms);
        match serde_json::to_string_pretty(&dashboard) {
            Ok(payload) => println!("{}", payload),
            Err(e) => {
                eprintln!("Error serializing dashboard: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_human(&result, fleet_size, pipeline_ms);
    }
}
