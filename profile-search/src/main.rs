//! Demo binary: loads a scenario JSON file, runs one `find` query, and
//! prints the resulting journeys as a table.
//!
//! Usage: `profile-search <scenario.json>`

use std::env;
use std::fs;
use std::process;

use tracing::{error, info};

use profile_search::engine::ProfileSearchEngine;
use profile_search::extractor::{DEFAULT_MAX_JOURNEYS, DEFAULT_MAX_PROBABILITY_EXTRACT};
use profile_search::format::to_rows;
use profile_search::scenario::Scenario;

fn main() {
    tracing_subscriber::fmt().init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: profile-search <scenario.json>");
            process::exit(2);
        }
    };

    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(err) => {
            error!(%path, %err, "failed to read scenario file");
            process::exit(1);
        }
    };

    let scenario = match Scenario::parse(&json) {
        Ok(scenario) => scenario,
        Err(err) => {
            error!(%err, "failed to parse scenario JSON");
            process::exit(1);
        }
    };

    let departure_station = scenario.departure_station();

    let (connections, footpaths, request) = match scenario.build() {
        Ok(built) => built,
        Err(err) => {
            error!(%err, "failed to build scenario");
            process::exit(1);
        }
    };

    info!(connections = connections.len(), "scenario loaded");

    let engine = ProfileSearchEngine::new(connections, footpaths);
    let table = match engine.find(request) {
        Ok(table) => table,
        Err(err) => {
            error!(%err, "find failed");
            process::exit(1);
        }
    };

    let journeys = table.best_journeys(
        departure_station,
        DEFAULT_MAX_PROBABILITY_EXTRACT,
        DEFAULT_MAX_JOURNEYS,
    );

    if journeys.is_empty() {
        println!("no journey meets the requested probability");
        return;
    }

    for row in to_rows(&journeys) {
        println!(
            "path={} {}@{} --{}--> {}@{} p={:.4} transfers={}",
            row.path,
            row.start_id,
            row.start_time,
            row.line_id,
            row.stop_id,
            row.stop_time,
            row.arrival_probability,
            row.transfers,
        );
    }
}
