//! flak-replay: play a flak scenario through the engine and print its events.
//!
//! Usage:
//!   flak-replay run --scenario corridor.json
//!   flak-replay run --scenario corridor.json --seconds 60 --summary

mod scenario;

use std::path::PathBuf;
use std::process;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use flak_sim::FlakEngine;
use flak_sim::ZoneRegistry;

use scenario::{ReplayHost, Scenario};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "flak-replay: flak barrage scenario player\n\
         \n\
         Commands:\n\
         \n\
         run       Replay a scenario and print one JSON event per line\n\
         \n\
           --scenario <path>  Scenario JSON file\n\
           --seconds <N>      Override the scenario duration (optional)\n\
           --summary          Print only the final zone table\n\
         \n\
         Logging follows RUST_LOG (default: info, or debug when the\n\
         scenario config sets debug_enabled).\n"
    );
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn init_logging(debug_enabled: bool) {
    let default = if debug_enabled { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let path = match parse_value(args, "--scenario") {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Error: --scenario <path> is required");
            process::exit(1);
        }
    };

    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };
    let scenario = match Scenario::from_json_str(&json) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading scenario: {e}");
            process::exit(1);
        }
    };

    init_logging(scenario.config.debug_enabled);

    let duration = match parse_value(args, "--seconds").map(str::parse::<f64>) {
        Some(Ok(secs)) => secs,
        Some(Err(e)) => {
            error!("invalid --seconds: {e}");
            process::exit(1);
        }
        None => scenario.duration_secs,
    };
    let summary_only = args.iter().any(|a| a == "--summary");

    let mut registry = ZoneRegistry::new();
    for zone in scenario.registry {
        if let Err(e) = registry.register(&zone.name, zone.definition) {
            warn!("skipping registry entry: {e}");
        }
    }
    let mut host = ReplayHost::new(registry, scenario.aircraft, scenario.flags);

    let mut engine = match FlakEngine::new(scenario.config) {
        Ok(engine) => engine,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let requested = scenario.zones.len();
    let mut created = 0;
    for zone in scenario.zones {
        // Failures are logged by the engine.
        if engine.add_zone(&zone.name, zone.options, &host).is_ok() {
            created += 1;
        }
    }
    if requested > 0 {
        info!(requested, created, "explicit zones built");
    }
    for scan in &scenario.scans {
        engine.scan_zones_by_prefix(&scan.prefix, &scan.options, &host);
    }
    for corridor in &scenario.corridors {
        engine.build_corridor(
            &corridor.start,
            &corridor.end,
            corridor.spacing_m,
            &corridor.options,
            &mut host,
        );
    }
    info!(zones = engine.zone_count(), duration, "replay started");

    let ticks = flak_core::types::secs_to_ticks(duration);
    let mut last = None;
    for _ in 0..ticks {
        let next_secs = engine.time().elapsed_secs + flak_core::constants::DT;
        host.set_time(next_secs);
        let snapshot = engine.tick(&mut host);
        if !summary_only {
            for event in &snapshot.events {
                match serde_json::to_string(event) {
                    Ok(line) => println!("{{\"t\":{:.1},\"event\":{line}}}", snapshot.time.elapsed_secs),
                    Err(e) => warn!("failed to encode event: {e}"),
                }
            }
        }
        last = Some(snapshot);
    }

    if let Some(snapshot) = last {
        if summary_only {
            match serde_json::to_string_pretty(&snapshot.zones) {
                Ok(table) => println!("{table}"),
                Err(e) => error!("failed to encode summary: {e}"),
            }
        }
    }
    info!(explosions = host.explosions, "replay finished");
}
