//! CLI tool for timegrid - resolves a timetable input document and outputs the layout JSON
//!
//! Usage:
//!   timegrid_cli <input.json>              # Output JSON to stdout
//!   timegrid_cli <input.json> -o out.json  # Output JSON to file
//!
//! Set `RUST_LOG=timegrid=debug` (or `trace`) to see what the resolver skips and emits.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use timegrid::{resolve_layout, TimetableInput};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: timegrid_cli <input.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read and decode input document
    let input = match TimetableInput::from_path(input_path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let layout = resolve_layout(&input);
    log::info!(
        "layout resolved: {} resources, {} blocks",
        layout.resources.len(),
        layout.resources.iter().map(|r| r.blocks.len()).sum::<usize>()
    );

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&layout) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
