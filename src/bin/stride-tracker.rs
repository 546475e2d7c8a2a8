// ABOUTME: Tracker entry point processing the demo sensor packet fixture
// ABOUTME: Decodes each packet and prints one summary line per workout to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Stride Tracker Binary
//!
//! Processes a fixed list of (code, data) sensor packets sequentially and
//! prints one formatted summary line per workout. A packet that fails to
//! decode is fatal for that entry only; the remaining packets still run.
//!
//! Usage:
//! ```bash
//! cargo run --bin stride-tracker
//! ```

use anyhow::Result;
use stride_tracker::{logging, Workout};
use tracing::{error, info};

/// Demo packets in the sensor wire order: activity code plus positional payload.
fn demo_packets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn main() -> Result<()> {
    logging::init_from_env()?;

    let packets = demo_packets();
    info!(packets = packets.len(), "processing sensor packets");

    for (code, data) in packets {
        match Workout::from_packet(code, &data) {
            Ok(workout) => println!("{}", workout.summary().render()),
            Err(err) => error!(code, %err, "skipping undecodable packet"),
        }
    }

    Ok(())
}
