//! Simulation driver
//!
//! Runs a scenario to completion and reports the final checksum.

use serde::{Deserialize, Serialize};

use super::state::SimState;
use super::tick::tick;
use crate::consts::*;
use crate::scenario::Scenario;

/// Frames between periodic trace lines
const TRACE_INTERVAL: u64 = 600;

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub frames: u64,
    pub final_live: usize,
    pub peak_live: usize,
    pub total_spawned: u64,
    pub total_expired: u64,
    pub checksum: f64,
}

impl RunReport {
    /// Checksum with six digits after the decimal point
    pub fn formatted_checksum(&self) -> String {
        format_checksum(self.checksum)
    }
}

/// Six-decimal rendering used for the printed result
pub fn format_checksum(checksum: f64) -> String {
    format!("{checksum:.6}")
}

/// Run a full scenario
pub fn run_scenario(scenario: &Scenario) -> RunReport {
    let mut state = SimState::new(scenario.seed, scenario.grid_width, scenario.grid_height);
    state.spawn_entities(scenario.initial_entities);
    let mut peak_live = state.store.len();

    for _ in 0..scenario.frames {
        let stats = tick(&mut state, scenario.spawn_per_frame, SIM_DT);
        // Peak is measured before compaction
        peak_live = peak_live.max(stats.updated);

        if state.frame % TRACE_INTERVAL == 0 {
            log::trace!(
                "Frame {}: live={} expired={} checksum={:.6}",
                state.frame,
                stats.live,
                stats.expired,
                state.checksum
            );
        }
    }

    let report = RunReport {
        frames: state.frame,
        final_live: state.store.len(),
        peak_live,
        total_spawned: state.total_spawned,
        total_expired: state.total_expired,
        checksum: state.checksum,
    };
    log::info!(
        "Run finished: {} frames, {} live, {} spawned, {} expired",
        report.frames,
        report.final_live,
        report.total_spawned,
        report.total_expired
    );
    report
}

/// Run the default grid and seed with the given counts, returning the checksum
pub fn run(frame_count: u64, initial_entity_count: usize, spawn_per_frame: usize) -> f64 {
    let scenario = Scenario {
        frames: frame_count,
        initial_entities: initial_entity_count,
        spawn_per_frame,
        ..Scenario::default()
    };
    run_scenario(&scenario).checksum
}
