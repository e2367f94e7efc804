//! tilesim entry point
//!
//! Runs the benchmark scenario and prints the checksum as the only line on
//! stdout. Logging goes to stderr (`RUST_LOG=debug` for details).

use tilesim::{Scenario, run_scenario};

fn main() {
    env_logger::init();

    let scenario = Scenario::load();
    log::info!(
        "tilesim starting: {}x{} grid, seed {}, {} frames, {} initial, {} per frame",
        scenario.grid_width,
        scenario.grid_height,
        scenario.seed,
        scenario.frames,
        scenario.initial_entities,
        scenario.spawn_per_frame
    );

    let report = run_scenario(&scenario);
    println!("{}", report.formatted_checksum());
}
