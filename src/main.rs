// main.rs
//
// Builds the full holder and writes holder.stl to the working directory.
// Logs go to stderr; stdout only carries the final `done`.
// No flags, no environment; any construction or export error is fatal.

use holder::design::{HolderParams, OUTPUT_FILE, export_holder};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match export_holder(&HolderParams::full(), OUTPUT_FILE) {
        Ok(report) => {
            info!(
                path = %report.path.display(),
                triangles = report.triangles,
                "export finished"
            );
            println!("done");
            ExitCode::SUCCESS
        },
        Err(err) => {
            error!("error: {err}");
            ExitCode::FAILURE
        },
    }
}
