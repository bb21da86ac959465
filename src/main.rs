mod report;
mod scenario;

use report::render_summary;
use sapx::{Adapter, AdapterSettings};
use scenario::{build_demo_model, run_session};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("sapx=info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    // Optional first argument: path to a JSON settings file.
    let settings = match std::env::args().nth(1) {
        Some(path) => AdapterSettings::from_path(path)?,
        None => AdapterSettings::default(),
    };

    let mut adapter = Adapter::with_settings(build_demo_model(), settings);
    let summary = run_session(&mut adapter);

    let report = render_summary(&summary);
    println!("{report}");

    Ok(())
}
