use std::io;

use log::{debug, warn, LevelFilter};

use lanesum::{inputs, report, Backend};

fn main() {
    // Configured in code: the program recognizes no environment variables
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .init();

    let (a, b) = inputs::operands();

    let backend = Backend::detect();
    debug!("adding {} lanes per step on {backend}", backend.lanes());

    let c = a + b;

    // A closed stdout is not an error for this program
    if let Err(err) = report::write_report(&mut io::stdout().lock(), c.as_slice()) {
        warn!("could not write result: {err}");
    }
}
