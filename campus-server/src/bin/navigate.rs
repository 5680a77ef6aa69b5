//! Print the fastest route for a network description file.
//!
//! Usage: `navigate <description-file>`

use std::process::ExitCode;

use campus_server::description::read_network;
use campus_server::itinerary::render;
use campus_server::logging::init_logger;
use campus_server::planner::plan_route;
use tracing::error;

fn main() -> ExitCode {
    init_logger();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: navigate <description-file>");
        return ExitCode::FAILURE;
    };

    let network = match read_network(&path) {
        Ok(network) => network,
        Err(e) => {
            error!(error = %e, "could not load network");
            return ExitCode::FAILURE;
        }
    };

    match plan_route(&network) {
        Ok(route) => {
            print!("{}", render(&route));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "could not plan route");
            ExitCode::FAILURE
        }
    }
}
