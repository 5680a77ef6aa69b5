//! Plain-text itinerary rendering.

use std::fmt::{self, Write};

use crate::domain::{Route, RouteLeg, TravelMode};

/// Verb phrase for a travel mode.
pub fn mode_phrase(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Walk => "Walk",
        TravelMode::Shuttle => "Ride the cart",
    }
}

/// One direction line, without numbering.
///
/// ```
/// use campus_server::domain::RouteLeg;
/// use campus_server::itinerary::describe_leg;
///
/// let leg = RouteLeg::walk("Starting Point", "Final Destination", 3.456);
/// assert_eq!(
///     describe_leg(&leg),
///     "Walk from \"Starting Point\" to \"Final Destination\" for 3.46 minutes."
/// );
/// ```
pub fn describe_leg(leg: &RouteLeg) -> String {
    format!(
        "{} from \"{}\" to \"{}\" for {:.2} minutes.",
        mode_phrase(leg.mode),
        leg.from,
        leg.to,
        leg.duration_minutes
    )
}

/// Total trip time rounded to whole minutes.
pub fn rounded_total(route: &Route) -> i64 {
    route.total_duration().round() as i64
}

/// Render a route as numbered directions.
pub fn render(route: &Route) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_itinerary(&mut out, route);
    out
}

fn write_itinerary(out: &mut impl Write, route: &Route) -> fmt::Result {
    writeln!(out, "The fastest route takes {} minute(s).", rounded_total(route))?;
    writeln!(out, "Directions")?;
    writeln!(out, "----------")?;
    for (step, leg) in route.legs().iter().enumerate() {
        writeln!(out, "{}. {}", step + 1, describe_leg(leg))?;
    }
    Ok(())
}
