//! Network description reader.
//!
//! Campus networks are described in a small `key = value` text format:
//!
//! ```text
//! num_cart_lines = 1
//! average_cart_speed = 18.5
//! starting_point = (120, 40)
//! destination_point = (900, 610)
//! cart_line_name = "North Loop"
//! cart_line_stations = (100, 50) (400, 50) (800, 600)
//! ```
//!
//! Cart speed is given in km/h. Each `cart_line_name` is paired with the next
//! `cart_line_stations` block, in order. Missing or inconsistent fields are
//! errors; no defaults are filled in.

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::domain::{Network, Point, ShuttleLine};

/// Error reading a network description.
#[derive(Debug, thiserror::Error)]
pub enum DescriptionError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required field is absent or malformed
    #[error("missing field {0}")]
    MissingField(&'static str),

    /// A number could not be represented
    #[error("invalid value for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    /// Declared and described line counts disagree
    #[error("num_cart_lines is {declared} but {found} lines were described")]
    LineCountMismatch { declared: usize, found: usize },
}

lazy_static! {
    static ref NUM_LINES_RE: Regex = Regex::new(r"\bnum_cart_lines[\t ]*=[\t ]*([0-9]+)").unwrap();
    static ref CART_SPEED_RE: Regex =
        Regex::new(r"\baverage_cart_speed\s*=\s*([0-9]+(?:\.[0-9]+)?)").unwrap();
    static ref START_RE: Regex =
        Regex::new(r"\bstarting_point\s*=\s*\(\s*([0-9]+)\s*,\s*([0-9]+)\s*\)").unwrap();
    static ref DESTINATION_RE: Regex =
        Regex::new(r"\bdestination_point\s*=\s*\(\s*([0-9]+)\s*,\s*([0-9]+)\s*\)").unwrap();
    static ref LINE_NAME_RE: Regex = Regex::new(r#"\bcart_line_name\s*=\s*"([^"]+)""#).unwrap();
    static ref LINE_STATIONS_RE: Regex =
        Regex::new(r"\bcart_line_stations\s*=\s*((?:\(\s*[0-9]+\s*,\s*[0-9]+\s*\)\s*)+)").unwrap();
    static ref STATION_RE: Regex = Regex::new(r"\(\s*([0-9]+)\s*,\s*([0-9]+)\s*\)").unwrap();
}

/// Parse a network description.
///
/// # Examples
///
/// ```
/// use campus_server::description::parse_network;
///
/// let network = parse_network(
///     "num_cart_lines = 1\n\
///      average_cart_speed = 30\n\
///      starting_point = (0, 0)\n\
///      destination_point = (1000, 0)\n\
///      cart_line_name = \"Blue\"\n\
///      cart_line_stations = (0, 0) (1000, 0)\n",
/// )
/// .unwrap();
///
/// assert_eq!(network.lines.len(), 1);
/// assert_eq!(network.lines[0].stops()[1].name(), "Blue Station 2");
/// assert_eq!(network.shuttle_speed, 500.0);
/// ```
pub fn parse_network(content: &str) -> Result<Network, DescriptionError> {
    let declared = NUM_LINES_RE
        .captures(content)
        .ok_or(DescriptionError::MissingField("num_cart_lines"))?;
    let declared: usize = parse_number("num_cart_lines", &declared[1])?;

    let speed = CART_SPEED_RE
        .captures(content)
        .ok_or(DescriptionError::MissingField("average_cart_speed"))?;
    let speed: f64 = parse_number("average_cart_speed", &speed[1])?;

    let start = parse_point(&START_RE, "starting_point", content)?;
    let destination = parse_point(&DESTINATION_RE, "destination_point", content)?;
    let lines = parse_lines(content)?;

    if lines.len() != declared {
        return Err(DescriptionError::LineCountMismatch {
            declared,
            found: lines.len(),
        });
    }

    debug!(
        lines = lines.len(),
        stops = lines.iter().map(|l| l.stops().len()).sum::<usize>(),
        cart_speed_kmh = speed,
        "parsed network description"
    );

    Ok(Network::from_points(
        start,
        destination,
        lines,
        Network::km_per_hour_to_units_per_minute(speed),
    ))
}

/// Read and parse a network description file.
pub fn read_network(path: impl AsRef<Path>) -> Result<Network, DescriptionError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| DescriptionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_network(&content)
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, DescriptionError> {
    value.parse().map_err(|_| DescriptionError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_point(re: &Regex, field: &'static str, content: &str) -> Result<Point, DescriptionError> {
    let caps = re
        .captures(content)
        .ok_or(DescriptionError::MissingField(field))?;
    Ok(Point::new(
        parse_number(field, &caps[1])?,
        parse_number(field, &caps[2])?,
    ))
}

fn parse_lines(content: &str) -> Result<Vec<ShuttleLine>, DescriptionError> {
    let names = LINE_NAME_RE.captures_iter(content);
    let blocks = LINE_STATIONS_RE.captures_iter(content);

    names
        .zip(blocks)
        .map(|(name, block)| {
            let points = STATION_RE
                .captures_iter(&block[1])
                .map(|caps| {
                    Ok(Point::new(
                        parse_number("cart_line_stations", &caps[1])?,
                        parse_number("cart_line_stations", &caps[2])?,
                    ))
                })
                .collect::<Result<Vec<_>, DescriptionError>>()?;
            Ok(ShuttleLine::from_points(&name[1], points))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
num_cart_lines = 2
average_cart_speed = 18
starting_point = (120, 40)
destination_point = (900, 610)

cart_line_name = "North Loop"
cart_line_stations = (100, 50) (400, 50)
    (800, 600)

cart_line_name = "Library Express"
cart_line_stations = (130,45)(880,600)
"#;

    #[test]
    fn parses_sample() {
        let network = parse_network(SAMPLE).unwrap();

        assert_eq!(network.start.name(), "Starting Point");
        assert_eq!(network.start.coordinates(), Point::new(120.0, 40.0));
        assert_eq!(network.destination.name(), "Final Destination");
        assert_eq!(network.destination.coordinates(), Point::new(900.0, 610.0));
        assert_eq!(network.shuttle_speed, 300.0);

        assert_eq!(network.lines.len(), 2);
        let north = &network.lines[0];
        assert_eq!(north.name(), "North Loop");
        assert_eq!(north.stops().len(), 3);
        assert_eq!(north.stops()[2].name(), "North Loop Station 3");
        assert_eq!(north.stops()[2].coordinates(), Point::new(800.0, 600.0));

        let express = &network.lines[1];
        assert_eq!(express.name(), "Library Express");
        assert_eq!(express.stops()[0].coordinates(), Point::new(130.0, 45.0));
    }

    #[test]
    fn decimal_speed() {
        let content = SAMPLE.replace("average_cart_speed = 18", "average_cart_speed = 18.5");
        let network = parse_network(&content).unwrap();
        assert!((network.shuttle_speed - 18.5 * 1000.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn no_lines() {
        let content = "num_cart_lines = 0\n\
                       average_cart_speed = 10\n\
                       starting_point = ( 1 , 2 )\n\
                       destination_point=(3,4)\n";
        let network = parse_network(content).unwrap();
        assert!(network.lines.is_empty());
        assert_eq!(network.start.coordinates(), Point::new(1.0, 2.0));
        assert_eq!(network.destination.coordinates(), Point::new(3.0, 4.0));
    }

    #[test]
    fn missing_fields() {
        let content = SAMPLE.replace("starting_point = (120, 40)", "");
        assert!(matches!(
            parse_network(&content),
            Err(DescriptionError::MissingField("starting_point"))
        ));

        let content = SAMPLE.replace("average_cart_speed = 18", "average_cart_speed = fast");
        assert!(matches!(
            parse_network(&content),
            Err(DescriptionError::MissingField("average_cart_speed"))
        ));

        let content = SAMPLE.replace("num_cart_lines = 2", "");
        assert!(matches!(
            parse_network(&content),
            Err(DescriptionError::MissingField("num_cart_lines"))
        ));
    }

    #[test]
    fn negative_coordinates_not_accepted() {
        let content = SAMPLE.replace("(900, 610)", "(-900, 610)");
        assert!(matches!(
            parse_network(&content),
            Err(DescriptionError::MissingField("destination_point"))
        ));
    }

    #[test]
    fn line_count_mismatch() {
        let content = SAMPLE.replace("num_cart_lines = 2", "num_cart_lines = 3");
        let err = parse_network(&content).unwrap_err();
        assert!(matches!(
            err,
            DescriptionError::LineCountMismatch {
                declared: 3,
                found: 2
            }
        ));
        assert_eq!(
            err.to_string(),
            "num_cart_lines is 3 but 2 lines were described"
        );
    }

    #[test]
    fn non_ascii_digits_are_not_stations() {
        let content = SAMPLE.replace("(130,45)", "(\u{0661}\u{0663}\u{0660},45)");
        assert!(matches!(
            parse_network(&content),
            Err(DescriptionError::LineCountMismatch {
                declared: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn unpaired_name_is_ignored() {
        let content = format!("{}\ncart_line_name = \"Orphan\"\n", SAMPLE);
        let network = parse_network(&content).unwrap();
        assert_eq!(network.lines.len(), 2);
    }

    #[test]
    fn oversized_count_is_invalid() {
        let content = SAMPLE.replace(
            "num_cart_lines = 2",
            "num_cart_lines = 99999999999999999999999",
        );
        assert!(matches!(
            parse_network(&content),
            Err(DescriptionError::InvalidNumber {
                field: "num_cart_lines",
                ..
            })
        ));
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let network = read_network(file.path()).unwrap();
        assert_eq!(network.lines.len(), 2);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = read_network(&path).unwrap_err();
        assert!(matches!(err, DescriptionError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read"));
    }
}
