//! Distance and travel-time helpers.

use crate::domain::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Minutes needed to cover the straight line from `a` to `b` at `speed`
/// distance units per minute.
///
/// ```
/// use campus_server::domain::Point;
/// use campus_server::geometry::travel_time;
///
/// let minutes = travel_time(Point::new(0.0, 0.0), Point::new(3000.0, 4000.0), 1000.0 / 6.0);
/// assert!((minutes - 30.0).abs() < 1e-9);
/// ```
pub fn travel_time(a: Point, b: Point, speed: f64) -> f64 {
    distance(a, b) / speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pythagorean_distance() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Point::new(-1.0, -1.0), Point::new(2.0, 3.0)), 5.0);
    }

    #[test]
    fn large_coordinates_do_not_overflow() {
        let d = distance(Point::new(0.0, 0.0), Point::new(1e200, 0.0));
        assert_eq!(d, 1e200);
        assert!(travel_time(Point::new(0.0, 0.0), Point::new(3e200, 4e200), 1.0).is_finite());
    }

    #[test]
    fn same_point_takes_no_time() {
        let p = Point::new(7.0, 9.0);
        assert_eq!(travel_time(p, p, 100.0), 0.0);
    }

    #[test]
    fn shuttle_hop() {
        let t = travel_time(Point::new(0.0, 0.0), Point::new(1000.0, 0.0), 500.0);
        assert_eq!(t, 2.0);
    }

    #[test]
    fn symmetric() {
        let a = Point::new(12.0, 40.0);
        let b = Point::new(-3.5, 8.25);
        assert_eq!(travel_time(a, b, 3.0), travel_time(b, a, 3.0));
    }
}
