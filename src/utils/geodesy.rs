/// Mean Earth radius used for all distance calculations, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6367.0;

/// Great-circle distance in kilometers between two points given in decimal degrees
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push `a` marginally above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Straight-line distance in kilometers through space between two points
///
/// Combines the great-circle distance with the altitude difference (meters)
/// as the legs of a right triangle.
pub fn chord_distance(
    (lat1, lon1, alt1): (f64, f64, i32),
    (lat2, lon2, alt2): (f64, f64, i32),
) -> f64 {
    let ground = haversine(lat1, lon1, lat2, lon2);
    let vertical = (alt2 - alt1) as f64 / 1000.0;
    ground.hypot(vertical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_is_zero_for_identical_points() {
        assert_eq!(haversine(52.1, -0.1, 52.1, -0.1), 0.0);
        assert_eq!(haversine(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn haversine_is_symmetric() {
        let points = [
            (52.105_716, -0.1033),
            (52.107_533, -0.10175),
            (-33.9, 18.4),
            (64.1, -21.9),
        ];
        for &(lat1, lon1) in &points {
            for &(lat2, lon2) in &points {
                assert_eq!(
                    haversine(lat1, lon1, lat2, lon2),
                    haversine(lat2, lon2, lat1, lon1)
                );
            }
        }
    }

    #[test]
    fn haversine_large_separation() {
        let distance = haversine(100.0, 100.0, 0.0, 0.0);
        assert!((distance - 9809.242_565).abs() < 1e-3, "got {distance}");
    }

    #[test]
    fn haversine_one_degree_of_latitude() {
        let distance = haversine(0.0, 0.0, 1.0, 0.0);
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((distance - expected).abs() < 1e-9);
    }

    #[test]
    fn chord_equals_haversine_on_level_flight() {
        let a = (52.105_716, -0.1033, 558);
        let b = (52.107_533, -0.10175, 558);
        assert_eq!(chord_distance(a, b), haversine(a.0, a.1, b.0, b.1));
    }

    #[test]
    fn chord_exceeds_haversine_when_climbing() {
        let a = (52.105_716, -0.1033, 558);
        let b = (52.107_533, -0.10175, 1058);
        assert!(chord_distance(a, b) > haversine(a.0, a.1, b.0, b.1));
    }

    #[test]
    fn chord_is_pure_vertical_for_same_position() {
        let distance = chord_distance((45.0, 7.0, 1000), (45.0, 7.0, 1500));
        assert!((distance - 0.5).abs() < 1e-12);
    }
}
