/// Latitude limit for drawn lines; the globe projection degenerates at the poles
pub const MAX_LATITUDE: f64 = 85.0;

/// Wrap longitude into [-180, 180] and clamp latitude into [-85, 85]
///
/// Total over every `f64`. Non-finite longitudes map to 0 and a NaN latitude
/// maps to 0 so the wrap loop always terminates.
pub fn normalize(lng: f64, lat: f64) -> (f64, f64) {
    (wrap_longitude(lng), clamp_latitude(lat))
}

fn wrap_longitude(lng: f64) -> f64 {
    if !lng.is_finite() {
        return 0.0;
    }
    // Fold large magnitudes first; the loops then only fix the boundary.
    let mut wrapped = if lng.abs() > 720.0 { lng % 360.0 } else { lng };
    while wrapped > 180.0 {
        wrapped -= 360.0;
    }
    while wrapped < -180.0 {
        wrapped += 360.0;
    }
    wrapped
}

fn clamp_latitude(lat: f64) -> f64 {
    if lat.is_nan() {
        return 0.0;
    }
    lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wraps_one_period() {
        assert_eq!(normalize(190.0, 0.0), (-170.0, 0.0));
        assert_eq!(normalize(-190.0, 0.0), (170.0, 0.0));
    }

    #[test]
    fn test_clamps_latitude() {
        assert_eq!(normalize(0.0, 90.0), (0.0, 85.0));
        assert_eq!(normalize(0.0, -90.0), (0.0, -85.0));
    }

    #[test]
    fn test_boundaries_are_kept() {
        assert_eq!(normalize(180.0, 85.0), (180.0, 85.0));
        assert_eq!(normalize(-180.0, -85.0), (-180.0, -85.0));
    }

    #[test]
    fn test_wraps_many_periods() {
        assert_eq!(normalize(370.0 + 360.0 * 4.0, 0.0).0, 10.0);
        assert_eq!(normalize(-370.0 - 360.0 * 4.0, 0.0).0, -10.0);
        assert_eq!(normalize(540.0, 0.0).0, 180.0);
    }

    #[test]
    fn test_non_finite_input() {
        assert_eq!(normalize(f64::NAN, f64::NAN), (0.0, 0.0));
        assert_eq!(normalize(f64::INFINITY, f64::INFINITY), (0.0, 85.0));
        assert_eq!(normalize(f64::NEG_INFINITY, f64::NEG_INFINITY), (0.0, -85.0));
    }

    proptest! {
        #[test]
        fn normalized_output_is_in_range(lng in -1.0e9f64..1.0e9, lat in -1.0e9f64..1.0e9) {
            let (x, y) = normalize(lng, lat);
            prop_assert!((-180.0..=180.0).contains(&x));
            prop_assert!((-85.0..=85.0).contains(&y));
        }

        #[test]
        fn in_range_input_is_unchanged(lng in -180.0f64..=180.0, lat in -85.0f64..=85.0) {
            prop_assert_eq!(normalize(lng, lat), (lng, lat));
        }
    }
}
