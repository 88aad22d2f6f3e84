use astrocarto::lines::{generate_lines, normalize, AngleType, BirthData, Planet, POINTS_PER_LINE};

fn new_york() -> BirthData {
    BirthData {
        date: "1990-01-01".to_string(),
        time: "12:00".to_string(),
        latitude: 40.7128,
        longitude: -74.0060,
    }
}

#[test]
fn test_generate_is_deterministic() {
    assert_eq!(generate_lines(&new_york()), generate_lines(&new_york()));
}

#[test]
fn test_generate_emits_twelve_lines_of_37_points() {
    let lines = generate_lines(&new_york());
    assert_eq!(lines.len(), 12);
    for line in &lines {
        assert_eq!(line.coordinates.len(), POINTS_PER_LINE);
        assert_eq!(line.coordinates.len(), 37);
    }
}

#[test]
fn test_generate_order_is_planet_then_angle() {
    let lines = generate_lines(&new_york());
    let order: Vec<(Planet, AngleType)> = lines
        .iter()
        .map(|l| (l.planet.clone(), l.angle_type.clone()))
        .collect();
    let mut expected = Vec::new();
    for planet in Planet::CORE {
        expected.push((planet.clone(), AngleType::Conjunction));
        expected.push((planet, AngleType::Opposition));
    }
    assert_eq!(order, expected);
}

#[test]
fn test_sun_conjunction_first_point() {
    let lines = generate_lines(&new_york());
    let sun = &lines[0];
    assert_eq!(sun.planet, Planet::Sun);
    assert_eq!(sun.angle_type, AngleType::Conjunction);

    let (lng, lat) = sun.coordinates[0];
    assert_eq!(lng, -180.0);
    let expected = ((-180.0f64).to_radians().sin() * 60.0 + 0.407128).clamp(-85.0, 85.0);
    assert!((lat - expected).abs() < 1e-9);
    assert!((lat - 0.41).abs() < 0.01);
}

#[test]
fn test_opposition_uses_longitude_offset() {
    let lines = generate_lines(&new_york());
    let moon_opposition = &lines[3];
    assert_eq!(moon_opposition.planet, Planet::Moon);
    assert_eq!(moon_opposition.angle_type, AngleType::Opposition);

    let (lng, lat) = moon_opposition.coordinates[18];
    assert_eq!(lng, 0.0);
    let expected = 45.0f64.to_radians().cos() * 60.0 + (-74.0060 * 0.01);
    assert!((lat - expected).abs() < 1e-9);
}

#[test]
fn test_extreme_offsets_are_clamped_not_rejected() {
    let birth = BirthData {
        latitude: 20000.0,
        longitude: -20000.0,
        ..new_york()
    };
    let lines = generate_lines(&birth);
    assert_eq!(lines.len(), 12);
    for line in &lines {
        for &(lng, lat) in &line.coordinates {
            assert!((-180.0..=180.0).contains(&lng));
            assert!((-85.0..=85.0).contains(&lat));
        }
    }
    assert!(lines[0].coordinates.iter().all(|&(_, lat)| lat == 85.0));
    assert!(lines[1].coordinates.iter().all(|&(_, lat)| lat == -85.0));
}

#[test]
fn test_longitudes_span_the_antimeridian() {
    let line = &generate_lines(&new_york())[0];
    assert_eq!(line.coordinates.first().map(|c| c.0), Some(-180.0));
    assert_eq!(line.coordinates.last().map(|c| c.0), Some(180.0));
}

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize(190.0, 0.0), (-170.0, 0.0));
    assert_eq!(normalize(-190.0, 0.0), (170.0, 0.0));
    assert_eq!(normalize(0.0, 90.0), (0.0, 85.0));
    assert_eq!(normalize(0.0, -90.0), (0.0, -85.0));
}
