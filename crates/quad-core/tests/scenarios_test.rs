//! End-to-end planning scenarios through the public service API.
//!
//! Run with: cargo test -p quad-core --test scenarios_test

use quad_core::{Area, AxisRange, ErrorKind, RouteError, RouteService, Transmitter};

#[test]
fn test_overlapping_pair_end_inside_first_zone() {
    let mut service = RouteService::default();
    service.add_transmitter(10, 10, 15).unwrap();
    service.add_transmitter(20, 10, 10).unwrap();
    service.set_start(10, 10).unwrap();
    service.set_end(20, 10).unwrap();

    let report = service.route_report();
    assert!(report.found);
    // (20,10) also lies inside the first zone, and the first registered
    // covering transmitter wins, so both endpoints resolve to it.
    assert_eq!(report.paths, vec![vec![Transmitter::new(10, 10, 15)]]);
}

#[test]
fn test_overlapping_pair_hops_when_end_only_in_second_zone() {
    let mut service = RouteService::default();
    service.add_transmitter(10, 10, 15).unwrap();
    service.add_transmitter(20, 10, 10).unwrap();
    service.set_start(10, 10).unwrap();
    service.set_end(28, 10).unwrap();

    let paths = service.check_route().unwrap();
    assert_eq!(
        paths,
        vec![vec![Transmitter::new(10, 10, 15), Transmitter::new(20, 10, 10)]]
    );
}

#[test]
fn test_single_transmitter_covers_both_endpoints() {
    let mut service = RouteService::default();
    service.add_transmitter(50, 50, 5).unwrap();
    service.set_start(50, 50).unwrap();
    service.set_end(50, 50).unwrap();

    let report = service.route_report();
    assert!(report.found);
    assert_eq!(report.paths.len(), 1);
    assert_eq!(report.paths[0].len(), 1);
}

#[test]
fn test_distant_transmitters_have_no_route() {
    let mut service = RouteService::default();
    service.add_transmitter(0, 0, 5).unwrap();
    service.add_transmitter(90, 90, 5).unwrap();
    service.set_start(0, 0).unwrap();
    service.set_end(90, 90).unwrap();

    assert_eq!(service.check_route(), Err(RouteError::NoRouteFound));
    let report = service.route_report();
    assert!(!report.found);
    assert!(report.paths.is_empty());
    assert_eq!(report.reason, Some(ErrorKind::NoRouteFound));
}

#[test]
fn test_negative_power_rejected() {
    let mut service = RouteService::default();
    let err = service.add_transmitter(5, 5, -1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPower);
    assert!(service.list_transmitters().is_empty());
}

#[test]
fn test_inverted_area_keeps_previous_area() {
    let mut service = RouteService::default();
    let err = service.set_area(50, 10, 0, 100).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAreaBounds);
    assert_eq!(service.registry().area(), Area::default());
}

#[test]
fn test_duplicate_transmitter_leaves_count_unchanged() {
    let mut service = RouteService::default();
    service.add_transmitter(30, 40, 7).unwrap();
    let err = service.add_transmitter(30, 40, 7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateTransmitter);
    assert_eq!(service.list_transmitters().len(), 1);
}

#[test]
fn test_custom_area_bounds_transmitters() {
    let mut service = RouteService::default();
    service.set_area(100, 300, 50, 60).unwrap();
    assert_eq!(
        service.registry().area(),
        Area {
            x: AxisRange { min: 100, max: 300 },
            y: AxisRange { min: 50, max: 60 },
        }
    );

    assert_eq!(
        service.add_transmitter(50, 55, 10).unwrap_err().kind(),
        ErrorKind::OutOfAreaBounds
    );
    service.add_transmitter(100, 55, 60).unwrap();
    service.add_transmitter(220, 55, 60).unwrap();
    service.add_transmitter(300, 55, 20).unwrap();
    service.set_start(100, 50).unwrap();
    service.set_end(300, 60).unwrap();

    let paths = service.check_route().unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 3);
}

#[test]
fn test_multiple_routes_are_all_reported() {
    let mut service = RouteService::default();
    // Two cross-linked corridors between the start and end transmitters.
    service.add_transmitter(10, 50, 12).unwrap();
    service.add_transmitter(30, 60, 12).unwrap();
    service.add_transmitter(30, 40, 12).unwrap();
    service.add_transmitter(50, 50, 12).unwrap();
    service.set_start(5, 50).unwrap();
    service.set_end(55, 50).unwrap();

    let paths = service.check_route().unwrap();
    assert_eq!(paths.len(), 4);
    for path in &paths {
        assert_eq!(path.first(), Some(&Transmitter::new(10, 50, 12)));
        assert_eq!(path.last(), Some(&Transmitter::new(50, 50, 12)));
    }
}
