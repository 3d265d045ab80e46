//! Trip planning and map-assist tests
//!
//! Distance estimates, stop placement, plan assembly and nearest-station
//! selection over realistic Indian city pairs.

mod fixtures;

use ev_trip_planner::catalog::{EvModels, IndianCities};
use ev_trip_planner::haversine::distance_km;
use ev_trip_planner::route::estimate_road_distance_km;
use ev_trip_planner::simulator::{simulate, FlatPricing, SimulateOptions};
use ev_trip_planner::{LookupKind, PlanError, PlannerConfig, TripPlanner};

use fixtures::{delhi, highway_stations, location, mumbai, pune, trip};

// ============================================================================
// Distance
// ============================================================================

#[test]
fn great_circle_is_symmetric_and_zero_on_self() {
    let points = [mumbai(), delhi(), pune()];
    for a in &points {
        assert_eq!(distance_km(a.point, a.point), 0.0);
        for b in &points {
            assert!((distance_km(a.point, b.point) - distance_km(b.point, a.point)).abs() < 1e-9);
        }
    }
}

#[test]
fn mumbai_delhi_distances() {
    let straight = distance_km(mumbai().point, delhi().point);
    assert!((straight - 1153.0).abs() <= 5.0, "got {}", straight);

    let road = estimate_road_distance_km(mumbai().point, delhi().point, 1.2);
    assert!((road - 1384.0).abs() <= 6.0, "got {}", road);
}

// ============================================================================
// Range simulation
// ============================================================================

#[test]
fn long_trip_legs_never_exceed_usable_range() {
    let mut pricing = FlatPricing {
        price_per_kwh: 18.5,
        open_ports: 1,
    };
    let stops = simulate(1000.0, 312.0, 0.8, &SimulateOptions::default(), &mut pricing).unwrap();

    assert!(!stops.is_empty());
    let usable = 312.0 * 0.7;
    for stop in &stops {
        assert!(stop.leg_distance_km <= usable + 1e-9, "leg {} too long", stop.leg_distance_km);
    }
    for pair in stops.windows(2) {
        assert!(pair[1].cumulative_distance_km > pair[0].cumulative_distance_km);
    }

    // The remaining distance after the last stop is covered by a recharged battery
    let last = stops.last().unwrap();
    assert!(1000.0 - last.cumulative_distance_km <= 312.0 * 0.8 + 0.5);
}

#[test]
fn zero_distance_trip_has_no_stops() {
    let planner = TripPlanner::default();
    let plan = planner
        .plan(&trip(mumbai(), mumbai(), "Tata Nexon EV", 312.0, 5))
        .unwrap();

    assert!(plan.is_non_stop());
    assert_eq!(plan.total_distance_km, 0.0);
    assert_eq!(plan.estimated_duration_label, "0h 0m");
}

// ============================================================================
// Trip planning
// ============================================================================

#[test]
fn short_trip_is_non_stop() {
    let planner = TripPlanner::default();
    let plan = planner
        .plan(&trip(mumbai(), pune(), "Tesla Model 3", 450.0, 80))
        .unwrap();

    assert!(plan.is_non_stop());
    assert_eq!(plan.total_distance_km, 144.0);
    assert_eq!(plan.estimated_duration_label, "2h 24m");
    assert_eq!(plan.total_charging_minutes, 0);
    assert_eq!(plan.estimated_cost, 216.0);
}

#[test]
fn mumbai_to_delhi_in_a_nexon() {
    let planner = TripPlanner::default();
    let plan = planner
        .plan_by_names(&IndianCities, &EvModels, "Mumbai", "Delhi", "Tata Nexon EV", 80)
        .unwrap();

    assert_eq!(plan.total_distance_km, 1384.0);
    let cumulative: Vec<f64> = plan.stops.iter().map(|stop| stop.cumulative_distance_km).collect();
    assert_eq!(cumulative, vec![218.0, 437.0, 655.0, 874.0, 1092.0, 1310.0]);
    assert_eq!(plan.total_charging_minutes, 240);
    assert_eq!(plan.estimated_duration_label, "29h 4m");
    assert_eq!(plan.estimated_cost, 2076.0);
    assert_eq!(plan.vehicle_model, "Tata Nexon EV");
}

#[test]
fn plans_are_reproducible() {
    let planner = TripPlanner::default();
    let request = trip(mumbai(), delhi(), "Tata Nexon EV", 312.0, 80);

    let first = planner.plan(&request).unwrap();
    let second = planner.plan(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn pricing_seed_changes_prices_not_positions() {
    let request = trip(mumbai(), delhi(), "Tata Nexon EV", 312.0, 80);
    let a = TripPlanner::default().plan(&request).unwrap();
    let b = TripPlanner::new(PlannerConfig {
        pricing_seed: 1234,
        ..PlannerConfig::default()
    })
    .plan(&request)
    .unwrap();

    let positions = |plan: &ev_trip_planner::TripPlan| {
        plan.stops.iter().map(|stop| stop.cumulative_distance_km).collect::<Vec<_>>()
    };
    assert_eq!(positions(&a), positions(&b));
}

#[test]
fn batch_matches_sequential() {
    let planner = TripPlanner::default();
    let requests = vec![
        trip(mumbai(), delhi(), "Tata Nexon EV", 312.0, 80),
        trip(mumbai(), pune(), "Tesla Model 3", 450.0, 80),
        trip(delhi(), pune(), "Kia EV6", 500.0, 100),
        trip(delhi(), mumbai(), "MG ZS EV", 419.0, 5),
    ];

    let batch = planner.plan_batch(&requests);
    assert_eq!(batch.len(), requests.len());

    for (request, result) in requests.iter().zip(batch) {
        match (planner.plan(request), result) {
            (Ok(expected), Ok(actual)) => assert_eq!(expected, actual),
            (Err(_), Err(err)) => assert!(matches!(err, PlanError::InsufficientRange { .. })),
            (expected, actual) => panic!("batch diverged: {:?} vs {:?}", expected, actual),
        }
    }
}

#[test]
fn unknown_names_are_not_found() {
    let planner = TripPlanner::default();

    let err = planner
        .plan_by_names(&IndianCities, &EvModels, "Mumbai", "Goa", "Kia EV6", 80)
        .unwrap_err();
    assert!(matches!(err, PlanError::NotFound { kind: LookupKind::Location, .. }));

    let err = planner
        .plan_by_names(&IndianCities, &EvModels, "Mumbai", "Delhi", "Model T", 80)
        .unwrap_err();
    assert!(matches!(err, PlanError::NotFound { kind: LookupKind::Vehicle, .. }));
}

#[test]
fn nearly_empty_battery_is_insufficient() {
    let planner = TripPlanner::default();
    let err = planner
        .plan(&trip(mumbai(), delhi(), "Tata Nexon EV", 312.0, 10))
        .unwrap_err();
    assert!(matches!(err, PlanError::InsufficientRange { .. }));
}

#[test]
fn misconfigured_margins_are_rejected() {
    let planner = TripPlanner::new(PlannerConfig {
        simulate: SimulateOptions {
            safety_margin_fraction: 0.5,
            recharge_target_fraction: 0.4,
            ..SimulateOptions::default()
        },
        ..PlannerConfig::default()
    });

    let err = planner
        .plan(&trip(mumbai(), delhi(), "Tata Nexon EV", 312.0, 80))
        .unwrap_err();
    assert!(matches!(err, PlanError::InvalidConfiguration(_)));
}

// ============================================================================
// Map assist
// ============================================================================

#[test]
fn pit_stop_uses_station_nearest_to_start() {
    let planner = TripPlanner::default();
    let stations = highway_stations();

    let route = planner.pit_stop(&mumbai(), &delhi(), &stations).unwrap();
    assert_eq!(route.station.name, "Thane Ghodbunder Road");
    assert!((route.distance_to_station_km - 20.2).abs() < 0.5);
    assert_eq!(route.waypoints()[2], delhi().point);

    // Heading the other way ignores the station right next to Delhi's destination side
    let route = planner.pit_stop(&pune(), &delhi(), &stations).unwrap();
    assert_eq!(route.station.name, "Lonavala Expressway Plaza");
}

#[test]
fn pit_stop_available_only() {
    let bengaluru = location("Bengaluru", 12.9716, 77.5946);
    let stations = highway_stations();

    let any = TripPlanner::default().pit_stop(&bengaluru, &mumbai(), &stations).unwrap();
    assert_eq!(any.station.name, "Krishnagiri Junction");

    let planner = TripPlanner::new(PlannerConfig {
        available_stations_only: true,
        ..PlannerConfig::default()
    });
    let open = planner.pit_stop(&bengaluru, &mumbai(), &stations).unwrap();
    assert_eq!(open.station.name, "Lonavala Expressway Plaza");
}

#[test]
fn pit_stop_without_stations_is_not_found() {
    let planner = TripPlanner::default();
    let err = planner.pit_stop(&mumbai(), &delhi(), &[]).unwrap_err();
    assert!(matches!(err, PlanError::NotFound { kind: LookupKind::Station, .. }));

    let err = planner
        .pit_stop_by_names(&IndianCities, &Vec::<ev_trip_planner::Station>::new(), "Mumbai", "Delhi")
        .unwrap_err();
    assert!(matches!(err, PlanError::NotFound { kind: LookupKind::Station, .. }));
}

#[test]
fn pit_stop_by_names_reads_registry_snapshot() {
    let planner = TripPlanner::default();
    let stations = highway_stations();

    let route = planner
        .pit_stop_by_names(&IndianCities, &stations, "Delhi", "Jaipur")
        .unwrap();
    assert_eq!(route.station.name, "Gurugram Toll");
    assert_eq!(route.end.name, "Jaipur");
}
