// Integration tests for first-fit parking across a garage
// Scenarios A-D mirror the garage self-check

mod common;

use common::{create_garage, seeded_rng, setup_test_db, vacant_of_type};
use garagex_core::allocation::BUS_SPAN;
use garagex_core::errors::ExErrorKind;
use garagex_core::model::{GarageDimensions, SpotType, VehicleType};
use garagex_engine::{garage_create, garage_get, park_vehicle_in_garage, spot_get};
use proptest::prelude::*;

#[test]
fn test_scenario_a_motorcycles_fill_every_spot() {
    let mut conn = setup_test_db();
    let garage = create_garage(&mut conn, 1, 3, 1);

    for _ in 0..3 {
        park_vehicle_in_garage(&mut conn, VehicleType::Motorcycle, garage.id).unwrap();
    }
    let err = park_vehicle_in_garage(&mut conn, VehicleType::Motorcycle, garage.id).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NoVacantSpot);

    let info = garage_get(&conn, garage.id).unwrap();
    assert_eq!(info.filled_spot_ids.len(), 3);
    assert!(info.vacant_spot_ids.is_empty());
}

#[test]
fn test_scenario_b_cars_skip_motorcycle_spot() {
    let mut conn = setup_test_db();
    let garage = create_garage(&mut conn, 1, 3, 1);

    for _ in 0..2 {
        let spot_id = park_vehicle_in_garage(&mut conn, VehicleType::Car, garage.id).unwrap();
        let spot = spot_get(&conn, spot_id).unwrap();
        assert_ne!(spot.spot_type, Some(SpotType::Motorcycle));
        assert_eq!(spot.occupant, Some(VehicleType::Car));
    }
    let err = park_vehicle_in_garage(&mut conn, VehicleType::Car, garage.id).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NoVacantSpot);

    let info = garage_get(&conn, garage.id).unwrap();
    assert_eq!(info.filled_spot_ids.len(), 2);
    let remaining = spot_get(&conn, info.vacant_spot_ids[0]).unwrap();
    assert_eq!(remaining.spot_type, Some(SpotType::Motorcycle));
}

#[test]
fn test_scenario_c_one_bus_fits_not_two() {
    let mut conn = setup_test_db();
    let garage = create_garage(&mut conn, 1, 3, 9);

    let anchor = park_vehicle_in_garage(&mut conn, VehicleType::Bus, garage.id).unwrap();
    let err = park_vehicle_in_garage(&mut conn, VehicleType::Bus, garage.id).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NoVacantSpot);

    let info = garage_get(&conn, garage.id).unwrap();
    assert_eq!(info.filled_spot_ids.len(), BUS_SPAN);

    let anchor_spot = spot_get(&conn, anchor).unwrap();
    assert_eq!(anchor_spot.spot_num, 0);
    assert_eq!(anchor_spot.spot_type, Some(SpotType::Large));
}

#[test]
fn test_scenario_d_overflow_routes_to_next_level() {
    let mut conn = setup_test_db();
    let garage = create_garage(&mut conn, 2, 3, 5);

    let first_bus = park_vehicle_in_garage(&mut conn, VehicleType::Bus, garage.id).unwrap();
    assert_eq!(spot_get(&conn, first_bus).unwrap().level, 0);

    let second_bus = park_vehicle_in_garage(&mut conn, VehicleType::Bus, garage.id).unwrap();
    assert_eq!(spot_get(&conn, second_bus).unwrap().level, 1);

    for _ in 0..5 {
        let car = park_vehicle_in_garage(&mut conn, VehicleType::Car, garage.id).unwrap();
        assert_eq!(spot_get(&conn, car).unwrap().level, 0);
    }
    for _ in 0..5 {
        let bike = park_vehicle_in_garage(&mut conn, VehicleType::Motorcycle, garage.id).unwrap();
        assert_eq!(spot_get(&conn, bike).unwrap().level, 0);
    }
    let sixth = park_vehicle_in_garage(&mut conn, VehicleType::Motorcycle, garage.id).unwrap();
    assert_eq!(spot_get(&conn, sixth).unwrap().level, 1);

    let info = garage_get(&conn, garage.id).unwrap();
    assert_eq!(info.filled_spot_ids.len(), 21);
}

#[test]
fn test_first_fit_order_is_level_row_spot() {
    let mut conn = setup_test_db();
    let garage = create_garage(&mut conn, 2, 2, 3);

    let mut previous = None;
    while let Ok(spot_id) = park_vehicle_in_garage(&mut conn, VehicleType::Motorcycle, garage.id) {
        let spot = spot_get(&conn, spot_id).unwrap();
        let position = (spot.level, spot.row, spot.spot_num);
        if let Some(prev) = previous {
            assert!(prev < position);
        }
        previous = Some(position);
    }
    assert_eq!(garage_get(&conn, garage.id).unwrap().filled_spot_ids.len(), 12);
}

#[test]
fn test_bus_skips_broken_run() {
    let mut conn = setup_test_db();
    let garage = create_garage(&mut conn, 1, 3, 10);
    let large = vacant_of_type(&conn, garage.id, SpotType::Large);

    // Occupy spot_num 2 of the large row: 0 1 X 3 4 5 6 7 8 9
    garagex_engine::park_vehicle_in_spot(&mut conn, VehicleType::Car, large[2].id).unwrap();

    let anchor = park_vehicle_in_garage(&mut conn, VehicleType::Bus, garage.id).unwrap();
    assert_eq!(spot_get(&conn, anchor).unwrap().spot_num, 3);

    for offset in 0..BUS_SPAN {
        let spot = spot_get(&conn, large[3 + offset].id).unwrap();
        assert_eq!(spot.occupant, Some(VehicleType::Bus));
    }
    for free in [0, 1, 8, 9] {
        assert!(spot_get(&conn, large[free].id).unwrap().is_vacant());
    }
}

#[test]
fn test_parking_only_considers_requested_garage() {
    let mut conn = setup_test_db();
    let full = create_garage(&mut conn, 1, 3, 1);
    let other = create_garage(&mut conn, 1, 3, 1);

    for _ in 0..3 {
        park_vehicle_in_garage(&mut conn, VehicleType::Motorcycle, full.id).unwrap();
    }
    let err = park_vehicle_in_garage(&mut conn, VehicleType::Motorcycle, full.id).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NoVacantSpot);

    let spot_id = park_vehicle_in_garage(&mut conn, VehicleType::Motorcycle, other.id).unwrap();
    assert_eq!(spot_get(&conn, spot_id).unwrap().garage_id, other.id);
}

#[test]
fn test_unknown_garage_fails_before_scan() {
    let mut conn = setup_test_db();
    let err = park_vehicle_in_garage(&mut conn, VehicleType::Car, 77).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Database);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_every_bus_occupies_a_full_large_run(
        levels in 1u32..3,
        rows in 1u32..5,
        spots in 1u32..13,
        seed in any::<u64>(),
    ) {
        let mut conn = setup_test_db();
        let garage = garage_create(
            &mut conn,
            GarageDimensions::new(levels, rows, spots),
            &mut seeded_rng(seed),
        )
        .unwrap();

        let mut buses = 0;
        while let Ok(anchor_id) = park_vehicle_in_garage(&mut conn, VehicleType::Bus, garage.id) {
            buses += 1;
            let anchor = spot_get(&conn, anchor_id).unwrap();
            let run: Vec<_> = (0..BUS_SPAN as u32)
                .map(|offset| {
                    let id: i64 = conn
                        .query_row(
                            "SELECT id FROM parking_spots
                             WHERE garage_id = ?1 AND level = ?2 AND row = ?3 AND spot_num = ?4",
                            rusqlite::params![garage.id, anchor.level, anchor.row, anchor.spot_num + offset],
                            |row| row.get(0),
                        )
                        .unwrap();
                    spot_get(&conn, id).unwrap()
                })
                .collect();
            for spot in run {
                prop_assert_eq!(spot.spot_type, Some(SpotType::Large));
                prop_assert_eq!(spot.occupant, Some(VehicleType::Bus));
            }
        }

        let info = garage_get(&conn, garage.id).unwrap();
        prop_assert_eq!(info.filled_spot_ids.len(), buses * BUS_SPAN);
    }
}
