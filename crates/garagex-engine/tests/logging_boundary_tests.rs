// Every engine operation logs exactly one start and one end or end_error

mod common;

use common::{create_garage, setup_test_db};
use garagex_core::logging_facility::test_capture::{init_test_capture, Boundary};
use garagex_core::model::VehicleType;
use garagex_engine::{garage_get, park_vehicle_in_garage, park_vehicle_in_spot, spot_get};

#[test]
fn test_create_and_park_log_balanced_boundaries() {
    let capture = init_test_capture();
    capture.clear();

    let mut conn = setup_test_db();
    let garage = create_garage(&mut conn, 1, 3, 1);
    assert_eq!(capture.assert_op_boundaries("garage_create"), vec![Boundary::End]);

    let spot_id = park_vehicle_in_garage(&mut conn, VehicleType::Car, garage.id).unwrap();
    park_vehicle_in_garage(&mut conn, VehicleType::Car, garage.id).unwrap();
    park_vehicle_in_garage(&mut conn, VehicleType::Car, garage.id).unwrap_err();
    assert_eq!(
        capture.assert_op_boundaries("park_vehicle_in_garage"),
        vec![Boundary::End, Boundary::End, Boundary::EndError]
    );

    let events = capture.op_events("park_vehicle_in_garage");
    assert_eq!(events[0].vehicle, Some(VehicleType::Car));
    assert_eq!(events[0].garage_id, Some(garage.id));
    assert_eq!(events[1].spot_id, Some(spot_id));

    let failure = capture.last_error("park_vehicle_in_garage").unwrap();
    assert_eq!(failure.err_code.as_deref(), Some("ERR_NO_VACANT_SPOT"));
}

#[test]
fn test_failed_queries_log_error_code() {
    let capture = init_test_capture();
    capture.clear();

    let mut conn = setup_test_db();
    create_garage(&mut conn, 1, 1, 1);

    let err = spot_get(&conn, -1).unwrap_err();
    assert_eq!(capture.assert_op_boundaries("spot_get"), vec![Boundary::EndError]);
    let logged = capture.last_error("spot_get").unwrap();
    assert_eq!(logged.err_code.as_deref(), Some(err.code()));
    assert_eq!(logged.spot_id, Some(-1));

    garage_get(&conn, 99).unwrap_err();
    let logged = capture.last_error("garage_get").unwrap();
    assert_eq!(logged.err_code.as_deref(), Some("ERR_DATABASE"));
    assert_eq!(logged.fields.get("err_entity").map(String::as_str), Some("99"));

    park_vehicle_in_spot(&mut conn, VehicleType::Bus, 1).unwrap_err();
    assert_eq!(
        capture.assert_op_boundaries("park_vehicle_in_spot"),
        vec![Boundary::EndError]
    );
}
