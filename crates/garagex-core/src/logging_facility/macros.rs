//! Operation boundary macros
//!
//! Each public engine operation logs one `start` and then exactly one `end`
//! or `end_error`. All three expand to `__garagex_op_event!`, which stamps
//! the emitting module, the operation name and the boundary. Callers need
//! `garagex-core-types` and `tracing` as dependencies.

#[doc(hidden)]
#[macro_export]
macro_rules! __garagex_op_event {
    ($level:expr, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::event!(
            $level,
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation, with its inputs as fields
///
/// ```
/// # use garagex_core::log_op_start;
/// log_op_start!("park_vehicle_in_garage", vehicle = "bus", garage_id = 1);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__garagex_op_event!(
            tracing::Level::INFO,
            $op,
            garagex_core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use garagex_core::log_op_end;
/// log_op_end!("park_vehicle_in_spot", duration_ms = 3, spot_count = 5);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__garagex_op_event!(
            tracing::Level::INFO,
            $op,
            garagex_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log the failed end of an operation
///
/// `$err` is anything convertible into `ExError`; its kind, code, entity
/// and message become fields.
///
/// ```
/// # use garagex_core::{log_op_error, errors::GarageError};
/// log_op_error!("spot_get", GarageError::SpotNotFound { spot_id: 9 }, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = ::core::convert::Into::into($err);
        $crate::__garagex_op_event!(
            tracing::Level::ERROR,
            $op,
            garagex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_entity = ex_err.entity_id(),
            message = ex_err.message()
            $(, $($field)*)?
        )
    }};
}
