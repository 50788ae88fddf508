//! In-memory capture of operation log events for tests
//!
//! Every event is decoded into a `CapturedEvent` with the garage fields
//! typed, and tagged with the thread that emitted it. Queries only look at
//! events from the calling thread, so tests running in parallel inside one
//! binary never see each other's operations.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::thread::ThreadId;

use garagex_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_EVENT,
    FIELD_GARAGE_ID, FIELD_OP, FIELD_SPOT_ID, FIELD_VEHICLE,
};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::model::VehicleType;

/// Which edge of an operation an event marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
    EndError,
}

impl Boundary {
    fn from_event_name(name: &str) -> Option<Self> {
        match name {
            EVENT_START => Some(Boundary::Start),
            EVENT_END => Some(Boundary::End),
            EVENT_END_ERROR => Some(Boundary::EndError),
            _ => None,
        }
    }
}

/// One captured log event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub thread: ThreadId,
    pub op: Option<String>,
    pub boundary: Option<Boundary>,
    pub garage_id: Option<i64>,
    pub spot_id: Option<i64>,
    pub vehicle: Option<VehicleType>,
    pub duration_ms: Option<u64>,
    pub err_code: Option<String>,
    pub message: Option<String>,
    /// Every other field, rendered as text
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    fn new(level: Level) -> Self {
        Self {
            level,
            thread: std::thread::current().id(),
            op: None,
            boundary: None,
            garage_id: None,
            spot_id: None,
            vehicle: None,
            duration_ms: None,
            err_code: None,
            message: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn is_op(&self, op: &str) -> bool {
        self.op.as_deref() == Some(op)
    }
}

struct Recorder<'a>(&'a mut CapturedEvent);

impl Visit for Recorder<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        let event = &mut *self.0;
        match field.name() {
            FIELD_OP => event.op = Some(value.to_string()),
            FIELD_EVENT => event.boundary = Boundary::from_event_name(value),
            FIELD_VEHICLE => event.vehicle = value.parse().ok(),
            FIELD_ERR_CODE => event.err_code = Some(value.to_string()),
            "message" => event.message = Some(value.to_string()),
            name => {
                event.fields.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        let event = &mut *self.0;
        match field.name() {
            FIELD_GARAGE_ID => event.garage_id = Some(value),
            FIELD_SPOT_ID => event.spot_id = Some(value),
            FIELD_DURATION_MS => event.duration_ms = u64::try_from(value).ok(),
            name => {
                event.fields.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let event = &mut *self.0;
        match field.name() {
            FIELD_GARAGE_ID => event.garage_id = i64::try_from(value).ok(),
            FIELD_SPOT_ID => event.spot_id = i64::try_from(value).ok(),
            FIELD_DURATION_MS => event.duration_ms = Some(value),
            name => {
                event.fields.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let rendered = format!("{:?}", value);
        match field.name() {
            "message" => self.0.message = Some(rendered),
            name => {
                self.0.fields.insert(name.to_string(), rendered);
            }
        }
    }
}

type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    log: EventLog,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = CapturedEvent::new(*event.metadata().level());
        event.record(&mut Recorder(&mut captured));
        if let Ok(mut log) = self.log.lock() {
            log.push(captured);
        }
    }
}

/// Handle onto the captured events of the calling thread
#[derive(Clone)]
pub struct TestCapture {
    log: EventLog,
}

impl TestCapture {
    /// Events emitted by the calling thread, oldest first
    pub fn events(&self) -> Vec<CapturedEvent> {
        let thread = std::thread::current().id();
        self.log
            .lock()
            .map(|log| log.iter().filter(|e| e.thread == thread).cloned().collect())
            .unwrap_or_default()
    }

    /// Events of one operation emitted by the calling thread
    pub fn op_events(&self, op: &str) -> Vec<CapturedEvent> {
        self.events().into_iter().filter(|e| e.is_op(op)).collect()
    }

    /// The most recent `end_error` event of an operation
    pub fn last_error(&self, op: &str) -> Option<CapturedEvent> {
        self.op_events(op)
            .into_iter()
            .rev()
            .find(|e| e.boundary == Some(Boundary::EndError))
    }

    /// Check that every call of `op` logged a `start` followed by exactly
    /// one `end` or `end_error`, and return the closing boundary per call
    ///
    /// # Panics
    ///
    /// Panics if `op` logged nothing or its boundaries do not pair up
    pub fn assert_op_boundaries(&self, op: &str) -> Vec<Boundary> {
        let boundaries: Vec<Boundary> = self
            .op_events(op)
            .iter()
            .filter_map(|e| e.boundary)
            .collect();
        assert!(!boundaries.is_empty(), "no boundary events logged for {}", op);

        boundaries
            .chunks(2)
            .map(|call| match call {
                [Boundary::Start, close @ (Boundary::End | Boundary::EndError)] => *close,
                other => panic!("unbalanced boundaries for {}: {:?}", op, other),
            })
            .collect()
    }

    /// Drop the calling thread's events
    pub fn clear(&self) {
        let thread = std::thread::current().id();
        if let Ok(mut log) = self.log.lock() {
            log.retain(|e| e.thread != thread);
        }
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (once per process)
///
/// ```
/// use garagex_core::log_op_start;
/// use garagex_core::logging_facility::test_capture::{init_test_capture, Boundary};
///
/// let capture = init_test_capture();
/// log_op_start!("garage_get", garage_id = 3);
/// let events = capture.op_events("garage_get");
/// assert_eq!(events[0].boundary, Some(Boundary::Start));
/// assert_eq!(events[0].garage_id, Some(3));
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let log = EventLog::default();
            tracing_subscriber::registry()
                .with(CaptureLayer { log: log.clone() })
                .init();
            TestCapture { log }
        })
        .clone()
}
