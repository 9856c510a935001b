#![allow(dead_code)]

//! Shared fixtures for engine integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use marquee::{EventKind, Handler, Options, SelectEngine, SelectEvent};
use marquee_harness::TestHost;

/// Recorded callback payloads, in dispatch order.
pub type EventLog = Rc<RefCell<Vec<SelectEvent>>>;

/// A recording handler plus the log it writes to.
pub fn recorder() -> (EventLog, Handler) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, Box::new(move |event| sink.borrow_mut().push(event.clone())))
}

/// Count recorded events of a given kind.
pub fn count_kind(log: &EventLog, kind: EventKind) -> usize {
    log.borrow().iter().filter(|ev| ev.kind() == kind).count()
}

/// An enabled engine over `count` stacked rows (10px pitch, 8px boxes),
/// plus a handle onto the shared host state.
pub fn engine_with_rows(count: u64) -> (TestHost, SelectEngine<TestHost>) {
    engine_with_rows_and_options(count, Options::new())
}

/// Same as [`engine_with_rows`] with custom options.
pub fn engine_with_rows_and_options(
    count: u64,
    options: Options,
) -> (TestHost, SelectEngine<TestHost>) {
    let host = TestHost::with_rows(count, 10.0, 8.0);
    let handle = host.clone();
    let mut engine = SelectEngine::new(host, options).expect("container resolves");
    engine.enable();
    (handle, engine)
}
