use crate::{error::Error, vessel::VesselClass};
use debugging::session::debug_session::{Backtrace, DebugSession, LogLevel};
use std::{sync::Once, time::Duration};
use testing::stuff::max_test_duration::TestDuration;
//
//
static INIT: Once = Once::new();
///
/// Once called initialisation.
fn init_once() {
    //
    // Implement your initialisation code to be called only once for current test file.
    INIT.call_once(|| {})
}
///
/// Returns:
///  - ...
#[allow(clippy::unused_unit)]
fn init_each() -> () {}
///
/// Resolving the class from its master data string.
#[test]
fn vessel_class_resolve() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = "vessel_class_resolve";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let test_data = [
        // 0
        ("marine", VesselClass::Marine),
        ("river", VesselClass::River),
        ("barge", VesselClass::Barge),
    ];
    for (step, (raw, target)) in test_data.into_iter().enumerate() {
        let result = VesselClass::resolve(raw)
            .unwrap_or_else(|err| panic!("step={} | Failed resolving '{}': {}", step, raw, err));
        assert_eq!(
            result, target,
            "step={} raw='{}' target={:?} result={:?}",
            step, raw, target, result
        );
        assert_eq!(
            result.to_string(),
            raw,
            "step={} raw='{}' display='{}'",
            step,
            raw,
            result
        );
    }
    test_duration.exit();
}
///
/// A class out of the supported set is rejected, not defaulted.
#[test]
fn vessel_class_unknown() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = "vessel_class_unknown";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let test_data = ["", "hovercraft", "Marine", "MARINE"];
    for (step, raw) in test_data.into_iter().enumerate() {
        let result = VesselClass::resolve(raw);
        match result {
            Err(Error::UnknownVesselClass { stage, class }) => {
                assert_eq!(stage, "VesselClass.resolve", "step={} stage={}", step, stage);
                assert_eq!(class, raw, "step={} class='{}'", step, class);
            }
            other => panic!(
                "step={} | Expected UnknownVesselClass for '{}', got {:?}",
                step, raw, other
            ),
        }
    }
    test_duration.exit();
}
