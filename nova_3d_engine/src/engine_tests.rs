//! Unit tests for the Engine logging hub
//!
//! The logger is process-global, so every test here is #[serial].

use crate::nova3d::Engine;
use crate::log::LogSeverity;
use crate::test_utils::CaptureLogger;
use serial_test::serial;

#[test]
#[serial]
fn test_set_logger_receives_entries() {
    let logger = CaptureLogger::new();
    Engine::set_logger(logger.clone());

    Engine::log(LogSeverity::Info, "nova3d::test", "frame 1 submitted".to_string());
    Engine::log(LogSeverity::Warn, "nova3d::test", "frame 1 late".to_string());

    assert_eq!(logger.count(LogSeverity::Info, "frame 1 submitted"), 1);
    assert_eq!(logger.count(LogSeverity::Warn, "frame 1 late"), 1);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_keeps_location() {
    let logger = CaptureLogger::new();
    Engine::set_logger(logger.clone());

    crate::engine_error!("nova3d::test", "pipeline {} failed", "postprocess");

    assert_eq!(logger.count(LogSeverity::Error, "pipeline postprocess failed"), 1);
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let logger = CaptureLogger::new();
    Engine::set_logger(logger.clone());
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "nova3d::test", "after reset".to_string());
    assert_eq!(logger.count(LogSeverity::Info, "after reset"), 0);
}

#[test]
#[serial]
fn test_macros_route_through_engine() {
    let logger = CaptureLogger::new();
    Engine::set_logger(logger.clone());

    crate::engine_trace!("nova3d::test", "t{}", 1);
    crate::engine_debug!("nova3d::test", "d{}", 2);
    crate::engine_info!("nova3d::test", "i{}", 3);
    crate::engine_warn!("nova3d::test", "w{}", 4);

    assert_eq!(logger.count(LogSeverity::Trace, "t1"), 1);
    assert_eq!(logger.count(LogSeverity::Debug, "d2"), 1);
    assert_eq!(logger.count(LogSeverity::Info, "i3"), 1);
    assert_eq!(logger.count(LogSeverity::Warn, "w4"), 1);
    Engine::reset_logger();
}
