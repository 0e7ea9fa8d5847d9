//! Integration tests for the Engine logging hub
//!
//! These tests go through the public API only. No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use nova_3d_engine::nova3d::{Engine, Error, Renderer};
use nova_3d_engine::nova3d::camera::Camera;
use nova_3d_engine::nova3d::log::{LogEntry, LogSeverity, Logger};
use nova_3d_engine::nova3d::render::{ForwardRenderer, RendererSettings, SceneState};
use nova_3d_engine::{engine_error, engine_warn};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger_receives_all_severities() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Trace, "test", "Trace message".to_string());
    Engine::log(LogSeverity::Debug, "test", "Debug message".to_string());
    Engine::log(LogSeverity::Info, "test", "Info message".to_string());
    Engine::log(LogSeverity::Warn, "test", "Warn message".to_string());
    Engine::log(LogSeverity::Error, "test", "Error message".to_string());

    {
        let captured = entries.lock().unwrap();
        let severities: Vec<LogSeverity> = captured.iter().map(|e| e.severity).collect();
        assert_eq!(
            severities,
            vec![
                LogSeverity::Trace,
                LogSeverity::Debug,
                LogSeverity::Info,
                LogSeverity::Warn,
                LogSeverity::Error,
            ]
        );
        assert!(captured.iter().all(|e| e.file.is_none() && e.source == "test"));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_exported_macros() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    engine_warn!("app::Editor", "{} lights dropped", 8);
    engine_error!("app::Editor", "Backbuffer lost");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);

        assert_eq!(captured[0].severity, LogSeverity::Warn);
        assert_eq!(captured[0].message, "8 lights dropped");
        assert_eq!(captured[0].line, None);

        assert_eq!(captured[1].severity, LogSeverity::Error);
        assert_eq!(captured[1].source, "app::Editor");
        assert!(captured[1].file.unwrap().ends_with("logging_integration_tests.rs"));
        assert!(captured[1].line.is_some());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_protocol_violation_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut renderer = ForwardRenderer::new(RendererSettings::default());
    let result = renderer.begin_scene(&Camera::default());

    match result {
        Err(Error::ProtocolViolation { operation, state }) => {
            assert_eq!(operation, "begin_scene");
            assert_eq!(state, SceneState::Uninitialized);
        }
        other => panic!("expected a protocol violation, got {:?}", other),
    }
    assert_eq!(renderer.state(), SceneState::Uninitialized);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert!(captured[0].message.contains("begin_scene"));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test", "Message 1".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);

    Engine::reset_logger();

    // Goes to the default logger
    Engine::log(LogSeverity::Info, "test", "Message 2".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);
}
