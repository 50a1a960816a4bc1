//! Integration tests for dashboard-access
//!
//! These tests exercise the public API across modules without mocking.

pub mod access_decision_tests;
pub mod config_validation_tests;
pub mod http_gate_tests;
pub mod navigation_tests;
pub mod route_guard_tests;
