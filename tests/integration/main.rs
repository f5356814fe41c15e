//! Host-side integration test binary.
//!
//! Drives the full LightingService → FSM → actuator pipeline against mock
//! adapters; no real hardware involved.

mod lighting_tests;
mod mock_hw;
