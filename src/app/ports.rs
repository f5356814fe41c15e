//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LightingService (domain)
//! ```
//!
//! Driven adapters (input hub, output lines, event sinks) implement these
//! traits.  The [`LightingService`](super::service::LightingService) consumes
//! them via generics, so the domain core never touches hardware directly.
//!
//! All three ports are infallible by contract: analog reads are defined for
//! the whole normalized 0.0 – 1.0 range, switch reads are plain levels, and
//! output writes are last-write-wins register stores.  There is no fault
//! detection layer in this controller.

use crate::fsm::context::{InputSnapshot, LineLevel};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain the tick's inputs.
pub trait SensorPort {
    /// Read every input and return a unified snapshot.
    fn read_inputs(&mut self) -> InputSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the output lines.
pub trait ActuatorPort {
    /// Command the low-beam line level.
    fn set_low_beam(&mut self, level: LineLevel);

    /// Command the high-beam line level.
    fn set_high_beam(&mut self, level: LineLevel);

    /// Command the engine-run indicator level.
    fn set_engine_indicator(&mut self, level: LineLevel);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log in
/// production, a capture buffer in tests).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
