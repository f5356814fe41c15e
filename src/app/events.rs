//! Outbound application events.
//!
//! The [`LightingService`](super::service::LightingService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them — in this firmware they go to the
//! serial log.

use crate::fsm::context::LineLevel;
use crate::fsm::{AmbientLevel, HeadlightMode};

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started in the power-on state.
    Started,

    /// Engine run state committed a change on a confirmed ignition release.
    EngineChanged { running: bool },

    /// The mode dial classification moved.
    ModeChanged {
        from: HeadlightMode,
        to: HeadlightMode,
    },

    /// The ambient light classification moved.
    AmbientChanged { from: AmbientLevel, to: AmbientLevel },

    /// One or both beam output levels changed.
    BeamChanged { low: LineLevel, high: LineLevel },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    pub engine_running: bool,
    pub mode: HeadlightMode,
    pub ambient: AmbientLevel,
    pub dial_position: f32,
    pub ambient_light: f32,
    pub low_beam: LineLevel,
    pub high_beam: LineLevel,
}
