//! Mock hardware adapter for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real GPIO registers, and lets tests set the
//! input snapshot the next tick will read.

use autolamp::app::events::AppEvent;
use autolamp::app::ports::{ActuatorPort, EventSink, SensorPort};
use autolamp::fsm::context::{InputSnapshot, LineLevel};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    LowBeam(LineLevel),
    HighBeam(LineLevel),
    EngineIndicator(LineLevel),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Snapshot returned by the next `read_inputs()` call.
    pub inputs: InputSnapshot,
    pub calls: Vec<ActuatorCall>,
    pub low_beam: LineLevel,
    pub high_beam: LineLevel,
    pub engine_indicator: LineLevel,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            inputs: InputSnapshot::default(),
            calls: Vec::new(),
            // Power-on line levels: lamps dark, indicator off.
            low_beam: LineLevel::On,
            high_beam: LineLevel::On,
            engine_indicator: LineLevel::Off,
        }
    }

    pub fn set_dial(&mut self, position: f32) {
        self.inputs.dial_position = position;
    }

    pub fn set_light(&mut self, level: f32) {
        self.inputs.ambient_light = level;
    }

    pub fn set_ignition(&mut self, pressed: bool) {
        self.inputs.ignition_pressed = pressed;
    }

    pub fn set_seat(&mut self, occupied: bool) {
        self.inputs.seat_occupied = occupied;
    }

    pub fn set_high_beam_switch(&mut self, requested: bool) {
        self.inputs.high_beam_requested = requested;
    }

    /// `true` when the low-beam lamp is physically lit (active-low line).
    pub fn low_beam_lit(&self) -> bool {
        self.low_beam == LineLevel::Off
    }

    /// Number of times the low-beam line changed level across history.
    pub fn low_beam_edges(&self) -> usize {
        let mut edges = 0;
        let mut last = None;
        for call in &self.calls {
            if let ActuatorCall::LowBeam(level) = call {
                if last.is_some_and(|prev| prev != *level) {
                    edges += 1;
                }
                last = Some(*level);
            }
        }
        edges
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_inputs(&mut self) -> InputSnapshot {
        self.inputs
    }
}

impl ActuatorPort for MockHardware {
    fn set_low_beam(&mut self, level: LineLevel) {
        self.low_beam = level;
        self.calls.push(ActuatorCall::LowBeam(level));
    }

    fn set_high_beam(&mut self, level: LineLevel) {
        self.high_beam = level;
        self.calls.push(ActuatorCall::HighBeam(level));
    }

    fn set_engine_indicator(&mut self, level: LineLevel) {
        self.engine_indicator = level;
        self.calls.push(ActuatorCall::EngineIndicator(level));
    }
}

// ── LogSink ──────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<String>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(format!("{:?}", event));
    }
}
