//! Application service — the hexagonal core.
//!
//! [`LightingService`] owns the [`LightingContext`] and runs the fixed
//! per-tick pipeline over it.  It exposes a clean, hardware-agnostic API.
//! All I/O flows through port traits injected at call sites, making the
//! entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌───────────────────────────────┐ ──▶ EventSink
//!                 │       LightingService          │
//! ActuatorPort ◀──│  ignition · mode/ambient/beams │
//!                 └───────────────────────────────┘
//! ```

use log::info;

use crate::config::ControlConfig;
use crate::fsm::context::{LightingContext, OutputCommands};
use crate::fsm::{beams, ignition, AmbientLevel, HeadlightMode, IgnitionState};

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// LightingService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct LightingService {
    ctx: LightingContext,
    tick_count: u64,
}

impl LightingService {
    /// Construct the service from configuration, in the power-on state.
    pub fn new(config: ControlConfig) -> Self {
        Self {
            ctx: LightingContext::new(config),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the power-on state.  Call once before the first `tick()`.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!(
            "LightingService started (engine off, mode {:?}, ambient {:?})",
            self.ctx.mode, self.ctx.ambient
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: read inputs → advance timers → ignition
    /// → low beam (mode + ambient inside) → high beam → apply outputs.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while keeping
    /// the port boundary explicit.  Evaluation order is a contract: the
    /// mode and ambient machines must see the engine state committed by
    /// this tick's ignition update.
    pub fn tick(&mut self, hw: &mut (impl SensorPort + ActuatorPort), sink: &mut impl EventSink) {
        self.tick_count += 1;

        let prev_engine = self.ctx.engine_running();
        let prev_mode = self.ctx.mode;
        let prev_ambient = self.ctx.ambient;
        let prev_outputs = self.ctx.outputs;

        // 1. Read inputs via SensorPort
        self.ctx.inputs = hw.read_inputs();

        // 2. Fixed per-tick increments (debounce always, ambient while running)
        self.ctx.advance_timers();

        // 3. The machines, in contract order
        ignition::update(&mut self.ctx);
        beams::update_low_beam(&mut self.ctx);
        beams::update_high_beam(&mut self.ctx);

        // 4. Apply output levels via ActuatorPort
        self.apply_outputs(hw);

        // 5. Emit change events
        if self.ctx.engine_running() != prev_engine {
            sink.emit(&AppEvent::EngineChanged {
                running: self.ctx.engine_running(),
            });
        }
        if self.ctx.mode != prev_mode {
            sink.emit(&AppEvent::ModeChanged {
                from: prev_mode,
                to: self.ctx.mode,
            });
        }
        if self.ctx.ambient != prev_ambient {
            sink.emit(&AppEvent::AmbientChanged {
                from: prev_ambient,
                to: self.ctx.ambient,
            });
        }
        if self.ctx.outputs.low_beam != prev_outputs.low_beam
            || self.ctx.outputs.high_beam != prev_outputs.high_beam
        {
            sink.emit(&AppEvent::BeamChanged {
                low: self.ctx.outputs.low_beam,
                high: self.ctx.outputs.high_beam,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            engine_running: self.ctx.engine_running(),
            mode: self.ctx.mode,
            ambient: self.ctx.ambient,
            dial_position: self.ctx.inputs.dial_position,
            ambient_light: self.ctx.inputs.ambient_light,
            low_beam: self.ctx.outputs.low_beam,
            high_beam: self.ctx.outputs.high_beam,
        }
    }

    /// Whether the engine is currently running.
    pub fn engine_running(&self) -> bool {
        self.ctx.engine_running()
    }

    /// Current ignition debounce state.
    pub fn ignition_state(&self) -> IgnitionState {
        self.ctx.ignition
    }

    /// Current headlight mode classification.
    pub fn headlight_mode(&self) -> HeadlightMode {
        self.ctx.mode
    }

    /// Current ambient light classification.
    pub fn ambient_level(&self) -> AmbientLevel {
        self.ctx.ambient
    }

    /// Levels currently commanded on the output lines.
    pub fn outputs(&self) -> OutputCommands {
        self.ctx.outputs
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// Push the commanded levels out through the actuator port.
    fn apply_outputs(&self, hw: &mut impl ActuatorPort) {
        let out = &self.ctx.outputs;
        hw.set_low_beam(out.low_beam);
        hw.set_high_beam(out.high_beam);
        hw.set_engine_indicator(out.engine_indicator);
    }
}
