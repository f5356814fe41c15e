//! Shared mutable context threaded through every FSM update.
//!
//! `LightingContext` is the single struct the state machines read from and
//! write to.  It holds the latest input snapshot, the commanded output
//! levels, the three machine states, the two millisecond accumulators, and
//! the configuration.  Think of it as the "blackboard" in a blackboard
//! architecture: the machines own no state of their own.

use crate::config::ControlConfig;
use crate::fsm::{AmbientLevel, HeadlightMode, IgnitionState};

// ---------------------------------------------------------------------------
// Input snapshot (read-only to the machines; written by the input hub)
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every input in the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Headlight mode dial position, normalized to 0.0 – 1.0.
    pub dial_position: f32,
    /// Ambient light level from the photoresistor, normalized to 0.0 – 1.0.
    pub ambient_light: f32,
    /// Ignition button level. `true` = pressed.
    pub ignition_pressed: bool,
    /// Driver-seat occupancy switch. `true` = occupied.
    pub seat_occupied: bool,
    /// High-beam rocker switch. `true` = high beam requested.
    pub high_beam_requested: bool,
}

// ---------------------------------------------------------------------------
// Output commands (written by the machines; applied by the service)
// ---------------------------------------------------------------------------

/// Commanded level on a digital output line.
///
/// This is deliberately not a `bool`: input switch levels and lamp-lit
/// status both live in boolean-shaped domains, and conflating them with the
/// commanded line level is how polarity bugs happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLevel {
    Off,
    On,
}

impl LineLevel {
    /// `true` when the line is commanded to its ON level.
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// Levels commanded on the three output lines. Last write wins; the service
/// applies the final values to the pins once per tick.
///
/// The two beam lines drive active-low lamp relays: commanding `On` leaves
/// the lamp dark and `Off` lights it.  The engine indicator is active-high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputCommands {
    pub low_beam: LineLevel,
    pub high_beam: LineLevel,
    pub engine_indicator: LineLevel,
}

impl Default for OutputCommands {
    fn default() -> Self {
        // Power-on levels: both lamps dark, engine indicator off.
        Self {
            low_beam: LineLevel::On,
            high_beam: LineLevel::On,
            engine_indicator: LineLevel::Off,
        }
    }
}

// ---------------------------------------------------------------------------
// LightingContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state-machine update function.
pub struct LightingContext {
    // -- Inputs / outputs --
    /// Latest input readings.  Updated before each control tick.
    pub inputs: InputSnapshot,
    /// Output levels to be applied after the control tick.
    pub outputs: OutputCommands,

    // -- Machine states --
    pub ignition: IgnitionState,
    pub mode: HeadlightMode,
    pub ambient: AmbientLevel,

    // -- Timers --
    /// Milliseconds of accumulated tick time since the last ignition edge.
    pub debounce_elapsed_ms: u32,
    /// Milliseconds of accumulated engine-running tick time since the
    /// ambient machine last resolved out of `Between`.
    pub ambient_elapsed_ms: u32,

    // -- Configuration --
    pub config: ControlConfig,
}

impl LightingContext {
    /// Create a new context in the power-on state.
    pub fn new(config: ControlConfig) -> Self {
        Self {
            inputs: InputSnapshot::default(),
            outputs: OutputCommands::default(),
            ignition: IgnitionState::Off,
            mode: HeadlightMode::Off,
            ambient: AmbientLevel::Day,
            debounce_elapsed_ms: 0,
            ambient_elapsed_ms: 0,
            config,
        }
    }

    /// Whether the engine is running. The run state is realized as the
    /// indicator output level: RUNNING ⇔ indicator commanded ON.
    pub fn engine_running(&self) -> bool {
        self.outputs.engine_indicator.is_on()
    }

    /// Advance the millisecond accumulators by one tick period.
    ///
    /// Called at the top of every control tick, before any machine update.
    /// The debounce timer always runs; the ambient timer only accumulates
    /// while the engine is running.
    pub fn advance_timers(&mut self) {
        let tick = self.config.tick_interval_ms;
        self.debounce_elapsed_ms = self.debounce_elapsed_ms.saturating_add(tick);
        if self.engine_running() {
            self.ambient_elapsed_ms = self.ambient_elapsed_ms.saturating_add(tick);
        }
    }
}
