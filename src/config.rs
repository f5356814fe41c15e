//! System configuration parameters
//!
//! All tunable parameters for the AutoLamp controller. Values are fixed at
//! construction time; there is no runtime reconfiguration surface.

use serde::{Deserialize, Serialize};

/// Core control-loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    // --- Timing ---
    /// Control loop tick period (milliseconds). Timers accumulate in fixed
    /// per-tick increments of this value, not measured wall-clock deltas.
    pub tick_interval_ms: u32,
    /// Ignition button debounce window (milliseconds of accumulated tick time)
    pub debounce_ms: u32,
    /// Telemetry report interval (seconds)
    pub telemetry_interval_secs: u32,

    // --- Headlight mode dial ---
    /// Dial position below which AUTO falls back to OFF
    pub mode_low_threshold: f32,
    /// Dial position above which AUTO advances to ON
    pub mode_high_threshold: f32,
    /// Dead-band width added to the entry thresholds (OFF→AUTO, ON→AUTO)
    pub mode_hysteresis: f32,

    // --- Ambient light ---
    /// Light level above which BETWEEN is classified as DAY
    pub day_threshold: f32,
    /// Light level below which BETWEEN is classified as DUSK
    pub dusk_threshold: f32,
    /// Dead-band width for leaving DAY / DUSK
    pub ambient_hysteresis: f32,

    // --- AUTO-mode beam switching ---
    /// Milliseconds of confirmed DUSK before the low beam lights
    pub dusk_confirm_ms: u32,
    /// Milliseconds of confirmed DAY before the low beam goes dark
    pub day_confirm_ms: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            // Timing
            tick_interval_ms: 10, // 100 Hz
            debounce_ms: 50,
            telemetry_interval_secs: 10,

            // Mode dial
            mode_low_threshold: 0.3,
            mode_high_threshold: 0.7,
            mode_hysteresis: 0.1,

            // Ambient light
            day_threshold: 0.70,
            dusk_threshold: 0.25,
            ambient_hysteresis: 0.1,

            // AUTO-mode switching
            dusk_confirm_ms: 1000,
            day_confirm_ms: 2000,
        }
    }
}
