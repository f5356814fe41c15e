//! GPIO / peripheral pin assignments for the AutoLamp main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Analog inputs (ADC1, oneshot)
// ---------------------------------------------------------------------------

/// Headlight mode dial potentiometer — wiper voltage to ADC.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const DIAL_ADC_GPIO: i32 = 5;

/// Photoresistor (LDR) in a voltage divider — ambient light level.
/// ADC1 channel 8 (GPIO 9 on ESP32-S3).
pub const LIGHT_ADC_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Digital inputs (pull-down: closed contact reads HIGH)
// ---------------------------------------------------------------------------

/// Momentary ignition push-button.
pub const IGNITION_GPIO: i32 = 6;

/// Driver-seat occupancy switch. HIGH = seat occupied.
pub const SEAT_SWITCH_GPIO: i32 = 7;

/// High-beam rocker switch. HIGH = high beam requested.
pub const HIGH_BEAM_SWITCH_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Digital outputs
// ---------------------------------------------------------------------------

/// Low-beam lamp relay line. The lamp is wired active-low: driving the
/// line HIGH leaves the lamp dark.
pub const LOW_BEAM_GPIO: i32 = 11;

/// High-beam lamp relay line. Same active-low wiring as the low beam.
pub const HIGH_BEAM_GPIO: i32 = 12;

/// Engine-run indicator LED. HIGH = engine running.
pub const ENGINE_LED_GPIO: i32 = 13;
