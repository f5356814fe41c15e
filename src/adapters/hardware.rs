//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`InputHub`] and the three output lines, exposing them through
//! [`SensorPort`] and [`ActuatorPort`].  This is the only module in the
//! system that touches actual pins.  On non-espidf targets, the underlying
//! channels use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::hw_init;
use crate::fsm::context::{InputSnapshot, LineLevel};
use crate::pins;
use crate::sensors::InputHub;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    inputs: InputHub,
}

impl HardwareAdapter {
    pub fn new(inputs: InputHub) -> Self {
        Self { inputs }
    }

    fn write_line(pin: i32, level: LineLevel) {
        hw_init::gpio_write(pin, level.is_on());
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_inputs(&mut self) -> InputSnapshot {
        self.inputs.read_all()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_low_beam(&mut self, level: LineLevel) {
        Self::write_line(pins::LOW_BEAM_GPIO, level);
    }

    fn set_high_beam(&mut self, level: LineLevel) {
        Self::write_line(pins::HIGH_BEAM_GPIO, level);
    }

    fn set_engine_indicator(&mut self, level: LineLevel) {
        Self::write_line(pins::ENGINE_LED_GPIO, level);
    }
}
