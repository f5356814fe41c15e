//! Input subsystem — individual channel drivers and the aggregating [`InputHub`].
//!
//! The hub owns every input channel and produces an [`InputSnapshot`] each
//! tick that gets written into `LightingContext.inputs`.

pub mod light_sensor;
pub mod mode_dial;
pub mod switches;

use crate::fsm::context::InputSnapshot;
use light_sensor::LightSensor;
use mode_dial::ModeDial;
use switches::SwitchBank;

/// Aggregates all input channels and produces a unified snapshot.
pub struct InputHub {
    pub dial: ModeDial,
    pub light: LightSensor,
    pub switches: SwitchBank,
}

impl InputHub {
    /// Construct a new hub.  Pass in pre-built channels (built in main
    /// where peripheral ownership is established).
    pub fn new(dial: ModeDial, light: LightSensor, switches: SwitchBank) -> Self {
        Self {
            dial,
            light,
            switches,
        }
    }

    /// Read every input and return a unified snapshot.
    pub fn read_all(&mut self) -> InputSnapshot {
        InputSnapshot {
            dial_position: self.dial.read(),
            ambient_light: self.light.read(),
            ignition_pressed: self.switches.ignition_pressed(),
            seat_occupied: self.switches.seat_occupied(),
            high_beam_requested: self.switches.high_beam_requested(),
        }
    }
}
