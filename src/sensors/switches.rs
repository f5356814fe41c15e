//! Digital switch inputs: ignition button, seat occupancy, high-beam rocker.
//!
//! All three are wired with internal pull-downs — a closed contact pulls
//! the line high, so a high read means asserted.  No debouncing happens
//! here: the ignition machine owns its own debounce window, and the seat
//! and rocker switches are level-sampled raw each tick.
//!
//! On host/test targets the GPIO reads come from static `AtomicBool`s with
//! injection setters, mirroring the analog channels.

use core::sync::atomic::{AtomicBool, Ordering};

static SIM_IGNITION: AtomicBool = AtomicBool::new(false);
static SIM_SEAT: AtomicBool = AtomicBool::new(false);
static SIM_HIGH_BEAM: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_ignition(pressed: bool) {
    SIM_IGNITION.store(pressed, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_seat(occupied: bool) {
    SIM_SEAT.store(occupied, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_high_beam(requested: bool) {
    SIM_HIGH_BEAM.store(requested, Ordering::Relaxed);
}

/// The three cockpit switches, read as raw levels.
pub struct SwitchBank {
    ignition_gpio: i32,
    seat_gpio: i32,
    high_beam_gpio: i32,
}

impl SwitchBank {
    pub fn new(ignition_gpio: i32, seat_gpio: i32, high_beam_gpio: i32) -> Self {
        Self {
            ignition_gpio,
            seat_gpio,
            high_beam_gpio,
        }
    }

    pub fn ignition_pressed(&self) -> bool {
        self.read_level(self.ignition_gpio, &SIM_IGNITION)
    }

    pub fn seat_occupied(&self) -> bool {
        self.read_level(self.seat_gpio, &SIM_SEAT)
    }

    pub fn high_beam_requested(&self) -> bool {
        self.read_level(self.high_beam_gpio, &SIM_HIGH_BEAM)
    }

    #[cfg(target_os = "espidf")]
    fn read_level(&self, gpio: i32, _sim: &AtomicBool) -> bool {
        crate::drivers::hw_init::gpio_read(gpio)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_level(&self, _gpio: i32, sim: &AtomicBool) -> bool {
        sim.load(Ordering::Relaxed)
    }
}
