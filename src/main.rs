//! AutoLamp Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-rate polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │  HardwareAdapter             LogEventSink                  │
//! │  (SensorPort + ActuatorPort) (EventSink)                   │
//! │                                                            │
//! │  ────────────── Port Trait Boundary ──────────────         │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │        LightingService (pure logic)              │      │
//! │  │  ignition FSM · mode FSM · ambient FSM · beams   │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop is deliberately synchronous: one blocking 10 ms delay, then one
//! full sequential evaluation pass.  No interrupts, no tasks — the ordering
//! guarantees of the machines depend on strict per-tick sequencing.

#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::info;

use autolamp::adapters::hardware::HardwareAdapter;
use autolamp::adapters::log_sink::LogEventSink;
use autolamp::app::events::AppEvent;
use autolamp::app::ports::EventSink;
use autolamp::app::service::LightingService;
use autolamp::config::ControlConfig;
use autolamp::drivers::hw_init;
use autolamp::pins;
use autolamp::sensors::light_sensor::LightSensor;
use autolamp::sensors::mode_dial::ModeDial;
use autolamp::sensors::switches::SwitchBank;
use autolamp::sensors::InputHub;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  AutoLamp v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters ─────────────────────────────────
    let config = ControlConfig::default();

    let input_hub = InputHub::new(
        ModeDial::new(pins::DIAL_ADC_GPIO),
        LightSensor::new(pins::LIGHT_ADC_GPIO),
        SwitchBank::new(
            pins::IGNITION_GPIO,
            pins::SEAT_SWITCH_GPIO,
            pins::HIGH_BEAM_SWITCH_GPIO,
        ),
    );
    let mut hw = HardwareAdapter::new(input_hub);
    let mut sink = LogEventSink::new();

    // ── 4. Construct the application service ──────────────────
    let mut app = LightingService::new(config.clone());
    app.start(&mut sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    let tick = Duration::from_millis(u64::from(config.tick_interval_ms));
    let ticks_per_telemetry =
        u64::from(config.telemetry_interval_secs) * 1000 / u64::from(config.tick_interval_ms);

    loop {
        // The only blocking point in the system.
        thread::sleep(tick);

        app.tick(&mut hw, &mut sink);

        if app.tick_count() % ticks_per_telemetry == 0 {
            sink.emit(&AppEvent::Telemetry(app.build_telemetry()));
        }
    }
}
