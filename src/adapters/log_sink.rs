//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | engine={} | mode={:?} ambient={:?} | dial={:.2} light={:.2} | \
                     low={:?} high={:?}",
                    if t.engine_running { "RUN" } else { "OFF" },
                    t.mode,
                    t.ambient,
                    t.dial_position,
                    t.ambient_light,
                    t.low_beam,
                    t.high_beam,
                );
            }
            AppEvent::EngineChanged { running } => {
                info!("ENGINE | {}", if *running { "started" } else { "stopped" });
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {:?} -> {:?}", from, to);
            }
            AppEvent::AmbientChanged { from, to } => {
                info!("AMBIENT | {:?} -> {:?}", from, to);
            }
            AppEvent::BeamChanged { low, high } => {
                info!("BEAM | low={:?} high={:?}", low, high);
            }
            AppEvent::Started => {
                info!("START | power-on state (engine off, mode Off, ambient Day)");
            }
        }
    }
}
