//! Headlight mode dial classification.
//!
//! The dial maps to OFF / AUTO / ON with asymmetric hysteresis: entering
//! AUTO from either side uses a threshold offset by the hysteresis width,
//! leaving a dead zone around each boundary so the mode cannot chatter when
//! the wiper sits near one.  Transitions are adjacent-only; reaching ON from
//! OFF takes two evaluations.

use log::debug;

use super::context::LightingContext;
use super::HeadlightMode;

/// Advance the mode machine by one evaluation of the dial.
///
/// Only called while the engine is running; the mode is frozen otherwise.
pub fn update(ctx: &mut LightingContext) {
    let dial = ctx.inputs.dial_position;
    let cfg = &ctx.config;
    let prev = ctx.mode;

    match ctx.mode {
        HeadlightMode::Off => {
            if dial > cfg.mode_low_threshold + cfg.mode_hysteresis {
                ctx.mode = HeadlightMode::Auto;
            }
        }
        HeadlightMode::Auto => {
            // Independent checks; ON wins the (unreachable) overlap.
            if dial < cfg.mode_low_threshold {
                ctx.mode = HeadlightMode::Off;
            }
            if dial > cfg.mode_high_threshold {
                ctx.mode = HeadlightMode::On;
            }
        }
        HeadlightMode::On => {
            if dial < cfg.mode_high_threshold - cfg.mode_hysteresis {
                ctx.mode = HeadlightMode::Auto;
            }
        }
    }

    if ctx.mode != prev {
        debug!("MODE: {:?} -> {:?} (dial={:.2})", prev, ctx.mode, dial);
    }
}
