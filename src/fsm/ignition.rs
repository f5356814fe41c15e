//! Ignition debounce machine and engine run-state commits.
//!
//! ```text
//!  OFF ──press edge──▶ RISING ──[≥50 ms, still pressed]──▶ ON
//!   ▲                    │
//!   │                    └──[≥50 ms, released]──▶ OFF   (bounce rejected)
//!   │
//!  FALLING ◀──release edge── ON
//!   │    │
//!   │    └──[≥50 ms, pressed again]──▶ ON               (bounce rejected)
//!   └────[≥50 ms, still released]──▶ OFF  + engine commit
//! ```
//!
//! The engine run state changes only on the confirmed release edge
//! (FALLING → OFF with the debounce window satisfied): it turns on when the
//! seat is occupied and the engine was off, and turns off when the engine
//! was already on.  A confirmed press alone never changes it.

use log::info;

use super::context::{LightingContext, LineLevel};
use super::IgnitionState;

/// Advance the ignition machine by one tick.
///
/// The four checks run sequentially in a fixed order; an edge detection and
/// its resolution never complete in the same tick because edge detection
/// zeroes the debounce accumulator.
pub fn update(ctx: &mut LightingContext) {
    let pressed = ctx.inputs.ignition_pressed;
    let seated = ctx.inputs.seat_occupied;

    if ctx.ignition == IgnitionState::Off && pressed {
        ctx.ignition = IgnitionState::Rising;
        ctx.debounce_elapsed_ms = 0;
    }
    if ctx.ignition == IgnitionState::On && !pressed {
        ctx.ignition = IgnitionState::Falling;
        ctx.debounce_elapsed_ms = 0;
    }
    if ctx.ignition == IgnitionState::Rising && ctx.debounce_elapsed_ms >= ctx.config.debounce_ms {
        ctx.ignition = if pressed {
            IgnitionState::On
        } else {
            IgnitionState::Off
        };
    }
    if ctx.ignition == IgnitionState::Falling && ctx.debounce_elapsed_ms >= ctx.config.debounce_ms {
        if pressed {
            ctx.ignition = IgnitionState::On;
        } else {
            ctx.ignition = IgnitionState::Off;
            // Confirmed release edge: the only place the engine commits.
            if seated && !ctx.engine_running() {
                ctx.outputs.engine_indicator = LineLevel::On;
                info!("IGNITION: engine started (seat occupied)");
                // Skip the shutdown branch — it must not see the level we
                // just wrote.
                return;
            }
            if ctx.engine_running() {
                ctx.outputs.engine_indicator = LineLevel::Off;
                info!("IGNITION: engine stopped");
            }
        }
    }
}
