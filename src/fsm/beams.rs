//! Beam output arbitration.
//!
//! The low beam combines all three machines: engine off forces the lamp
//! dark; otherwise the mode dial decides directly (OFF/ON) or hands the
//! decision to the ambient machine's confirmation timer (AUTO).  The high
//! beam is independent of mode and ambient state entirely — it follows the
//! rocker switch, gated on engine run state.
//!
//! The mode and ambient machines are re-evaluated *here*, inside the
//! engine-on branch, so both are frozen whenever the engine is off.

use log::info;

use super::context::{LightingContext, LineLevel};
use super::{ambient, headlight, AmbientLevel, HeadlightMode};

/// Decide the low-beam level for this tick.
pub fn update_low_beam(ctx: &mut LightingContext) {
    if !ctx.engine_running() {
        ctx.outputs.low_beam = LineLevel::On;
        return;
    }

    headlight::update(ctx);
    ambient::update(ctx);

    match ctx.mode {
        HeadlightMode::Off => ctx.outputs.low_beam = LineLevel::On,
        HeadlightMode::On => ctx.outputs.low_beam = LineLevel::Off,
        HeadlightMode::Auto => {
            // Exact-equality comparison: the switch fires on the single tick
            // the timer lands on the confirm value.  A Between→Dusk/Day
            // re-entry on that same tick zeroes the timer first and the
            // scheduled switch is skipped until the next cycle.
            if ctx.ambient_elapsed_ms == ctx.config.dusk_confirm_ms
                && ctx.ambient == AmbientLevel::Dusk
            {
                ctx.outputs.low_beam = LineLevel::Off;
                info!("BEAM: low beam lit after {} ms of dusk", ctx.config.dusk_confirm_ms);
            }
            if ctx.ambient_elapsed_ms == ctx.config.day_confirm_ms
                && ctx.ambient == AmbientLevel::Day
            {
                ctx.outputs.low_beam = LineLevel::On;
                info!("BEAM: low beam dark after {} ms of day", ctx.config.day_confirm_ms);
            }
        }
    }
}

/// Decide the high-beam level for this tick.
pub fn update_high_beam(ctx: &mut LightingContext) {
    ctx.outputs.high_beam = if ctx.inputs.high_beam_requested || !ctx.engine_running() {
        LineLevel::On
    } else {
        LineLevel::Off
    };
}
