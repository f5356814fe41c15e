//! Ambient light classification from the photoresistor.
//!
//! DAY / BETWEEN / DUSK with the same adjacency-and-hysteresis discipline as
//! the mode dial.  Resolving out of BETWEEN — in either direction — zeroes
//! the AUTO-mode confirmation timer; beam arbitration compares that timer
//! for exact equality, so these resets define when a scheduled beam switch
//! can fire at all.

use log::debug;

use super::context::LightingContext;
use super::AmbientLevel;

/// Advance the ambient machine by one evaluation of the light sensor.
///
/// Only called while the engine is running; the classification is frozen
/// otherwise.
pub fn update(ctx: &mut LightingContext) {
    let light = ctx.inputs.ambient_light;
    let cfg = &ctx.config;
    let prev = ctx.ambient;

    match ctx.ambient {
        AmbientLevel::Dusk => {
            if light > cfg.dusk_threshold + cfg.ambient_hysteresis {
                ctx.ambient = AmbientLevel::Between;
            }
        }
        AmbientLevel::Between => {
            // Dusk wins the (unreachable) overlap.
            if light < cfg.dusk_threshold {
                ctx.ambient = AmbientLevel::Dusk;
                ctx.ambient_elapsed_ms = 0;
            } else if light > cfg.day_threshold {
                ctx.ambient = AmbientLevel::Day;
                ctx.ambient_elapsed_ms = 0;
            }
        }
        AmbientLevel::Day => {
            if light < cfg.day_threshold - cfg.ambient_hysteresis {
                ctx.ambient = AmbientLevel::Between;
            }
        }
    }

    if ctx.ambient != prev {
        debug!("AMBIENT: {:?} -> {:?} (light={:.2})", prev, ctx.ambient, light);
    }
}
