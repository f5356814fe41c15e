//! Cooperating finite state machines for the lighting controller.
//!
//! Three small machines share one [`LightingContext`](context::LightingContext)
//! and are evaluated in a fixed order every control tick:
//!
//! ```text
//!  Ignition/Engine          Headlight mode           Ambient light
//!
//!  OFF ──press──▶ RISING    OFF ◀──▶ AUTO ◀──▶ ON    DAY ◀──▶ BETWEEN ◀──▶ DUSK
//!   ▲               │            (dial, hysteresis)       (light, hysteresis)
//!   │      [50 ms debounce]
//!   │               ▼
//!  FALLING ◀─release─ ON
//!   │
//!   └─[confirmed release + seat]─▶ engine indicator toggles
//! ```
//!
//! The mode and ambient machines only advance between adjacent states and
//! are frozen entirely while the engine is off.  Beam arbitration
//! ([`beams`]) combines all three machines into the two lamp commands.

pub mod ambient;
pub mod beams;
pub mod context;
pub mod headlight;
pub mod ignition;

// ---------------------------------------------------------------------------
// State enums
// ---------------------------------------------------------------------------

/// Debounce states of the ignition button.
///
/// `Rising` and `Falling` are transient: the machine sits in them for the
/// debounce window after an edge, then resolves to `On` or `Off` based on
/// the level still present on the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnitionState {
    Off,
    Rising,
    On,
    Falling,
}

/// Position classes of the headlight mode dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlightMode {
    Off,
    Auto,
    On,
}

/// Ambient light classes from the photoresistor.
///
/// `Between` is the twilight band separating the two committed classes;
/// the AUTO-mode confirmation timer is reset each time `Between` resolves
/// to `Day` or `Dusk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientLevel {
    Day,
    Between,
    Dusk,
}
