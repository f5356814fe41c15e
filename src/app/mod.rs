//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the AutoLamp controller:
//! per-tick orchestration of the ignition, mode, and ambient machines and
//! the beam arbitration built on them.  All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this layer
//! fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
