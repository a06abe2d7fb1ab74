//! Typed records shared between storage, dashboard and HTTP layers.

pub mod log;
