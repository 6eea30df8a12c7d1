//! Backend worker bridge: command queue in, UI events out.

pub mod commands;
pub mod runtime;
