//! Voice Interrupt Agent Library Crate
//!
//! This library contains the glue that runs an interrupt decider against a
//! session: configuration, the event script format, and a scripted session
//! that stands in for a live room. The binary is a thin wrapper around it.

pub mod config;
pub mod runner;
pub mod script;
pub mod session;
