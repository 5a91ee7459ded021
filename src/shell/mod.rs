// Composition root helpers for the report binary.
//
// Responsibilities
// - Read config from the environment.
// - Install the tracing subscriber.

pub mod config;
pub mod logging;
