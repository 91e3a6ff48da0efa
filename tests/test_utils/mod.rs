//! Test Utilities
//!
//! Shared fixtures for the integration, unit and property test targets.

#![allow(dead_code, unused_imports)]


pub use fixtures::{
    failing_interpreter, recording_interpreter, recording_session, KEYWORDS,
};
