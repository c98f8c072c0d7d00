#![allow(dead_code)]

//! Common test utilities for filesets CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and home directories plus a CLI runner
//! - Fixtures: Reusable manifest content

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
