//! Shared test utilities for shpcode integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated execution against an on-disk database
//! - Deterministic code generators

pub mod harness;

pub use harness::{sequential_generator, TestHarness};
