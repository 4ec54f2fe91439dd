//! Testing utilities for the Waitline architecture.
//!
//! Provides the [`ReducerTest`] harness for unit-testing reducers with a
//! readable Given-When-Then syntax, plus helper assertions over effect
//! slices.

mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};
