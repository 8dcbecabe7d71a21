//! Property-based tests for the render selection rules.
