//! Property-based tests for ids and the batch gate.
