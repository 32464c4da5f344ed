//! Property-based tests for the parser/exporter pair.
