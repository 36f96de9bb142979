//! Unit tests for the virtual processor.
