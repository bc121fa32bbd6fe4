//! Unit tests for the status module.
